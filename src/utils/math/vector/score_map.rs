use indexmap::IndexMap;

use crate::error::VectorError;

use super::try_cosine_similarity;

/// term -> weight, iterated in vocabulary order
pub type ScoreMap = IndexMap<String, f64>;

/// Check that two maps enumerate the same keys in the same order.
pub fn check_aligned(scores1: &ScoreMap, scores2: &ScoreMap) -> Result<(), VectorError> {
    if scores1.len() != scores2.len() {
        return Err(VectorError::LengthMismatch { left: scores1.len(), right: scores2.len() });
    }
    for (position, (left, right)) in scores1.keys().zip(scores2.keys()).enumerate() {
        if left != right {
            return Err(VectorError::KeyMismatch {
                position,
                left: left.clone(),
                right: right.clone(),
            });
        }
    }
    Ok(())
}

/// Positional sum of two aligned score maps, in `scores1`'s key order.
pub fn try_add(scores1: &ScoreMap, scores2: &ScoreMap) -> Result<ScoreMap, VectorError> {
    check_aligned(scores1, scores2)?;
    Ok(scores1
        .iter()
        .zip(scores2.values())
        .map(|((term, a), b)| (term.clone(), a + b))
        .collect())
}

/// Element-wise mean of aligned score maps.
///
/// Folds `try_add` from the first map, then divides by the number of maps.
pub fn try_average(scores_list: &[ScoreMap]) -> Result<ScoreMap, VectorError> {
    let (first, rest) = scores_list
        .split_first()
        .ok_or(VectorError::EmptyInput("average"))?;
    let mut acc = rest
        .iter()
        .try_fold(first.clone(), |acc, scores| try_add(&acc, scores))?;

    let n = scores_list.len() as f64;
    acc.values_mut().for_each(|v| *v /= n);
    Ok(acc)
}

/// Sum of two score maps.
///
/// # Panics
/// When the maps differ in size or key order.
///
/// ```
/// use tfidf_similarity::{add, ScoreMap};
/// let a: ScoreMap = [("a".to_string(), 1.0), ("b".to_string(), 2.0)].into_iter().collect();
/// let b: ScoreMap = [("a".to_string(), 3.0), ("b".to_string(), 4.0)].into_iter().collect();
/// assert_eq!(add(&a, &b)["b"], 6.0);
/// ```
pub fn add(scores1: &ScoreMap, scores2: &ScoreMap) -> ScoreMap {
    try_add(scores1, scores2).unwrap_or_else(|err| panic!("add: {err}"))
}

/// Mean of score maps.
///
/// # Panics
/// On an empty list, or when the maps are not aligned.
pub fn average(scores_list: &[ScoreMap]) -> ScoreMap {
    try_average(scores_list).unwrap_or_else(|err| panic!("average: {err}"))
}

/// Cosine similarity of the values of two aligned score maps.
///
/// # Panics
/// When the maps differ in size or key order.
pub fn cosine_similarity_scores(scores1: &ScoreMap, scores2: &ScoreMap) -> f64 {
    try_cosine_similarity_scores(scores1, scores2)
        .unwrap_or_else(|err| panic!("cosine_similarity_scores: {err}"))
}

pub fn try_cosine_similarity_scores(scores1: &ScoreMap, scores2: &ScoreMap) -> Result<f64, VectorError> {
    check_aligned(scores1, scores2)?;
    let v1: Vec<f64> = scores1.values().copied().collect();
    let v2: Vec<f64> = scores2.values().copied().collect();
    try_cosine_similarity(&v1, &v2)
}
