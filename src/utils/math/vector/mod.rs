pub mod score_map;

use num::Float;

use crate::error::VectorError;

/// dot積
/// d(a, b) = Σ(a_i * b_i)
///
/// Extra entries of the longer slice are ignored; check lengths first.
#[inline]
pub fn dot<N>(v1: &[N], v2: &[N]) -> N
where
    N: Float,
{
    v1.iter()
        .zip(v2)
        .fold(N::zero(), |acc, (&a, &b)| a.mul_add(b, acc))
}

/// ||a|| = sqrt(Σ(a_i^2))
#[inline]
pub fn norm<N>(v: &[N]) -> N
where
    N: Float,
{
    dot(v, v).sqrt()
}

/// コサイン類似度
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// A zero vector has similarity `0` with everything, itself included.
pub fn try_cosine_similarity<N>(v1: &[N], v2: &[N]) -> Result<N, VectorError>
where
    N: Float,
{
    if v1.len() != v2.len() {
        return Err(VectorError::LengthMismatch { left: v1.len(), right: v2.len() });
    }
    let denom = norm(v1) * norm(v2);
    if denom == N::zero() {
        return Ok(N::zero());
    }
    Ok(dot(v1, v2) / denom)
}

/// Cosine similarity of two equal length vectors.
///
/// # Panics
/// When the lengths differ.
///
/// ```
/// use tfidf_similarity::cosine_similarity;
/// assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
/// ```
pub fn cosine_similarity<N>(v1: &[N], v2: &[N]) -> N
where
    N: Float,
{
    try_cosine_similarity(v1, v2).unwrap_or_else(|err| panic!("cosine_similarity: {err}"))
}
