use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Split a document into analyzer terms.
///
/// A term is a maximal run of word characters (alphanumeric or `_`) that is at
/// least `min_len` chars long. Everything else separates terms.
#[inline]
pub fn analyze(document: &str, min_len: usize) -> impl Iterator<Item = &str> {
    document
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(move |term| !term.is_empty() && term.chars().count() >= min_len)
}

/// TermFrequency
/// Occurrence counts of the terms of one document.
///
/// Terms keep first-seen order.
///
/// # Examples
/// ```
/// use tfidf_similarity::TermFrequency;
/// let mut freq = TermFrequency::new();
/// freq.add_term("cat").add_term("sat").add_term("cat");
/// assert_eq!(freq.term_count("cat"), 2);
/// assert_eq!(freq.term_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

impl TermFrequency {
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Count the analyzer terms of `document`
    pub fn from_document(document: &str, min_len: usize) -> Self {
        let mut freq = Self::new();
        for term in analyze(document, min_len) {
            freq.add_term(term);
        }
        freq
    }

    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        *self.term_count.entry(term.to_string()).or_insert(0) += 1;
        self.total_term_count += 1;
        self
    }

    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total number of terms, duplicates included
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(String::as_str)
    }

    /// Weight of a raw count.
    /// With `sublinear` the count `c` becomes `1 + ln(c)`.
    #[inline]
    pub fn tf_calc(count: u32, sublinear: bool) -> f64 {
        if count == 0 {
            0.0
        } else if sublinear {
            1.0 + (count as f64).ln()
        } else {
            count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_drops_short_terms_and_punctuation() {
        let terms: Vec<&str> = analyze("a cat, the_dog! x9 main.rs", 2).collect();
        assert_eq!(terms, vec!["cat", "the_dog", "x9", "main", "rs"]);

        let terms: Vec<&str> = analyze("a cat", 1).collect();
        assert_eq!(terms, vec!["a", "cat"]);
    }

    #[test]
    fn counts_follow_first_seen_order() {
        let freq = TermFrequency::from_document("sat cat sat mat", 2);
        let terms: Vec<&str> = freq.terms().collect();
        assert_eq!(terms, vec!["sat", "cat", "mat"]);
        assert_eq!(freq.term_count("sat"), 2);
        assert_eq!(freq.term_count("dog"), 0);
        assert_eq!(freq.term_sum(), 4);
    }

    #[test]
    fn tf_calc_raw_and_sublinear() {
        assert_eq!(TermFrequency::tf_calc(0, true), 0.0);
        assert_eq!(TermFrequency::tf_calc(3, false), 3.0);
        assert!((TermFrequency::tf_calc(3, true) - (1.0 + 3f64.ln())).abs() < 1e-12);
        assert_eq!(TermFrequency::tf_calc(1, true), 1.0);
    }
}
