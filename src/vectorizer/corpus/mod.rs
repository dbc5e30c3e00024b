use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::token::TermFrequency;

/// keep document count and per-term document frequency
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// number of documents added
    pub doc_num: u64,
    /// number of documents each term appears in
    #[serde(with = "indexmap::map::serde_seq")]
    pub term_doc_freq: IndexMap<Box<str>, u64>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_doc_freq: IndexMap::new(),
        }
    }

    /// Add a document's distinct terms to the corpus
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        self.doc_num += 1;
        for term in freq.terms() {
            *self.term_doc_freq.entry(term.into()).or_insert(0) += 1;
        }
    }

    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    #[inline]
    pub fn get_doc_freq(&self, term: &str) -> u64 {
        self.term_doc_freq.get(term).copied().unwrap_or(0)
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_doc_freq.len()
    }

    /// All terms in dictionary order
    pub fn sorted_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.term_doc_freq.keys().map(|t| &**t).collect();
        terms.sort_unstable();
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_documents_not_occurrences() {
        let mut corpus = Corpus::new();
        corpus.add_doc(&TermFrequency::from_document("cat sat cat", 2));
        corpus.add_doc(&TermFrequency::from_document("dog sat", 2));

        assert_eq!(corpus.get_doc_num(), 2);
        assert_eq!(corpus.get_doc_freq("cat"), 1);
        assert_eq!(corpus.get_doc_freq("sat"), 2);
        assert_eq!(corpus.get_doc_freq("bird"), 0);
        assert_eq!(corpus.vocab_size(), 3);
        assert_eq!(corpus.sorted_terms(), vec!["cat", "dog", "sat"]);
    }

    #[test]
    fn empty_document_still_counts() {
        let mut corpus = Corpus::new();
        corpus.add_doc(&TermFrequency::new());
        assert_eq!(corpus.get_doc_num(), 1);
        assert_eq!(corpus.vocab_size(), 0);
    }
}
