use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::{Norm, VectorizerConfig},
    vectorizer::{corpus::Corpus, token::TermFrequency},
};

/// Term weighting engine behind `TFIDFModel`.
///
/// An engine learns its vocabulary from space separated documents and projects
/// a document onto one dense vector whose positions follow `feature_names`.
pub trait TFIDFEngine: Sized {
    /// Learn vocabulary and weights.
    /// Returns `None` when the documents hold no term at all.
    fn fit<T>(documents: &[T], config: &VectorizerConfig) -> Option<Self>
    where
        T: AsRef<str>;

    /// Project one document. The vector has `feature_names().len()` entries.
    fn transform(&self, document: &str) -> Vec<f64>;

    /// Vocabulary in vector position order
    fn feature_names(&self) -> Vec<&str>;
}

/// Default TF-IDF engine
///
/// - tf: raw term count, or `1 + ln(count)` with `sublinear_tf`
/// - idf: `ln((1 + n) / (1 + df)) + 1` with `smooth_idf`, `ln(n / df) + 1` without
/// - rows scaled to unit L2 length unless `norm` is `Norm::None`
/// - features in dictionary order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultTFIDFEngine {
    /// term -> idf, in feature order
    #[serde(with = "indexmap::map::serde_seq")]
    idf: IndexMap<String, f64>,
    doc_num: u64,
    min_token_len: usize,
    sublinear_tf: bool,
    norm: Norm,
}

impl DefaultTFIDFEngine {
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64, smooth: bool) -> f64 {
        let (n, df) = if smooth {
            (doc_num as f64 + 1.0, doc_freq as f64 + 1.0)
        } else {
            (doc_num as f64, doc_freq as f64)
        };
        (n / df).ln() + 1.0
    }

    /// idf of `term`, if it is in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    pub fn vocab_size(&self) -> usize {
        self.idf.len()
    }
}

impl TFIDFEngine for DefaultTFIDFEngine {
    fn fit<T>(documents: &[T], config: &VectorizerConfig) -> Option<Self>
    where
        T: AsRef<str>,
    {
        let mut corpus = Corpus::new();
        let mut total_terms = 0u64;
        for document in documents {
            let freq = TermFrequency::from_document(document.as_ref(), config.min_token_len);
            total_terms += freq.term_sum();
            corpus.add_doc(&freq);
        }
        if corpus.vocab_size() == 0 {
            return None;
        }
        debug!(doc_num = corpus.get_doc_num(), total_terms, vocab_size = corpus.vocab_size(), "built corpus");

        let doc_num = corpus.get_doc_num();
        let idf = corpus
            .sorted_terms()
            .into_iter()
            .map(|term| {
                let idf = Self::idf_calc(doc_num, corpus.get_doc_freq(term), config.smooth_idf);
                (term.to_string(), idf)
            })
            .collect();

        Some(Self {
            idf,
            doc_num,
            min_token_len: config.min_token_len,
            sublinear_tf: config.sublinear_tf,
            norm: config.norm,
        })
    }

    fn transform(&self, document: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.idf.len()];
        let freq = TermFrequency::from_document(document, self.min_token_len);
        for (term, count) in freq.iter() {
            // terms outside the vocabulary are ignored
            if let Some((pos, _, idf)) = self.idf.get_full(term) {
                row[pos] = TermFrequency::tf_calc(count, self.sublinear_tf) * idf;
            }
        }

        if self.norm == Norm::L2 {
            let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                row.iter_mut().for_each(|v| *v /= norm);
            }
        }
        row
    }

    fn feature_names(&self) -> Vec<&str> {
        self.idf.keys().map(String::as_str).collect()
    }
}
