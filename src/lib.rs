//! This crate scores short texts with a stemmed TF-IDF model and compares
//! the resulting term weight maps.

pub mod config;
pub mod error;
pub mod utils;
pub mod vectorizer;

/// TF-IDF Model
/// The top-level type of this crate.
///
/// `fit` learns a vocabulary and IDF weights from a corpus of texts; `transform`
/// turns a new text into a `ScoreMap` holding one weight per vocabulary term.
///
/// Every text goes through the same pipeline on both sides:
/// - lowercase
/// - Unicode word tokenization
/// - stop-word removal
/// - Snowball stemming
///
/// A model fit on an empty corpus is untrained. It never fails, it just
/// scores every text as an empty map.
///
/// `TFIDFModel<E>` is generic over its weighting engine `E` (default
/// `DefaultTFIDFEngine`).
///
/// # Examples
/// ```
/// use tfidf_similarity::TFIDFModel;
/// let model: TFIDFModel = TFIDFModel::fit(&["the cat sat", "the dog sat"]);
/// let scores = model.transform("cat");
/// assert!(scores["cat"] > 0.0);
/// assert_eq!(scores["dog"], 0.0);
/// ```
pub use vectorizer::{ModelState, TFIDFModel};

/// Text Normalizer
/// Lowercases, tokenizes, removes stop-words and stems.
/// Language resources are loaded once per process and shared.
pub use utils::normalizer::TextNormalizer;

/// Configuration
/// `VectorizerConfig` is serde (de)serializable and every field has a default.
pub use config::{Language, Norm, VectorizerConfig};

/// Errors
/// - `VectorError`: failed preconditions of the vector utilities
/// - `ConfigError`: invalid configuration
pub use error::{ConfigError, VectorError};

/// TF IDF Calculation Engine Trait
/// Plug a different weighting strategy into `TFIDFModel<E>` by implementing it.
/// `DefaultTFIDFEngine` uses smoothed IDF and L2 normalized rows.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Term Frequency structure
/// Term counts of one analyzed document.
pub use vectorizer::token::TermFrequency;

/// Document frequencies of a corpus, the base data of IDF.
pub use vectorizer::corpus::Corpus;

/// Ranking results, sortable by score
pub use vectorizer::search::Hits;

/// Vector utilities
/// - `cosine_similarity`: two equal length numeric slices
/// - `add` / `average`: aligned score maps
///
/// The panicking forms treat a failed precondition as a bug in the caller.
/// The `try_*` forms return a `VectorError` instead.
pub use utils::math::vector::{cosine_similarity, try_cosine_similarity};
pub use utils::math::vector::score_map::{
    add, average, cosine_similarity_scores, try_add, try_average, try_cosine_similarity_scores,
    ScoreMap,
};
