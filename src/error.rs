use thiserror::Error;

/// Precondition failures of the vector utilities.
///
/// The panicking helpers (`add`, `average`, `cosine_similarity`) panic with
/// the `Display` text of these variants. The `try_*` twins hand them back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    #[error("length mismatch: left has {left} entries, right has {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("key mismatch at position {position}: left is {left:?}, right is {right:?}")]
    KeyMismatch {
        position: usize,
        left: String,
        right: String,
    },
    #[error("cannot {0} an empty list of score maps")]
    EmptyInput(&'static str),
}

/// Invalid vectorizer configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("min_token_len must be at least 1")]
    InvalidMinTokenLen,
    #[error("similarity_threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
    #[error("unsupported language: {0}")]
    UnknownLanguage(String),
}
