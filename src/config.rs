use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Language of the stop-word list and the Snowball stemmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
    German,
    Spanish,
    Italian,
    Portuguese,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::French,
        Language::German,
        Language::Spanish,
        Language::Italian,
        Language::Portuguese,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Spanish => "spanish",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownLanguage(s.to_string()))
    }
}

/// Row normalization applied to projected vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Scale every row to unit euclidean length
    #[default]
    L2,
    /// Keep raw tf * idf values
    None,
}

/// Settings for fitting a `TFIDFModel`.
///
/// Every field has a default, so a partial document (JSON, TOML, ...) is enough:
///
/// ```
/// use tfidf_similarity::VectorizerConfig;
/// let config: VectorizerConfig = serde_json::from_str(r#"{"sublinear_tf": true}"#).unwrap();
/// assert!(config.sublinear_tf);
/// assert_eq!(config.min_token_len, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// stop-word list and stemmer language
    pub language: Language,
    /// shortest term (in chars) the analyzer keeps
    pub min_token_len: usize,
    /// add one to every document frequency, as if a document containing
    /// every term had been seen once
    pub smooth_idf: bool,
    /// replace tf with 1 + ln(tf)
    pub sublinear_tf: bool,
    pub norm: Norm,
    /// score at which two texts are considered similar
    pub similarity_threshold: f64,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            min_token_len: 2,
            smooth_idf: true,
            sublinear_tf: false,
            norm: Norm::L2,
            similarity_threshold: 0.5,
        }
    }
}

impl VectorizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_token_len == 0 {
            return Err(ConfigError::InvalidMinTokenLen);
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::InvalidThreshold(self.similarity_threshold));
        }
        Ok(())
    }
}
