use std::{collections::{HashMap, HashSet}, fmt};

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};
use stop_words::LANGUAGE;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::Language;

/// Stop-word set and stemmer of one language.
/// Built once per process and only read afterwards.
struct LanguageResources {
    stop_words: HashSet<String>,
    stemmer: Stemmer,
}

impl LanguageResources {
    fn load(language: Language) -> Self {
        let (list, algorithm) = match language {
            Language::English => (LANGUAGE::English, Algorithm::English),
            Language::French => (LANGUAGE::French, Algorithm::French),
            Language::German => (LANGUAGE::German, Algorithm::German),
            Language::Spanish => (LANGUAGE::Spanish, Algorithm::Spanish),
            Language::Italian => (LANGUAGE::Italian, Algorithm::Italian),
            Language::Portuguese => (LANGUAGE::Portuguese, Algorithm::Portuguese),
        };
        Self {
            stop_words: stop_words::get(list).into_iter().collect(),
            stemmer: Stemmer::create(algorithm),
        }
    }
}

static RESOURCES: Lazy<HashMap<Language, LanguageResources>> = Lazy::new(|| {
    Language::ALL
        .into_iter()
        .map(|lang| (lang, LanguageResources::load(lang)))
        .collect()
});

/// Text Normalizer
/// Turns raw text into terms for the vectorizer.
///
/// The pipeline has two stages:
/// 1. `process`: lowercase, split on Unicode word boundaries, drop stop-words
/// 2. `normalize`: `process` followed by Snowball stemming of every token
///
/// `to_document` joins the stems of `normalize` with single spaces, which is
/// the form the TF-IDF engine consumes.
///
/// # Examples
/// ```
/// use tfidf_similarity::TextNormalizer;
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.to_document("The cats were barking"), "cat bark");
/// ```
#[derive(Clone, Copy)]
pub struct TextNormalizer {
    language: Language,
    resources: &'static LanguageResources,
}

impl TextNormalizer {
    pub fn new(language: Language) -> Self {
        // every Language variant is loaded by RESOURCES
        let resources = &RESOURCES[&language];
        Self { language, resources }
    }

    pub fn english() -> Self {
        Self::new(Language::English)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Is `token` in this language's stop-word list
    #[inline]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.resources.stop_words.contains(token)
    }

    /// Lowercase, tokenize and drop stop-words. No stemming.
    ///
    /// Empty input gives an empty vec.
    pub fn process(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        lowered
            .unicode_words()
            .filter(|token| !self.is_stop_word(token))
            .map(str::to_string)
            .collect()
    }

    pub fn process_list<T>(&self, texts: &[T]) -> Vec<Vec<String>>
    where
        T: AsRef<str>,
    {
        texts.iter().map(|text| self.process(text.as_ref())).collect()
    }

    #[inline]
    pub fn stem(&self, token: &str) -> String {
        self.resources.stemmer.stem(token).into_owned()
    }

    /// `process` then stem every token
    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.process(text)
            .iter()
            .map(|token| self.stem(token))
            .collect()
    }

    pub fn normalize_list<T>(&self, texts: &[T]) -> Vec<Vec<String>>
    where
        T: AsRef<str>,
    {
        texts.iter().map(|text| self.normalize(text.as_ref())).collect()
    }

    /// Space separated stems of `text`
    pub fn to_document(&self, text: &str) -> String {
        self.normalize(text).join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("language", &self.language)
            .field("stop_words", &self.resources.stop_words.len())
            .finish()
    }
}
