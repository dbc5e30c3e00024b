pub mod corpus;
pub mod search;
pub mod tfidf;
pub mod token;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    config::VectorizerConfig,
    error::ConfigError,
    utils::{
        math::vector::score_map::{cosine_similarity_scores, ScoreMap},
        normalizer::TextNormalizer,
    },
    vectorizer::{
        search::Hits,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    },
};

/// Whether a model has learned a vocabulary
#[derive(Debug, Clone)]
pub enum ModelState<E = DefaultTFIDFEngine> {
    /// Fit on an empty corpus (or one without a single term)
    Untrained,
    Trained {
        normalizer: TextNormalizer,
        engine: E,
    },
}

#[derive(Debug, Clone)]
pub struct TFIDFModel<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    config: VectorizerConfig,
    state: ModelState<E>,
}

impl<E> TFIDFModel<E>
where
    E: TFIDFEngine + Send + Sync,
{
    /// Fit with the default configuration (English, smoothed idf, L2 rows).
    pub fn fit<T>(texts: &[T]) -> Self
    where
        T: AsRef<str> + Sync,
    {
        Self::fit_validated(texts, VectorizerConfig::default())
    }

    pub fn fit_with_config<T>(texts: &[T], config: VectorizerConfig) -> Result<Self, ConfigError>
    where
        T: AsRef<str> + Sync,
    {
        config.validate()?;
        Ok(Self::fit_validated(texts, config))
    }

    fn fit_validated<T>(texts: &[T], config: VectorizerConfig) -> Self
    where
        T: AsRef<str> + Sync,
    {
        if texts.is_empty() {
            debug!("empty corpus, model stays untrained");
            return Self { config, state: ModelState::Untrained };
        }

        let normalizer = TextNormalizer::new(config.language);
        let documents: Vec<String> = texts
            .par_iter()
            .map(|text| normalizer.to_document(text.as_ref()))
            .collect();

        let state = match E::fit(&documents, &config) {
            Some(engine) => {
                debug!(
                    num_texts = texts.len(),
                    vocab_size = engine.feature_names().len(),
                    language = %config.language,
                    "fitted tf-idf model"
                );
                ModelState::Trained { normalizer, engine }
            }
            None => {
                warn!(num_texts = texts.len(), "corpus has no terms after normalization, model stays untrained");
                ModelState::Untrained
            }
        };
        Self { config, state }
    }

    #[inline]
    pub fn is_trained(&self) -> bool {
        matches!(self.state, ModelState::Trained { .. })
    }

    pub fn state(&self) -> &ModelState<E> {
        &self.state
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Learned terms in score map order. Empty when untrained.
    pub fn vocabulary(&self) -> Vec<&str> {
        match &self.state {
            ModelState::Untrained => Vec::new(),
            ModelState::Trained { engine, .. } => engine.feature_names(),
        }
    }

    /// Score `text` against the vocabulary.
    ///
    /// The map has one entry per vocabulary term, most of them zero.
    /// An untrained model gives an empty map.
    pub fn transform(&self, text: &str) -> ScoreMap {
        let ModelState::Trained { normalizer, engine } = &self.state else {
            return ScoreMap::new();
        };
        let document = normalizer.to_document(text);
        let row = engine.transform(&document);
        debug!(terms = document.split_whitespace().count(), "transformed text");
        engine
            .feature_names()
            .into_iter()
            .zip(row)
            .map(|(term, score)| (term.to_string(), score))
            .collect()
    }

    pub fn transform_list<T>(&self, texts: &[T]) -> Vec<ScoreMap>
    where
        T: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.transform(text.as_ref())).collect()
    }

    /// Cosine similarity of two texts in this model's vocabulary space.
    /// `0.0` when the model is untrained.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        cosine_similarity_scores(&self.transform(a), &self.transform(b))
    }

    /// `similarity` reaches the configured threshold
    pub fn is_similar(&self, a: &str, b: &str) -> bool {
        self.similarity(a, b) >= self.config.similarity_threshold
    }

    /// Score every candidate against `query`, best first.
    /// Keys are candidate indices.
    pub fn rank<T>(&self, query: &str, candidates: &[T]) -> Hits<usize>
    where
        T: AsRef<str> + Sync,
    {
        let query_scores = self.transform(query);
        let list = candidates
            .par_iter()
            .enumerate()
            .map(|(idx, candidate)| {
                let scores = self.transform(candidate.as_ref());
                (idx, cosine_similarity_scores(&query_scores, &scores))
            })
            .collect();
        let mut hits = Hits::new(list);
        hits.sort_by_score();
        hits
    }

    /// `rank`, keeping only candidates that reach the configured threshold
    pub fn similar<T>(&self, query: &str, candidates: &[T]) -> Hits<usize>
    where
        T: AsRef<str> + Sync,
    {
        self.rank(query, candidates).above(self.config.similarity_threshold)
    }

    /// Index and score of the closest candidate at or above the threshold
    pub fn best_match<T>(&self, query: &str, candidates: &[T]) -> Option<(usize, f64)>
    where
        T: AsRef<str> + Sync,
    {
        self.similar(query, candidates).top().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Norm;

    const TITLES: [&str; 4] = [
        "Inbox - project planning mail",
        "Rust compiler error explained",
        "Project planning spreadsheet",
        "Compiler crash report",
    ];

    #[test]
    fn empty_corpus_is_untrained() {
        let empty: [&str; 0] = [];
        let model: TFIDFModel = TFIDFModel::fit(&empty);
        assert!(!model.is_trained());
        assert!(model.vocabulary().is_empty());
        assert!(model.transform("anything at all").is_empty());
        assert_eq!(model.similarity("cat", "cat"), 0.0);
    }

    #[test]
    fn stop_word_only_corpus_is_untrained() {
        let model: TFIDFModel = TFIDFModel::fit(&["the", "and of"]);
        assert!(!model.is_trained());
        assert!(model.transform("the").is_empty());
    }

    #[test]
    fn transform_covers_whole_vocabulary() {
        let model: TFIDFModel = TFIDFModel::fit(&TITLES);
        assert!(model.is_trained());
        let vocab = model.vocabulary();
        let scores = model.transform("compiler");
        let keys: Vec<&str> = scores.keys().map(String::as_str).collect();
        assert_eq!(keys, vocab);
        assert!(scores["compil"] > 0.0);
        assert_eq!(scores.values().filter(|v| **v > 0.0).count(), 1);
    }

    #[test]
    fn stemmed_variants_are_similar() {
        let model: TFIDFModel = TFIDFModel::fit(&TITLES);
        assert!((model.similarity("compilers", "compiler") - 1.0).abs() < 1e-9);
        assert_eq!(model.similarity("compiler", "spreadsheet"), 0.0);
        assert!(model.is_similar("planning spreadsheets", "spreadsheet planning"));
    }

    #[test]
    fn rank_puts_best_match_first() {
        let model: TFIDFModel = TFIDFModel::fit(&TITLES);
        let hits = model.rank("compiler crash", &TITLES);
        assert_eq!(hits.len(), TITLES.len());
        assert_eq!(hits.list[0].0, 3);
        assert!(hits.list[0].1 >= hits.list[1].1);
    }

    #[test]
    fn similar_applies_configured_threshold() {
        let model: TFIDFModel = TFIDFModel::fit(&TITLES);
        let all = model.rank("project planning", &TITLES);
        let kept = model.similar("project planning", &TITLES);
        assert!(kept.len() < all.len());
        assert!(!kept.is_empty());
        assert!(kept.list.iter().all(|(_, s)| *s >= 0.5));
        assert_eq!(model.best_match("project planning", &TITLES).map(|(i, _)| i), Some(2));

        let strict = VectorizerConfig { similarity_threshold: 1.0, ..Default::default() };
        let model: TFIDFModel = TFIDFModel::fit_with_config(&TITLES, strict).unwrap();
        assert!(model.similar("project planning", &TITLES).is_empty());
        assert_eq!(model.best_match("project planning", &TITLES), None);
    }

    #[test]
    fn untrained_rank_scores_zero() {
        let empty: [&str; 0] = [];
        let model: TFIDFModel = TFIDFModel::fit(&empty);
        let hits = model.rank("compiler", &TITLES);
        assert_eq!(hits.len(), TITLES.len());
        assert!(hits.list.iter().all(|(_, s)| *s == 0.0));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = VectorizerConfig { min_token_len: 0, ..Default::default() };
        let result = TFIDFModel::<DefaultTFIDFEngine>::fit_with_config(&TITLES, config);
        assert!(matches!(result, Err(ConfigError::InvalidMinTokenLen)));
    }

    #[test]
    fn config_reaches_the_engine() {
        let config = VectorizerConfig { norm: Norm::None, ..Default::default() };
        let model: TFIDFModel = TFIDFModel::fit_with_config(&["cat sat", "dog sat"], config).unwrap();
        assert_eq!(model.config().norm, Norm::None);
        let scores = model.transform("cat cat");
        assert!((scores["cat"] - 2.0 * ((1.5f64).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn transform_list_keeps_order() {
        let model: TFIDFModel = TFIDFModel::fit(&TITLES);
        let maps = model.transform_list(&["spreadsheet", "crash"]);
        assert!(maps[0]["spreadsheet"] > 0.0);
        assert!(maps[1]["crash"] > 0.0);
    }
}
