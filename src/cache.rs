//! JSON cache artifact for the corpus-wide analysis pass.
//!
//! Building the vocabulary means a full pass over the corpus, which is the
//! expensive part of the whole system. [`CorpusCache`] captures everything
//! that pass produces (article count, pruned vocabulary, per-category
//! counts) together with previously discovered classifier hyper-parameters,
//! and persists it as one JSON file so later runs can seed their pipelines
//! without rescanning.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::corpus::{ArticleFactory, DocumentProvider};
use crate::error::Result;
use crate::vocabulary::{Vocabulary, VocabularyBuilder};

/// Classifier hyper-parameters carried alongside the vocabulary.
///
/// The classifier itself lives outside this crate; these values are
/// persisted data only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvmParams {
    pub c: f64,
    pub gamma: f64,
    pub kernel: String,
    pub degree: Option<u32>,
}

impl Default for SvmParams {
    fn default() -> Self {
        SvmParams {
            c: 1000.0,
            gamma: 0.001,
            kernel: "rbf".to_string(),
            degree: None,
        }
    }
}

/// The persisted result of one corpus analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusCache {
    pub article_count: u64,
    pub words: Vocabulary,
    pub categories: HashMap<String, u64>,
    pub best_params: SvmParams,
}

impl CorpusCache {
    /// Run the standard vocabulary-building pass and capture its results.
    pub fn build(provider: &mut dyn DocumentProvider, factory: &ArticleFactory) -> Result<Self> {
        Self::build_with(provider, factory, VocabularyBuilder::new())
    }

    /// Like [`build`](Self::build) with explicit pruning bounds.
    pub fn build_with(
        provider: &mut dyn DocumentProvider,
        factory: &ArticleFactory,
        mut builder: VocabularyBuilder,
    ) -> Result<Self> {
        builder.scan(provider, factory)?;
        Ok(CorpusCache {
            article_count: builder.article_count(),
            words: builder.build(),
            categories: builder.categories().clone(),
            best_params: SvmParams::default(),
        })
    }

    /// The accepted vocabulary, shareable with serving pipelines.
    pub fn vocabulary(&self) -> Arc<Vocabulary> {
        Arc::new(self.words.clone())
    }

    /// Read a cache artifact from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let cache = serde_json::from_reader(BufReader::new(file))?;
        Ok(cache)
    }

    /// Write the cache artifact as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn sample_cache() -> CorpusCache {
        let mut categories = HashMap::new();
        categories.insert("earn".to_string(), 120);
        categories.insert("crude".to_string(), 45);
        CorpusCache {
            article_count: 165,
            words: Vocabulary::from_words(["profit", "oil", "barrel"]),
            categories,
            best_params: SvmParams::default(),
        }
    }

    #[test]
    fn test_default_params() {
        let params = SvmParams::default();
        assert_eq!(params.c, 1000.0);
        assert_eq!(params.gamma, 0.001);
        assert_eq!(params.kernel, "rbf");
        assert_eq!(params.degree, None);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.json");

        let cache = sample_cache();
        cache.save(&path).unwrap();
        let restored = CorpusCache::load(&path).unwrap();

        assert_eq!(restored.article_count, 165);
        assert_eq!(restored.words, cache.words);
        assert_eq!(restored.categories, cache.categories);
        assert_eq!(restored.best_params, cache.best_params);

        // The vocabulary order must survive the round trip.
        let words: Vec<_> = restored.words.words().collect();
        assert_eq!(words, vec!["profit", "oil", "barrel"]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = CorpusCache::load(dir.path().join("absent.json"));
        assert!(matches!(
            result,
            Err(crate::error::NewsvecError::Io(_))
        ));
    }

    #[test]
    fn test_load_malformed_json_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            CorpusCache::load(&path),
            Err(crate::error::NewsvecError::Json(_))
        ));
    }

    #[test]
    fn test_vocabulary_is_shareable() {
        let cache = sample_cache();
        let vocabulary = cache.vocabulary();
        assert!(vocabulary.contains("oil"));
        assert_eq!(vocabulary.len(), 3);
    }
}
