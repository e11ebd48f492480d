//! Accepted vocabularies and the corpus pass that builds them.
//!
//! A [`Vocabulary`] is the pruned, order-stable word set used to dimension
//! feature vectors: its template fixes both the key set and the key order
//! every preprocessed article inherits. [`VocabularyBuilder`] produces one by
//! running a full pass over a corpus with the unrestricted scan pipeline,
//! counting total occurrences and document frequency per word, and keeping
//! the words inside the configured bounds in first-occurrence order.

use std::collections::HashMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::pipeline::Preprocessor;
use crate::article::{Article, WordFrequencies};
use crate::corpus::{ArticleFactory, DocumentProvider};
use crate::error::Result;

/// Words seen fewer times than this across the whole corpus are pruned.
pub const MIN_OCCURRENCES: u64 = 10;

/// Words seen this many times or more across the whole corpus are pruned.
pub const MAX_OCCURRENCES: u64 = 10_000;

/// Words must occur in strictly more articles than this to be kept.
pub const MIN_DOCUMENT_FREQUENCY: u64 = 10;

/// An immutable, ordered set of accepted words.
///
/// The contained template maps every accepted word to a zero count, in the
/// order the words were first seen during the building pass. That order is
/// fixed at construction and determines feature-vector dimensions, so it is
/// preserved bit-for-bit through serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    template: WordFrequencies,
}

impl Vocabulary {
    /// Build a vocabulary from an ordered word list, all counts zero.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut template = WordFrequencies::new();
        for word in words {
            template.insert_zero(word.as_ref());
        }
        Vocabulary { template }
    }

    /// Adopt an existing mapping's word order, resetting every count.
    pub fn from_template(template: &WordFrequencies) -> Self {
        Vocabulary {
            template: template.zeroed(),
        }
    }

    /// Whether a word is accepted.
    pub fn contains(&self, word: &str) -> bool {
        self.template.contains(word)
    }

    /// Number of accepted words, i.e. the feature-vector dimension.
    pub fn len(&self) -> usize {
        self.template.len()
    }

    /// Whether the vocabulary accepts no words at all.
    pub fn is_empty(&self) -> bool {
        self.template.is_empty()
    }

    /// The accepted words in their fixed order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.template.words()
    }

    /// The zero-baseline template used to seed pipeline accumulators.
    pub fn template(&self) -> &WordFrequencies {
        &self.template
    }
}

/// Corpus-wide frequency pass over preprocessed articles.
///
/// Feed it articles that went through the scan pipeline (no vocabulary
/// restriction), either one by one with [`observe`](Self::observe) or a whole
/// corpus at once with [`scan`](Self::scan), then call
/// [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    occurrences: WordFrequencies,
    document_frequency: AHashMap<String, u64>,
    categories: HashMap<String, u64>,
    article_count: u64,
    min_occurrences: u64,
    max_occurrences: u64,
    min_document_frequency: u64,
}

impl Default for VocabularyBuilder {
    fn default() -> Self {
        VocabularyBuilder::new()
    }
}

impl VocabularyBuilder {
    /// A builder with the standard pruning bounds.
    pub fn new() -> Self {
        VocabularyBuilder::with_bounds(MIN_OCCURRENCES, MAX_OCCURRENCES, MIN_DOCUMENT_FREQUENCY)
    }

    /// A builder with custom pruning bounds, for small corpora and tests.
    pub fn with_bounds(
        min_occurrences: u64,
        max_occurrences: u64,
        min_document_frequency: u64,
    ) -> Self {
        VocabularyBuilder {
            occurrences: WordFrequencies::new(),
            document_frequency: AHashMap::new(),
            categories: HashMap::new(),
            article_count: 0,
            min_occurrences,
            max_occurrences,
            min_document_frequency,
        }
    }

    /// Fold one preprocessed article into the running counts.
    ///
    /// A word's document frequency counts articles where it actually occurs,
    /// so zero-count entries (possible when the article was processed with a
    /// seeded accumulator) are ignored.
    pub fn observe(&mut self, article: &Article) {
        self.article_count += 1;
        *self
            .categories
            .entry(article.category().to_string())
            .or_insert(0) += 1;

        for (word, count) in article.preprocessed().iter() {
            if count == 0 {
                continue;
            }
            self.occurrences.add(word, count);
            *self.document_frequency.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    /// Run the full pass: drain the provider through the factory, preprocess
    /// every article with a fresh scan pipeline, and fold it in.
    pub fn scan(
        &mut self,
        provider: &mut dyn DocumentProvider,
        factory: &ArticleFactory,
    ) -> Result<()> {
        let mut pipeline = Preprocessor::for_vocabulary_scan();
        while let Some(mut article) = factory.next_article(provider)? {
            pipeline.process(&mut article)?;
            self.observe(&article);
        }
        Ok(())
    }

    /// Prune the observed words into an accepted vocabulary.
    ///
    /// Keeps words with `min <= occurrences < max` and document frequency
    /// strictly above the bound, in first-occurrence order.
    pub fn build(&self) -> Vocabulary {
        let mut template = WordFrequencies::new();
        for (word, count) in self.occurrences.iter() {
            if count < self.min_occurrences || count >= self.max_occurrences {
                continue;
            }
            let frequency = self.document_frequency.get(word).copied().unwrap_or(0);
            if frequency <= self.min_document_frequency {
                continue;
            }
            template.insert_zero(word);
        }
        Vocabulary { template }
    }

    /// Number of articles folded in so far.
    pub fn article_count(&self) -> u64 {
        self.article_count
    }

    /// Article counts per category label.
    pub fn categories(&self) -> &HashMap<String, u64> {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_with(words: &[(&str, u64)], category: &str) -> Article {
        let mut article = Article::new("placeholder", category).unwrap();
        let mut frequencies = WordFrequencies::new();
        for (word, count) in words {
            frequencies.add(word, *count);
        }
        article.set_preprocessed(frequencies);
        article
    }

    #[test]
    fn test_from_words_order_and_lookup() {
        let vocabulary = Vocabulary::from_words(["oil", "barrel", "oil"]);
        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.contains("oil"));
        assert!(!vocabulary.contains("opec"));

        let words: Vec<_> = vocabulary.words().collect();
        assert_eq!(words, vec!["oil", "barrel"]);
        assert_eq!(vocabulary.template().counts(), &[0, 0]);
    }

    #[test]
    fn test_from_template_resets_counts() {
        let mut template = WordFrequencies::new();
        template.add("oil", 42);
        template.add("barrel", 7);

        let vocabulary = Vocabulary::from_template(&template);
        assert_eq!(vocabulary.template().counts(), &[0, 0]);
        let words: Vec<_> = vocabulary.words().collect();
        assert_eq!(words, vec!["oil", "barrel"]);
    }

    #[test]
    fn test_pruning_bounds() {
        // A: 5 total occurrences (below minimum). B: 50 occurrences over 15
        // articles (kept). C: 15000 occurrences (at or above maximum).
        let mut builder = VocabularyBuilder::new();
        for i in 0..15 {
            let mut words = vec![("b", 3u64), ("c", 1000)];
            if i < 5 {
                words.push(("a", 1));
            }
            builder.observe(&article_with(&words, "earn"));
        }
        builder.observe(&article_with(&[("b", 5), ("c", 0)], "earn"));

        let vocabulary = builder.build();
        let words: Vec<_> = vocabulary.words().collect();
        assert_eq!(words, vec!["b"]);
    }

    #[test]
    fn test_document_frequency_ignores_zero_counts() {
        let mut builder = VocabularyBuilder::with_bounds(1, 100, 2);
        for _ in 0..3 {
            builder.observe(&article_with(&[("seen", 2), ("absent", 0)], "earn"));
        }

        let vocabulary = builder.build();
        assert!(vocabulary.contains("seen"));
        assert!(!vocabulary.contains("absent"));
    }

    #[test]
    fn test_category_and_article_counts() {
        let mut builder = VocabularyBuilder::new();
        builder.observe(&article_with(&[("oil", 1)], "crude"));
        builder.observe(&article_with(&[("net", 1)], "earn"));
        builder.observe(&article_with(&[("loss", 1)], "earn"));

        assert_eq!(builder.article_count(), 3);
        assert_eq!(builder.categories().get("earn"), Some(&2));
        assert_eq!(builder.categories().get("crude"), Some(&1));
    }

    #[test]
    fn test_build_keeps_first_occurrence_order() {
        let mut builder = VocabularyBuilder::with_bounds(2, 100, 1);
        builder.observe(&article_with(&[("zebra", 2), ("apple", 2)], "earn"));
        builder.observe(&article_with(&[("apple", 2), ("zebra", 2)], "earn"));

        let vocabulary = builder.build();
        let words: Vec<_> = vocabulary.words().collect();
        assert_eq!(words, vec!["zebra", "apple"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let vocabulary = Vocabulary::from_words(["oil", "barrel", "opec"]);
        let json = serde_json::to_string(&vocabulary).unwrap();
        let restored: Vocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, vocabulary);

        let words: Vec<_> = restored.words().collect();
        assert_eq!(words, vec!["oil", "barrel", "opec"]);
    }
}
