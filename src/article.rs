//! Article records and insertion-ordered word-frequency mappings.
//!
//! An [`Article`] is one validated `(text, category)` record extracted from a
//! corpus. Its `preprocessed` mapping is populated exactly once by the
//! preprocessing pipeline and is an independent snapshot: mutating the
//! pipeline afterwards never changes an article that has already been
//! processed.
//!
//! [`WordFrequencies`] is the mapping type used throughout the crate for
//! per-article counts, corpus-wide totals, and vocabulary templates. Its
//! iteration order is insertion order, which is what makes feature-vector
//! dimensions stable across articles and across runs.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{NewsvecError, Result};

/// An insertion-ordered `word -> count` mapping.
///
/// Iteration, [`WordFrequencies::counts`] and the serialized form all follow
/// the order in which words were first inserted. Serialization round-trips
/// through an ordered sequence of `(word, count)` pairs, so the order is
/// preserved bit-for-bit in the JSON cache artifact.
///
/// # Examples
///
/// ```
/// use newsvec::article::WordFrequencies;
///
/// let mut frequencies = WordFrequencies::new();
/// frequencies.increment("acquisition");
/// frequencies.increment("oil");
/// frequencies.increment("acquisition");
///
/// assert_eq!(frequencies.get("acquisition"), Some(2));
/// assert_eq!(frequencies.counts(), &[2, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, u64)>", into = "Vec<(String, u64)>")]
pub struct WordFrequencies {
    words: Vec<String>,
    counts: Vec<u64>,
    index: AHashMap<String, usize>,
}

impl WordFrequencies {
    /// Create an empty mapping.
    pub fn new() -> Self {
        WordFrequencies::default()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the mapping holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the word is present (even with a zero count).
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// The count recorded for a word, if present.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&i| self.counts[i])
    }

    /// Add `n` to a word's count, inserting the word if it is new.
    pub fn add(&mut self, word: &str, n: u64) {
        match self.index.get(word) {
            Some(&i) => self.counts[i] += n,
            None => {
                self.index.insert(word.to_string(), self.words.len());
                self.words.push(word.to_string());
                self.counts.push(n);
            }
        }
    }

    /// Add one to a word's count, inserting the word if it is new.
    pub fn increment(&mut self, word: &str) {
        self.add(word, 1);
    }

    /// Add one to a word's count only if the word is already present.
    ///
    /// Returns whether the word was known. Used by vocabulary-seeded
    /// accumulators, which must never grow beyond their template.
    pub fn increment_known(&mut self, word: &str) -> bool {
        match self.index.get(word) {
            Some(&i) => {
                self.counts[i] += 1;
                true
            }
            None => false,
        }
    }

    /// Insert a word with a zero count if it is not present yet.
    pub fn insert_zero(&mut self, word: &str) {
        if !self.contains(word) {
            self.add(word, 0);
        }
    }

    /// The words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The counts in insertion order.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Iterate `(word, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }

    /// Reset every count to zero, keeping the word set and its order.
    pub fn zero(&mut self) {
        self.counts.fill(0);
    }

    /// Remove all words and counts.
    pub fn clear(&mut self) {
        self.words.clear();
        self.counts.clear();
        self.index.clear();
    }

    /// A copy with the same word order and all counts reset to zero.
    pub fn zeroed(&self) -> Self {
        let mut copy = self.clone();
        copy.zero();
        copy
    }
}

impl From<Vec<(String, u64)>> for WordFrequencies {
    fn from(pairs: Vec<(String, u64)>) -> Self {
        let mut frequencies = WordFrequencies::new();
        for (word, count) in pairs {
            frequencies.add(&word, count);
        }
        frequencies
    }
}

impl From<WordFrequencies> for Vec<(String, u64)> {
    fn from(frequencies: WordFrequencies) -> Self {
        frequencies
            .words
            .into_iter()
            .zip(frequencies.counts)
            .collect()
    }
}

/// One validated corpus record.
///
/// `text` and `category` are trimmed and checked to be non-empty at
/// construction; an `Article` that exists is always well-formed. The
/// `preprocessed` mapping starts empty and is assigned exactly once by
/// [`Preprocessor::process`](crate::analysis::pipeline::Preprocessor::process).
///
/// # Examples
///
/// ```
/// use newsvec::article::Article;
///
/// let article = Article::new("Oil prices rose sharply.", "crude").unwrap();
/// assert_eq!(article.category(), "crude");
/// assert!(Article::new("   ", "crude").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Article {
    text: String,
    category: String,
    preprocessed: WordFrequencies,
}

impl Article {
    /// Create an article, trimming and validating both fields.
    pub fn new(text: &str, category: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NewsvecError::validation("text must not be empty"));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(NewsvecError::validation("category must not be empty"));
        }
        Ok(Article {
            text: text.to_string(),
            category: category.to_string(),
            preprocessed: WordFrequencies::new(),
        })
    }

    /// The raw article text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The article's category label.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The word-frequency snapshot assigned by the preprocessing pipeline.
    ///
    /// Empty until the article has been processed.
    pub fn preprocessed(&self) -> &WordFrequencies {
        &self.preprocessed
    }

    pub(crate) fn set_preprocessed(&mut self, frequencies: WordFrequencies) {
        self.preprocessed = frequencies;
    }

    /// The ordered counts of the preprocessed mapping.
    pub fn vector(&self) -> Vec<u64> {
        self.preprocessed.counts().to_vec()
    }

    /// The L2-normalized feature vector. A zero vector stays zero.
    pub fn normalized(&self) -> Vec<f64> {
        let counts = self.preprocessed.counts();
        let norm = counts
            .iter()
            .map(|&c| (c as f64) * (c as f64))
            .sum::<f64>()
            .sqrt();
        if norm == 0.0 {
            return vec![0.0; counts.len()];
        }
        counts.iter().map(|&c| c as f64 / norm).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_validation() {
        assert!(Article::new("some text", "earn").is_ok());
        assert!(Article::new("", "earn").is_err());
        assert!(Article::new("   \n ", "earn").is_err());
        assert!(Article::new("some text", "").is_err());
        assert!(Article::new("some text", " \t").is_err());
    }

    #[test]
    fn test_article_trims_fields() {
        let article = Article::new("  body text \n", " earn ").unwrap();
        assert_eq!(article.text(), "body text");
        assert_eq!(article.category(), "earn");
    }

    #[test]
    fn test_validation_errors_are_recoverable() {
        let error = Article::new("", "earn").unwrap_err();
        assert!(error.is_recoverable());
    }

    #[test]
    fn test_word_frequencies_order() {
        let mut frequencies = WordFrequencies::new();
        frequencies.increment("gamma");
        frequencies.increment("alpha");
        frequencies.increment("gamma");
        frequencies.increment("beta");

        let words: Vec<_> = frequencies.words().collect();
        assert_eq!(words, vec!["gamma", "alpha", "beta"]);
        assert_eq!(frequencies.counts(), &[2, 1, 1]);
    }

    #[test]
    fn test_increment_known() {
        let mut frequencies = WordFrequencies::new();
        frequencies.insert_zero("known");

        assert!(frequencies.increment_known("known"));
        assert!(!frequencies.increment_known("unknown"));
        assert_eq!(frequencies.get("known"), Some(1));
        assert!(!frequencies.contains("unknown"));
    }

    #[test]
    fn test_zero_keeps_order() {
        let mut frequencies = WordFrequencies::new();
        frequencies.add("first", 5);
        frequencies.add("second", 7);
        frequencies.zero();

        let words: Vec<_> = frequencies.words().collect();
        assert_eq!(words, vec!["first", "second"]);
        assert_eq!(frequencies.counts(), &[0, 0]);
    }

    #[test]
    fn test_serde_round_trip_preserves_order() {
        let mut frequencies = WordFrequencies::new();
        frequencies.add("zebra", 3);
        frequencies.add("apple", 1);
        frequencies.add("mango", 0);

        let json = serde_json::to_string(&frequencies).unwrap();
        let restored: WordFrequencies = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, frequencies);
        let words: Vec<_> = restored.words().collect();
        assert_eq!(words, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_normalized_vector() {
        let mut article = Article::new("three four", "test").unwrap();
        let mut frequencies = WordFrequencies::new();
        frequencies.add("three", 3);
        frequencies.add("four", 4);
        article.set_preprocessed(frequencies);

        assert_eq!(article.vector(), vec![3, 4]);
        let normalized = article.normalized();
        assert!((normalized[0] - 0.6).abs() < 1e-12);
        assert!((normalized[1] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_zero_vector() {
        let article = Article::new("text", "cat").unwrap();
        assert!(article.normalized().is_empty());

        let mut article = Article::new("text", "cat").unwrap();
        let mut frequencies = WordFrequencies::new();
        frequencies.insert_zero("word");
        article.set_preprocessed(frequencies);
        assert_eq!(article.normalized(), vec![0.0]);
    }
}
