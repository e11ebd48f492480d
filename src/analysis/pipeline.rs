//! Preprocessing pipeline: tokenizer, filter chain, frequency accumulator.
//!
//! A [`Preprocessor`] is an explicitly constructed value passed to whoever
//! needs it; there is no process-wide cached instance. Two configurations
//! exist:
//!
//! - the serving chain ([`Preprocessor::with_vocabulary`]), whose accumulator
//!   is seeded from the vocabulary's zero template so every article's
//!   `preprocessed` mapping shares one key set and order, and
//! - the scan chain ([`Preprocessor::for_vocabulary_scan`]), whose open
//!   accumulator records whatever survives the filters, used for the corpus
//!   pass that builds the vocabulary in the first place.
//!
//! The accumulator is one reusable resource across `process` calls. Each call
//! hands the article a snapshot copy and then resets the accumulator, so two
//! sequentially processed articles always end up with independent mappings.

use std::fmt;
use std::sync::Arc;

use crate::analysis::token_filter::{
    Filter, GarbageFilter, NumberMaskFilter, StemFilter, StopFilter, VocabularyFilter,
};
use crate::analysis::tokenizer::WordTokenizer;
use crate::article::{Article, WordFrequencies};
use crate::error::Result;
use crate::vocabulary::Vocabulary;

/// The text-to-frequency-vector pipeline.
pub struct Preprocessor {
    tokenizer: WordTokenizer,
    filters: Vec<Arc<dyn Filter>>,
    accumulator: WordFrequencies,
    seeded: bool,
}

impl Preprocessor {
    /// An empty pipeline: default tokenizer, no filters, open accumulator.
    pub fn new() -> Self {
        Preprocessor {
            tokenizer: WordTokenizer::new(),
            filters: Vec::new(),
            accumulator: WordFrequencies::new(),
            seeded: false,
        }
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: WordTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Append a filter to the chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// The serving pipeline: stop → number mask → garbage → stem →
    /// vocabulary restriction, with an accumulator seeded from the
    /// vocabulary's zero template.
    ///
    /// Every processed article gets a `preprocessed` mapping with exactly
    /// the vocabulary's key set and order.
    pub fn with_vocabulary(vocabulary: Arc<Vocabulary>) -> Self {
        let accumulator = vocabulary.template().clone();
        let mut pipeline = Self::standard_chain().add_filter(Arc::new(VocabularyFilter::new(
            vocabulary,
        )));
        pipeline.accumulator = accumulator;
        pipeline.seeded = true;
        pipeline
    }

    /// The vocabulary-building pipeline: the standard chain without the
    /// vocabulary restriction, accumulating every surviving word.
    pub fn for_vocabulary_scan() -> Self {
        Self::standard_chain()
    }

    fn standard_chain() -> Self {
        Preprocessor::new()
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(NumberMaskFilter::new()))
            .add_filter(Arc::new(GarbageFilter::new()))
            .add_filter(Arc::new(StemFilter::new()))
    }

    /// Tokenize, filter, accumulate, and assign the article's frequency
    /// snapshot.
    ///
    /// The article receives an independent copy of the accumulated counts;
    /// the internal accumulator is reset afterwards (counts zeroed when
    /// seeded, cleared entirely when open) ready for the next call.
    pub fn process(&mut self, article: &mut Article) -> Result<()> {
        let mut tokens = self.tokenizer.tokenize(article.text())?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        for token in tokens {
            if self.seeded {
                // Seeded accumulators never grow beyond their template.
                self.accumulator.increment_known(&token.text);
            } else {
                self.accumulator.increment(&token.text);
            }
        }

        article.set_preprocessed(self.accumulator.clone());

        if self.seeded {
            self.accumulator.zero();
        } else {
            self.accumulator.clear();
        }
        Ok(())
    }

    /// Names of the configured filters, in application order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preprocessor")
            .field("filters", &self.filter_names())
            .field("seeded", &self.seeded)
            .finish()
    }
}
