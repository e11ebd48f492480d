//! Vocabulary restriction filter.
//!
//! Used by the serving pipeline configuration only: tokens outside the
//! accepted vocabulary are dropped so the downstream frequency accumulator
//! never sees a word without a feature dimension. The vocabulary-building
//! pass omits this filter.

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::vocabulary::Vocabulary;

/// A filter that drops any token not present in the accepted vocabulary.
#[derive(Clone, Debug)]
pub struct VocabularyFilter {
    vocabulary: Arc<Vocabulary>,
}

impl VocabularyFilter {
    /// Create a filter restricting tokens to the given vocabulary.
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        VocabularyFilter { vocabulary }
    }
}

impl Filter for VocabularyFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let vocabulary = Arc::clone(&self.vocabulary);
        let kept: Vec<Token> = tokens
            .filter(|token| vocabulary.contains(&token.text))
            .collect();

        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "vocabulary"
    }
}
