//! Garbage token filter.
//!
//! Drops tokens that survive tokenization but can never be useful features:
//! single characters, vowel-less consonant runs, and the "bla" filler the
//! source corpus is littered with.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

static BLA_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^b+l+a+$").unwrap());

// y counts as a consonant here, matching the stemmer's vowel classes.
static NO_VOWEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[b-df-hj-np-tv-z]+$").unwrap());

/// A filter that drops garbage tokens.
///
/// A token is garbage when it is at most one character long, matches
/// `^b+l+a+$`, or consists entirely of consonants.
///
/// # Examples
///
/// ```
/// use newsvec::analysis::token::Token;
/// use newsvec::analysis::token_filter::{Filter, GarbageFilter};
///
/// let filter = GarbageFilter::new();
/// let tokens = vec![
///     Token::new("x", 0),
///     Token::new("blaaa", 1),
///     Token::new("pct", 2),
///     Token::new("price", 3),
/// ];
///
/// let result: Vec<_> = filter
///     .filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "price");
/// ```
#[derive(Clone, Debug, Default)]
pub struct GarbageFilter;

impl GarbageFilter {
    /// Create a new garbage filter.
    pub fn new() -> Self {
        GarbageFilter
    }

    /// Check whether a token should be dropped.
    pub fn is_garbage(&self, word: &str) -> bool {
        word.chars().count() <= 1
            || BLA_PATTERN.is_match(word)
            || NO_VOWEL_PATTERN.is_match(word)
    }
}

impl Filter for GarbageFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens.filter(|token| !self.is_garbage(&token.text)).collect();

        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "garbage"
    }
}
