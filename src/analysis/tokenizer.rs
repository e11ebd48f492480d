//! Whitespace word tokenizer with a configurable punctuation/case policy.
//!
//! # Examples
//!
//! ```
//! use newsvec::analysis::tokenizer::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer
//!     .tokenize("Hello, World!")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(tokens, vec!["hello", "world"]);
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on maximal whitespace runs.
///
/// Unless configured otherwise it first replaces common punctuation with
/// spaces (dropping the DEL control character outright) and lowercases the
/// text. Tokenization is deterministic and side-effect free.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    keep_punctuation: bool,
    keep_case: bool,
}

impl WordTokenizer {
    /// Create a tokenizer that strips punctuation and lowercases.
    pub fn new() -> Self {
        WordTokenizer {
            keep_punctuation: false,
            keep_case: false,
        }
    }

    /// Create a tokenizer with an explicit punctuation/case policy.
    pub fn with_policy(keep_punctuation: bool, keep_case: bool) -> Self {
        WordTokenizer {
            keep_punctuation,
            keep_case,
        }
    }

    /// Replace mapped punctuation with spaces and drop the DEL character.
    fn erase_punctuation(text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                ',' | '.' | ';' | ':' | '/' | '(' | ')' | '{' | '}' | '+' | '-' | '<' | '>'
                | '"' | '\'' | '*' | '!' | '?' | '^' => output.push(' '),
                '\u{7f}' => {}
                _ => output.push(c),
            }
        }
        output
    }

    /// Tokenize the given text into a stream of tokens.
    pub fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut text = if self.keep_punctuation {
            text.to_string()
        } else {
            Self::erase_punctuation(text)
        };

        if !self.keep_case {
            text = text.to_lowercase();
        }

        let tokens: Vec<Token> = text
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
