//! Number masking filter.
//!
//! Classification cares that a token is numeric, not which number it is, so
//! every digit-bearing token collapses onto one mask token.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// The literal token every digit-bearing token is replaced with.
pub const NUMBER_TOKEN: &str = "/number/";

/// A filter that replaces any token containing an ASCII digit anywhere with
/// the literal [`NUMBER_TOKEN`].
///
/// # Examples
///
/// ```
/// use newsvec::analysis::token::Token;
/// use newsvec::analysis::token_filter::{Filter, NumberMaskFilter};
///
/// let filter = NumberMaskFilter::new();
/// let tokens = vec![Token::new("q3", 0), Token::new("profit", 1)];
///
/// let result: Vec<_> = filter
///     .filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result[0].text, "/number/");
/// assert_eq!(result[1].text, "profit");
/// ```
#[derive(Clone, Debug, Default)]
pub struct NumberMaskFilter;

impl NumberMaskFilter {
    /// Create a new number mask filter.
    pub fn new() -> Self {
        NumberMaskFilter
    }
}

impl Filter for NumberMaskFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let masked: Vec<Token> = tokens
            .map(|token| {
                if token.text.chars().any(|c| c.is_ascii_digit()) {
                    token.with_text(NUMBER_TOKEN)
                } else {
                    token
                }
            })
            .collect();

        Ok(Box::new(masked.into_iter()))
    }

    fn name(&self) -> &'static str {
        "number_mask"
    }
}
