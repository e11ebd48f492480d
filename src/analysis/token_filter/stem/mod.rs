//! Stemming token filter.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

pub mod porter;

pub use porter::PorterStemmer;

/// Filter that reduces every token to its Porter stem.
#[derive(Clone, Debug, Default)]
pub struct StemFilter {
    stemmer: PorterStemmer,
}

impl StemFilter {
    /// Create a new stem filter.
    pub fn new() -> Self {
        StemFilter {
            stemmer: PorterStemmer::new(),
        }
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmed = tokens
            .map(|token| {
                let stem = self.stemmer.stem(&token.text);
                token.with_text(stem)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(stemmed.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::new();
        let tokens = vec![
            Token::new("motoring", 0),
            Token::new("ponies", 1),
            Token::new("cats", 2),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "motor");
        assert_eq!(result[1].text, "poni");
        assert_eq!(result[2].text, "cat");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::new().name(), "stem");
    }
}
