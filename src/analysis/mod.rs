//! Text analysis: tokenization, token filtering, stemming, and the
//! preprocessing pipeline.
//!
//! Raw article text flows through [`tokenizer::WordTokenizer`], then an
//! ordered chain of [`token_filter::Filter`] implementations (stop-word
//! removal, number masking, garbage removal, Porter stemming and, in the
//! serving configuration, vocabulary restriction), and finally into the
//! frequency accumulator of [`pipeline::Preprocessor`].

pub mod pipeline;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
