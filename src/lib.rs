//! # newsvec
//!
//! Corpus ingestion and word-frequency feature extraction for news article
//! classification.
//!
//! newsvec streams `(text, category)` records out of raw document corpora
//! (Reuters-21578 style SGML dumps or directory-per-category text dumps) and
//! reduces each record to a fixed-dimension word-frequency vector over a
//! shared, reproducibly pruned vocabulary.
//!
//! ## Components
//!
//! - Document providers: a streaming SGML cursor and an eager directory
//!   walker behind one [`corpus::DocumentProvider`] trait
//! - An article factory that validates provider output and skips malformed
//!   records
//! - A token-level preprocessing pipeline: tokenizer, stop-word removal,
//!   number masking, garbage removal, Porter stemming, vocabulary restriction
//! - A vocabulary builder that prunes corpus-wide word statistics into an
//!   order-stable feature vocabulary
//! - A JSON cache artifact carrying the vocabulary and corpus statistics
//!
//! The classifier itself (hyper-parameter search, SVM fit/predict) is an
//! external collaborator; this crate produces its feature vectors.

pub mod analysis;
pub mod article;
pub mod cache;
pub mod corpus;
pub mod error;
pub mod vocabulary;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
