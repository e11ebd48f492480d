//! Corpus providers and the article extraction loop.
//!
//! A [`DocumentProvider`] is a cursor over one corpus layout, yielding raw
//! `(text, category)` candidates. Two layouts are supported:
//!
//! - [`SgmlProvider`] streams delimited records out of sequentially numbered
//!   SGML dump files, opening each file only when the previous one is
//!   exhausted.
//! - [`DirectoryProvider`] eagerly reads a two-level directory layout where
//!   each subdirectory name is a category.
//!
//! [`ArticleFactory`] drives a provider and turns its candidates into
//! validated [`Article`](crate::article::Article) records, skipping malformed
//! ones.

pub mod directory;
pub mod factory;
pub mod sgml;

pub use directory::DirectoryProvider;
pub use factory::ArticleFactory;
pub use sgml::SgmlProvider;

use crate::error::Result;

/// A one-shot cursor over a corpus.
///
/// `advance` must be called before the first `is_valid`, `category` or
/// `text` call; a provider that has not started is invalid. Once `is_valid`
/// returns `false` the provider is permanently exhausted. A provider owns
/// its cursor exclusively, so a second pass over the same corpus needs a
/// fresh instance.
pub trait DocumentProvider {
    /// Move the cursor to the next candidate record, if any.
    fn advance(&mut self) -> Result<()>;

    /// Whether the cursor points at a record.
    fn is_valid(&self) -> bool;

    /// The current record's category label.
    fn category(&self) -> Result<String>;

    /// The current record's raw text.
    fn text(&self) -> Result<String>;
}
