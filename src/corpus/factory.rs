//! Article extraction loop over a document provider.

use ahash::AHashSet;

use crate::article::Article;
use crate::corpus::DocumentProvider;
use crate::error::Result;

/// Turns raw provider candidates into validated [`Article`] records.
///
/// Candidates with a missing structural field, an empty text or category,
/// or (when an allow-list is configured) a category outside the allow-list
/// are skipped and the provider advances to the next record. End of corpus
/// is the sentinel `Ok(None)`, not an error.
///
/// # Examples
///
/// ```no_run
/// use newsvec::corpus::{ArticleFactory, SgmlProvider};
///
/// let mut provider = SgmlProvider::new("./reuters21578");
/// let factory = ArticleFactory::with_allowed_categories(["earn", "acq", "crude"]);
/// while let Some(article) = factory.next_article(&mut provider)? {
///     println!("{}: {} bytes", article.category(), article.text().len());
/// }
/// # Ok::<(), newsvec::error::NewsvecError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArticleFactory {
    allowed_categories: AHashSet<String>,
}

impl ArticleFactory {
    /// A factory accepting every category.
    pub fn new() -> Self {
        ArticleFactory::default()
    }

    /// A factory accepting only the given categories.
    pub fn with_allowed_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArticleFactory {
            allowed_categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    fn accepts(&self, category: &str) -> bool {
        self.allowed_categories.is_empty() || self.allowed_categories.contains(category)
    }

    /// Advance the provider until it yields a valid article, skipping
    /// recoverable failures.
    ///
    /// Returns `Ok(None)` once the provider is exhausted. Fatal errors
    /// (I/O, misuse) propagate immediately.
    pub fn next_article(&self, provider: &mut dyn DocumentProvider) -> Result<Option<Article>> {
        loop {
            provider.advance()?;
            if !provider.is_valid() {
                return Ok(None);
            }

            let category = match provider.category() {
                Ok(category) => category,
                Err(e) if e.is_recoverable() => continue,
                Err(e) => return Err(e),
            };
            if !self.accepts(&category) {
                continue;
            }

            let text = match provider.text() {
                Ok(text) => text,
                Err(e) if e.is_recoverable() => continue,
                Err(e) => return Err(e),
            };

            match Article::new(&text, &category) {
                Ok(article) => return Ok(Some(article)),
                Err(e) if e.is_recoverable() => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
