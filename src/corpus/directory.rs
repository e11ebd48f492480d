//! Eager provider for directory-per-category corpora.
//!
//! A 20-Newsgroups style corpus is a root directory whose immediate
//! subdirectories are category names, each holding one file per document.
//! The first two lines of every file are a header and are discarded. The
//! whole layout is read at construction into one ordered list; directory
//! entries are visited in sorted name order so the traversal is reproducible
//! across platforms.

use std::fs;
use std::path::{Path, PathBuf};

use crate::corpus::DocumentProvider;
use crate::error::{NewsvecError, Result};

/// Header lines discarded from the top of every document file.
const HEADER_LINES: usize = 2;

/// Eager cursor over a two-level directory corpus.
pub struct DirectoryProvider {
    entries: Vec<(String, String)>, // (text, category)
    cursor: Option<usize>,
}

impl DirectoryProvider {
    /// Read the whole layout under `root`.
    ///
    /// Files whose content is empty after header stripping and trimming are
    /// discarded. Non-directory entries at the top level and non-file
    /// entries inside a category are ignored.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let mut entries = Vec::new();

        for category_dir in sorted_entries(root)? {
            if !category_dir.is_dir() {
                continue;
            }
            let category = match category_dir.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => {
                    return Err(NewsvecError::corpus(format!(
                        "category directory name is not valid UTF-8: {}",
                        category_dir.display()
                    )));
                }
            };

            for document in sorted_entries(&category_dir)? {
                if !document.is_file() {
                    continue;
                }
                let bytes = fs::read(&document)?;
                let contents = String::from_utf8_lossy(&bytes);
                let text = contents
                    .lines()
                    .skip(HEADER_LINES)
                    .collect::<Vec<_>>()
                    .join("\n");
                let text = text.trim();
                if !text.is_empty() {
                    entries.push((text.to_string(), category.clone()));
                }
            }
        }

        Ok(DirectoryProvider {
            entries,
            cursor: None,
        })
    }

    /// Number of documents kept after header stripping.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus holds no usable documents.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self) -> Result<&(String, String)> {
        self.cursor
            .and_then(|i| self.entries.get(i))
            .ok_or_else(|| {
                NewsvecError::corpus("provider has no current record; call advance() first")
            })
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    paths.sort();
    Ok(paths)
}

impl DocumentProvider for DirectoryProvider {
    fn advance(&mut self) -> Result<()> {
        // Saturate at one past the end so exhaustion is permanent.
        self.cursor = Some(match self.cursor {
            None => 0,
            Some(i) => i.saturating_add(1).min(self.entries.len()),
        });
        Ok(())
    }

    fn is_valid(&self) -> bool {
        matches!(self.cursor, Some(i) if i < self.entries.len())
    }

    fn category(&self) -> Result<String> {
        Ok(self.entry()?.1.clone())
    }

    fn text(&self) -> Result<String> {
        Ok(self.entry()?.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn write_document(root: &Path, category: &str, name: &str, contents: &str) {
        let dir = root.join(category);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_reads_sorted_two_level_layout() {
        let dir = TempDir::new().unwrap();
        write_document(dir.path(), "sci.space", "b.txt", "From: a\nSubject: s\norbital launch");
        write_document(dir.path(), "rec.autos", "a.txt", "From: b\nSubject: t\nengine torque");

        let mut provider = DirectoryProvider::new(dir.path()).unwrap();
        assert_eq!(provider.len(), 2);

        let mut seen = Vec::new();
        provider.advance().unwrap();
        while provider.is_valid() {
            seen.push((provider.category().unwrap(), provider.text().unwrap()));
            provider.advance().unwrap();
        }

        // Categories come back in sorted directory order.
        assert_eq!(
            seen,
            vec![
                ("rec.autos".to_string(), "engine torque".to_string()),
                ("sci.space".to_string(), "orbital launch".to_string()),
            ]
        );
    }

    #[test]
    fn test_header_lines_are_stripped() {
        let dir = TempDir::new().unwrap();
        write_document(
            dir.path(),
            "talk.politics",
            "doc.txt",
            "header one\nheader two\n\n  body starts here\nsecond line  ",
        );

        let mut provider = DirectoryProvider::new(dir.path()).unwrap();
        provider.advance().unwrap();
        assert_eq!(provider.text().unwrap(), "body starts here\nsecond line");
    }

    #[test]
    fn test_empty_after_header_is_discarded() {
        let dir = TempDir::new().unwrap();
        write_document(dir.path(), "misc", "empty.txt", "header one\nheader two\n   \n");
        write_document(dir.path(), "misc", "full.txt", "h1\nh2\nreal content");

        let provider = DirectoryProvider::new(dir.path()).unwrap();
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_not_started_then_exhausted() {
        let dir = TempDir::new().unwrap();
        write_document(dir.path(), "misc", "doc.txt", "h1\nh2\ncontent");

        let mut provider = DirectoryProvider::new(dir.path()).unwrap();
        assert!(!provider.is_valid());
        assert!(provider.text().is_err());

        provider.advance().unwrap();
        assert!(provider.is_valid());
        provider.advance().unwrap();
        assert!(!provider.is_valid());
        provider.advance().unwrap();
        assert!(!provider.is_valid());
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            DirectoryProvider::new(&missing),
            Err(NewsvecError::Io(_))
        ));
    }

    #[test]
    fn test_top_level_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README"), "not a category").unwrap();
        write_document(dir.path(), "misc", "doc.txt", "h1\nh2\ncontent");

        let provider = DirectoryProvider::new(dir.path()).unwrap();
        assert_eq!(provider.len(), 1);
    }
}
