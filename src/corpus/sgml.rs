//! Streaming provider for numbered SGML dump files.
//!
//! A Reuters-21578 style corpus is a directory of files named
//! `reut2-000.sgm` through `reut2-021.sgm`, each holding a run of
//! `<REUTERS>...</REUTERS>` records. The provider keeps at most one file's
//! records in memory and opens the next numbered file only when the current
//! one has no record left.

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::corpus::DocumentProvider;
use crate::error::{NewsvecError, Result};

/// Number of dump files in the standard corpus distribution.
pub const DEFAULT_FILE_COUNT: usize = 22;

static RECORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<reuters[^>]*>(.*?)</reuters>").unwrap());

static TOPICS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<topics[^>]*>(.*?)</topics>").unwrap());

static PLACES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<places[^>]*>(.*?)</places>").unwrap());

static D_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<d>(.*?)</d>").unwrap());

static BODY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body[^>]*>(.*?)</body>").unwrap());

static ENTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#\d+|lt|gt|amp|quot|apos);").unwrap());

/// Decode the basic SGML character entities the corpus uses.
fn decode_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures<'_>| match &caps[1] {
            "lt" => "<".to_string(),
            "gt" => ">".to_string(),
            "amp" => "&".to_string(),
            "quot" => "\"".to_string(),
            "apos" => "'".to_string(),
            numeric => numeric[1..]
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default(),
        })
        .into_owned()
}

/// Streaming cursor over numbered SGML dump files.
///
/// # Examples
///
/// ```no_run
/// use newsvec::corpus::{DocumentProvider, SgmlProvider};
///
/// let mut provider = SgmlProvider::new("./reuters21578");
/// provider.advance()?;
/// while provider.is_valid() {
///     println!("{}", provider.category()?);
///     provider.advance()?;
/// }
/// # Ok::<(), newsvec::error::NewsvecError>(())
/// ```
pub struct SgmlProvider {
    root: PathBuf,
    file_count: usize,
    stop_at: Option<usize>,
    next_file: usize,
    records: VecDeque<String>,
    current: Option<String>,
}

impl SgmlProvider {
    /// A provider over the standard 22-file corpus under `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        SgmlProvider {
            root: root.into(),
            file_count: DEFAULT_FILE_COUNT,
            stop_at: None,
            next_file: 0,
            records: VecDeque::new(),
            current: None,
        }
    }

    /// Override the number of dump files to traverse.
    pub fn with_file_count(mut self, file_count: usize) -> Self {
        self.file_count = file_count;
        self
    }

    /// Stop the traversal before file `n`, exposing only files `0..n`.
    ///
    /// Exists for deterministic partial scans; the bound is permanent for
    /// this provider instance.
    pub fn stop_at_file(mut self, n: usize) -> Self {
        self.stop_at = Some(n);
        self
    }

    fn file_name(n: usize) -> String {
        format!("reut2-{n:03}.sgm")
    }

    fn file_limit(&self) -> usize {
        self.stop_at
            .map_or(self.file_count, |n| n.min(self.file_count))
    }

    /// Read one dump file and queue its records.
    ///
    /// The dumps are not valid UTF-8 throughout, so the read is lossy.
    fn load_file(&mut self, n: usize) -> Result<()> {
        let path = self.root.join(Self::file_name(n));
        let bytes = fs::read(&path)?;
        let contents = String::from_utf8_lossy(&bytes);
        for record in RECORD_PATTERN.captures_iter(&contents) {
            self.records.push_back(record[1].to_string());
        }
        Ok(())
    }

    fn record(&self) -> Result<&str> {
        self.current.as_deref().ok_or_else(|| {
            NewsvecError::corpus("provider has no current record; call advance() first")
        })
    }
}

impl DocumentProvider for SgmlProvider {
    fn advance(&mut self) -> Result<()> {
        loop {
            if let Some(record) = self.records.pop_front() {
                self.current = Some(record);
                return Ok(());
            }
            if self.next_file >= self.file_limit() {
                self.current = None;
                return Ok(());
            }
            let n = self.next_file;
            self.next_file += 1;
            self.load_file(n)?;
        }
    }

    fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    /// The first `<D>` entry of the record's `<TOPICS>` block, falling back
    /// to `<PLACES>` only when the record has no `<TOPICS>` block at all.
    fn category(&self) -> Result<String> {
        let record = self.record()?;
        let block = if let Some(topics) = TOPICS_PATTERN.captures(record) {
            topics
        } else if let Some(places) = PLACES_PATTERN.captures(record) {
            places
        } else {
            return Err(NewsvecError::missing_field("TOPICS"));
        };

        let entry = D_PATTERN
            .captures(&block[1])
            .ok_or_else(|| NewsvecError::missing_field("D"))?;
        Ok(decode_entities(entry[1].trim()))
    }

    fn text(&self) -> Result<String> {
        let record = self.record()?;
        let body = BODY_PATTERN
            .captures(record)
            .ok_or_else(|| NewsvecError::missing_field("BODY"))?;
        Ok(decode_entities(body[1].trim()))
    }
}
