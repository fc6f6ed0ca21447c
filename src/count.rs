//! Per-file query counting.
//!
//! Every query is counted independently as a literal, case-sensitive,
//! non-overlapping substring: the scan runs left to right and resumes right
//! after the end of each match. `"aa"` therefore occurs twice in `"aaaa"`,
//! not three times.

use std::path::Path;

use memchr::memmem::Finder;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    cli::EmptyQueryPolicy,
    error::{OligoCountError, Result},
    query::QuerySet,
    reader::read_content,
};

/// Match counts for one file, aligned to query-set order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountVector(Vec<u64>);

impl CountVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u64> {
        self.0
    }
}

impl From<Vec<u64>> for CountVector {
    fn from(counts: Vec<u64>) -> Self {
        Self(counts)
    }
}

/// Counts the non-overlapping occurrences of `query` in `content`.
///
/// An empty `query` counts as zero here; see [`QueryCounter`] for the
/// configurable convention.
///
/// # Example
///
/// ```
/// use oligocount::count::count_non_overlapping;
///
/// assert_eq!(count_non_overlapping(b"aaaa", b"aa"), 2);
/// assert_eq!(count_non_overlapping(b"atgatg", b"ATG"), 0);
/// ```
pub fn count_non_overlapping(content: &[u8], query: &[u8]) -> u64 {
    if query.is_empty() {
        return 0;
    }
    memchr::memmem::find_iter(content, query).count() as u64
}

/// Number of boundaries a zero-length pattern matches: characters + 1.
///
/// Characters are Unicode scalar values for valid UTF-8 and bytes otherwise.
fn empty_match_positions(content: &[u8]) -> u64 {
    let chars = std::str::from_utf8(content).map_or(content.len(), |s| s.chars().count());
    chars as u64 + 1
}

/// Precompiled searchers for a query set, reused for every file.
pub struct QueryCounter<'q> {
    finders: Vec<Option<Finder<'q>>>,
    policy: EmptyQueryPolicy,
}

impl<'q> QueryCounter<'q> {
    /// Builds one searcher per query.
    ///
    /// # Errors
    ///
    /// Returns [`OligoCountError::EmptyQuery`] for the first empty query when
    /// `policy` is [`EmptyQueryPolicy::Reject`]. Under the other policies an
    /// empty query is accepted and a warning is logged.
    pub fn new(queries: &'q QuerySet, policy: EmptyQueryPolicy) -> Result<Self> {
        for row in queries.empty_rows() {
            if policy == EmptyQueryPolicy::Reject {
                return Err(OligoCountError::EmptyQuery { row });
            }
            warn!(row, policy = ?policy, "Query string is empty");
        }

        let finders = queries
            .iter()
            .map(|q| (!q.is_empty()).then(|| Finder::new(q.as_bytes())))
            .collect();
        Ok(Self { finders, policy })
    }

    /// Counts every query in `content`, in query-set order.
    pub fn count(&self, content: &[u8]) -> CountVector {
        self.finders
            .iter()
            .map(|finder| match finder {
                Some(finder) => finder.find_iter(content).count() as u64,
                None => match self.policy {
                    EmptyQueryPolicy::Positions => empty_match_positions(content),
                    EmptyQueryPolicy::Zero | EmptyQueryPolicy::Reject => 0,
                },
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Number of queries, and so the length of every [`CountVector`].
    pub fn len(&self) -> usize {
        self.finders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finders.is_empty()
    }
}

/// Counts of one scanned file plus the number of bytes scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCounts {
    pub counts: CountVector,
    pub bytes: u64,
}

/// Reads `path` in full and counts every query in it.
///
/// The content is released before this returns.
///
/// # Errors
///
/// Returns [`OligoCountError::SequenceRead`] if the file cannot be read.
pub fn count_file(path: &Path, counter: &QueryCounter<'_>) -> Result<FileCounts> {
    let content = read_content(path)?;
    let bytes = content.len() as u64;
    debug!(path = %path.display(), bytes, "Scanning file");
    Ok(FileCounts {
        counts: counter.count(content.as_bytes()),
        bytes,
    })
}
