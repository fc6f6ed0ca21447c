//! Query set loading.
//!
//! Query strings are read from one named column of a delimited table with a
//! header row. Row order is kept, duplicates are kept, and values are taken
//! verbatim (no trimming, no case folding, no alphabet check).

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use tracing::info;

use crate::{
    error::{OligoCountError, Result},
    format::QueryFormat,
};

/// Ordered query strings; their order defines the row order of every output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuerySet(Vec<String>);

impl QuerySet {
    #[must_use]
    pub const fn new(queries: Vec<String>) -> Self {
        Self(queries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// 1-based data row numbers holding an empty query string.
    pub fn empty_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, q)| q.is_empty())
            .map(|(i, _)| i + 1)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for QuerySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a QuerySet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Loads the values of `column` from the table at `path`.
///
/// The delimiter is chosen from the file extension (see [`QueryFormat`]).
///
/// # Errors
///
/// Returns [`OligoCountError::QueryRead`] if the file cannot be opened or parsed,
/// [`OligoCountError::MissingColumn`] if no header equals `column` and
/// [`OligoCountError::RaggedRow`] if a row has more fields than the header.
/// Rows with fewer fields are accepted; their missing cells read as empty.
///
/// # Example
///
/// ```rust,no_run
/// use oligocount::query::load_queries;
/// use std::path::Path;
///
/// let queries = load_queries(Path::new("keys.csv"), "Sequence")?;
/// println!("{} query strings", queries.len());
/// # Ok::<(), oligocount::error::OligoCountError>(())
/// ```
pub fn load_queries(path: &Path, column: &str) -> Result<QuerySet> {
    let format = QueryFormat::Auto.resolve(path);
    let reader = ReaderBuilder::new()
        .delimiter(format.delimiter())
        .flexible(true)
        .from_path(path)
        .map_err(|source| OligoCountError::QueryRead {
            source,
            path: path.to_path_buf(),
        })?;

    let queries = read_column(reader, column, path)?;
    info!(
        path = %path.display(),
        format = %format,
        column,
        count = queries.len(),
        "Loaded query set"
    );
    Ok(queries)
}

/// Loads the values of `column` from any reader holding a delimited table.
///
/// `QueryFormat::Auto` is read as CSV.
pub fn load_queries_from_reader<R: Read>(
    reader: R,
    format: QueryFormat,
    column: &str,
) -> Result<QuerySet> {
    let reader = ReaderBuilder::new()
        .delimiter(format.delimiter())
        .flexible(true)
        .from_reader(reader);
    read_column(reader, column, &PathBuf::from("<reader>"))
}

fn read_column<R: Read>(
    mut reader: csv::Reader<R>,
    column: &str,
    path: &Path,
) -> Result<QuerySet> {
    let query_err = |source: csv::Error| OligoCountError::QueryRead {
        source,
        path: path.to_path_buf(),
    };

    let headers = reader.headers().map_err(query_err)?.clone();
    let index =
        column_index(&headers, column).ok_or_else(|| OligoCountError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })?;

    // Short rows leave the trailing cells empty; long rows are malformed.
    let mut queries = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(query_err)?;
        if record.len() > headers.len() {
            return Err(OligoCountError::RaggedRow {
                path: path.to_path_buf(),
                row: i + 1,
                expected: headers.len(),
                found: record.len(),
            });
        }
        queries.push(record.get(index).unwrap_or_default().to_string());
    }
    Ok(QuerySet::new(queries))
}

fn column_index(headers: &StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|h| h == column)
}
