//! Error types for oligocount.
//!
//! Every failure in the counting pipeline is fatal: nothing is retried and no
//! partial table is written. The variants below carry enough context (paths,
//! column names, row numbers) to tell the user what to fix.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in oligocount operations.
#[derive(Debug, Error)]
pub enum OligoCountError {
    /// Listing the input directory failed for a reason other than absence.
    #[error("failed to read input directory '{path}': {source}")]
    DirectoryRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// The input directory and extension cannot be turned into a search pattern.
    #[error("invalid file search pattern: {details}")]
    InvalidPattern { details: String },

    /// The query-definition file could not be read or parsed as a table.
    #[error("failed to read query file '{path}': {source}")]
    QueryRead {
        #[source]
        source: csv::Error,
        path: PathBuf,
    },

    /// The query-definition file has no column with the requested header.
    #[error("query file '{path}' has no column named '{column}' (found: {available})")]
    MissingColumn {
        column: String,
        path: PathBuf,
        available: String,
    },

    /// Failed to read an input sequence file.
    #[error("failed to read sequence file '{path}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// A query-file row has more fields than the header row.
    #[error("query file '{path}' data row {row} has {found} fields, expected at most {expected}")]
    RaggedRow {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An empty query string was found while empty queries are rejected.
    #[error("query on data row {row} is empty; empty queries are rejected")]
    EmptyQuery { row: usize },

    /// A count column does not line up with the query rows.
    #[error("column '{label}' has {found} rows but the table has {expected}")]
    RowCountMismatch {
        label: String,
        expected: usize,
        found: usize,
    },

    /// Failed to create, flush or rename the output file.
    #[error("failed to write output '{path}': {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to encode a delimited output record.
    #[error("failed to write table '{path}': {source}")]
    CsvWrite {
        #[source]
        source: csv::Error,
        path: PathBuf,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    JsonError {
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for OligoCountError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonError { source }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = OligoCountError> = std::result::Result<T, E>;
