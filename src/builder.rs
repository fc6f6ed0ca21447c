//! Builder pattern API for ergonomic oligo counting.
//!
//! # Example
//!
//! ```rust,no_run
//! use oligocount::builder::OligoCounter;
//!
//! let table = OligoCounter::new()
//!     .extension(".fq")
//!     .column("Oligo")
//!     .count("reads", "keys.csv")?;
//!
//! for column in table.columns() {
//!     println!("{}: {:?}", column.label, column.counts.as_slice());
//! }
//! # Ok::<(), oligocount::error::OligoCountError>(())
//! ```

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    cli::{EmptyQueryPolicy, OutputFormat},
    config::{Config, DEFAULT_COLUMN, DEFAULT_EXTENSION},
    error::Result,
    progress::Progress,
    run::{count_directory, count_directory_with_progress},
    table::ResultTable,
};

/// A builder for configuring oligo counting runs.
///
/// Use [`OligoCounter::new()`] to create a builder, adjust it with the fluent
/// setters, then call [`count()`](OligoCounter::count),
/// [`count_to_writer()`](OligoCounter::count_to_writer) or
/// [`export()`](OligoCounter::export).
#[derive(Debug, Clone)]
pub struct OligoCounter {
    extension: String,
    column: String,
    empty_query: EmptyQueryPolicy,
    format: OutputFormat,
}

impl Default for OligoCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl OligoCounter {
    /// Creates a builder with default settings.
    ///
    /// Default settings:
    /// - `extension`: `.fastq`
    /// - `column`: `Sequence`
    /// - `empty_query`: [`EmptyQueryPolicy::Zero`]
    /// - `format`: CSV
    #[must_use]
    pub fn new() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            column: DEFAULT_COLUMN.to_string(),
            empty_query: EmptyQueryPolicy::default(),
            format: OutputFormat::default(),
        }
    }

    /// Sets the file name suffix selecting input files.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Sets the query-file column holding the query strings.
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Sets how empty query strings are counted.
    #[must_use]
    pub const fn empty_query(mut self, policy: EmptyQueryPolicy) -> Self {
        self.empty_query = policy;
        self
    }

    /// Sets the format used by [`count_to_writer()`](Self::count_to_writer)
    /// and [`export()`](Self::export).
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builds the run configuration for the given paths.
    pub fn config(&self, input_dir: impl Into<PathBuf>, query_file: impl Into<PathBuf>) -> Config {
        Config {
            extension: self.extension.clone(),
            column: self.column.clone(),
            empty_query: self.empty_query,
            format: self.format,
            quiet: true,
            ..Config::new(input_dir, query_file)
        }
    }

    /// Counts the queries of `query_file` in every matching file of `input_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query file cannot be loaded, the directory
    /// cannot be listed, or an input file cannot be read.
    pub fn count(
        &self,
        input_dir: impl Into<PathBuf>,
        query_file: impl Into<PathBuf>,
    ) -> Result<ResultTable> {
        count_directory(&self.config(input_dir, query_file))
    }

    /// Like [`count()`](Self::count), reporting progress before each file.
    pub fn count_with_progress<F>(
        &self,
        input_dir: impl Into<PathBuf>,
        query_file: impl Into<PathBuf>,
        on_file: F,
    ) -> Result<ResultTable>
    where
        F: FnMut(&Progress),
    {
        count_directory_with_progress(&self.config(input_dir, query_file), on_file)
    }

    /// Counts and writes the table to `writer` in the configured format.
    pub fn count_to_writer<W: Write>(
        &self,
        input_dir: impl Into<PathBuf>,
        query_file: impl Into<PathBuf>,
        writer: W,
    ) -> Result<()> {
        let table = self.count(input_dir, query_file)?;
        table.write_to(writer, self.format, Path::new("<writer>"))
    }

    /// Counts and exports a timestamped table into `output_dir`.
    ///
    /// Returns the path of the written file.
    pub fn export(
        &self,
        input_dir: impl Into<PathBuf>,
        query_file: impl Into<PathBuf>,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let table = self.count(input_dir, query_file)?;
        table.persist(output_dir, self.format)
    }
}
