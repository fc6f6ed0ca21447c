//! Result table assembly and export.
//!
//! The table has one row per query string. Its first column, `Keys`, holds
//! the query strings themselves; every further column holds one file's
//! counts, in discovery order. Delimited exports also carry a leading,
//! unnamed row-index column.

use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    cli::OutputFormat,
    count::CountVector,
    error::{OligoCountError, Result},
    query::QuerySet,
};

/// Header of the query-string column.
pub const KEYS_HEADER: &str = "Keys";

/// Suffix of every exported file name, before the format extension.
pub const OUTPUT_SUFFIX: &str = "_count_data";

const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M";

/// One file's counts under its column label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub label: String,
    pub counts: CountVector,
}

/// Query strings plus one count column per processed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultTable {
    keys: QuerySet,
    columns: Vec<Column>,
}

impl ResultTable {
    /// Starts a table with only the `Keys` column.
    pub fn new(keys: QuerySet) -> Self {
        Self {
            keys,
            columns: Vec::new(),
        }
    }

    /// Appends a count column after the existing ones.
    ///
    /// Labels are not required to be unique; a repeated label is kept as a
    /// separate column and logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns [`OligoCountError::RowCountMismatch`] if `counts` does not have
    /// exactly one entry per query string.
    pub fn push_column(&mut self, label: impl Into<String>, counts: CountVector) -> Result<()> {
        let label = label.into();
        if counts.len() != self.keys.len() {
            return Err(OligoCountError::RowCountMismatch {
                label,
                expected: self.keys.len(),
                found: counts.len(),
            });
        }
        if self.columns.iter().any(|c| c.label == label) {
            warn!(label = %label, "Duplicate column label");
        }
        self.columns.push(Column { label, counts });
        Ok(())
    }

    pub const fn keys(&self) -> &QuerySet {
        &self.keys
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Counts of the first column labeled `label`.
    pub fn column(&self, label: &str) -> Option<&CountVector> {
        self.columns
            .iter()
            .find(|c| c.label == label)
            .map(|c| &c.counts)
    }

    pub fn row_count(&self) -> usize {
        self.keys.len()
    }

    /// Column headers of a delimited export: index, `Keys`, then file labels.
    pub fn headers(&self) -> Vec<&str> {
        ["", KEYS_HEADER]
            .into_iter()
            .chain(self.columns.iter().map(|c| c.label.as_str()))
            .collect()
    }

    /// Writes the table as delimited text with a header row.
    pub fn write_delimited<W: Write>(&self, writer: W, delimiter: u8) -> csv::Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);

        wtr.write_record(self.headers())?;
        for (row, key) in self.keys.iter().enumerate() {
            let mut record = Vec::with_capacity(self.columns.len() + 2);
            record.push(row.to_string());
            record.push(key.clone());
            record.extend(
                self.columns
                    .iter()
                    .map(|c| c.counts.as_slice()[row].to_string()),
            );
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Writes the table as a JSON object with `keys` and `columns`.
    pub fn write_json<W: Write>(&self, mut writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer).map_err(serde_json::Error::io)
    }

    /// Writes the table in `format`; `path` only labels errors.
    pub fn write_to<W: Write>(&self, writer: W, format: OutputFormat, path: &Path) -> Result<()> {
        match format.delimiter() {
            Some(delimiter) => self.write_delimited(writer, delimiter).map_err(|source| {
                OligoCountError::CsvWrite {
                    source,
                    path: path.to_path_buf(),
                }
            }),
            None => Ok(self.write_json(writer)?),
        }
    }

    /// Writes the table into `dir` under a name stamped with the local time.
    ///
    /// # Errors
    ///
    /// Returns a write error if the destination cannot be created or written.
    /// No file is left under the final name on failure.
    pub fn persist(&self, dir: &Path, format: OutputFormat) -> Result<PathBuf> {
        self.persist_at(dir, format, Local::now().naive_local())
    }

    /// Like [`persist`](Self::persist) with an explicit timestamp.
    ///
    /// The table is written to a temporary file in `dir` and renamed into
    /// place once complete. An existing file with the same name is replaced.
    pub fn persist_at(
        &self,
        dir: &Path,
        format: OutputFormat,
        timestamp: NaiveDateTime,
    ) -> Result<PathBuf> {
        let path = dir.join(output_file_name(timestamp, format));
        let write_err = |source: std::io::Error| OligoCountError::WriteError {
            source,
            path: path.clone(),
        };

        let mut temp = tempfile::Builder::new()
            .prefix(".oligocount-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(write_err)?;
        debug!(temp = %temp.path().display(), "Writing table");

        {
            let mut buf = BufWriter::new(&mut temp);
            self.write_to(&mut buf, format, &path)?;
            buf.flush().map_err(write_err)?;
        }
        temp.persist(&path).map_err(|e| write_err(e.error))?;

        info!(
            path = %path.display(),
            rows = self.row_count(),
            columns = self.columns.len(),
            "Wrote count table"
        );
        Ok(path)
    }
}

/// Export file name for a run at `timestamp`, e.g. `2024_03_07_16_05_count_data.csv`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use oligocount::cli::OutputFormat;
/// use oligocount::table::output_file_name;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap().and_hms_opt(16, 5, 0).unwrap();
/// assert_eq!(output_file_name(at, OutputFormat::Csv), "2024_03_07_16_05_count_data.csv");
/// ```
pub fn output_file_name(timestamp: NaiveDateTime, format: OutputFormat) -> String {
    format!(
        "{}{OUTPUT_SUFFIX}.{}",
        timestamp.format(TIMESTAMP_FORMAT),
        format.extension()
    )
}
