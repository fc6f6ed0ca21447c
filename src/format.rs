//! Query-file format detection.
//!
//! The query definitions are a delimited table with a header row. The
//! delimiter is picked from the file extension, so spreadsheet exports in
//! either comma or tab form can be used without extra flags.

use std::ffi::OsStr;
use std::path::Path;

/// Delimited table layout of a query-definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryFormat {
    /// Auto-detect from the file extension.
    ///
    /// - `.tsv`, `.tab` -> TSV
    /// - anything else -> CSV
    #[default]
    Auto,
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
}

impl QueryFormat {
    /// Detects the table format from a file path's extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use oligocount::format::QueryFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(QueryFormat::from_extension(Path::new("keys.csv")), QueryFormat::Csv);
    /// assert_eq!(QueryFormat::from_extension(Path::new("keys.TSV")), QueryFormat::Tsv);
    /// assert_eq!(QueryFormat::from_extension(Path::new("keys")), QueryFormat::Csv);
    /// ```
    #[must_use]
    pub fn from_extension(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("tsv" | "tab") => Self::Tsv,
            _ => Self::Csv,
        }
    }

    /// Resolves `Auto` against `path`; explicit formats are returned unchanged.
    #[must_use]
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto => Self::from_extension(path),
            other => other,
        }
    }

    /// Field delimiter byte. `Auto` falls back to a comma.
    #[must_use]
    pub const fn delimiter(self) -> u8 {
        match self {
            Self::Tsv => b'\t',
            Self::Csv | Self::Auto => b',',
        }
    }
}

impl std::fmt::Display for QueryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}
