//! Run configuration.

use std::path::{Path, PathBuf};

use crate::cli::{Args, EmptyQueryPolicy, OutputFormat};

/// Default suffix of the files scanned in the input directory.
pub const DEFAULT_EXTENSION: &str = ".fastq";

/// Default header of the query column.
pub const DEFAULT_COLUMN: &str = "Sequence";

/// Everything one pipeline run needs, passed by value instead of held globally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_dir: PathBuf,
    pub query_file: PathBuf,
    pub extension: String,
    pub column: String,
    pub output_dir: Option<PathBuf>,
    pub format: OutputFormat,
    pub empty_query: EmptyQueryPolicy,
    pub quiet: bool,
}

impl Config {
    /// Creates a configuration with default options for the two required paths.
    pub fn new(input_dir: impl Into<PathBuf>, query_file: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            query_file: query_file.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            column: DEFAULT_COLUMN.to_string(),
            output_dir: None,
            format: OutputFormat::default(),
            empty_query: EmptyQueryPolicy::default(),
            quiet: false,
        }
    }

    /// Directory the exported table is written to.
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.input_dir)
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input_dir: args.input_dir,
            query_file: args.query_file,
            extension: args.extension,
            column: args.column,
            output_dir: args.output_dir,
            format: args.format,
            empty_query: args.empty_query,
            quiet: args.quiet,
        }
    }
}
