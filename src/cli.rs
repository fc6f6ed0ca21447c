//! Command-line interface definition.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Count literal oligo occurrences in every FASTQ file of a directory.
#[derive(Parser, Debug)]
#[command(name = "oligocount")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Directory containing the sequence files to scan
    pub input_dir: PathBuf,

    /// Table of query strings (header row required)
    pub query_file: PathBuf,

    /// File name suffix selecting the files to scan
    #[arg(short, long, default_value = ".fastq")]
    pub extension: String,

    /// Header of the query-file column holding the query strings
    #[arg(short, long, default_value = "Sequence")]
    pub column: String,

    /// Directory for the exported table (defaults to the input directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// How an empty query string is counted
    #[arg(long, value_enum, default_value = "zero")]
    pub empty_query: EmptyQueryPolicy,

    /// Suppress per-file progress lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for the exported count table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Comma-separated values with a leading index column
    #[default]
    Csv,
    /// Tab-separated values with a leading index column
    Tsv,
    /// JSON object with `keys` and `columns`
    Json,
}

impl OutputFormat {
    /// File name extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }

    /// Field delimiter for the delimited formats.
    pub const fn delimiter(self) -> Option<u8> {
        match self {
            Self::Csv => Some(b','),
            Self::Tsv => Some(b'\t'),
            Self::Json => None,
        }
    }
}

/// Convention for counting a zero-length query.
///
/// A zero-length pattern "occurs" at every boundary of the content, so a
/// plain substring count is not meaningful for it. The policy is chosen
/// explicitly instead of inheriting whatever a search routine happens to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum EmptyQueryPolicy {
    /// An empty query never matches
    #[default]
    Zero,
    /// An empty query matches at every position: characters + 1
    Positions,
    /// Fail before scanning if any query is empty
    Reject,
}
