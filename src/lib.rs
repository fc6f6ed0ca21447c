//! # oligocount
//!
//! Batch counting of literal query strings (oligos) across a directory of
//! sequence-read files.
//!
//! For every file in a directory whose name ends with a given suffix
//! (`.fastq` by default), oligocount counts how often each query string
//! occurs as a non-overlapping, case-sensitive substring of the file's full
//! content. The counts are assembled into one table, one row per query and
//! one column per file, and exported under a timestamped name.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oligocount::builder::OligoCounter;
//!
//! let table = OligoCounter::new().count("reads", "keys.csv")?;
//! println!("{} queries, {} files", table.row_count(), table.columns().len());
//! # Ok::<(), oligocount::error::OligoCountError>(())
//! ```
//!
//! ## Features
//!
//! - `gzip`: decompress `.gz` inputs before scanning
//! - `mmap`: memory-map uncompressed inputs instead of reading them into a buffer
//! - `production`: both of the above

pub mod builder;
pub mod cli;
pub mod config;
pub mod count;
pub mod discover;
pub mod error;
pub mod format;
#[cfg(feature = "mmap")]
pub mod mmap;
pub mod progress;
pub mod query;
pub mod reader;
pub mod run;
pub mod table;
