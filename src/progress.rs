//! Progress tracking for directory counting runs.
//!
//! A [`Progress`] snapshot is handed to a caller-supplied callback right
//! before each file is scanned, so callers can print status lines or drive a
//! progress bar.
//!
//! # Example
//!
//! ```rust,no_run
//! use oligocount::config::Config;
//! use oligocount::run::count_directory_with_progress;
//!
//! let config = Config::new("reads", "keys.csv");
//! let table = count_directory_with_progress(&config, |progress| {
//!     eprintln!(
//!         "[{}/{}] {}",
//!         progress.files_processed + 1,
//!         progress.total_files,
//!         progress.current_file
//!     );
//! })?;
//! # Ok::<(), oligocount::error::OligoCountError>(())
//! ```

/// Progress snapshot taken before a file is scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    /// Files fully counted so far.
    pub files_processed: u64,
    /// Files discovered for this run.
    pub total_files: u64,
    /// Bytes scanned so far, over all finished files.
    pub bytes_processed: u64,
    /// Base name of the file about to be scanned.
    pub current_file: String,
}

/// Running totals for one pipeline run.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    total_files: u64,
    files: u64,
    bytes: u64,
}

impl ProgressTracker {
    /// Create a tracker for a run over `total_files` files.
    #[must_use]
    pub const fn new(total_files: u64) -> Self {
        Self {
            total_files,
            files: 0,
            bytes: 0,
        }
    }

    /// Record that a file of `bytes` bytes has been counted.
    pub fn record_file(&mut self, bytes: u64) {
        self.files += 1;
        self.bytes += bytes;
    }

    /// Snapshot of the current totals, naming the next file.
    pub fn snapshot(&self, current_file: &str) -> Progress {
        Progress {
            files_processed: self.files,
            total_files: self.total_files,
            bytes_processed: self.bytes,
            current_file: current_file.to_string(),
        }
    }
}
