//! Input file discovery.
//!
//! Lists the files directly inside a directory whose names end with a given
//! suffix, in ascending path order. Subdirectories are not searched and
//! hidden files (leading `.`) are skipped, matching shell `*` semantics.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern};
use tracing::{debug, info};

use crate::error::{OligoCountError, Result};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Returns the sorted paths of the regular files in `dir` ending with `extension`.
///
/// A missing directory, or one without matching files, yields an empty list.
///
/// # Errors
///
/// Returns [`OligoCountError::InvalidPattern`] if `dir` is not valid UTF-8 and
/// [`OligoCountError::DirectoryRead`] if the directory exists but cannot be listed.
///
/// # Example
///
/// ```rust,no_run
/// use oligocount::discover::discover_files;
/// use std::path::Path;
///
/// for path in discover_files(Path::new("reads"), ".fastq")? {
///     println!("{}", path.display());
/// }
/// # Ok::<(), oligocount::error::OligoCountError>(())
/// ```
pub fn discover_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let pattern = search_pattern(dir, extension)?;
    debug!(pattern = %pattern, "Searching for input files");

    let entries = glob::glob_with(&pattern, MATCH_OPTIONS)
        .map_err(|e| OligoCountError::InvalidPattern {
            details: e.to_string(),
        })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) if e.error().kind() == ErrorKind::NotFound => {}
            Err(e) => {
                let path = e.path().to_path_buf();
                return Err(OligoCountError::DirectoryRead {
                    source: std::io::Error::from(e),
                    path,
                });
            }
        }
    }
    paths.sort();

    info!(dir = %dir.display(), count = paths.len(), "Discovered input files");
    Ok(paths)
}

/// Builds `<dir>/*<extension>` with both literal parts escaped.
fn search_pattern(dir: &Path, extension: &str) -> Result<String> {
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    let dir = dir.to_str().ok_or_else(|| OligoCountError::InvalidPattern {
        details: format!("directory '{}' is not valid UTF-8", dir.display()),
    })?;

    let pattern =
        Path::new(&Pattern::escape(dir)).join(format!("*{}", Pattern::escape(extension)));
    pattern
        .to_str()
        .map(str::to_owned)
        .ok_or_else(|| OligoCountError::InvalidPattern {
            details: format!("pattern '{}' is not valid UTF-8", pattern.display()),
        })
}
