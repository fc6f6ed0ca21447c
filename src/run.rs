//! The counting pipeline.
//!
//! Loads the query set, discovers the input files, counts every query in
//! each file one file at a time, and assembles the result table. [`run`]
//! additionally prints a progress line per file and exports the table.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    config::Config,
    count::{count_file, CountVector, FileCounts, QueryCounter},
    discover::discover_files,
    error::Result,
    progress::{Progress, ProgressTracker},
    query::{load_queries, QuerySet},
    table::ResultTable,
};

/// Runs the whole pipeline and returns the path of the exported table.
///
/// Prints `Counting matching oligos/strings from <file> ...` to stdout before
/// each file is scanned, unless `config.quiet` is set.
///
/// # Errors
///
/// Any failure aborts the run; no table is exported in that case.
pub fn run(config: &Config) -> Result<PathBuf> {
    let quiet = config.quiet;
    let table = count_directory_with_progress(config, |progress| {
        if !quiet {
            println!(
                "Counting matching oligos/strings from {} ...",
                progress.current_file
            );
        }
    })?;
    table.persist(config.output_dir(), config.format)
}

/// Counts every query in every matching file and returns the assembled table.
///
/// # Example
///
/// ```rust,no_run
/// use oligocount::config::Config;
/// use oligocount::run::count_directory;
///
/// let table = count_directory(&Config::new("reads", "keys.csv"))?;
/// for column in table.columns() {
///     println!("{}: {:?}", column.label, column.counts.as_slice());
/// }
/// # Ok::<(), oligocount::error::OligoCountError>(())
/// ```
pub fn count_directory(config: &Config) -> Result<ResultTable> {
    count_directory_with_progress(config, |_| {})
}

/// Like [`count_directory`], calling `on_file` before each file is scanned.
pub fn count_directory_with_progress<F>(config: &Config, on_file: F) -> Result<ResultTable>
where
    F: FnMut(&Progress),
{
    info!(
        input_dir = %config.input_dir.display(),
        query_file = %config.query_file.display(),
        extension = %config.extension,
        "Starting oligo counting"
    );

    let queries = load_queries(&config.query_file, &config.column)?;
    let files = discover_files(&config.input_dir, &config.extension)?;
    let columns = count_files(&queries, config, &files, on_file)?;

    let mut table = ResultTable::new(queries);
    for (label, counts) in columns {
        table.push_column(label, counts)?;
    }
    Ok(table)
}

fn count_files<F>(
    queries: &QuerySet,
    config: &Config,
    files: &[PathBuf],
    mut on_file: F,
) -> Result<Vec<(String, CountVector)>>
where
    F: FnMut(&Progress),
{
    let counter = QueryCounter::new(queries, config.empty_query)?;
    let mut tracker = ProgressTracker::new(files.len() as u64);
    let mut columns = Vec::with_capacity(files.len());

    for path in files {
        let label = column_label(path);
        on_file(&tracker.snapshot(&label));

        let FileCounts { counts, bytes } = count_file(path, &counter)?;
        tracker.record_file(bytes);

        columns.push((label, counts));
    }

    Ok(columns)
}

/// Column label of a file: its base name, extension included.
pub fn column_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
