use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn oligocount_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_oligocount"))
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Copies the two-file fixture directory so exports land in a scratch dir.
fn scratch_reads() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for name in ["A.fastq", "B.fastq"] {
        fs::copy(fixture_path("reads").join(name), dir.path().join(name))
            .expect("Failed to copy fixture");
    }
    dir
}

fn exported_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .expect("Failed to list dir")
        .map(|e| e.expect("Failed to read entry").path())
        .filter(|p| p.to_string_lossy().contains("_count_data."))
        .collect()
}

#[test]
fn cli_help_flag() {
    let output = oligocount_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("oligocount"));
    assert!(stdout.contains("--extension"));
}

#[test]
fn cli_version_flag() {
    let output = oligocount_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_missing_args() {
    let output = oligocount_cmd().output().expect("Failed to execute");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("required") || stderr.contains("Usage"));
}

#[test]
fn cli_missing_query_file_arg() {
    let dir = scratch_reads();
    let output = oligocount_cmd()
        .arg(dir.path())
        .output()
        .expect("Failed to execute");
    assert!(!output.status.success());
    assert!(exported_files(dir.path()).is_empty());
}

#[test]
fn cli_counts_and_exports() {
    let dir = scratch_reads();
    let output = oligocount_cmd()
        .arg(dir.path())
        .arg(fixture_path("keys.csv"))
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Counting matching oligos/strings from A.fastq ...\n\
         Counting matching oligos/strings from B.fastq ...\n"
    );

    let exported = exported_files(dir.path());
    assert_eq!(exported.len(), 1);
    let written = fs::read_to_string(&exported[0]).expect("Failed to read export");
    assert_eq!(
        written,
        ",Keys,A.fastq,B.fastq\n0,TTCTTAAAGGTGTCCAGGG,1,0\n1,GAAGTCAGACATGGACCTG,0,1\n"
    );
}

#[test]
fn cli_quiet_suppresses_progress() {
    let dir = scratch_reads();
    let output = oligocount_cmd()
        .arg(dir.path())
        .arg(fixture_path("keys.csv"))
        .arg("--quiet")
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(exported_files(dir.path()).len(), 1);
}

#[test]
fn cli_output_dir_and_tsv_format() {
    let dir = scratch_reads();
    let out = TempDir::new().expect("Failed to create temp dir");
    let output = oligocount_cmd()
        .arg(dir.path())
        .arg(fixture_path("keys.csv"))
        .args(["--format", "tsv", "--output-dir"])
        .arg(out.path())
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());

    assert!(exported_files(dir.path()).is_empty());
    let exported = exported_files(out.path());
    assert_eq!(exported.len(), 1);
    assert_eq!(exported[0].extension().and_then(|e| e.to_str()), Some("tsv"));
}

#[test]
fn cli_empty_directory_still_exports_keys() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = oligocount_cmd()
        .arg(dir.path())
        .arg(fixture_path("keys.csv"))
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let exported = exported_files(dir.path());
    let written = fs::read_to_string(&exported[0]).expect("Failed to read export");
    assert_eq!(
        written,
        ",Keys\n0,TTCTTAAAGGTGTCCAGGG\n1,GAAGTCAGACATGGACCTG\n"
    );
}

#[test]
fn cli_missing_column_fails_without_output() {
    let dir = scratch_reads();
    let output = oligocount_cmd()
        .arg(dir.path())
        .arg(fixture_path("no_sequence_column.csv"))
        .output()
        .expect("Failed to execute");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Application error"));
    assert!(stderr.contains("Sequence"));
    assert!(output.stdout.is_empty());
    assert!(exported_files(dir.path()).is_empty());
}

#[test]
fn cli_invalid_format() {
    let dir = scratch_reads();
    let output = oligocount_cmd()
        .arg(dir.path())
        .arg(fixture_path("keys.csv"))
        .args(["--format", "xlsx"])
        .output()
        .expect("Failed to execute");
    assert!(!output.status.success());
}

#[test]
fn cli_rust_log_overrides_default_level() {
    let dir = scratch_reads();
    let output = oligocount_cmd()
        .arg(dir.path())
        .arg(fixture_path("keys.csv"))
        .arg("--quiet")
        .env("RUST_LOG", "debug")
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Searching for input files"), "stderr: {stderr}");
}

#[test]
fn cli_default_level_hides_debug_events() {
    let dir = scratch_reads();
    let output = oligocount_cmd()
        .arg(dir.path())
        .arg(fixture_path("keys.csv"))
        .arg("--quiet")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Searching for input files"), "stderr: {stderr}");
}
