use std::process;

use clap::Parser;
use colored::Colorize;
use oligocount::{cli::Args, config::Config, run};
use tracing_subscriber::EnvFilter;

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // RUST_LOG, when set, replaces the flag-derived level entirely.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = Config::from(args);

    if let Err(e) = run::run(&config) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}
