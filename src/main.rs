//! CLI entry point for the hexagonal floor generator

use clap::Parser;
use hexfloor::io::cli::{Cli, FloorProcessor};
use hexfloor::io::progress::ProgressManager;
use tracing_subscriber::EnvFilter;

fn main() -> hexfloor::Result<()> {
    let cli = Cli::parse();

    // Log lines go through the bar so they never tear it
    let progress = ProgressManager::new();
    let log_writer = progress.log_writer();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(move || log_writer.clone())
        .compact()
        .init();

    FloorProcessor::with_progress(cli, progress).process()
}
