//! CLI entry point for rendering knot layouts

use clap::Parser;
use knotwork::io::cli::{Cli, RenderProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> knotwork::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "knotwork=warn" } else { "knotwork=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut processor = RenderProcessor::new(cli);
    processor.process()?;
    Ok(())
}
