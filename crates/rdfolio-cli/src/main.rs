//! RDFolio CLI entry point

use anyhow::Result;
use clap::Parser;
use rdfolio_cli::commands::{run, Cli};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run(&cli)
}
