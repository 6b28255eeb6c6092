//! Camsect CLI - command-line interface
//!
//! One-shot batch tool: match speed cameras to road features and write
//! the aggregated section mapping.

mod cli;
mod commands;
mod config;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // Log to stderr; stdout carries the section mapping.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
