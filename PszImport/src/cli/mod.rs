//! pszimport CLI - Command-line interface for the psz-godot content pipeline

pub mod commands;
pub mod progress;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;

use crate::config::ImportConfig;

#[derive(Parser)]
#[command(name = "pszimport")]
#[command(about = "pszimport: psz-sketch content and asset import for psz-godot", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./pszimport.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Run the pszimport CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ImportConfig::load(path)?,
        None => ImportConfig::discover(std::env::current_dir()?)?,
    };
    cli.command.execute(&config)?;

    Ok(())
}
