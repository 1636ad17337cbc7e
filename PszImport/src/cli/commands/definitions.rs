//! Subcommand enum definitions for CLI

use std::path::PathBuf;

use clap::Subcommand;

/// Asset relocation commands
#[derive(Subcommand)]
pub enum AssetCommands {
    /// Import enemy model bundles (GLB + textures)
    Enemies {
        /// Directory of enemy bundles, each with an info.json
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Destination assets directory
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Additional bundle names to skip
        #[arg(long)]
        skip: Vec<String>,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Import player model variations (pc_XXX)
    Players {
        /// Directory of player variations
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Destination assets directory
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}
