//! CLI subcommands

pub mod assets;
pub mod convert;
pub mod definitions;
pub mod execute;
pub mod export;

use std::path::PathBuf;

use clap::Subcommand;

use definitions::AssetCommands;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert psz-sketch content JSON to Godot .tres resources
    Convert {
        /// Content root (one directory per category)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Godot data directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only convert these categories (repeatable, e.g. -c enemies -c drop_tables)
        #[arg(short = 'c', long = "category")]
        categories: Vec<String>,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the content categories and where they are read from and written to
    Categories,

    /// Export converted enemies as the quest editor's enemy list
    ExportEnemies {
        /// Directory of enemy .tres files (defaults to <output>/enemies)
        #[arg(short, long)]
        enemies: Option<PathBuf>,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Relocate model and texture assets
    Assets {
        #[command(subcommand)]
        command: AssetCommands,
    },
}
