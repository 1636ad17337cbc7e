//! Command execution implementations

use super::Commands;
use super::definitions::AssetCommands;
use super::{assets, convert, export};
use crate::config::ImportConfig;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self, config: &ImportConfig) -> anyhow::Result<()> {
        match self {
            Commands::Convert {
                source,
                output,
                categories,
                quiet,
            } => convert::execute(
                config,
                source.as_deref(),
                output.as_deref(),
                categories,
                *quiet,
            ),
            Commands::Categories => {
                convert::list_categories();
                Ok(())
            }
            Commands::ExportEnemies { enemies, output } => {
                export::enemies(config, enemies.as_deref(), output.as_deref())
            }
            Commands::Assets { command } => command.execute(config),
        }
    }
}

impl AssetCommands {
    /// Execute the selected asset command.
    ///
    /// # Errors
    /// Returns an error if the source directory is missing or a copy fails.
    pub fn execute(&self, config: &ImportConfig) -> anyhow::Result<()> {
        match self {
            AssetCommands::Enemies {
                source,
                destination,
                skip,
                quiet,
            } => assets::enemies(config, source.as_deref(), destination.as_deref(), skip, *quiet),
            AssetCommands::Players {
                source,
                destination,
                quiet,
            } => assets::players(config, source.as_deref(), destination.as_deref(), *quiet),
        }
    }
}
