//! Project configuration types for pszimport.toml
//!
//! Paths are resolved relative to the directory holding the config file, so
//! a checked-in `pszimport.toml` at the Godot project root works from any
//! working directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::{DEFAULT_SKIP_BUNDLES, RelocationOptions};
use crate::converter::ConvertOptions;
use crate::error::Result;

/// Default config file name
pub const CONFIG_FILE: &str = "pszimport.toml";

fn default_source() -> String {
    "../psz-sketch/src/content".to_string()
}

fn default_output() -> String {
    "data".to_string()
}

fn default_assets_source() -> String {
    "../psz-sketch/public/enemies".to_string()
}

fn default_assets_output() -> String {
    "assets/enemies".to_string()
}

fn default_players_source() -> String {
    "../psz-sketch/public/player".to_string()
}

fn default_players_output() -> String {
    "assets/player".to_string()
}

fn default_enemy_list() -> String {
    "../psz-sketch/public/data/enemies.json".to_string()
}

fn default_skip_bundles() -> Vec<String> {
    DEFAULT_SKIP_BUNDLES.iter().map(ToString::to_string).collect()
}

/// The full project configuration (pszimport.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportConfig {
    #[serde(default)]
    pub paths: PathSettings,
    #[serde(default)]
    pub convert: ConvertSettings,
    #[serde(default)]
    pub assets: AssetSettings,
    /// Directory relative paths resolve against (not serialized)
    #[serde(skip)]
    base_dir: PathBuf,
}

/// Source and destination directories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// psz-sketch content root (one sub-directory per category)
    #[serde(default = "default_source")]
    pub source: String,
    /// Godot data directory receiving the `.tres` files
    #[serde(default = "default_output")]
    pub output: String,
    /// Enemy model bundles
    #[serde(default = "default_assets_source")]
    pub assets_source: String,
    #[serde(default = "default_assets_output")]
    pub assets_output: String,
    /// Player model variations
    #[serde(default = "default_players_source")]
    pub players_source: String,
    #[serde(default = "default_players_output")]
    pub players_output: String,
    /// Quest editor enemy list
    #[serde(default = "default_enemy_list")]
    pub enemy_list: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
            assets_source: default_assets_source(),
            assets_output: default_assets_output(),
            players_source: default_players_source(),
            players_output: default_players_output(),
            enemy_list: default_enemy_list(),
        }
    }
}

/// Conversion settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertSettings {
    /// Categories to convert; empty converts all
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Asset relocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSettings {
    /// Enemy bundles never imported
    #[serde(default = "default_skip_bundles")]
    pub skip_bundles: Vec<String>,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            skip_bundles: default_skip_bundles(),
        }
    }
}

impl ImportConfig {
    /// Parse config text; relative paths resolve against `base_dir`
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed.
    pub fn parse(text: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut config: Self = toml::from_str(text)?;
        config.base_dir = base_dir.into();
        Ok(config)
    }

    /// Load a config file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        tracing::debug!("Loaded config from {}", path.display());
        Self::parse(&text, base_dir)
    }

    /// Load `pszimport.toml` from `dir` if it exists, else use defaults
    /// relative to `dir`
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self {
                base_dir: dir.to_path_buf(),
                ..Self::default()
            })
        }
    }

    /// Resolve a configured path against the config directory
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    #[must_use]
    pub fn source_dir(&self) -> PathBuf {
        self.resolve(&self.paths.source)
    }

    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.paths.output)
    }

    #[must_use]
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::only(self.convert.categories.iter().cloned())
    }

    #[must_use]
    pub fn relocation_options(&self) -> RelocationOptions {
        RelocationOptions {
            skip_bundles: self.assets.skip_bundles.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ImportConfig::parse("", "/game").unwrap();
        assert_eq!(config.paths.output, "data");
        assert_eq!(config.source_dir(), Path::new("/game/../psz-sketch/src/content"));
        assert_eq!(config.assets.skip_bundles.len(), DEFAULT_SKIP_BUNDLES.len());
        assert!(config.convert_options().categories.is_empty());
    }

    #[test]
    fn test_partial_config() {
        let config = ImportConfig::parse(
            r#"
[paths]
source = "/content"
players_output = "assets/pc"

[convert]
categories = ["enemies", "drop_tables"]

[assets]
skip_bundles = ["boss_dragon"]
"#,
            "/game",
        )
        .unwrap();

        assert_eq!(config.source_dir(), Path::new("/content"));
        assert_eq!(config.output_dir(), Path::new("/game/data"));
        assert_eq!(config.resolve(&config.paths.players_output), Path::new("/game/assets/pc"));
        assert_eq!(config.convert_options().categories, ["enemies", "drop_tables"]);

        let options = config.relocation_options();
        assert!(options.is_skipped("boss_dragon"));
        assert!(!options.is_skipped("boss_octopus"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ImportConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed = ImportConfig::parse(&toml_str, "").unwrap();
        assert_eq!(parsed.paths.enemy_list, "../psz-sketch/public/data/enemies.json");
        assert_eq!(parsed.assets.skip_bundles, config.assets.skip_bundles);
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        let config = ImportConfig::discover(dir.path()).unwrap();
        assert_eq!(config.output_dir(), dir.path().join("data"));

        fs::write(dir.path().join(CONFIG_FILE), "[paths]\noutput = \"resources\"\n").unwrap();
        let config = ImportConfig::discover(dir.path()).unwrap();
        assert_eq!(config.output_dir(), dir.path().join("resources"));

        fs::write(dir.path().join(CONFIG_FILE), "[paths\n").unwrap();
        assert!(ImportConfig::discover(dir.path()).is_err());
    }
}
