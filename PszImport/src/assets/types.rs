//! Types for asset relocation options, progress and results

use std::path::PathBuf;

/// Enemy bundles skipped by default: multi-part bosses that need manual
/// composition in the engine.
pub const DEFAULT_SKIP_BUNDLES: &[&str] = &[
    "boss_dragon",
    "boss_octopus",
    "boss_robot",
    "boss_darkfalz",
    "boss_mother",
    "boss_mother_piece",
    "boss_robot_cmb",
];

/// Options for enemy bundle relocation
#[derive(Debug, Clone)]
pub struct RelocationOptions {
    /// Bundle directory names that are never imported
    pub skip_bundles: Vec<String>,
}

impl Default for RelocationOptions {
    fn default() -> Self {
        Self {
            skip_bundles: DEFAULT_SKIP_BUNDLES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl RelocationOptions {
    #[must_use]
    pub fn is_skipped(&self, bundle: &str) -> bool {
        self.skip_bundles.iter().any(|skip| skip == bundle)
    }
}

/// Progress callback type for asset relocation
pub type RelocationProgressCallback<'a> = &'a dyn Fn(&RelocationProgress);

/// Progress information during asset relocation
#[derive(Debug, Clone)]
pub struct RelocationProgress {
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Bundle or variation being processed
    pub current_item: String,
}

impl RelocationProgress {
    #[must_use]
    pub fn new(current: usize, total: usize, item: impl Into<String>) -> Self {
        Self {
            current,
            total,
            current_item: item.into(),
        }
    }
}

/// One imported enemy bundle
#[derive(Debug, Clone)]
pub struct ImportedBundle {
    /// Bundle identifier (its directory name)
    pub id: String,
    /// `modelBaseName` from the bundle manifest
    pub model_base_name: String,
    /// Destination path of the renamed GLB
    pub model: PathBuf,
    /// Number of textures copied
    pub texture_count: usize,
}

/// Result of an enemy bundle relocation run
#[derive(Debug, Clone, Default)]
pub struct EnemyRelocationResult {
    pub imported: Vec<ImportedBundle>,
    /// Deny-listed bundles
    pub skipped: Vec<String>,
    /// One message per failed bundle
    pub failed: Vec<String>,
}

/// One relocated player variation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerVariation {
    /// Variation directory name (`pc_000`)
    pub name: String,
    pub glb_count: usize,
    pub png_count: usize,
}

/// Result of a player variation relocation run
#[derive(Debug, Clone, Default)]
pub struct PlayerRelocationResult {
    /// Variations with at least one model
    pub imported: Vec<PlayerVariation>,
    /// Variations without a model
    pub skipped: Vec<String>,
    /// One message per failed variation
    pub failed: Vec<String>,
}

impl PlayerRelocationResult {
    #[must_use]
    pub fn total_glb(&self) -> usize {
        self.imported.iter().map(|v| v.glb_count).sum()
    }

    #[must_use]
    pub fn total_png(&self) -> usize {
        self.imported.iter().map(|v| v.png_count).sum()
    }
}
