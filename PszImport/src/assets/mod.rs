//! Model and texture asset relocation
//!
//! Copies enemy model bundles and player model variations from the
//! psz-sketch public tree into the Godot `assets/` layout.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod enemies;
mod players;
mod types;

pub use enemies::{MANIFEST_FILE, read_model_base_name, relocate_enemies, relocate_enemy};
pub use players::{is_variation_name, relocate_players, relocate_variation};
pub use types::{
    DEFAULT_SKIP_BUNDLES, EnemyRelocationResult, ImportedBundle, PlayerRelocationResult,
    PlayerVariation, RelocationOptions, RelocationProgress, RelocationProgressCallback,
};
