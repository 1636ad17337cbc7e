//! # pszimport
//!
//! The content import pipeline for psz-godot.
//!
//! ## What it does
//!
//! - **Content conversion** - psz-sketch content JSON to Godot `.tres`
//!   resources, one file per record, for eighteen content categories
//! - **Enemy list export** - converted enemy resources back to the JSON list
//!   the quest editor loads
//! - **Asset relocation** - enemy model bundles and player model variations
//!   copied into the Godot `assets/` layout
//!
//! ## Quick Start
//!
//! ### Converting Content
//!
//! ```no_run
//! use pszimport::converter::{ConvertOptions, convert_all};
//! use pszimport::lookup::LookupTables;
//! use std::path::Path;
//!
//! let summary = convert_all(
//!     Path::new("../psz-sketch/src/content"),
//!     Path::new("data"),
//!     &ConvertOptions::only(["enemies", "drop_tables"]),
//!     &LookupTables::standard(),
//!     &|_| {},
//! )?;
//! println!("Wrote {} resources", summary.total_success());
//! # Ok::<(), pszimport::Error>(())
//! ```
//!
//! ### Mapping a Single Record
//!
//! ```
//! use pszimport::formats::{parse_record, serialize_tres};
//! use pszimport::lookup::LookupTables;
//! use pszimport::schema::{ARMORS, map_record};
//!
//! let record = parse_record(r#"{"name": "Frame", "type": "Frame", "defenseBase": 4}"#)?;
//! let mapped = map_record(&ARMORS, &record, "frame", &LookupTables::standard())?;
//! assert_eq!(mapped.identifier, "frame");
//!
//! let text = serialize_tres(&mapped.to_document());
//! assert!(text.contains("script_class=\"ArmorData\""));
//! # Ok::<(), pszimport::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `pszimport` command-line binary

pub mod assets;
pub mod config;
pub mod converter;
pub mod error;
pub mod export;
pub mod formats;
pub mod lookup;
pub mod schema;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::{Record, ResourceDocument, TresFields, Value, ValueMap};
    pub use crate::formats::{parse_record, read_record, serialize_tres, write_tres};

    // Conversion
    pub use crate::converter::{
        CategoryResult, ConvertOptions, ConvertProgress, ConvertSummary, convert_all,
        convert_file,
    };
    pub use crate::lookup::LookupTables;
    pub use crate::schema::{EngineRecord, Schema, map_record};

    // Export and assets
    pub use crate::assets::{RelocationOptions, relocate_enemies, relocate_players};
    pub use crate::config::ImportConfig;
    pub use crate::export::{EnemyEntry, export_enemy_list};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
