//! Content schemas
//!
//! Every content category is a declarative [`Schema`]: where its records
//! live, which resource script they become, how the identifier is derived,
//! and an ordered list of fields with the rule that fills each one. One
//! engine ([`map_record`]) applies any schema to any record.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub mod coerce;
mod enemies;
mod equipment;
pub mod identifier;
mod items;
mod mapper;
mod progression;
mod quests;

use std::path::{Path, PathBuf};

use crate::formats::Value;
use crate::lookup::TableKind;

pub use enemies::{BOSS_TIER, DROP_TABLES, ENEMIES, NORMAL_TIER, RARE_TIER, StatTier, stat_tier};
pub use equipment::{ARMORS, SET_BONUSES, WEAPONS};
pub use identifier::slugify;
pub use items::{CONSUMABLES, MATERIALS, MODIFIERS, SHOPS, UNITS};
pub use mapper::{EngineRecord, FieldValue, MapContext, map_record};
pub use progression::{CLASSES, EXPERIENCE, MAG_PERSONALITIES, MAGS, PHOTON_ARTS};
pub use quests::{MISSIONS, QUEST_AREAS, QUEST_DEFINITIONS};

/// Directory holding the GDScript resource classes in the Godot project.
pub const SCRIPT_DIR: &str = "res://scripts/resources";

/// Computes a field from the whole record.
pub type Derivation = fn(&MapContext<'_>) -> Value;

/// Where a record's identifier comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// A string field that must be present.
    Field(&'static str),
    /// A string field, falling back to the source file stem.
    FieldOrStem(&'static str),
    /// The source file stem.
    Stem,
    /// A fixed identifier for single-unit categories.
    Fixed(&'static str),
}

/// Fixed values for constant fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fixed {
    Int(i64),
    Real(f64),
    Bool(bool),
    Text(&'static str),
}

impl Fixed {
    #[must_use]
    pub fn to_value(self) -> Value {
        match self {
            Fixed::Int(i) => Value::Int(i),
            Fixed::Real(f) => Value::Float(f),
            Fixed::Bool(b) => Value::Bool(b),
            Fixed::Text(s) => Value::from(s),
        }
    }
}

/// How one output field is produced.
///
/// `key` is the source field name, or a dotted path into nested mappings.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// The record identifier.
    Identifier,
    /// The source file stem, unmodified.
    SourceName,
    /// String field; numbers and booleans are stringified.
    Text { key: &'static str, default: &'static str },
    /// Integer field; numbers verbatim, numeric strings parsed.
    Integer { key: &'static str, default: i64 },
    /// Real field with decorated-string coercion.
    Real { key: &'static str, default: f64 },
    Flag { key: &'static str, default: bool },
    /// Mapping field, `{}` when absent.
    Mapping { key: &'static str },
    /// Sequence field, `[]` when absent.
    Sequence { key: &'static str },
    /// Native string array (`PackedStringArray`).
    Strings { key: &'static str },
    /// Enum field translated through a lookup table.
    Lookup { key: &'static str, table: TableKind },
    /// List of nested sub-records, each mapped with its own field list.
    Records {
        key: &'static str,
        fields: &'static [FieldSpec],
    },
    /// The entire source record as a mapping.
    Whole,
    Constant(Fixed),
    Derived(Derivation),
}

/// One declared output field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: Rule,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(name: &'static str, rule: Rule) -> Self {
        Self { name, rule }
    }

    /// The `id` field every per-record category starts with.
    #[must_use]
    pub const fn id() -> Self {
        Self::new("id", Rule::Identifier)
    }

    #[must_use]
    pub const fn text(name: &'static str, key: &'static str) -> Self {
        Self::new(name, Rule::Text { key, default: "" })
    }

    #[must_use]
    pub const fn text_or(name: &'static str, key: &'static str, default: &'static str) -> Self {
        Self::new(name, Rule::Text { key, default })
    }

    #[must_use]
    pub const fn int(name: &'static str, key: &'static str, default: i64) -> Self {
        Self::new(name, Rule::Integer { key, default })
    }

    #[must_use]
    pub const fn real(name: &'static str, key: &'static str) -> Self {
        Self::new(name, Rule::Real { key, default: 0.0 })
    }

    #[must_use]
    pub const fn flag(name: &'static str, key: &'static str) -> Self {
        Self::new(name, Rule::Flag { key, default: false })
    }

    #[must_use]
    pub const fn mapping(name: &'static str, key: &'static str) -> Self {
        Self::new(name, Rule::Mapping { key })
    }

    #[must_use]
    pub const fn sequence(name: &'static str, key: &'static str) -> Self {
        Self::new(name, Rule::Sequence { key })
    }

    #[must_use]
    pub const fn strings(name: &'static str, key: &'static str) -> Self {
        Self::new(name, Rule::Strings { key })
    }

    #[must_use]
    pub const fn lookup(name: &'static str, key: &'static str, table: TableKind) -> Self {
        Self::new(name, Rule::Lookup { key, table })
    }

    #[must_use]
    pub const fn records(
        name: &'static str,
        key: &'static str,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self::new(name, Rule::Records { key, fields })
    }

    #[must_use]
    pub const fn constant(name: &'static str, value: Fixed) -> Self {
        Self::new(name, Rule::Constant(value))
    }

    #[must_use]
    pub const fn derived(name: &'static str, derivation: Derivation) -> Self {
        Self::new(name, Rule::Derived(derivation))
    }
}

/// A content category: source layout, target resource class and fields.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Category key (`photon_arts`).
    pub name: &'static str,
    /// Display label for summaries (`Photon Arts`).
    pub label: &'static str,
    /// Directory under the content root holding the source records.
    pub source_dir: &'static str,
    /// Directory under the output root, or `None` to write at the root.
    pub output_dir: Option<&'static str>,
    pub script_class: &'static str,
    /// Script file name inside [`SCRIPT_DIR`].
    pub script_file: &'static str,
    pub key: KeySource,
    /// Only the first source unit (in sorted order) is converted.
    pub single_unit: bool,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// `res://` path of the resource script.
    #[must_use]
    pub fn script_path(&self) -> String {
        format!("{SCRIPT_DIR}/{}", self.script_file)
    }

    /// Source directory for this category under a content root.
    #[must_use]
    pub fn source_path(&self, content_root: &Path) -> PathBuf {
        content_root.join(self.source_dir)
    }

    /// Where the `.tres` for `identifier` is written under an output root.
    #[must_use]
    pub fn output_path(&self, output_root: &Path, identifier: &str) -> PathBuf {
        let file_name = format!("{identifier}.tres");
        match self.output_dir {
            Some(dir) => output_root.join(dir).join(file_name),
            None => output_root.join(file_name),
        }
    }
}

/// Every category, in conversion order.
pub static ALL: [&Schema; 18] = [
    &WEAPONS,
    &ARMORS,
    &ENEMIES,
    &CLASSES,
    &CONSUMABLES,
    &UNITS,
    &PHOTON_ARTS,
    &MAGS,
    &MISSIONS,
    &QUEST_AREAS,
    &QUEST_DEFINITIONS,
    &MATERIALS,
    &SET_BONUSES,
    &DROP_TABLES,
    &SHOPS,
    &MAG_PERSONALITIES,
    &MODIFIERS,
    &EXPERIENCE,
];

/// Find a category by key (`photon_arts`) or source directory (`photon-arts`).
#[must_use]
pub fn find(key: &str) -> Option<&'static Schema> {
    ALL.iter()
        .copied()
        .find(|schema| schema.name == key || schema.source_dir == key)
}
