//! Enum lookup tables
//!
//! Human-authored names (weapon types, armor types, elements, location
//! names) translated to the codes the Godot resource scripts expect.
//! Tables are plain data: a closed entry list plus the code returned for
//! anything not in it.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod tables;

pub use tables::{AREAS, ARMOR_TYPES, ELEMENTS, WEAPON_TYPES};

/// A closed string-to-code table with a documented fallback.
#[derive(Debug, Clone, Copy)]
pub struct LookupTable<V: 'static> {
    /// Table name used in log messages.
    pub name: &'static str,
    entries: &'static [(&'static str, V)],
    default: V,
}

impl<V: Copy + PartialEq + 'static> LookupTable<V> {
    /// Create a table from its entries and fallback code.
    #[must_use]
    pub const fn new(name: &'static str, entries: &'static [(&'static str, V)], default: V) -> Self {
        Self {
            name,
            entries,
            default,
        }
    }

    /// Exact-match lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, code)| *code)
    }

    /// Lookup that never fails: unknown keys resolve to the table default.
    #[must_use]
    pub fn code_or_default(&self, key: &str) -> V {
        self.get(key).unwrap_or(self.default)
    }

    /// The fallback code.
    #[must_use]
    pub fn default_code(&self) -> V {
        self.default
    }

    /// First key mapping to `code`.
    #[must_use]
    pub fn key_of(&self, code: V) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(name, _)| *name)
    }
}

/// Which table an enum-typed schema field translates through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    WeaponType,
    ArmorType,
    Element,
}

/// The full table set handed to every schema mapper.
#[derive(Debug, Clone, Copy)]
pub struct LookupTables {
    pub weapon_types: LookupTable<i64>,
    pub armor_types: LookupTable<i64>,
    pub elements: LookupTable<i64>,
    /// Location display name to quest-editor area key (export only).
    pub areas: LookupTable<&'static str>,
}

impl LookupTables {
    /// The tables shipped with psz-godot.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            weapon_types: WEAPON_TYPES,
            armor_types: ARMOR_TYPES,
            elements: ELEMENTS,
            areas: AREAS,
        }
    }

    /// Integer table for an enum-typed field.
    #[must_use]
    pub fn table(&self, kind: TableKind) -> &LookupTable<i64> {
        match kind {
            TableKind::WeaponType => &self.weapon_types,
            TableKind::ArmorType => &self.armor_types,
            TableKind::Element => &self.elements,
        }
    }
}

impl Default for LookupTables {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ranges() {
        let tables = LookupTables::standard();
        assert_eq!(tables.weapon_types.key_of(15), Some("Wand"));
        assert_eq!(tables.weapon_types.key_of(16), None);
        assert_eq!(tables.armor_types.key_of(3), Some("Rare"));
        assert_eq!(tables.armor_types.key_of(4), None);
        assert_eq!(tables.elements.key_of(3), Some("Dark"));
        assert_eq!(tables.areas.key_of("tower"), Some("Eternal Tower"));
    }

    #[test]
    fn test_known_codes() {
        let tables = LookupTables::standard();
        assert_eq!(tables.weapon_types.get("Double Saber"), Some(4));
        assert_eq!(tables.weapon_types.get("Wand"), Some(15));
        assert_eq!(tables.armor_types.get("Robe"), Some(2));
        assert_eq!(tables.elements.get("Beast"), Some(1));
        assert_eq!(tables.areas.get("Ozette Wetlands"), Some("wetlands"));
    }

    #[test]
    fn test_unknown_keys_fall_back() {
        let tables = LookupTables::standard();
        for kind in [TableKind::WeaponType, TableKind::ArmorType, TableKind::Element] {
            let table = tables.table(kind);
            assert_eq!(table.code_or_default("Photon Whip"), table.default_code());
            assert_eq!(table.code_or_default(""), table.default_code());
        }
        // Lookups are case sensitive
        assert_eq!(tables.elements.code_or_default("beast"), 0);
        assert_eq!(tables.areas.get("Lost Place"), None);
    }

    #[test]
    fn test_reverse_lookup() {
        let tables = LookupTables::standard();
        assert_eq!(tables.elements.key_of(2), Some("Machine"));
        assert_eq!(tables.elements.key_of(9), None);
    }
}
