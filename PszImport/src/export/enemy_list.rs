//! Enemy list export for the quest editor
//!
//! Reads converted enemy resources back and writes the compact JSON list the
//! psz-sketch quest editor loads.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::formats::tres::{TresFields, parse_string_array};
use crate::lookup::LookupTables;
use crate::utils::path::files_with_extension;

/// One enemy as listed for the quest editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyEntry {
    pub id: String,
    pub name: String,
    pub model_id: String,
    /// Element name (`Beast`), not the numeric code.
    pub element: String,
    /// Editor area keys (`valley`), unknown locations dropped.
    pub locations: Vec<String>,
    pub is_rare: bool,
    pub is_boss: bool,
}

/// Result of an enemy list export
#[derive(Debug, Clone, Default)]
pub struct EnemyExport {
    /// Enemies sorted by name
    pub enemies: Vec<EnemyEntry>,
    /// Number of enemies per area key
    pub area_counts: BTreeMap<String, usize>,
}

impl EnemyExport {
    /// Build an export from entries, sorting them and counting areas
    #[must_use]
    pub fn from_entries(mut enemies: Vec<EnemyEntry>) -> Self {
        enemies.sort_by(|a, b| a.name.cmp(&b.name));

        let mut area_counts = BTreeMap::new();
        for enemy in &enemies {
            for area in &enemy.locations {
                *area_counts.entry(area.clone()).or_insert(0) += 1;
            }
        }

        Self {
            enemies,
            area_counts,
        }
    }
}

/// Extract an enemy entry from the fields of an enemy resource
///
/// Returns `None` when the resource has no `id`.
#[must_use]
pub fn enemy_from_fields(fields: &TresFields, tables: &LookupTables) -> Option<EnemyEntry> {
    let id = fields.field("id").filter(|id| !id.is_empty())?;

    let element = fields
        .field("element")
        .and_then(|code| code.parse::<i64>().ok())
        .and_then(|code| tables.elements.key_of(code))
        .unwrap_or("Native")
        .to_string();

    let locations = fields
        .field("locations")
        .map(|raw| parse_string_array(&raw))
        .unwrap_or_default()
        .iter()
        .filter_map(|location| tables.areas.get(location))
        .map(str::to_string)
        .collect();

    Some(EnemyEntry {
        id,
        name: fields.field_or("name", ""),
        model_id: fields.field_or("model_id", ""),
        element,
        locations,
        is_rare: fields.field_or("is_rare", "false") == "true",
        is_boss: fields.field_or("is_boss", "false") == "true",
    })
}

/// Read every enemy resource in a directory
///
/// # Errors
/// Returns an error if the directory or a resource file cannot be read.
pub fn collect_enemies<P: AsRef<Path>>(enemies_dir: P, tables: &LookupTables) -> Result<EnemyExport> {
    let paths = files_with_extension(enemies_dir, "tres")?;
    let mut enemies = Vec::with_capacity(paths.len());
    for path in &paths {
        let fields = TresFields::read(path)?;
        match enemy_from_fields(&fields, tables) {
            Some(enemy) => enemies.push(enemy),
            None => tracing::debug!("Skipping {}: no id", path.display()),
        }
    }

    Ok(EnemyExport::from_entries(enemies))
}

/// Write the enemy list as pretty-printed JSON, creating parent directories
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_enemy_list<P: AsRef<Path>>(enemies: &[EnemyEntry], output: P) -> Result<()> {
    let output = output.as_ref();
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, serde_json::to_string_pretty(enemies)?)?;
    Ok(())
}

/// Collect enemy resources and write the quest editor list
///
/// # Errors
/// Returns an error if reading the resources or writing the list fails.
pub fn export_enemy_list<P: AsRef<Path>, Q: AsRef<Path>>(
    enemies_dir: P,
    output: Q,
    tables: &LookupTables,
) -> Result<EnemyExport> {
    let export = collect_enemies(enemies_dir, tables)?;
    write_enemy_list(&export.enemies, output.as_ref())?;
    tracing::info!(
        "Exported {} enemies to {}",
        export.enemies.len(),
        output.as_ref().display()
    );
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAVAGE_WOLF: &str = r#"[gd_resource type="Resource" script_class="EnemyData" load_steps=2 format=3]

[resource]
script = ExtResource("1")
id = "savage_wolf"
name = "Savage Wolf"
element = 1
locations = PackedStringArray("Gurhacia Valley", "Lost Moon", "Ozette Wetland")
is_rare = false
is_boss = true
model_id = "wolf_01"
"#;

    fn entry(name: &str, locations: &[&str]) -> EnemyEntry {
        EnemyEntry {
            id: name.to_lowercase(),
            name: name.to_string(),
            model_id: String::new(),
            element: "Native".to_string(),
            locations: locations.iter().map(ToString::to_string).collect(),
            is_rare: false,
            is_boss: false,
        }
    }

    #[test]
    fn test_enemy_from_fields() {
        let fields = TresFields::parse(SAVAGE_WOLF);
        let enemy = enemy_from_fields(&fields, &LookupTables::standard()).unwrap();
        assert_eq!(enemy.id, "savage_wolf");
        assert_eq!(enemy.name, "Savage Wolf");
        assert_eq!(enemy.model_id, "wolf_01");
        assert_eq!(enemy.element, "Beast");
        assert_eq!(enemy.locations, ["valley", "wetlands"]);
        assert!(!enemy.is_rare);
        assert!(enemy.is_boss);
    }

    #[test]
    fn test_missing_id_is_skipped() {
        let tables = LookupTables::standard();
        let nameless = TresFields::parse("name = \"Nameless\"\n");
        assert!(enemy_from_fields(&nameless, &tables).is_none());
        let blank = TresFields::parse("id = \"\"\nname = \"Blank\"\n");
        assert!(enemy_from_fields(&blank, &tables).is_none());
    }

    #[test]
    fn test_unknown_element_code() {
        let fields = TresFields::parse("id = \"x\"\nelement = 9\n");
        let enemy = enemy_from_fields(&fields, &LookupTables::standard()).unwrap();
        assert_eq!(enemy.element, "Native");
        assert!(enemy.locations.is_empty());
    }

    #[test]
    fn test_sorted_by_name_with_area_counts() {
        let export = EnemyExport::from_entries(vec![
            entry("Savage Wolf", &["valley", "wetlands"]),
            entry("Booma", &["valley"]),
            entry("Pinkie", &[]),
        ]);
        let names: Vec<&str> = export.enemies.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Booma", "Pinkie", "Savage Wolf"]);

        let counts: Vec<(&str, usize)> = export
            .area_counts
            .iter()
            .map(|(area, count)| (area.as_str(), *count))
            .collect();
        assert_eq!(counts, [("valley", 2), ("wetlands", 1)]);
    }
}
