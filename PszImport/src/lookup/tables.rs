//! Table data
//!
//! Codes match the enum order of the psz-godot resource scripts
//! (`weapon_data.gd`, `armor_data.gd`, `enemy_data.gd`).

use super::LookupTable;

pub const WEAPON_TYPES: LookupTable<i64> = LookupTable::new(
    "weapon type",
    &[
        ("Saber", 0),
        ("Sword", 1),
        ("Daggers", 2),
        ("Claw", 3),
        ("Double Saber", 4),
        ("Spear", 5),
        ("Slicer", 6),
        ("Gun Blade", 7),
        ("Shield", 8),
        ("Handgun", 9),
        ("Mech Gun", 10),
        ("Rifle", 11),
        ("Bazooka", 12),
        ("Laser Cannon", 13),
        ("Rod", 14),
        ("Wand", 15),
    ],
    0,
);

pub const ARMOR_TYPES: LookupTable<i64> = LookupTable::new(
    "armor type",
    &[("Armor", 0), ("Frame", 1), ("Robe", 2), ("Rare", 3)],
    0,
);

pub const ELEMENTS: LookupTable<i64> = LookupTable::new(
    "element",
    &[("Native", 0), ("Beast", 1), ("Machine", 2), ("Dark", 3)],
    0,
);

/// Location display names to the area keys used by the quest editor.
/// Unknown locations have no area; the empty default is never emitted.
pub const AREAS: LookupTable<&str> = LookupTable::new(
    "area",
    &[
        ("Gurhacia Valley", "valley"),
        ("Ozette Wetland", "wetlands"),
        ("Ozette Wetlands", "wetlands"),
        ("Rioh Snowfield", "snowfield"),
        ("Makara Ruins", "makara"),
        ("Oblivion City Paru", "paru"),
        ("Arca Plant", "arca"),
        ("Dark Shrine", "shrine"),
        ("Eternal Tower", "tower"),
    ],
    "",
);
