//! Weapons, armors and armor set bonuses

use super::{FieldSpec, KeySource, Schema};
use crate::lookup::TableKind;

/// Photon art entries embedded in a weapon record.
static WEAPON_PHOTON_ARTS: [FieldSpec; 5] = [
    FieldSpec::text("name", "name"),
    FieldSpec::int("attack_mod", "attackMod", 0),
    FieldSpec::int("accuracy_mod", "accuracyMod", 0),
    FieldSpec::int("pp_used", "ppUsed", 0),
    FieldSpec::text_or("element", "element", "-"),
];

pub static WEAPONS: Schema = Schema {
    name: "weapons",
    label: "Weapons",
    source_dir: "weapons",
    output_dir: Some("weapons"),
    script_class: "WeaponData",
    script_file: "weapon_data.gd",
    key: KeySource::Field("name"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("name", "name"),
        FieldSpec::text("japanese_name", "japaneseName"),
        FieldSpec::int("rarity", "rarity", 1),
        FieldSpec::lookup("weapon_type", "weaponType", TableKind::WeaponType),
        FieldSpec::int("max_grind", "maxGrind", 0),
        FieldSpec::int("level", "level", 1),
        FieldSpec::int("resale_value", "resaleValue", 0),
        FieldSpec::int("attack_base", "attackBase", 0),
        FieldSpec::int("attack_max", "attackMax", 0),
        FieldSpec::int("accuracy_base", "accuracyBase", 0),
        FieldSpec::int("accuracy_max", "accuracyMax", 0),
        FieldSpec::text("element", "element"),
        FieldSpec::int("element_level", "elementLevel", 0),
        FieldSpec::records("photon_arts", "photonArts", &WEAPON_PHOTON_ARTS),
        FieldSpec::strings("usable_by", "usableBy"),
        FieldSpec::int("pso_world_id", "psoWorldId", 0),
        FieldSpec::text("model_id", "modelId"),
        FieldSpec::text("variant_id", "variantId"),
    ],
};

pub static ARMORS: Schema = Schema {
    name: "armors",
    label: "Armors",
    source_dir: "armors",
    output_dir: Some("armors"),
    script_class: "ArmorData",
    script_file: "armor_data.gd",
    key: KeySource::Field("name"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("name", "name"),
        FieldSpec::text("japanese_name", "japaneseName"),
        FieldSpec::lookup("type", "type", TableKind::ArmorType),
        FieldSpec::int("rarity", "rarity", 1),
        FieldSpec::int("max_grind", "maxGrind", 0),
        FieldSpec::int("level", "level", 1),
        FieldSpec::int("resale_value", "resaleValue", 0),
        FieldSpec::int("defense_base", "defenseBase", 0),
        FieldSpec::int("defense_max", "defenseMax", 0),
        FieldSpec::int("evasion_base", "evasionBase", 0),
        FieldSpec::int("evasion_max", "evasionMax", 0),
        FieldSpec::int("max_slots", "maxSlots", 0),
        FieldSpec::int("resist_fire", "resistances.fire", 0),
        FieldSpec::int("resist_ice", "resistances.ice", 0),
        FieldSpec::int("resist_lightning", "resistances.lightning", 0),
        FieldSpec::int("resist_light", "resistances.light", 0),
        FieldSpec::int("resist_dark", "resistances.dark", 0),
        FieldSpec::strings("usable_by", "usableBy"),
        FieldSpec::text("set_bonus", "setBonus"),
        FieldSpec::int("pso_world_id", "psoWorldId", 0),
    ],
};

pub static SET_BONUSES: Schema = Schema {
    name: "set_bonuses",
    label: "Set Bonuses",
    source_dir: "set-bonuses",
    output_dir: Some("set_bonuses"),
    script_class: "SetBonusData",
    script_file: "set_bonus_data.gd",
    key: KeySource::FieldOrStem("armor"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("armor", "armor"),
        FieldSpec::strings("weapons", "weapons"),
        FieldSpec::mapping("bonuses", "bonuses"),
    ],
};
