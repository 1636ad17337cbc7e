//! Consumables, units, materials, modifiers and shops

use super::{FieldSpec, KeySource, Schema};

pub static CONSUMABLES: Schema = Schema {
    name: "consumables",
    label: "Consumables",
    source_dir: "consumables",
    output_dir: Some("consumables"),
    script_class: "ConsumableData",
    script_file: "consumable_data.gd",
    key: KeySource::Field("name"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("name", "name"),
        FieldSpec::text("japanese_name", "japaneseName"),
        FieldSpec::text("details", "details"),
        FieldSpec::int("rarity", "rarity", 1),
        FieldSpec::int("max_stack", "maxStack", 10),
        FieldSpec::int("pso_world_id", "psoWorldId", 0),
    ],
};

pub static UNITS: Schema = Schema {
    name: "units",
    label: "Units",
    source_dir: "units",
    output_dir: Some("units"),
    script_class: "UnitData",
    script_file: "unit_data.gd",
    key: KeySource::Field("name"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("name", "name"),
        FieldSpec::text("japanese_name", "japaneseName"),
        FieldSpec::int("rarity", "rarity", 1),
        FieldSpec::text("category", "category"),
        FieldSpec::text("effect", "effect"),
        FieldSpec::int("effect_value", "effectValue", 0),
        FieldSpec::int("pso_world_id", "psoWorldId", 0),
    ],
};

pub static MATERIALS: Schema = Schema {
    name: "materials",
    label: "Materials",
    source_dir: "materials",
    output_dir: Some("materials"),
    script_class: "MaterialData",
    script_file: "material_data.gd",
    key: KeySource::Field("name"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("name", "name"),
        FieldSpec::text("japanese_name", "japaneseName"),
        FieldSpec::text("details", "details"),
        FieldSpec::int("rarity", "rarity", 6),
        FieldSpec::int("pso_world_id", "psoWorldId", 0),
    ],
};

pub static MODIFIERS: Schema = Schema {
    name: "modifiers",
    label: "Modifiers",
    source_dir: "modifiers",
    output_dir: Some("modifiers"),
    script_class: "ModifierData",
    script_file: "modifier_data.gd",
    key: KeySource::Field("name"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("name", "name"),
        FieldSpec::text("japanese_name", "japaneseName"),
        FieldSpec::text("details", "details"),
        FieldSpec::int("rarity", "rarity", 3),
        FieldSpec::int("pso_world_id", "psoWorldId", 0),
    ],
};

pub static SHOPS: Schema = Schema {
    name: "shops",
    label: "Shops",
    source_dir: "shops",
    output_dir: Some("shops"),
    script_class: "ShopData",
    script_file: "shop_data.gd",
    key: KeySource::FieldOrStem("name"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("name", "name"),
        FieldSpec::text("description", "description"),
        FieldSpec::sequence("items", "items"),
    ],
};
