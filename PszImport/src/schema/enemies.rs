//! Enemies and drop tables
//!
//! Enemy combat stats are not authored in the content records. They come
//! from three fixed tiers picked by the rare/boss flags.

use super::{FieldSpec, Fixed, KeySource, MapContext, Rule, Schema};
use crate::formats::Value;
use crate::lookup::TableKind;

/// Behavior code for melee enemies in `enemy_data.gd`.
pub const BEHAVIOR_MELEE: i64 = 0;
/// Behavior code for bosses in `enemy_data.gd`.
pub const BEHAVIOR_BOSS: i64 = 5;

/// Base combat stats shared by every enemy of a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTier {
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub exp: i64,
    pub meseta_min: i64,
    pub meseta_max: i64,
}

pub const NORMAL_TIER: StatTier = StatTier {
    hp: 100,
    attack: 10,
    defense: 5,
    exp: 10,
    meseta_min: 5,
    meseta_max: 15,
};

pub const RARE_TIER: StatTier = StatTier {
    hp: 200,
    attack: 15,
    defense: 8,
    exp: 50,
    meseta_min: 20,
    meseta_max: 50,
};

pub const BOSS_TIER: StatTier = StatTier {
    hp: 1000,
    attack: 25,
    defense: 15,
    exp: 200,
    meseta_min: 100,
    meseta_max: 300,
};

/// Pick the stat tier for an enemy. Boss takes precedence over rare.
#[must_use]
pub fn stat_tier(is_rare: bool, is_boss: bool) -> &'static StatTier {
    if is_boss {
        &BOSS_TIER
    } else if is_rare {
        &RARE_TIER
    } else {
        &NORMAL_TIER
    }
}

fn is_boss(ctx: &MapContext<'_>) -> bool {
    ctx.record.bool_or("isBoss", false)
}

fn tier(ctx: &MapContext<'_>) -> &'static StatTier {
    stat_tier(ctx.record.bool_or("isRare", false), is_boss(ctx))
}

fn hp_base(ctx: &MapContext<'_>) -> Value {
    Value::Int(tier(ctx).hp)
}

fn attack_base(ctx: &MapContext<'_>) -> Value {
    Value::Int(tier(ctx).attack)
}

fn defense_base(ctx: &MapContext<'_>) -> Value {
    Value::Int(tier(ctx).defense)
}

fn exp_reward(ctx: &MapContext<'_>) -> Value {
    Value::Int(tier(ctx).exp)
}

fn meseta_min(ctx: &MapContext<'_>) -> Value {
    Value::Int(tier(ctx).meseta_min)
}

fn meseta_max(ctx: &MapContext<'_>) -> Value {
    Value::Int(tier(ctx).meseta_max)
}

fn behavior(ctx: &MapContext<'_>) -> Value {
    Value::Int(if is_boss(ctx) { BEHAVIOR_BOSS } else { BEHAVIOR_MELEE })
}

pub static ENEMIES: Schema = Schema {
    name: "enemies",
    label: "Enemies",
    source_dir: "enemies",
    output_dir: Some("enemies"),
    script_class: "EnemyData",
    script_file: "enemy_data.gd",
    key: KeySource::Field("name"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("name", "name"),
        FieldSpec::text("japanese_name", "japaneseName"),
        FieldSpec::lookup("element", "element", TableKind::Element),
        FieldSpec::strings("locations", "locations"),
        FieldSpec::flag("is_rare", "isRare"),
        FieldSpec::flag("is_boss", "isBoss"),
        FieldSpec::text("model_id", "modelId"),
        FieldSpec::derived("hp_base", hp_base),
        FieldSpec::derived("attack_base", attack_base),
        FieldSpec::derived("defense_base", defense_base),
        FieldSpec::constant("move_speed", Fixed::Real(3.0)),
        FieldSpec::constant("attack_range", Fixed::Real(2.0)),
        FieldSpec::constant("detection_range", Fixed::Real(15.0)),
        FieldSpec::derived("exp_reward", exp_reward),
        FieldSpec::derived("meseta_min", meseta_min),
        FieldSpec::derived("meseta_max", meseta_max),
        FieldSpec::derived("behavior", behavior),
        FieldSpec::constant("attack_cooldown", Fixed::Real(1.5)),
        FieldSpec::constant("collision_radius", Fixed::Real(0.5)),
        FieldSpec::constant("collision_height", Fixed::Real(1.5)),
    ],
};

/// Drop tables are keyed by their file name (one file per difficulty) and
/// carry the whole record as the per-area drop mapping.
pub static DROP_TABLES: Schema = Schema {
    name: "drop_tables",
    label: "Drop Tables",
    source_dir: "drops",
    output_dir: Some("drop_tables"),
    script_class: "DropTableData",
    script_file: "drop_table_data.gd",
    key: KeySource::Stem,
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::new("difficulty", Rule::SourceName),
        FieldSpec::new("area_drops", Rule::Whole),
    ],
};
