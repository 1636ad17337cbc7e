//! Missions, quest areas and quest definitions

use super::{FieldSpec, KeySource, Schema};

pub static MISSIONS: Schema = Schema {
    name: "missions",
    label: "Missions",
    source_dir: "missions",
    output_dir: Some("missions"),
    script_class: "MissionData",
    script_file: "mission_data.gd",
    key: KeySource::Field("name"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("name", "name"),
        FieldSpec::text("area", "area"),
        FieldSpec::flag("is_main", "main"),
        FieldSpec::flag("is_secret", "isSecret"),
        FieldSpec::strings("requires", "requires"),
        FieldSpec::mapping("rewards", "rewards"),
    ],
};

pub static QUEST_AREAS: Schema = Schema {
    name: "quest_areas",
    label: "Quest Areas",
    source_dir: "quest-areas",
    output_dir: Some("quest_areas"),
    script_class: "QuestAreaData",
    script_file: "quest_area_data.gd",
    key: KeySource::FieldOrStem("areaId"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("area_id", "areaId"),
        FieldSpec::text("area_name", "areaName"),
        FieldSpec::text("description", "description"),
        FieldSpec::text("unlock_condition", "unlockCondition"),
        FieldSpec::int("recommended_level", "recommendedLevel", 1),
        FieldSpec::text("environment", "environment"),
        FieldSpec::int("quest_count", "questCount", 0),
    ],
};

pub static QUEST_DEFINITIONS: Schema = Schema {
    name: "quest_definitions",
    label: "Quest Definitions",
    source_dir: "quest-definitions",
    output_dir: Some("quest_definitions"),
    script_class: "QuestDefinitionData",
    script_file: "quest_definition_data.gd",
    key: KeySource::FieldOrStem("questId"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("quest_id", "questId"),
        FieldSpec::text("quest_name", "questName"),
        FieldSpec::text("quest_type", "questType"),
        FieldSpec::text("area", "area"),
        FieldSpec::text("description", "description"),
        FieldSpec::sequence("difficulties", "difficulties"),
        FieldSpec::mapping("requirements", "requirements"),
        FieldSpec::sequence("objectives", "objectives"),
        FieldSpec::flag("is_repeatable", "isRepeatable"),
        FieldSpec::flag("is_secret", "isSecret"),
    ],
};
