//! Character classes, photon arts, mags and the experience table

use super::{FieldSpec, KeySource, MapContext, Schema};
use crate::formats::Value;

pub static CLASSES: Schema = Schema {
    name: "classes",
    label: "Classes",
    source_dir: "classes",
    output_dir: Some("classes"),
    script_class: "ClassData",
    script_file: "class_data.gd",
    key: KeySource::Field("name"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("name", "name"),
        FieldSpec::text("race", "race"),
        FieldSpec::text("gender", "gender"),
        FieldSpec::text("type", "type"),
        FieldSpec::strings("bonuses", "bonuses"),
        FieldSpec::int("material_limit", "materialLimit", 100),
        FieldSpec::mapping("stats", "stats"),
        // Unavailable technique levels are authored as null and land as 0
        FieldSpec::mapping("technique_limits", "techniqueLimits"),
        FieldSpec::mapping("trap_limits", "trapLimits"),
    ],
};

pub static PHOTON_ARTS: Schema = Schema {
    name: "photon_arts",
    label: "Photon Arts",
    source_dir: "photon-arts",
    output_dir: Some("photon_arts"),
    script_class: "PhotonArtData",
    script_file: "photon_art_data.gd",
    key: KeySource::Field("name"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("name", "name"),
        FieldSpec::text("weapon_type", "weaponType"),
        FieldSpec::text("class_type", "classType"),
        FieldSpec::real("attack_mod", "attackMod"),
        FieldSpec::real("accuracy_mod", "accuracyMod"),
        FieldSpec::int("pp_cost", "ppCost", 0),
        FieldSpec::int("targets", "targets", 1),
        FieldSpec::real("hit_range", "range"),
        FieldSpec::real("area", "area"),
        FieldSpec::int("hits", "hits", 1),
        FieldSpec::text("notes", "notes"),
    ],
};

pub static MAGS: Schema = Schema {
    name: "mags",
    label: "Mags",
    source_dir: "mags",
    output_dir: Some("mags"),
    script_class: "MagData",
    script_file: "mag_data.gd",
    key: KeySource::Field("name"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("name", "name"),
        FieldSpec::text("japanese_name", "japaneseName"),
        FieldSpec::text("stage", "stage"),
        FieldSpec::int("evolution_level", "evolutionLevel", 0),
        FieldSpec::mapping("evolution_requirement", "evolutionRequirement"),
        FieldSpec::text("photon_blast", "photonBlast"),
        FieldSpec::int("pso_world_id", "psoWorldId", 0),
    ],
};

pub static MAG_PERSONALITIES: Schema = Schema {
    name: "mag_personalities",
    label: "Mag Personalities",
    source_dir: "mag-personalities",
    output_dir: Some("mag_personalities"),
    script_class: "MagPersonalityData",
    script_file: "mag_personality_data.gd",
    key: KeySource::Field("name"),
    single_unit: false,
    fields: &[
        FieldSpec::id(),
        FieldSpec::text("name", "name"),
        FieldSpec::text("japanese_name", "japaneseName"),
        FieldSpec::text("category", "category"),
        FieldSpec::text("tier", "tier"),
        FieldSpec::int("unlock_level", "unlockLevel", 0),
        FieldSpec::text("favorite_food", "favoriteFood"),
        FieldSpec::text("switch_from", "switchFrom"),
        FieldSpec::mapping("triggers", "triggers"),
    ],
};

/// `levels` key of the record, or the record itself when the file is a bare list.
fn experience_levels(ctx: &MapContext<'_>) -> Value {
    let root = ctx.record.root();
    match root.get("levels").and_then(Value::as_list) {
        Some(levels) => Value::List(levels.to_vec()),
        None => match root {
            Value::List(levels) => Value::List(levels.clone()),
            _ => Value::List(Vec::new()),
        },
    }
}

pub static EXPERIENCE: Schema = Schema {
    name: "experience",
    label: "Experience Table",
    source_dir: "experience",
    output_dir: None,
    script_class: "ExperienceTable",
    script_file: "experience_table.gd",
    key: KeySource::Fixed("experience_table"),
    single_unit: true,
    fields: &[FieldSpec::derived("levels", experience_levels)],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::parse_record;
    use crate::lookup::LookupTables;
    use crate::schema::map_record;
    use pretty_assertions::assert_eq;

    fn document(schema: &'static Schema, json: &str) -> crate::formats::ResourceDocument {
        let record = parse_record(json).unwrap();
        map_record(schema, &record, "unit", &LookupTables::standard())
            .unwrap()
            .to_document()
    }

    #[test]
    fn test_photon_art_decorated_numbers() {
        let doc = document(
            &PHOTON_ARTS,
            r#"{"name": "Tornado Dance", "weaponType": "Saber", "attackMod": "1.3",
                "range": "12m", "area": "abc", "ppCost": 14}"#,
        );
        assert_eq!(doc.property("id"), Some("\"tornado_dance\""));
        assert_eq!(doc.property("weapon_type"), Some("\"Saber\""));
        assert_eq!(doc.property("attack_mod"), Some("1.3"));
        assert_eq!(doc.property("accuracy_mod"), Some("0.0"));
        assert_eq!(doc.property("hit_range"), Some("12.0"));
        assert_eq!(doc.property("area"), Some("0.0"));
        assert_eq!(doc.property("targets"), Some("1"));
        assert_eq!(doc.property("hits"), Some("1"));
    }

    #[test]
    fn test_photon_art_non_finite_numbers() {
        let doc = document(
            &PHOTON_ARTS,
            r#"{"name": "Rising Crush", "range": "NaN", "area": "inf"}"#,
        );
        assert_eq!(doc.property("hit_range"), Some("nan"));
        assert_eq!(doc.property("area"), Some("inf"));
    }

    #[test]
    fn test_class_limits() {
        let doc = document(
            &CLASSES,
            r#"{"name": "HUmar", "race": "Human", "gender": "Male", "type": "Hunter",
                "bonuses": ["Saber Mastery"], "stats": {"hp": [100, 1200]},
                "techniqueLimits": {"foie": 15, "grants": null}}"#,
        );
        assert_eq!(doc.property("material_limit"), Some("100"));
        assert_eq!(doc.property("bonuses"), Some("PackedStringArray(\"Saber Mastery\")"));
        assert_eq!(doc.property("stats"), Some("{\n  \"hp\": [100, 1200]\n}"));
        assert_eq!(
            doc.property("technique_limits"),
            Some("{\n  \"foie\": 15,\n  \"grants\": 0\n}")
        );
        assert_eq!(doc.property("trap_limits"), Some("{}"));
    }

    #[test]
    fn test_experience_levels() {
        let doc = document(&EXPERIENCE, r#"{"levels": [0, 30, 90]}"#);
        assert_eq!(doc.script_class, "ExperienceTable");
        assert_eq!(doc.properties.len(), 1);
        assert_eq!(doc.property("levels"), Some("[0, 30, 90]"));

        let doc = document(&EXPERIENCE, "[0, 30, 90, 180]");
        assert_eq!(doc.property("levels"), Some("[0, 30, 90, 180]"));

        let doc = document(&EXPERIENCE, r#"{"curve": "fast"}"#);
        assert_eq!(doc.property("levels"), Some("[]"));
    }

    #[test]
    fn test_mag_personality_defaults() {
        let doc = document(&MAG_PERSONALITIES, r#"{"name": "Faithful"}"#);
        assert_eq!(doc.property("unlock_level"), Some("0"));
        assert_eq!(doc.property("favorite_food"), Some("\"\""));
        assert_eq!(doc.property("triggers"), Some("{}"));
    }
}
