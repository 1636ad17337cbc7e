//! The schema engine: content record in, engine record out
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use super::coerce::{decorated_f64, integer_value};
use super::identifier::slugify;
use super::{FieldSpec, KeySource, Rule, Schema};
use crate::error::{Error, Result};
use crate::formats::tres::{string_array_literal, to_literal};
use crate::formats::{Record, ResourceDocument, Value, ValueMap};
use crate::lookup::LookupTables;

/// Everything a field rule can see while a record is mapped.
#[derive(Debug, Clone, Copy)]
pub struct MapContext<'a> {
    pub record: &'a Record,
    pub tables: &'a LookupTables,
    pub identifier: &'a str,
    /// Source file stem.
    pub source_name: &'a str,
}

/// A resolved field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Value(Value),
    /// Serialized as `PackedStringArray(...)`.
    Strings(Vec<String>),
}

impl FieldValue {
    /// The `.tres` literal for this value.
    #[must_use]
    pub fn literal(&self) -> String {
        match self {
            FieldValue::Value(value) => to_literal(value, 0),
            FieldValue::Strings(items) => string_array_literal(items),
        }
    }

    /// Plain value view; string arrays become a list of strings.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            FieldValue::Value(value) => value,
            FieldValue::Strings(items) => Value::List(items.into_iter().map(Value::from).collect()),
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            FieldValue::Value(value) => Some(value),
            FieldValue::Strings(_) => None,
        }
    }
}

/// A fully resolved record, ready to serialize.
#[derive(Debug, Clone)]
pub struct EngineRecord {
    pub schema: &'static Schema,
    pub identifier: String,
    /// Fields in declaration order.
    pub fields: Vec<(&'static str, FieldValue)>,
}

impl EngineRecord {
    #[cfg(test)]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Build the resource document for this record.
    #[must_use]
    pub fn to_document(&self) -> ResourceDocument {
        let mut doc = ResourceDocument::new(self.schema.script_class, self.schema.script_path());
        for (name, value) in &self.fields {
            doc.push(*name, value.literal());
        }
        doc
    }
}

/// Map one content record through a schema
///
/// `source_name` is the stem of the file the record came from; it feeds
/// stem-keyed identifiers and `SourceName` fields.
///
/// # Errors
/// Returns [`Error::MissingPrimaryKey`] when the identifier field is absent,
/// [`Error::InvalidIdentifier`] when it slugifies to nothing, and
/// [`Error::InvalidRecord`] when a whole-record field meets a non-mapping
/// root. Every other gap is filled with the field's default.
pub fn map_record(
    schema: &'static Schema,
    record: &Record,
    source_name: &str,
    tables: &LookupTables,
) -> Result<EngineRecord> {
    let identifier = derive_identifier(schema, record, source_name)?;
    let ctx = MapContext {
        record,
        tables,
        identifier: &identifier,
        source_name,
    };

    let mut fields = Vec::with_capacity(schema.fields.len());
    for spec in schema.fields {
        fields.push((spec.name, resolve(spec.rule, record.root(), &ctx)?));
    }

    Ok(EngineRecord {
        schema,
        identifier,
        fields,
    })
}

fn derive_identifier(schema: &Schema, record: &Record, source_name: &str) -> Result<String> {
    let raw = match schema.key {
        KeySource::Fixed(id) => return Ok(id.to_string()),
        KeySource::Field(key) => record.require_str(key)?,
        KeySource::FieldOrStem(key) => record
            .str(key)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(source_name),
        KeySource::Stem => source_name,
    };

    let identifier = slugify(raw);
    if identifier.is_empty() {
        return Err(Error::InvalidIdentifier {
            value: raw.to_string(),
        });
    }
    Ok(identifier)
}

/// Resolve one rule against `source`: the record root, or a sub-record
/// inside a `Records` field.
fn resolve(rule: Rule, source: &Value, ctx: &MapContext<'_>) -> Result<FieldValue> {
    let value = match rule {
        Rule::Identifier => Value::from(ctx.identifier),
        Rule::SourceName => Value::from(ctx.source_name),
        Rule::Text { key, default } => Value::from(source.text_or(key, default)),
        Rule::Integer { key, default } => integer_value(source.get_path(key), default),
        Rule::Real { key, default } => Value::Float(decorated_f64(source.get_path(key), default)),
        Rule::Flag { key, default } => Value::Bool(source.bool_or(key, default)),
        Rule::Mapping { key } => Value::Map(source.map_or_empty(key)),
        Rule::Sequence { key } => Value::List(source.list_or_empty(key)),
        Rule::Strings { key } => {
            let items = source
                .get_path(key)
                .and_then(Value::as_list)
                .unwrap_or_default()
                .iter()
                .filter_map(Value::scalar_text)
                .collect();
            return Ok(FieldValue::Strings(items));
        }
        Rule::Lookup { key, table } => {
            let table = ctx.tables.table(table);
            let raw = source.get_path(key).and_then(Value::as_str);
            if let Some(unknown) = raw.filter(|raw| table.get(raw).is_none()) {
                tracing::warn!(
                    "Unknown {} '{}' in {}, using default code {}",
                    table.name,
                    unknown,
                    ctx.source_name,
                    table.default_code()
                );
            }
            Value::Int(raw.map_or(table.default_code(), |raw| table.code_or_default(raw)))
        }
        Rule::Records { key, fields } => {
            let items = source
                .get_path(key)
                .and_then(Value::as_list)
                .unwrap_or_default();
            let mut mapped = Vec::with_capacity(items.len());
            for item in items {
                mapped.push(Value::Map(resolve_sub_record(fields, item, ctx)?));
            }
            Value::List(mapped)
        }
        Rule::Whole => match ctx.record.root() {
            Value::Map(map) => Value::Map(map.clone()),
            _ => {
                return Err(Error::InvalidRecord(format!(
                    "{} is not a mapping",
                    ctx.source_name
                )));
            }
        },
        Rule::Constant(fixed) => fixed.to_value(),
        Rule::Derived(derive) => derive(ctx),
    };

    Ok(FieldValue::Value(value))
}

fn resolve_sub_record(
    fields: &[FieldSpec],
    item: &Value,
    ctx: &MapContext<'_>,
) -> Result<ValueMap> {
    let mut map = ValueMap::with_capacity(fields.len());
    for spec in fields {
        map.insert(spec.name.to_string(), resolve(spec.rule, item, ctx)?.into_value());
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::parse_record;
    use crate::lookup::TableKind;
    use crate::schema::{Fixed, KeySource};

    static NESTED: [FieldSpec; 2] = [
        FieldSpec::text("label", "name"),
        FieldSpec::int("cost", "cost", 5),
    ];

    static GADGET: Schema = Schema {
        name: "gadgets",
        label: "Gadgets",
        source_dir: "gadgets",
        output_dir: Some("gadgets"),
        script_class: "GadgetData",
        script_file: "gadget_data.gd",
        key: KeySource::Field("name"),
        single_unit: false,
        fields: &[
            FieldSpec::id(),
            FieldSpec::new("source", Rule::SourceName),
            FieldSpec::text("name", "name"),
            FieldSpec::text_or("mood", "mood", "calm"),
            FieldSpec::int("level", "level", 1),
            FieldSpec::real("reach", "reach"),
            FieldSpec::flag("shiny", "shiny"),
            FieldSpec::int("fire", "resist.fire", 0),
            FieldSpec::lookup("element", "element", TableKind::Element),
            FieldSpec::strings("tags", "tags"),
            FieldSpec::records("parts", "parts", &NESTED),
            FieldSpec::constant("speed", Fixed::Real(3.0)),
        ],
    };

    fn map(json: &str) -> Result<EngineRecord> {
        let record = parse_record(json).unwrap();
        map_record(&GADGET, &record, "gadget_file", &LookupTables::standard())
    }

    fn value<'a>(record: &'a EngineRecord, name: &str) -> &'a Value {
        record.get(name).and_then(FieldValue::as_value).unwrap()
    }

    #[test]
    fn test_defaults_fill_every_field() {
        let record = map(r#"{"name": "Gadget Mk. II"}"#).unwrap();
        assert_eq!(record.identifier, "gadget_mk_ii");
        assert_eq!(record.fields.len(), GADGET.fields.len());
        assert_eq!(value(&record, "source"), &Value::from("gadget_file"));
        assert_eq!(value(&record, "mood"), &Value::from("calm"));
        assert_eq!(value(&record, "level"), &Value::Int(1));
        assert_eq!(value(&record, "reach"), &Value::Float(0.0));
        assert_eq!(value(&record, "shiny"), &Value::Bool(false));
        assert_eq!(value(&record, "fire"), &Value::Int(0));
        assert_eq!(value(&record, "element"), &Value::Int(0));
        assert_eq!(record.get("tags"), Some(&FieldValue::Strings(Vec::new())));
        assert_eq!(value(&record, "parts"), &Value::List(Vec::new()));
        assert_eq!(value(&record, "speed"), &Value::Float(3.0));
    }

    #[test]
    fn test_source_values_are_used() {
        let record = map(
            r#"{"name": "Gadget", "level": "4", "reach": "12m", "shiny": true,
                "resist": {"fire": 20}, "element": "Machine", "tags": ["a", 2],
                "parts": [{"name": "Arm"}, {"name": "Leg", "cost": 9}]}"#,
        )
        .unwrap();
        assert_eq!(value(&record, "level"), &Value::Int(4));
        assert_eq!(value(&record, "reach"), &Value::Float(12.0));
        assert_eq!(value(&record, "shiny"), &Value::Bool(true));
        assert_eq!(value(&record, "fire"), &Value::Int(20));
        assert_eq!(value(&record, "element"), &Value::Int(2));
        assert_eq!(
            record.get("tags"),
            Some(&FieldValue::Strings(vec!["a".to_string(), "2".to_string()]))
        );

        let parts = value(&record, "parts").as_list().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].get("label"), Some(&Value::from("Arm")));
        assert_eq!(parts[0].get("cost"), Some(&Value::Int(5)));
        assert_eq!(parts[1].get("cost"), Some(&Value::Int(9)));
    }

    #[test]
    fn test_unknown_enum_uses_default() {
        let record = map(r#"{"name": "Gadget", "element": "Plasma"}"#).unwrap();
        assert_eq!(value(&record, "element"), &Value::Int(0));
    }

    #[test]
    fn test_missing_primary_key() {
        assert!(matches!(
            map(r#"{"level": 3}"#),
            Err(Error::MissingPrimaryKey { field: "name" })
        ));
        assert!(matches!(
            map(r#"{"name": "???"}"#),
            Err(Error::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_document_follows_declaration_order() {
        let record = map(r#"{"name": "Gadget"}"#).unwrap();
        let doc = record.to_document();
        let names: Vec<&str> = doc.properties.iter().map(|p| p.name.as_str()).collect();
        let declared: Vec<&str> = GADGET.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, declared);
        assert_eq!(doc.script_path, "res://scripts/resources/gadget_data.gd");
        assert_eq!(doc.property("tags"), Some("PackedStringArray()"));
    }
}
