//! Content records: one parsed JSON unit per game entity
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use super::value::Value;
use crate::error::{Error, Result};

/// One content record as read from a source unit.
///
/// Every accessor is total: a missing key or a value of the wrong shape
/// yields the caller's default (or `None`), never a panic. The only typed
/// failure is [`Record::require_str`], used for primary keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    root: Value,
}

impl Record {
    #[must_use]
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// The record's root value (normally a mapping).
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Raw value at a key or dotted path.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get_path(key)
    }

    /// A string field that must be present, used for identifiers.
    pub fn require_str(&self, key: &'static str) -> Result<&str> {
        self.get(key)
            .and_then(Value::as_str)
            .ok_or(Error::MissingPrimaryKey { field: key })
    }

    /// A string field, or `None` when absent or not a string.
    #[must_use]
    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Boolean field, falling back to `default` for anything that is not a bool.
    #[must_use]
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.root.bool_or(key, default)
    }
}

impl From<serde_json::Value> for Record {
    fn from(json: serde_json::Value) -> Self {
        Self::new(Value::from(json))
    }
}

/// Parse a content record from JSON text
///
/// # Errors
/// Returns an error if the JSON is malformed.
pub fn parse_record(content: &str) -> Result<Record> {
    let json: serde_json::Value = serde_json::from_str(content)?;
    Ok(Record::from(json))
}

/// Read a content record from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid JSON.
pub fn read_record<P: AsRef<Path>>(path: P) -> Result<Record> {
    let content = fs::read_to_string(path)?;
    parse_record(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booma() -> Record {
        parse_record(
            r#"{"name": "Booma", "element": "Beast", "isRare": false,
                "locations": ["Gurhacia Valley"], "stats": {"hp": 10}, "level": null}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_require_str() {
        let record = booma();
        assert_eq!(record.require_str("name").unwrap(), "Booma");
        assert!(matches!(
            record.require_str("questId"),
            Err(Error::MissingPrimaryKey { field: "questId" })
        ));
        // A non-string key is as good as missing
        assert!(record.require_str("stats").is_err());
    }

    #[test]
    fn test_total_accessors_default() {
        let record = booma();
        assert!(!record.bool_or("isBoss", false));
        assert!(!record.bool_or("isRare", true));
        assert!(record.bool_or("element", true));
        assert_eq!(record.str("name"), Some("Booma"));
        assert_eq!(record.str("stats"), None);
    }

    #[test]
    fn test_bare_sequence_root() {
        let record = parse_record("[1, 2, 3]").unwrap();
        assert!(record.get("levels").is_none());
        assert_eq!(record.root().as_list().map(<[Value]>::len), Some(3));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_record("{\"name\": "), Err(Error::JsonError(_))));
    }
}
