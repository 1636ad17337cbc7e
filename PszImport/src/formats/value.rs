//! Generic structured values read from content JSON
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use indexmap::IndexMap;

/// Insertion-ordered mapping used for nested content objects.
pub type ValueMap = IndexMap<String, Value>;

/// A loosely-typed content value.
///
/// Mirrors the JSON data model but keeps integers and floats apart, since the
/// `.tres` literal for `3` and `3.0` differ and Godot types fields by them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Map(ValueMap),
    List(Vec<Value>),
}

impl Value {
    /// True for `Int` and `Float`.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric view of the value (integers are widened).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Look up a key on a mapping value. Non-mappings have no keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// Follow a dotted key path (`resistances.fire`) through nested mappings.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(self, |current, segment| current.get(segment))
    }

    /// Text form of the scalar at `path`, falling back to `default`.
    #[must_use]
    pub fn text_or(&self, path: &str, default: &str) -> String {
        self.get_path(path)
            .and_then(Value::scalar_text)
            .unwrap_or_else(|| default.to_string())
    }

    /// Boolean at `path`; anything that is not a bool yields `default`.
    #[must_use]
    pub fn bool_or(&self, path: &str, default: bool) -> bool {
        self.get_path(path).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Mapping at `path`, or an empty mapping.
    #[must_use]
    pub fn map_or_empty(&self, path: &str) -> ValueMap {
        self.get_path(path)
            .and_then(Value::as_map)
            .cloned()
            .unwrap_or_default()
    }

    /// Sequence at `path`, or an empty sequence.
    #[must_use]
    pub fn list_or_empty(&self, path: &str) -> Vec<Value> {
        self.get_path(path)
            .and_then(Value::as_list)
            .map(<[Value]>::to_vec)
            .unwrap_or_default()
    }

    /// Scalar text for a value, as it would read if written into a string field.
    ///
    /// Strings come back unchanged, numbers and booleans are rendered, and
    /// null or container values have no text form.
    #[must_use]
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(format!("{f:?}")),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Map(_) | Value::List(_) => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    // u64 beyond i64::MAX lands here too; content never carries such ids
                    Value::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
