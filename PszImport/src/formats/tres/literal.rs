//! `.tres` literal serialization for structured values
//!
//! Produces Godot variant literals: `0`, `true`, `1.5`, `"text"`, `[...]`,
//! `{...}` and `PackedStringArray(...)`.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use crate::formats::value::{Value, ValueMap};

const INDENT: &str = "  ";

/// Serialize a value to a `.tres` literal at the given nesting level.
///
/// Null has no literal in the resource format and becomes `0`, matching the
/// numeric default of the engine-side fields that receive it.
#[must_use]
pub fn to_literal(value: &Value, indent: usize) -> String {
    match value {
        Value::Null => "0".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => float_literal(*f),
        Value::String(s) => quote(s),
        Value::Map(map) => map_literal(map, indent),
        Value::List(items) => list_literal(items, indent),
    }
}

/// `PackedStringArray("a", "b")`, or `PackedStringArray()` when empty.
#[must_use]
pub fn string_array_literal<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| quote(s.as_ref())).collect();
    format!("PackedStringArray({})", quoted.join(", "))
}

/// Escape a string for a double-quoted `.tres` literal.
///
/// Only `"` and newlines are escaped. A quote that already sits behind an odd
/// run of backslashes counts as escaped, which keeps the function idempotent.
#[must_use]
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut backslashes = 0usize;

    for c in s.chars() {
        match c {
            '"' => {
                if backslashes % 2 == 0 {
                    out.push('\\');
                }
                out.push('"');
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
    }

    out
}

fn quote(s: &str) -> String {
    format!("\"{}\"", escape_string(s))
}

/// Shortest round-trip form that still reads back as a float (`12.0`, not `12`).
/// Non-finite values use Godot's `nan` and `inf` tokens.
fn float_literal(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{f:?}")
    }
}

fn map_literal(map: &ValueMap, indent: usize) -> String {
    if map.is_empty() {
        return "{}".to_string();
    }

    let prefix = INDENT.repeat(indent);
    let entries: Vec<String> = map
        .iter()
        .map(|(key, value)| {
            format!("{prefix}{INDENT}\"{key}\": {}", to_literal(value, indent + 1))
        })
        .collect();

    format!("{{\n{}\n{prefix}}}", entries.join(",\n"))
}

fn list_literal(items: &[Value], indent: usize) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }

    // Flat numeric arrays stay on one line
    if items.iter().all(Value::is_number) {
        let numbers: Vec<String> = items.iter().map(|item| to_literal(item, indent)).collect();
        return format!("[{}]", numbers.join(", "));
    }

    let prefix = INDENT.repeat(indent);
    let elements: Vec<String> = items
        .iter()
        .map(|item| format!("{prefix}{INDENT}{}", to_literal(item, indent + 1)))
        .collect();

    format!("[\n{}\n{prefix}]", elements.join(",\n"))
}
