//! `.tres` resource document structures
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

/// Godot resource format version written in the `[gd_resource]` header.
pub const TRES_FORMAT: u32 = 3;

/// One `name = literal` line of the `[resource]` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceProperty {
    /// Property name as declared by the resource script.
    pub name: String,
    /// Already-serialized `.tres` literal.
    pub literal: String,
}

/// A single-resource `.tres` document backed by a GDScript resource class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDocument {
    /// `script_class` attribute of the header (e.g. `WeaponData`).
    pub script_class: String,
    /// `res://` path of the script declaring the fields.
    pub script_path: String,
    /// Properties in declaration order.
    pub properties: Vec<ResourceProperty>,
}

impl ResourceDocument {
    /// Create an empty document for a script class.
    pub fn new(script_class: impl Into<String>, script_path: impl Into<String>) -> Self {
        Self {
            script_class: script_class.into(),
            script_path: script_path.into(),
            properties: Vec::new(),
        }
    }

    /// Append a property line.
    pub fn push(&mut self, name: impl Into<String>, literal: impl Into<String>) {
        self.properties.push(ResourceProperty {
            name: name.into(),
            literal: literal.into(),
        });
    }

    /// Literal of the first property with this name.
    #[cfg(test)]
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.literal.as_str())
    }
}
