//! `.tres` file writing
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::document::{ResourceDocument, TRES_FORMAT};
use crate::error::Result;

/// Write a resource document to disk, creating parent directories
///
/// # Errors
/// Returns an error if the directory or file cannot be written.
pub fn write_tres<P: AsRef<Path>>(doc: &ResourceDocument, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serialize_tres(doc))?;
    Ok(())
}

/// Serialize a resource document to `.tres` text
#[must_use]
pub fn serialize_tres(doc: &ResourceDocument) -> String {
    let mut out = String::new();

    // Header: one external resource (the script), hence load_steps=2
    let _ = writeln!(
        out,
        "[gd_resource type=\"Resource\" script_class=\"{}\" load_steps=2 format={TRES_FORMAT}]",
        doc.script_class
    );
    out.push('\n');
    let _ = writeln!(
        out,
        "[ext_resource type=\"Script\" path=\"{}\" id=\"1\"]",
        doc.script_path
    );
    out.push('\n');
    out.push_str("[resource]\n");
    out.push_str("script = ExtResource(\"1\")\n");

    for property in &doc.properties {
        let _ = writeln!(out, "{} = {}", property.name, property.literal);
    }

    out
}
