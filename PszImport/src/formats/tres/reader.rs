//! Line-based field extraction from produced `.tres` files
//!
//! This is not a `.tres` parser: it reads top-level `name = value` lines of
//! the `[resource]` block, which is all the editor export needs.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Top-level property lines of a `.tres` file.
#[derive(Debug, Clone)]
pub struct TresFields {
    text: String,
}

impl TresFields {
    #[must_use]
    pub fn parse(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read a `.tres` file from disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::parse(fs::read_to_string(path)?))
    }

    /// Value of the first `name = value` line, with surrounding quotes removed.
    ///
    /// Indented lines (entries of multi-line dictionaries and arrays) never
    /// match, and a line whose value is empty counts as absent.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<String> {
        self.text.lines().find_map(|line| {
            let rest = line.strip_prefix(name)?;
            let value = rest.trim_start().strip_prefix('=')?.trim();
            if value.is_empty() {
                return None;
            }
            Some(strip_quotes(value).to_string())
        })
    }

    /// Like [`TresFields::field`], with a fallback.
    #[must_use]
    pub fn field_or(&self, name: &str, default: &str) -> String {
        self.field(name).unwrap_or_else(|| default.to_string())
    }
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Extract the quoted entries of a `PackedStringArray("a", "b")` literal.
///
/// Empty strings are skipped, and anything without the constructor yields
/// no entries.
#[must_use]
pub fn parse_string_array(literal: &str) -> Vec<String> {
    let Some(start) = literal.find("PackedStringArray(") else {
        return Vec::new();
    };
    let inner = &literal[start + "PackedStringArray(".len()..];
    let Some(end) = inner.rfind(')') else {
        return Vec::new();
    };

    // Odd-indexed pieces of a quote split are the quoted contents
    inner[..end]
        .split('"')
        .skip(1)
        .step_by(2)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
