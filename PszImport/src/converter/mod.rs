//! Content conversion
//!
//! Turns psz-sketch content JSON into Godot `.tres` resources, one file per
//! record, grouped by category.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod batch;
mod json_to_tres;
mod types;

pub use batch::{convert_all, find_json_files};
pub use json_to_tres::{convert_file, map_file};
pub use types::{
    CategoryResult, ConvertOptions, ConvertPhase, ConvertProgress, ConvertProgressCallback,
    ConvertSummary,
};
