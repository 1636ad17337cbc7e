//! File format handlers: content JSON in, Godot `.tres` out
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub mod record;
pub mod tres;
pub mod value;

// Re-export main types
pub use record::{Record, parse_record, read_record};
pub use tres::{ResourceDocument, TresFields, serialize_tres, to_literal, write_tres};
pub use value::{Value, ValueMap};
