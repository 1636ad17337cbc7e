//! TRES (Godot text resource) format module
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod document;
pub mod literal;
mod reader;
mod writer;

pub use document::{ResourceDocument, ResourceProperty, TRES_FORMAT};
pub use literal::{escape_string, string_array_literal, to_literal};
pub use reader::{TresFields, parse_string_array};
pub use writer::{serialize_tres, write_tres};
