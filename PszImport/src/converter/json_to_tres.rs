//! Convert content JSON records to `.tres` resources
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::formats::{read_record, write_tres};
use crate::lookup::LookupTables;
use crate::schema::{EngineRecord, Schema, map_record};

/// Read and map one source file without writing anything
///
/// # Errors
/// Returns an error if the file cannot be read, holds invalid JSON, or the
/// record has no usable identifier.
pub fn map_file<P: AsRef<Path>>(
    schema: &'static Schema,
    source: P,
    tables: &LookupTables,
) -> Result<EngineRecord> {
    let source = source.as_ref();
    let source_name = source
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::InvalidPath(source.display().to_string()))?;

    let record = read_record(source)?;
    map_record(schema, &record, source_name, tables)
}

/// Convert one source file and write the resource under `output_root`
///
/// Returns the path of the written `.tres`.
///
/// # Errors
/// Returns an error if the source cannot be read or mapped, or the output
/// cannot be written.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    schema: &'static Schema,
    source: P,
    output_root: Q,
    tables: &LookupTables,
) -> Result<PathBuf> {
    let source = source.as_ref();
    tracing::debug!("Converting {}: {}", schema.name, source.display());

    let mapped = map_file(schema, source, tables)?;
    let dest = schema.output_path(output_root.as_ref(), &mapped.identifier);
    write_tres(&mapped.to_document(), &dest)?;
    Ok(dest)
}
