//! Error types for `PszImport`
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `PszImport` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Content Record Errors ====================
    /// The record lacks the field its identifier is derived from.
    #[error("missing required field `{field}`")]
    MissingPrimaryKey {
        /// The source key that was expected to hold the record's name/ID.
        field: &'static str,
    },

    /// The record's key produced an empty identifier after slugification.
    #[error("'{value}' does not produce a usable identifier")]
    InvalidIdentifier {
        /// The raw key value.
        value: String,
    },

    /// The content unit's root is not a shape the schema can read.
    #[error("invalid content record: {0}")]
    InvalidRecord(String),

    /// No schema is registered under the requested category key.
    #[error("unknown content category: {0}")]
    UnknownCategory(String),

    // ==================== Asset Relocation Errors ====================
    /// The bundle has no `info.json` manifest.
    #[error("no info.json in {path}")]
    ManifestNotFound {
        /// The bundle directory.
        path: PathBuf,
    },

    /// The bundle manifest has an empty or missing `modelBaseName`.
    #[error("no modelBaseName in {path}")]
    ManifestMissingBaseName {
        /// Path to the manifest.
        path: PathBuf,
    },

    /// The GLB model named by the manifest does not exist.
    #[error("GLB not found at {path}")]
    ModelNotFound {
        /// The expected model path.
        path: PathBuf,
    },

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML config parsing error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    // ==================== File System Errors ====================
    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

// Add conversion from walkdir::Error
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `PszImport` operations.
pub type Result<T> = std::result::Result<T, Error>;
