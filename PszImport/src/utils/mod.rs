//! Utility functions

pub mod path;

pub use path::{display_relative, files_with_extension, normalize_path, subdirectories};
