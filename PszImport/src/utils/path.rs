//! Path and directory listing utilities

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Normalize path separators to forward slashes (for log and summary output)
pub fn normalize_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Path relative to `base` for display, or the full path when outside it
pub fn display_relative<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> String {
    let path = path.as_ref();
    normalize_path(path.strip_prefix(base.as_ref()).unwrap_or(path))
}

/// Files directly inside `dir` with the given extension (case-insensitive)
///
/// # Returns
/// A sorted list of file paths.
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn files_with_extension<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Immediate sub-directories of `dir`
///
/// # Returns
/// A sorted list of directory paths.
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn subdirectories<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            dirs.push(entry.path().to_path_buf());
        }
    }

    dirs.sort();
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_display_relative() {
        assert_eq!(
            display_relative(Path::new("content/weapons/saber.json"), "content"),
            "weapons/saber.json"
        );
        assert_eq!(display_relative(Path::new("elsewhere/x.json"), "content"), "elsewhere/x.json");
    }

    #[test]
    fn test_listing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::write(dir.path().join("b.png"), "").unwrap();
        fs::write(dir.path().join("a.PNG"), "").unwrap();
        fs::write(dir.path().join("c.glb"), "").unwrap();

        let dirs = subdirectories(dir.path()).unwrap();
        assert_eq!(dirs, [dir.path().join("alpha"), dir.path().join("zeta")]);

        let pngs = files_with_extension(dir.path(), "png").unwrap();
        assert_eq!(pngs, [dir.path().join("a.PNG"), dir.path().join("b.png")]);
    }
}
