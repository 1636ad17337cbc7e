//! Enemy model bundle relocation
//!
//! Each bundle directory carries an `info.json` manifest naming the model
//! base. The model is renamed after the bundle so the engine can find it by
//! enemy identifier:
//!
//! ```text
//! <bundle>/<base>/<base>.glb  ->  <dest>/<bundle>/<bundle>.glb
//! <bundle>/<base>/*.png       ->  <dest>/<bundle>/
//! <bundle>/textures/*.png     ->  <dest>/<bundle>/   (never overwrites)
//! ```
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::types::{
    EnemyRelocationResult, ImportedBundle, RelocationOptions, RelocationProgress,
    RelocationProgressCallback,
};
use crate::error::{Error, Result};
use crate::utils::path::{files_with_extension, subdirectories};

/// Bundle manifest file name
pub const MANIFEST_FILE: &str = "info.json";

#[derive(Debug, Deserialize)]
struct BundleManifest {
    #[serde(rename = "modelBaseName", default)]
    model_base_name: Option<String>,
}

/// Read the model base name from a bundle's manifest
///
/// # Errors
/// Returns [`Error::ManifestNotFound`] if the bundle has no manifest and
/// [`Error::ManifestMissingBaseName`] if it names no model.
pub fn read_model_base_name<P: AsRef<Path>>(bundle_dir: P) -> Result<String> {
    let bundle_dir = bundle_dir.as_ref();
    let manifest_path = bundle_dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(Error::ManifestNotFound {
            path: bundle_dir.to_path_buf(),
        });
    }

    let manifest: BundleManifest = serde_json::from_str(&fs::read_to_string(&manifest_path)?)?;
    manifest
        .model_base_name
        .filter(|name| !name.is_empty())
        .ok_or(Error::ManifestMissingBaseName {
            path: manifest_path,
        })
}

/// Copy every `.png` in `from` into `to`
///
/// With `overwrite` off, files already present at the destination are left
/// alone. Returns the number of files copied.
fn copy_textures(from: &Path, to: &Path, overwrite: bool) -> Result<usize> {
    let mut copied = 0;
    for texture in files_with_extension(from, "png")? {
        let Some(name) = texture.file_name() else {
            continue;
        };
        let dest = to.join(name);
        if !overwrite && dest.exists() {
            continue;
        }
        fs::copy(&texture, &dest)?;
        copied += 1;
    }
    Ok(copied)
}

/// Relocate one enemy bundle into `dest_root/<bundle>/`
///
/// # Errors
/// Returns an error if the manifest is missing or incomplete, the model does
/// not exist, or a copy fails.
pub fn relocate_enemy<P: AsRef<Path>, Q: AsRef<Path>>(
    bundle_dir: P,
    dest_root: Q,
) -> Result<ImportedBundle> {
    let bundle_dir = bundle_dir.as_ref();
    let id = bundle_dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidPath(bundle_dir.display().to_string()))?
        .to_string();

    let base = read_model_base_name(bundle_dir)?;
    let model_dir = bundle_dir.join(&base);
    let model_src = model_dir.join(format!("{base}.glb"));
    if !model_src.is_file() {
        return Err(Error::ModelNotFound { path: model_src });
    }

    let dest_dir = dest_root.as_ref().join(&id);
    fs::create_dir_all(&dest_dir)?;

    let model = dest_dir.join(format!("{id}.glb"));
    fs::copy(&model_src, &model)?;

    let mut texture_count = copy_textures(&model_dir, &dest_dir, true)?;
    let textures_dir = bundle_dir.join("textures");
    if textures_dir.is_dir() {
        // Model directory textures win over shared ones with the same name
        texture_count += copy_textures(&textures_dir, &dest_dir, false)?;
    }

    tracing::debug!("Imported {} ({}.glb + {} textures)", id, base, texture_count);
    Ok(ImportedBundle {
        id,
        model_base_name: base,
        model,
        texture_count,
    })
}

/// Relocate every enemy bundle under `source_root`
///
/// Bundles are processed in name order. Deny-listed bundles are skipped and
/// a failing bundle is recorded without stopping the run.
///
/// # Errors
/// Returns an error if `source_root` is not a directory or cannot be listed.
pub fn relocate_enemies<P: AsRef<Path>, Q: AsRef<Path>>(
    source_root: P,
    dest_root: Q,
    options: &RelocationOptions,
    progress: RelocationProgressCallback<'_>,
) -> Result<EnemyRelocationResult> {
    let source_root = source_root.as_ref();
    let dest_root = dest_root.as_ref();
    if !source_root.is_dir() {
        return Err(Error::InvalidPath(format!(
            "source directory not found: {}",
            source_root.display()
        )));
    }

    let bundles = subdirectories(source_root)?;
    tracing::info!(
        "Importing enemy models from {} ({} bundles)",
        source_root.display(),
        bundles.len()
    );
    fs::create_dir_all(dest_root)?;

    let mut result = EnemyRelocationResult::default();
    let total = bundles.len();
    for (index, bundle_dir) in bundles.iter().enumerate() {
        let id = bundle_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        progress(&RelocationProgress::new(index + 1, total, id.clone()));

        if options.is_skipped(&id) {
            tracing::info!("Skipping {}: multi-part boss", id);
            result.skipped.push(id);
            continue;
        }

        match relocate_enemy(bundle_dir, dest_root) {
            Ok(imported) => result.imported.push(imported),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", id, e);
                result.failed.push(format!("{id}: {e}"));
            }
        }
    }

    tracing::info!(
        "Done: {} imported, {} skipped, {} failed",
        result.imported.len(),
        result.skipped.len(),
        result.failed.len()
    );
    Ok(result)
}
