//! Player model variation relocation
//!
//! ```text
//! pc_XXX/pc_XXX/*.glb     ->  <dest>/pc_XXX/
//! pc_XXX/textures/*.png   ->  <dest>/pc_XXX/textures/
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use super::types::{
    PlayerRelocationResult, PlayerVariation, RelocationProgress, RelocationProgressCallback,
};
use crate::error::{Error, Result};
use crate::utils::path::{files_with_extension, subdirectories};

/// Whether a directory name is a regular player variation (`pc_` + three
/// digits). Special variations such as `pc_a01` are excluded.
#[must_use]
pub fn is_variation_name(name: &str) -> bool {
    name.strip_prefix("pc_")
        .is_some_and(|digits| digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn copy_all(files: &[PathBuf], dest_dir: &Path) -> Result<usize> {
    if files.is_empty() {
        return Ok(0);
    }
    fs::create_dir_all(dest_dir)?;
    for file in files {
        if let Some(name) = file.file_name() {
            fs::copy(file, dest_dir.join(name))?;
        }
    }
    Ok(files.len())
}

/// Copy the models and textures of one variation
///
/// # Errors
/// Returns an error if a directory cannot be read or a copy fails.
pub fn relocate_variation<P: AsRef<Path>, Q: AsRef<Path>>(
    variation_dir: P,
    dest_root: Q,
) -> Result<PlayerVariation> {
    let variation_dir = variation_dir.as_ref();
    let name = variation_dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidPath(variation_dir.display().to_string()))?
        .to_string();
    let dest_dir = dest_root.as_ref().join(&name);

    let inner = variation_dir.join(&name);
    let models = if inner.is_dir() {
        files_with_extension(&inner, "glb")?
    } else {
        Vec::new()
    };
    let glb_count = copy_all(&models, &dest_dir)?;

    let textures_dir = variation_dir.join("textures");
    let textures = if textures_dir.is_dir() {
        files_with_extension(&textures_dir, "png")?
    } else {
        Vec::new()
    };
    let png_count = copy_all(&textures, &dest_dir.join("textures"))?;

    Ok(PlayerVariation {
        name,
        glb_count,
        png_count,
    })
}

/// Relocate every player variation under `source_root`
///
/// # Errors
/// Returns an error if `source_root` is not a directory. A variation that
/// fails to copy is recorded in `failed` and the run continues.
pub fn relocate_players<P: AsRef<Path>, Q: AsRef<Path>>(
    source_root: P,
    dest_root: Q,
    progress: RelocationProgressCallback<'_>,
) -> Result<PlayerRelocationResult> {
    let source_root = source_root.as_ref();
    if !source_root.is_dir() {
        return Err(Error::InvalidPath(format!(
            "source directory not found: {}",
            source_root.display()
        )));
    }

    let variations: Vec<_> = subdirectories(source_root)?
        .into_iter()
        .filter(|dir| {
            dir.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_variation_name)
        })
        .collect();
    tracing::info!("Found {} player variations to import", variations.len());

    let mut result = PlayerRelocationResult::default();
    let total = variations.len();
    for (index, dir) in variations.iter().enumerate() {
        let variation = match relocate_variation(dir, dest_root.as_ref()) {
            Ok(variation) => variation,
            Err(e) => {
                let name = dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                tracing::warn!("Skipping {}: {}", name, e);
                progress(&RelocationProgress::new(index + 1, total, name.clone()));
                result.failed.push(format!("{name}: {e}"));
                continue;
            }
        };
        progress(&RelocationProgress::new(index + 1, total, variation.name.clone()));

        if variation.glb_count > 0 {
            tracing::debug!(
                "{}: {} GLB, {} PNG",
                variation.name,
                variation.glb_count,
                variation.png_count
            );
            result.imported.push(variation);
        } else {
            tracing::info!("{}: skipped (no GLB found)", variation.name);
            result.skipped.push(variation.name);
        }
    }

    tracing::info!(
        "Done: {} variations, {} GLB files, {} textures",
        result.imported.len(),
        result.total_glb(),
        result.total_png()
    );
    Ok(result)
}
