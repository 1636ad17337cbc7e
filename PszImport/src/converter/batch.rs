//! Batch content conversion
//!
//! Walks the content tree category by category, converting every JSON
//! record and collecting per-category counts. A record that fails is logged
//! and counted; it never stops the batch.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::json_to_tres::convert_file;
use super::types::{
    CategoryResult, ConvertOptions, ConvertPhase, ConvertProgress, ConvertProgressCallback,
    ConvertSummary,
};
use crate::error::Result;
use crate::lookup::LookupTables;
use crate::schema::Schema;
use crate::utils::path::{display_relative, files_with_extension};

/// Find the JSON records directly inside a category directory
///
/// Files with other extensions and sub-directories are ignored. The
/// extension check is case-insensitive.
///
/// # Returns
/// A sorted list of paths to `.json` files.
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn find_json_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    files_with_extension(dir, "json")
}

/// Source files queued for one category
struct CategoryJob {
    schema: &'static Schema,
    result: CategoryResult,
    files: Vec<PathBuf>,
}

fn scan_category(schema: &'static Schema, content_root: &Path) -> CategoryJob {
    let mut result = CategoryResult::new(schema);
    let dir = schema.source_path(content_root);

    if !dir.is_dir() {
        tracing::info!("Skipping {}: {} not found", schema.label, dir.display());
        return CategoryJob {
            schema,
            result,
            files: Vec::new(),
        };
    }
    result.source_found = true;

    let mut files = match find_json_files(&dir) {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!("Failed to list {}: {}", dir.display(), e);
            result.fail_count += 1;
            result.failures.push(format!("{}: {e}", dir.display()));
            Vec::new()
        }
    };
    if schema.single_unit {
        files.truncate(1);
    }

    CategoryJob {
        schema,
        result,
        files,
    }
}

/// Convert every selected category from `content_root` into `output_root`
///
/// # Arguments
/// * `content_root` - Directory holding one sub-directory per category
/// * `output_root` - Godot data directory receiving the `.tres` files
/// * `options` - Category selection
/// * `tables` - Lookup tables handed to every mapper
/// * `progress` - Callback for progress updates
///
/// # Errors
/// Returns an error only for an unknown category in `options`. Missing
/// category directories and failing records are reported in the summary.
pub fn convert_all(
    content_root: &Path,
    output_root: &Path,
    options: &ConvertOptions,
    tables: &LookupTables,
    progress: ConvertProgressCallback<'_>,
) -> Result<ConvertSummary> {
    let schemas = options.selected_schemas()?;
    tracing::info!(
        "Converting content: {} -> {}",
        content_root.display(),
        output_root.display()
    );

    progress(&ConvertProgress::new(ConvertPhase::Scanning, 0, schemas.len()));
    let jobs: Vec<CategoryJob> = schemas
        .into_iter()
        .map(|schema| scan_category(schema, content_root))
        .collect();

    let total: usize = jobs.iter().map(|job| job.files.len()).sum();
    let mut current = 0;
    let mut summary = ConvertSummary::default();

    for job in jobs {
        let CategoryJob {
            schema,
            mut result,
            files,
        } = job;
        let mut seen = HashSet::new();

        for file in files {
            current += 1;
            let shown = display_relative(&file, content_root);
            progress(&ConvertProgress::with_file(
                ConvertPhase::Converting,
                current,
                total,
                shown.clone(),
            ));

            match convert_file(schema, &file, output_root, tables) {
                Ok(dest) => {
                    if !seen.insert(dest.clone()) {
                        tracing::warn!(
                            "{} overwrites {} (identifier collision)",
                            shown,
                            dest.display()
                        );
                    }
                    result.success_count += 1;
                    result.written.push(dest);
                }
                Err(e) => {
                    tracing::warn!("Error converting {}: {}", file.display(), e);
                    result.fail_count += 1;
                    result.failures.push(format!("{shown}: {e}"));
                }
            }
        }

        tracing::info!("{}: {} files", result.label, result.success_count);
        summary.categories.push(result);
    }

    progress(&ConvertProgress::new(ConvertPhase::Complete, total, total));
    tracing::info!("Total: {} .tres files generated", summary.total_success());
    Ok(summary)
}
