//! Export commands

use std::path::Path;

use crate::cli::progress::{DISK, print_step};
use crate::config::ImportConfig;
use crate::export;
use crate::lookup::LookupTables;

/// Write the quest editor enemy list from converted enemy resources.
pub fn enemies(
    config: &ImportConfig,
    enemies_dir: Option<&Path>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let enemies_dir = enemies_dir.map_or_else(
        || config.output_dir().join("enemies"),
        Path::to_path_buf,
    );
    let output = output.map_or_else(
        || config.resolve(&config.paths.enemy_list),
        Path::to_path_buf,
    );
    if !enemies_dir.is_dir() {
        anyhow::bail!("Enemy directory not found: {}", enemies_dir.display());
    }

    print_step(1, 1, DISK, &format!("Reading {}", enemies_dir.display()));
    let exported = export::export_enemy_list(&enemies_dir, &output, &LookupTables::standard())?;

    println!(
        "Exported {} enemies to {}",
        exported.enemies.len(),
        output.display()
    );
    for (area, count) in &exported.area_counts {
        println!("  {area}: {count} enemies");
    }

    Ok(())
}
