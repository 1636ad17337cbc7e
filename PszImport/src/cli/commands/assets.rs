//! Asset relocation commands

use std::path::Path;
use std::time::Instant;

use crate::assets::{self, RelocationProgress};
use crate::cli::progress::{CUBE, TRUCK, batch_bar, print_done, print_step};
use crate::config::ImportConfig;

/// Import enemy model bundles.
pub fn enemies(
    config: &ImportConfig,
    source: Option<&Path>,
    destination: Option<&Path>,
    skip: &[String],
    quiet: bool,
) -> anyhow::Result<()> {
    let source = source.map_or_else(
        || config.resolve(&config.paths.assets_source),
        Path::to_path_buf,
    );
    let destination = destination.map_or_else(
        || config.resolve(&config.paths.assets_output),
        Path::to_path_buf,
    );
    let mut options = config.relocation_options();
    options.skip_bundles.extend(skip.iter().cloned());

    let started = Instant::now();
    print_step(1, 1, CUBE, &format!("Importing enemy models from {}", source.display()));

    let pb = batch_bar(0, quiet);
    let progress = |p: &RelocationProgress| {
        pb.set_length(p.total as u64);
        pb.set_position(p.current as u64);
        pb.set_message(p.current_item.clone());
    };

    let result = assets::relocate_enemies(&source, &destination, &options, &progress)?;
    pb.finish_and_clear();

    println!("Import complete:");
    println!("  Imported: {}", result.imported.len());
    println!("  Skipped: {}", result.skipped.len());
    println!("  Failed: {}", result.failed.len());

    if !result.failed.is_empty() {
        println!("\nFailures:");
        for failure in &result.failed {
            println!("  {failure}");
        }
    }

    print_done(started.elapsed());
    Ok(())
}

/// Import player model variations.
pub fn players(
    config: &ImportConfig,
    source: Option<&Path>,
    destination: Option<&Path>,
    quiet: bool,
) -> anyhow::Result<()> {
    let source = source.map_or_else(
        || config.resolve(&config.paths.players_source),
        Path::to_path_buf,
    );
    let destination = destination.map_or_else(
        || config.resolve(&config.paths.players_output),
        Path::to_path_buf,
    );

    let started = Instant::now();
    print_step(1, 1, TRUCK, &format!("Importing player models from {}", source.display()));

    let pb = batch_bar(0, quiet);
    let progress = |p: &RelocationProgress| {
        pb.set_length(p.total as u64);
        pb.set_position(p.current as u64);
        pb.set_message(p.current_item.clone());
    };

    let result = assets::relocate_players(&source, &destination, &progress)?;
    pb.finish_and_clear();

    println!("Import complete:");
    println!("  Variations: {}", result.imported.len());
    println!("  GLB files: {}", result.total_glb());
    println!("  Textures: {}", result.total_png());
    if !result.skipped.is_empty() {
        println!("  Skipped (no GLB): {}", result.skipped.join(", "));
    }
    if !result.failed.is_empty() {
        println!("\nFailures:");
        for failure in &result.failed {
            println!("  {failure}");
        }
    }

    print_done(started.elapsed());
    Ok(())
}
