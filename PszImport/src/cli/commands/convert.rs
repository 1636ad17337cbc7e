//! Content conversion commands

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{GEAR, LOOKING_GLASS, batch_bar, print_done, print_step};
use crate::config::ImportConfig;
use crate::converter::{self, ConvertOptions, ConvertPhase, ConvertProgress};
use crate::lookup::LookupTables;
use crate::schema;

/// Convert content JSON to `.tres` resources.
///
/// Flags override the config file. Failing records are listed in the
/// summary but do not fail the command.
pub fn execute(
    config: &ImportConfig,
    source: Option<&Path>,
    output: Option<&Path>,
    categories: &[String],
    quiet: bool,
) -> anyhow::Result<()> {
    let source = source.map_or_else(|| config.source_dir(), Path::to_path_buf);
    let output = output.map_or_else(|| config.output_dir(), Path::to_path_buf);
    if !source.is_dir() {
        anyhow::bail!("Content directory not found: {}", source.display());
    }

    let options = if categories.is_empty() {
        config.convert_options()
    } else {
        ConvertOptions::only(categories.iter().cloned())
    };

    let started = Instant::now();
    print_step(1, 2, LOOKING_GLASS, &format!("Reading {}", source.display()));
    print_step(2, 2, GEAR, &format!("Writing {}", output.display()));

    let pb = batch_bar(0, quiet);
    let progress = |p: &ConvertProgress| match (p.phase, &p.current_file) {
        (ConvertPhase::Converting, Some(file)) => {
            pb.set_length(p.total as u64);
            pb.set_position(p.current as u64);
            pb.set_message(file.clone());
        }
        (phase, _) => pb.set_message(phase.as_str()),
    };

    let summary = converter::convert_all(
        &source,
        &output,
        &options,
        &LookupTables::standard(),
        &progress,
    )?;
    pb.finish_and_clear();

    println!("Conversion complete:");
    for category in &summary.categories {
        if !category.source_found {
            println!("  {}: no source directory", category.label);
        } else if category.fail_count > 0 {
            println!(
                "  {}: {} files ({} failed)",
                category.label, category.success_count, category.fail_count
            );
        } else {
            println!("  {}: {} files", category.label, category.success_count);
        }
    }
    println!("  Total: {} .tres files", summary.total_success());

    if summary.total_failed() > 0 {
        println!("\nFailures:");
        for category in &summary.categories {
            for failure in &category.failures {
                println!("  {failure}");
            }
        }
    }

    print_done(started.elapsed());
    Ok(())
}

/// List every content category.
pub fn list_categories() {
    println!("{:<20} {:<20} {:<22} Script", "Category", "Source", "Output");
    for category in &schema::ALL {
        println!(
            "{:<20} {:<20} {:<22} {}",
            category.name,
            category.source_dir,
            category.output_dir.unwrap_or("(data root)"),
            category.script_class
        );
    }
}
