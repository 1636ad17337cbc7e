use pszimport::prelude::*;
use pszimport::converter::ConvertPhase;
use pszimport::export::collect_enemies;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write(path: &Path, text: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

/// A small psz-sketch content tree: two categories with records, one with a
/// broken record and a name collision, and an experience table.
fn content_tree(root: &Path) {
    let enemies = root.join("enemies");
    write(
        &enemies.join("booma.json"),
        r#"{"name": "Booma", "element": "Beast", "locations": ["Gurhacia Valley"], "modelId": "en_booma"}"#,
    );
    // Same identifier as booma.json, converted first
    write(
        &enemies.join("an_old_booma.json"),
        r#"{"name": "Booma", "element": "Beast", "modelId": "en_booma_old"}"#,
    );
    write(
        &enemies.join("rag_rappy.json"),
        r#"{"name": "Rag Rappy", "isRare": true, "element": "Native",
            "locations": ["Ozette Wetland", "Nowhere"]}"#,
    );
    write(&enemies.join("broken.json"), "{\"name\": ");
    write(&enemies.join("nameless.json"), r#"{"element": "Dark"}"#);
    write(&enemies.join("README.md"), "not content");

    write(
        &root.join("drops").join("Hard.json"),
        r#"{"valley": {"common": ["Monomate"]}}"#,
    );

    write(&root.join("experience").join("b.json"), r#"{"levels": [9, 9]}"#);
    write(&root.join("experience").join("a.json"), r#"{"levels": [0, 100, 250]}"#);
}

fn category<'a>(summary: &'a ConvertSummary, name: &str) -> &'a CategoryResult {
    summary
        .categories
        .iter()
        .find(|c| c.category == name)
        .unwrap()
}

fn convert(content: &Path, output: &Path, options: &ConvertOptions) -> ConvertSummary {
    convert_all(content, output, options, &LookupTables::standard(), &|_| {}).unwrap()
}

#[test]
fn test_full_conversion() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let dir = tempdir().unwrap();
    let content = dir.path().join("content");
    let output = dir.path().join("data");
    content_tree(&content);

    let summary = convert(&content, &output, &ConvertOptions::default());
    assert_eq!(summary.categories.len(), 18);

    let enemies = category(&summary, "enemies");
    assert!(enemies.source_found);
    assert_eq!(enemies.success_count, 3);
    assert_eq!(enemies.fail_count, 2);
    assert_eq!(enemies.failures.len(), 2);

    let weapons = category(&summary, "weapons");
    assert!(!weapons.source_found);
    assert_eq!(weapons.success_count, 0);

    assert_eq!(summary.total_success(), 5);
    assert_eq!(summary.total_failed(), 2);

    let booma = fs::read_to_string(output.join("enemies").join("booma.tres")).unwrap();
    assert!(booma.starts_with("[gd_resource type=\"Resource\" script_class=\"EnemyData\""));
    assert!(booma.contains("id = \"booma\"\n"));

    // Both records named Booma were written; the later file in sorted order wins
    let booma_path = output.join("enemies").join("booma.tres");
    assert_eq!(enemies.written.iter().filter(|p| **p == booma_path).count(), 2);
    assert!(booma.contains("model_id = \"en_booma\"\n"));

    let hard = fs::read_to_string(output.join("drop_tables").join("hard.tres")).unwrap();
    assert!(hard.contains("difficulty = \"Hard\"\n"));

    let experience = fs::read_to_string(output.join("experience_table.tres")).unwrap();
    assert!(experience.contains("levels = [0, 100, 250]\n"));

    // Nothing is written for categories without a source directory
    assert!(!output.join("weapons").exists());
}

#[test]
fn test_rerun_rewrites_identical_bytes() {
    let dir = tempdir().unwrap();
    let content = dir.path().join("content");
    let output = dir.path().join("data");
    content_tree(&content);

    let first = convert(&content, &output, &ConvertOptions::default());
    let written: Vec<PathBuf> = first
        .categories
        .iter()
        .flat_map(|c| c.written.iter().cloned())
        .collect();
    let before: Vec<Vec<u8>> = written.iter().map(|p| fs::read(p).unwrap()).collect();

    let second = convert(&content, &output, &ConvertOptions::default());
    assert_eq!(second.total_success(), first.total_success());
    let after: Vec<Vec<u8>> = written.iter().map(|p| fs::read(p).unwrap()).collect();
    assert_eq!(after, before);
}

#[test]
fn test_category_selection() {
    let dir = tempdir().unwrap();
    let content = dir.path().join("content");
    let output = dir.path().join("data");
    content_tree(&content);

    let summary = convert(&content, &output, &ConvertOptions::only(["drops"]));
    assert_eq!(summary.categories.len(), 1);
    assert_eq!(summary.total_success(), 1);
    assert!(output.join("drop_tables").join("hard.tres").is_file());
    assert!(!output.join("enemies").exists());

    let unknown = convert_all(
        &content,
        &output,
        &ConvertOptions::only(["vehicles"]),
        &LookupTables::standard(),
        &|_| {},
    );
    assert!(matches!(unknown, Err(Error::UnknownCategory(_))));
}

#[test]
fn test_progress_reports() {
    let dir = tempdir().unwrap();
    let content = dir.path().join("content");
    content_tree(&content);

    let phases = RefCell::new(Vec::new());
    let progress = |p: &ConvertProgress| phases.borrow_mut().push((p.phase, p.current, p.total));
    convert_all(
        &content,
        &dir.path().join("data"),
        &ConvertOptions::only(["enemies"]),
        &LookupTables::standard(),
        &progress,
    )
    .unwrap();

    let phases = phases.into_inner();
    assert_eq!(phases.first().map(|p| p.0), Some(ConvertPhase::Scanning));
    assert_eq!(phases.last(), Some(&(ConvertPhase::Complete, 5, 5)));
    let converting = phases
        .iter()
        .filter(|p| p.0 == ConvertPhase::Converting)
        .count();
    assert_eq!(converting, 5);
}

#[test]
fn test_convert_then_export() {
    let dir = tempdir().unwrap();
    let content = dir.path().join("content");
    let output = dir.path().join("data");
    content_tree(&content);
    convert(&content, &output, &ConvertOptions::only(["enemies"]));

    let list = dir.path().join("public").join("data").join("enemies.json");
    let export = export_enemy_list(output.join("enemies"), &list, &LookupTables::standard())
        .unwrap();

    let names: Vec<&str> = export.enemies.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Booma", "Rag Rappy"]);
    assert_eq!(export.area_counts.get("valley"), Some(&1));
    assert_eq!(export.area_counts.get("wetlands"), Some(&1));

    let rappy = &export.enemies[1];
    assert_eq!(rappy.element, "Native");
    assert_eq!(rappy.locations, ["wetlands"]);
    assert!(rappy.is_rare);

    let written: Vec<EnemyEntry> =
        serde_json::from_str(&fs::read_to_string(&list).unwrap()).unwrap();
    assert_eq!(written, export.enemies);

    // Re-reading gives the same list
    let again = collect_enemies(output.join("enemies"), &LookupTables::standard()).unwrap();
    assert_eq!(again.enemies, export.enemies);
}

#[test]
fn test_enemy_assets() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("public").join("enemies");
    let dest = dir.path().join("assets").join("enemies");

    for (id, base) in [("booma", "en_booma"), ("boss_dragon", "bs_dragon")] {
        let bundle = source.join(id);
        write(
            &bundle.join("info.json"),
            &format!(r#"{{"modelBaseName": "{base}"}}"#),
        );
        write(&bundle.join(base).join(format!("{base}.glb")), "glb");
        write(&bundle.join(base).join("body.png"), "png");
    }
    write(&source.join("no_manifest").join("model.glb"), "glb");

    let result =
        relocate_enemies(&source, &dest, &RelocationOptions::default(), &|_| {}).unwrap();

    assert_eq!(result.imported.len(), 1);
    assert_eq!(result.imported[0].id, "booma");
    assert_eq!(result.imported[0].texture_count, 1);
    assert_eq!(result.skipped, ["boss_dragon"]);
    assert_eq!(result.failed.len(), 1);

    assert!(dest.join("booma").join("booma.glb").is_file());
    assert!(dest.join("booma").join("body.png").is_file());
    assert!(!dest.join("boss_dragon").exists());
}

#[test]
fn test_player_assets() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("public").join("player");
    let dest = dir.path().join("assets").join("player");

    let pc_000 = source.join("pc_000");
    write(&pc_000.join("pc_000").join("pc_000.glb"), "glb");
    write(&pc_000.join("textures").join("pc_000_a.png"), "png");
    write(&pc_000.join("textures").join("pc_000_b.png"), "png");
    write(&source.join("pc_001").join("textures").join("pc_001_a.png"), "png");
    write(&source.join("pc_a01").join("pc_a01").join("pc_a01.glb"), "glb");

    let result = relocate_players(&source, &dest, &|_| {}).unwrap();

    assert_eq!(result.imported.len(), 1);
    assert_eq!(result.total_glb(), 1);
    assert_eq!(result.total_png(), 2);
    assert_eq!(result.skipped, ["pc_001"]);
    assert!(dest.join("pc_000").join("pc_000.glb").is_file());
    assert!(dest.join("pc_000").join("textures").join("pc_000_b.png").is_file());
    assert!(!dest.join("pc_a01").exists());
}

#[test]
fn test_config_drives_paths() {
    let dir = tempdir().unwrap();
    write(
        &dir.path().join("pszimport.toml"),
        "[paths]\nsource = \"content\"\noutput = \"res/data\"\n\n[convert]\ncategories = [\"drops\"]\n",
    );
    content_tree(&dir.path().join("content"));

    let config = ImportConfig::discover(dir.path()).unwrap();
    let summary = convert(
        &config.source_dir(),
        &config.output_dir(),
        &config.convert_options(),
    );
    assert_eq!(summary.total_success(), 1);
    assert!(dir.path().join("res").join("data").join("drop_tables").join("hard.tres").is_file());
}
