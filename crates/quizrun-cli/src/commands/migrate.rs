//! The `quizrun migrate` command.
//!
//! Walks the quiz and results directories and rewrites any plain JSON file
//! in obfuscated form, in place. Already-obfuscated files are left alone,
//! so the command is safe to run repeatedly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use quizrun_core::codec;

#[derive(Default)]
struct Tally {
    migrated: usize,
    skipped: usize,
    failed: usize,
}

pub fn execute(data_dir: Option<PathBuf>) -> Result<()> {
    let paths = super::resolve_paths(data_dir)?;
    let mut tally = Tally::default();

    for (dir, label) in [
        (paths.quiz_dir(), "Quiz catalogs"),
        (paths.results_dir(), "Result records"),
    ] {
        migrate_directory(dir, label, &mut tally)?;
    }

    println!(
        "\n{} migrated, {} already obfuscated, {} failed",
        tally.migrated, tally.skipped, tally.failed
    );
    anyhow::ensure!(
        tally.failed == 0,
        "{} file(s) could not be migrated",
        tally.failed
    );
    Ok(())
}

fn migrate_directory(dir: &Path, label: &str, tally: &mut Tally) -> Result<()> {
    println!("\n{label}:");
    if !dir.is_dir() {
        println!("  no directory at {}", dir.display());
        return Ok(());
    }

    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    entries.sort();

    if entries.is_empty() {
        println!("  no files found in {}", dir.display());
        return Ok(());
    }

    for path in entries {
        match migrate_file(&path) {
            Ok(true) => {
                println!("  {} migrated", path.display());
                tally.migrated += 1;
            }
            Ok(false) => {
                println!("  {} already obfuscated", path.display());
                tally.skipped += 1;
            }
            Err(e) => {
                println!("  {} FAILED: {e:#}", path.display());
                tally.failed += 1;
            }
        }
    }
    Ok(())
}

/// Rewrite one file. Returns false if it was already obfuscated.
fn migrate_file(path: &Path) -> Result<bool> {
    let bytes = std::fs::read(path)?;
    if codec::is_obfuscated(&bytes) {
        return Ok(false);
    }
    // Parse before rewriting so corrupt files get reported, not scrambled
    let value: serde_json::Value = codec::decode(&bytes)?;
    let obfuscated = codec::encode(&value, true)?;
    std::fs::write(path, obfuscated)?;
    Ok(true)
}
