// SPDX-License-Identifier: PMPL-1.0-or-later

//! Batch translation across language directories.
//!
//! Resolves one language directory (or, with `--all`, every existing
//! subdirectory) under the translation base path, walks each for
//! `.rpy` files, and runs the pair scan over every file in sequence.
//! Produces a summary report sorted the way the files were visited.

use crate::script::ScriptScanner;
use crate::types::Translator;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Configuration for a batch run.
pub struct BatchConfig {
    /// Base translations directory (Ren'Py convention: `game/tl`).
    pub base_dir: PathBuf,
    /// Language subdirectory name, lowercased user token ("german").
    pub language: String,
    /// Resolved DeepL target code ("DE"); recorded in the report.
    pub target_lang: String,
    /// Process every subdirectory of `base_dir` instead of just one.
    pub all: bool,
}

/// Results from transforming a single script file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    pub path: PathBuf,
    pub filled: usize,
    pub already_translated: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Complete batch report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub created_at: String,
    pub base_dir: PathBuf,
    pub target_lang: String,
    pub dirs_processed: usize,
    pub files_processed: usize,
    pub lines_filled: usize,
    pub results: Vec<FileResult>,
}

/// Resolve the language directories to process.
///
/// Single-language mode insists the directory exists; `--all` mode
/// simply takes every subdirectory that is there (none is fine).
fn resolve_language_dirs(config: &BatchConfig) -> Result<Vec<PathBuf>> {
    if config.all {
        return discover_language_dirs(&config.base_dir);
    }

    let dir = config.base_dir.join(&config.language);
    if !dir.is_dir() {
        anyhow::bail!("Directory {} does not exist. Aborting.", dir.display());
    }
    Ok(vec![dir])
}

/// Find all language subdirectories under the base path.
fn discover_language_dirs(base_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();

    if !base_dir.is_dir() {
        return Ok(dirs);
    }

    let entries = fs::read_dir(base_dir)?;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// Recursively collect `.rpy` files under a language directory.
fn collect_script_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("rpy"))
                .unwrap_or(false)
        })
        .collect();

    files.sort();
    files
}

/// Run the batch over all resolved language directories.
pub fn run(config: &BatchConfig, translator: &dyn Translator) -> Result<BatchReport> {
    let lang_dirs = resolve_language_dirs(config)?;
    let scanner = ScriptScanner::new();
    let mut results: Vec<FileResult> = Vec::new();
    let mut dirs_processed = 0;

    for lang_dir in &lang_dirs {
        if !lang_dir.is_dir() {
            continue;
        }
        println!("Processing directory: {}", lang_dir.display());
        dirs_processed += 1;

        for script_file in collect_script_files(lang_dir) {
            println!("  -> Translating: {}", script_file.display());
            match scanner.process_file(&script_file, translator) {
                Ok(stats) => {
                    results.push(FileResult {
                        path: script_file,
                        filled: stats.filled,
                        already_translated: stats.already_translated,
                        error: None,
                    });
                }
                Err(e) => {
                    eprintln!("  -> Skipping {}: {}", script_file.display(), e);
                    results.push(FileResult {
                        path: script_file,
                        filled: 0,
                        already_translated: 0,
                        error: Some(e.to_string()),
                    });
                }
            }
        }
    }

    let files_processed = results.len();
    let lines_filled: usize = results.iter().map(|r| r.filled).sum();

    Ok(BatchReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        base_dir: config.base_dir.clone(),
        target_lang: config.target_lang.clone(),
        dirs_processed,
        files_processed,
        lines_filled,
        results,
    })
}

/// Print a summary to the terminal.
pub fn print_summary(report: &BatchReport) {
    use colored::Colorize;

    println!("\n=== TRANSLATION SUMMARY ===");
    println!(
        "Base: {}  |  Target: {}  |  Dirs: {}  |  Files: {}",
        report.base_dir.display(),
        report.target_lang,
        report.dirs_processed,
        report.files_processed
    );

    let errors = report.results.iter().filter(|r| r.error.is_some()).count();
    if report.lines_filled > 0 {
        println!("Lines filled: {}", report.lines_filled.to_string().green().bold());
    } else {
        println!("Lines filled: 0 (nothing to translate)");
    }
    if errors > 0 {
        println!("Files with errors: {}", errors.to_string().red().bold());
        for result in report.results.iter().filter(|r| r.error.is_some()) {
            if let Some(err) = &result.error {
                println!("  {} {}", result.path.display(), err.red());
            }
        }
    }
    println!();
}

/// Write the batch report as JSON.
pub fn write_report(report: &BatchReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}
