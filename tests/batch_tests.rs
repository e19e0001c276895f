// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for batch processing across language directories

use rpy_deepl::batch::{self, BatchConfig};
use rpy_deepl::types::Translator;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct TagTranslator;

impl Translator for TagTranslator {
    fn translate(&self, text: &str) -> String {
        format!("[{}]", text)
    }
}

fn make_lang_dir(base: &Path, lang: &str, files: &[(&str, &str)]) {
    let dir = base.join(lang);
    for (rel, body) in files {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
}

const STUB: &str = "    old \"Hello\"\n    new \"\"\n";

#[test]
fn test_single_language_run() {
    let base = TempDir::new().unwrap();
    make_lang_dir(base.path(), "german", &[("script.rpy", STUB)]);
    make_lang_dir(base.path(), "french", &[("script.rpy", STUB)]);

    let config = BatchConfig {
        base_dir: base.path().to_path_buf(),
        language: "german".to_string(),
        target_lang: "DE".to_string(),
        all: false,
    };

    let report = batch::run(&config, &TagTranslator).expect("run should succeed");
    assert_eq!(report.dirs_processed, 1);
    assert_eq!(report.files_processed, 1);
    assert_eq!(report.lines_filled, 1);

    let german = fs::read_to_string(base.path().join("german/script.rpy")).unwrap();
    assert!(german.contains("new \"[Hello]\""));

    // The other language directory must be untouched.
    let french = fs::read_to_string(base.path().join("french/script.rpy")).unwrap();
    assert!(french.contains("new \"\""));
}

#[test]
fn test_all_mode_processes_every_subdirectory() {
    let base = TempDir::new().unwrap();
    make_lang_dir(base.path(), "german", &[("a.rpy", STUB)]);
    make_lang_dir(base.path(), "french", &[("b.rpy", STUB)]);
    make_lang_dir(base.path(), "polish", &[("nested/c.rpy", STUB)]);

    // A stray file at the base level is not a language directory.
    fs::write(base.path().join("notes.txt"), "ignore me").unwrap();

    let config = BatchConfig {
        base_dir: base.path().to_path_buf(),
        language: "german".to_string(),
        target_lang: "DE".to_string(),
        all: true,
    };

    let report = batch::run(&config, &TagTranslator).expect("run should succeed");
    assert_eq!(report.dirs_processed, 3);
    assert_eq!(report.files_processed, 3, "nested .rpy files must be found");
    assert_eq!(report.lines_filled, 3);
}

#[test]
fn test_missing_language_directory_aborts_without_writes() {
    let base = TempDir::new().unwrap();
    make_lang_dir(base.path(), "german", &[("script.rpy", STUB)]);

    let config = BatchConfig {
        base_dir: base.path().to_path_buf(),
        language: "spanish".to_string(),
        target_lang: "ES".to_string(),
        all: false,
    };

    let result = batch::run(&config, &TagTranslator);
    assert!(result.is_err(), "missing language dir should abort the run");

    // Nothing else may have been rewritten.
    let german = fs::read_to_string(base.path().join("german/script.rpy")).unwrap();
    assert_eq!(german, STUB);
}

#[test]
fn test_all_mode_on_empty_base_is_a_clean_noop() {
    let base = TempDir::new().unwrap();

    let config = BatchConfig {
        base_dir: base.path().join("does-not-exist"),
        language: "german".to_string(),
        target_lang: "DE".to_string(),
        all: true,
    };

    let report = batch::run(&config, &TagTranslator).expect("all mode tolerates no dirs");
    assert_eq!(report.dirs_processed, 0);
    assert_eq!(report.files_processed, 0);
}

#[test]
fn test_non_rpy_files_are_ignored() {
    let base = TempDir::new().unwrap();
    make_lang_dir(
        base.path(),
        "german",
        &[("script.rpy", STUB), ("readme.txt", STUB)],
    );

    let config = BatchConfig {
        base_dir: base.path().to_path_buf(),
        language: "german".to_string(),
        target_lang: "DE".to_string(),
        all: false,
    };

    let report = batch::run(&config, &TagTranslator).unwrap();
    assert_eq!(report.files_processed, 1);

    let txt = fs::read_to_string(base.path().join("german/readme.txt")).unwrap();
    assert_eq!(txt, STUB, "non-.rpy files must not be rewritten");
}

#[test]
fn test_write_report_produces_valid_json() {
    let base = TempDir::new().unwrap();
    make_lang_dir(base.path(), "german", &[("script.rpy", STUB)]);

    let config = BatchConfig {
        base_dir: base.path().to_path_buf(),
        language: "german".to_string(),
        target_lang: "DE".to_string(),
        all: false,
    };

    let report = batch::run(&config, &TagTranslator).unwrap();

    let out = base.path().join("report.json");
    batch::write_report(&report, &out).expect("write_report should succeed");

    let content = fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("should be valid JSON");
    assert_eq!(parsed["target_lang"], "DE");
    assert!(parsed["results"].is_array());
    assert_eq!(parsed["lines_filled"], 1);
}
