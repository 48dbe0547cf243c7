//! End-to-end CLI tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

fn prozip() -> Command {
    Command::cargo_bin("prozip").expect("binary builds")
}

/// Creates proj/{readme.md, src/main.rs, build/out.o, .git/HEAD} under
/// the temp dir.
fn create_project(temp: &TempDir) -> PathBuf {
    let proj = temp.path().join("proj");
    fs::create_dir(&proj).unwrap();
    fs::write(proj.join("readme.md"), "# proj").unwrap();
    fs::create_dir(proj.join("src")).unwrap();
    fs::write(proj.join("src/main.rs"), "fn main() {}").unwrap();
    fs::create_dir(proj.join("build")).unwrap();
    fs::write(proj.join("build/out.o"), "obj").unwrap();
    fs::create_dir(proj.join(".git")).unwrap();
    fs::write(proj.join(".git/HEAD"), "ref").unwrap();
    proj
}

fn archive_names(archive_path: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(archive_path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

#[test]
fn test_export_creates_archive() {
    let temp = TempDir::new().unwrap();
    let proj = create_project(&temp);
    let output = temp.path().join("proj.zip");

    prozip()
        .arg("export")
        .arg(&proj)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive created"));

    let names = archive_names(&output);
    assert!(names.contains(&"proj/readme.md".to_string()));
    assert!(names.contains(&"proj/src/main.rs".to_string()));
    // Default ignores drop VCS metadata
    assert!(!names.iter().any(|n| n.contains(".git")));
}

#[test]
fn test_export_honors_exclude_flag() {
    let temp = TempDir::new().unwrap();
    let proj = create_project(&temp);
    let output = temp.path().join("proj.zip");

    prozip()
        .arg("export")
        .arg(&proj)
        .arg(&output)
        .arg("--exclude")
        .arg(proj.join("build"))
        .assert()
        .success();

    let names = archive_names(&output);
    assert!(!names.iter().any(|n| n.contains("build")));
    assert!(names.contains(&"proj/src/main.rs".to_string()));
}

#[test]
fn test_export_honors_ignore_flag() {
    let temp = TempDir::new().unwrap();
    let proj = create_project(&temp);
    fs::write(proj.join("debug.log"), "noise").unwrap();
    let output = temp.path().join("proj.zip");

    prozip()
        .arg("export")
        .arg(&proj)
        .arg(&output)
        .arg("--ignore")
        .arg("*.log")
        .assert()
        .success();

    let names = archive_names(&output);
    assert!(!names.iter().any(|n| n.ends_with(".log")));
}

#[test]
fn test_export_refuses_existing_output_without_force() {
    let temp = TempDir::new().unwrap();
    let proj = create_project(&temp);
    let output = temp.path().join("proj.zip");
    fs::write(&output, "stale").unwrap();

    prozip()
        .arg("export")
        .arg(&proj)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    prozip()
        .arg("export")
        .arg(&proj)
        .arg(&output)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn test_export_missing_project_fails_with_hint() {
    let temp = TempDir::new().unwrap();

    prozip()
        .arg("export")
        .arg(temp.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_export_json_output() {
    let temp = TempDir::new().unwrap();
    let proj = create_project(&temp);
    let output = temp.path().join("proj.zip");

    let assert = prozip()
        .arg("--json")
        .arg("export")
        .arg(&proj)
        .arg(&output)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["operation"], "export");
    assert_eq!(value["status"], "success");
    // readme.md, src/main.rs, build/out.o (only .git is ignored by default)
    assert_eq!(value["data"]["files_added"], 3);
}

#[test]
fn test_export_quiet_suppresses_output() {
    let temp = TempDir::new().unwrap();
    let proj = create_project(&temp);
    let output = temp.path().join("proj.zip");

    prozip()
        .arg("--quiet")
        .arg("export")
        .arg(&proj)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_preview_lists_entries_without_writing() {
    let temp = TempDir::new().unwrap();
    let proj = create_project(&temp);

    prozip()
        .arg("preview")
        .arg(&proj)
        .arg("--exclude")
        .arg(proj.join("build"))
        .assert()
        .success()
        .stdout(predicate::str::contains("proj/src/main.rs"))
        .stdout(predicate::str::contains("Total:"))
        .stdout(predicate::str::contains("build").not());

    // Nothing written anywhere
    assert!(!temp.path().join("proj.zip").exists());
}

#[test]
fn test_preview_json_output() {
    let temp = TempDir::new().unwrap();
    let proj = create_project(&temp);

    let assert = prozip()
        .arg("--json")
        .arg("preview")
        .arg(&proj)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["operation"], "preview");
    assert!(value["data"]["total"].as_u64().unwrap() > 0);
}

#[test]
fn test_completions_bash() {
    prozip()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("prozip"));
}

#[test]
fn test_help_lists_commands() {
    prozip()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("completions"));
}
