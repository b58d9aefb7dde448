//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("portfolio").expect("Failed to find portfolio binary")
}

/// Write `contents` to `name` inside `dir`
fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

const DUMP: &str = r#"{
  "baseUrl": "https://cms.example.com",
  "profile": { "data": { "name": "Jane Doe", "jobStatus": "Open to work", "phone": "+1 555 0100, +1 555 0101" } },
  "projects": { "data": [
    { "id": "fahr", "name": "FAHR Portal", "summary": "Government HR" },
    { "id": "shop", "name": "Shop", "summary": "Storefront" },
    { "id": "shop", "name": "Shop again", "summary": "Duplicate" }
  ] },
  "skills": { "data": [ { "name": "Frontend", "icon": "Code2", "items": ["React"] } ] },
  "workExperiences": { "data": [
    { "title": "Engineer", "company": "Acme", "location": "Remote", "startDate": "2019-01-01" }
  ] }
}"#;

// ============================================================================
// Validate Command Tests
// ============================================================================

#[test]
fn test_validate_reports_counts() {
    let dir = TempDir::new().unwrap();
    let dump = write_file(&dir, "dump.json", DUMP);

    cli_cmd()
        .arg("validate")
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects: 2 (featured: 1)"))
        .stdout(predicate::str::contains("Skill categories: 1"))
        .stdout(predicate::str::contains("Duplicates dropped: 1"))
        .stdout(predicate::str::contains("How I work: 3 (static fallback)"));
}

#[test]
fn test_validate_strict_fails_on_duplicates() {
    let dir = TempDir::new().unwrap();
    let dump = write_file(&dir, "dump.json", DUMP);

    cli_cmd()
        .arg("validate")
        .arg(&dump)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate"));
}

#[test]
fn test_validate_empty_collections() {
    let dir = TempDir::new().unwrap();
    let dump = write_file(&dir, "empty.json", r#"{"skills": {}, "projects": {"data": []}}"#);

    cli_cmd()
        .arg("validate")
        .arg(&dump)
        .arg("--strict")
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects: 0 (featured: 0)"))
        .stdout(predicate::str::contains("Skill categories: 0"));
}

#[test]
fn test_validate_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    let dump = write_file(&dir, "broken.json", "{ not json");

    cli_cmd()
        .arg("validate")
        .arg(&dump)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid CMS dump"));
}

#[test]
fn test_validate_missing_file() {
    cli_cmd()
        .arg("validate")
        .arg("/nonexistent/dump.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

// ============================================================================
// Sections Command Tests
// ============================================================================

#[test]
fn test_sections_lead_with_featured() {
    let dir = TempDir::new().unwrap();
    let dump = write_file(&dir, "dump.json", DUMP);

    cli_cmd()
        .arg("sections")
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#featured-projects\n#projects\n"))
        .stdout(predicate::str::contains("#contact"));
}

#[test]
fn test_sections_without_featured() {
    let dir = TempDir::new().unwrap();
    let dump = write_file(&dir, "plain.json", r#"{"projects": {"data": [{"id": "shop"}]}}"#);

    cli_cmd()
        .arg("sections")
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#projects\n"))
        .stdout(predicate::str::contains("featured").not());
}

// ============================================================================
// Replay Command Tests
// ============================================================================

#[test]
fn test_replay_key_sequence() {
    let dir = TempDir::new().unwrap();
    let trace = write_file(
        &dir,
        "trace.json",
        r#"{"steps": [
            {"type": "resize", "at": 0, "width": 1280},
            {"type": "key", "at": 100, "key": "o"},
            {"type": "key", "at": 200, "key": "a"},
            {"type": "key", "at": 300, "key": "s"},
            {"type": "key", "at": 400, "key": "i"},
            {"type": "key", "at": 500, "key": "s"}
        ]}"#,
    );

    cli_cmd()
        .arg("replay")
        .arg(&trace)
        .arg("--drain")
        .assert()
        .success()
        .stdout(predicate::str::contains("gesture: key sequence"))
        .stdout(predicate::str::contains("reveal: Breaking"))
        .stdout(predicate::str::contains("reveal: MessageShown"));
}

#[test]
fn test_replay_timeline_burst() {
    let dir = TempDir::new().unwrap();
    let trace = write_file(
        &dir,
        "burst.json",
        r#"{
            "burst_targets": ["timeline-dot"],
            "steps": [
                {"type": "click", "at": 10, "path": ["timeline-dot"]},
                {"type": "click", "at": 200, "path": ["timeline-dot"]},
                {"type": "click", "at": 400, "path": ["timeline-dot"]}
            ]
        }"#,
    );

    cli_cmd()
        .arg("replay")
        .arg(&trace)
        .arg("--show-prevented")
        .assert()
        .success()
        .stdout(predicate::str::contains("gesture: click burst on timeline-dot"))
        .stdout(predicate::str::contains("input: default prevented"));
}

#[test]
fn test_replay_uses_config_timings() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "config.json",
        r#"{"navigation": {"deep_link_release_ms": 500}}"#,
    );
    let trace = write_file(
        &dir,
        "deeplink.json",
        r##"{"steps": [
            {"type": "url", "at": 0, "fragment": "#skills"},
            {"type": "advance", "at": 600}
        ]}"##,
    );

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("replay")
        .arg(&trace)
        .assert()
        .success()
        .stdout(predicate::str::contains("500ms  release: skills (timeout)"));
}

#[test]
fn test_replay_rejects_unknown_step() {
    let dir = TempDir::new().unwrap();
    let trace = write_file(&dir, "bad.json", r#"{"steps": [{"type": "scroll", "at": 0}]}"#);

    cli_cmd()
        .arg("replay")
        .arg(&trace)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid trace document"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_prints_defaults() {
    cli_cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"settle_ms\": 1500"))
        .stdout(predicate::str::contains("\"deep_link_release_ms\": 3000"));
}

#[test]
fn test_config_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "config.json", r#"{"burst": {"clicks": 0}}"#);

    cli_cmd()
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
