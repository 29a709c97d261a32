//! Integration tests for the gitmoji binary.
//!
//! Every test points the binary at a pre-populated cache so no request is made.

use std::fs;
use std::path::Path;
use std::process::Command;

use gitmoji_cache::{CacheRecord, EntryStore, Gitmoji};
use tempfile::TempDir;

/// Helper to run the CLI with given args and capture output
fn run_cli(cache_file: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_gitmoji"))
        .arg("--cache-file")
        .arg(cache_file)
        // Unroutable, so an accidental fetch fails loudly.
        .args(["--url", "http://127.0.0.1:9/gitmojis.json"])
        .args(args)
        .output()
        .expect("Failed to execute gitmoji")
}

fn populated_cache(temp_dir: &TempDir) -> std::path::PathBuf {
    let path = temp_dir.path().join("gitmoji.json");
    let record = CacheRecord::fetched(vec![
        Gitmoji {
            code: ":art:".to_string(),
            description: "Improving structure / format of the code.".to_string(),
            emoji: "🎨".to_string(),
            entity: "&#x1f3a8;".to_string(),
            name: "art".to_string(),
        },
        Gitmoji {
            code: ":bug:".to_string(),
            description: "Fix a bug.".to_string(),
            emoji: "🐛".to_string(),
            entity: "&#x1f41b;".to_string(),
            name: "bug".to_string(),
        },
    ]);
    EntryStore::new(&path).write(&record).unwrap();
    path
}

#[test]
fn test_list_prints_every_entry() {
    let temp_dir = TempDir::new().unwrap();
    let cache_file = populated_cache(&temp_dir);

    let output = run_cli(&cache_file, &["list"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(":art:"));
    assert!(stdout.contains(":bug:"));
}

#[test]
fn test_show_resolves_bare_code() {
    let temp_dir = TempDir::new().unwrap();
    let cache_file = populated_cache(&temp_dir);

    let output = run_cli(&cache_file, &["show", "bug"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("🐛"), "unexpected output: {stdout}");
}

#[test]
fn test_show_unknown_code_fails() {
    let temp_dir = TempDir::new().unwrap();
    let cache_file = populated_cache(&temp_dir);

    let output = run_cli(&cache_file, &["show", ":nope:"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown gitmoji"), "unexpected stderr: {stderr}");
}

#[test]
fn test_malformed_cache_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let cache_file = temp_dir.path().join("gitmoji.json");
    fs::write(&cache_file, "Invalid JSON").unwrap();

    let output = run_cli(&cache_file, &["list"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed"), "unexpected stderr: {stderr}");
}
