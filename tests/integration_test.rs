use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command running inside `dir` with plain output and default logging
fn journal_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("prayer-journal");
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    cmd
}

fn read_journal(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_no_command_shows_usage() {
    let temp_dir = TempDir::new().unwrap();

    journal_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("answered"));
}

#[test]
fn test_add_creates_default_journal() {
    let temp_dir = TempDir::new().unwrap();

    journal_cmd(temp_dir.path())
        .args(["add", "Please heal my friend", "--category", "Health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prayer added successfully! (ID: 1)"));

    let data = read_journal(&temp_dir.path().join("prayers.json"));
    assert_eq!(data[0]["id"], 1);
    assert_eq!(data[0]["text"], "Please heal my friend");
    assert_eq!(data[0]["category"], "Health");
    assert_eq!(data[0]["answered"], false);
    assert!(data[0]["date_answered"].is_null());
}

#[test]
fn test_add_short_category_and_default() {
    let temp_dir = TempDir::new().unwrap();

    journal_cmd(temp_dir.path())
        .args(["add", "Family dinner", "-c", "Family"])
        .assert()
        .success();
    journal_cmd(temp_dir.path())
        .args(["add", "Peace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 2)"));

    let data = read_journal(&temp_dir.path().join("prayers.json"));
    assert_eq!(data[0]["category"], "Family");
    assert_eq!(data[1]["category"], "General");
}

#[test]
fn test_add_empty_text_fails() {
    let temp_dir = TempDir::new().unwrap();

    journal_cmd(temp_dir.path())
        .args(["add", "   "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Prayer text cannot be empty"));

    assert!(!temp_dir.path().join("prayers.json").exists());
}

#[test]
fn test_list_empty() {
    let temp_dir = TempDir::new().unwrap();

    journal_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No prayers yet"));
}

#[test]
fn test_list_and_active_only() {
    let temp_dir = TempDir::new().unwrap();

    journal_cmd(temp_dir.path())
        .args(["add", "Safe travels", "-c", "Family"])
        .assert()
        .success();
    journal_cmd(temp_dir.path())
        .args(["add", "New job"])
        .assert()
        .success();
    journal_cmd(temp_dir.path())
        .args(["answered", "2"])
        .assert()
        .success();

    journal_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Prayer Journal"))
        .stdout(predicate::str::contains("Safe travels"))
        .stdout(predicate::str::contains("[Family]"))
        .stdout(predicate::str::contains("New job"))
        .stdout(predicate::str::contains("Answered:"));

    journal_cmd(temp_dir.path())
        .args(["list", "--active-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Safe travels"))
        .stdout(predicate::str::contains("New job").not());
}

#[test]
fn test_answered_lifecycle() {
    let temp_dir = TempDir::new().unwrap();

    journal_cmd(temp_dir.path())
        .args(["add", "Test prayer"])
        .assert()
        .success();

    journal_cmd(temp_dir.path())
        .args(["answered", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prayer 1 marked as answered!"));

    let first = read_journal(&temp_dir.path().join("prayers.json"));
    assert_eq!(first[0]["answered"], true);
    assert!(first[0]["date_answered"].is_string());

    journal_cmd(temp_dir.path())
        .args(["answered", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already marked as answered"));

    let second = read_journal(&temp_dir.path().join("prayers.json"));
    assert_eq!(second[0]["date_answered"], first[0]["date_answered"]);
}

#[test]
fn test_answered_not_found() {
    let temp_dir = TempDir::new().unwrap();

    journal_cmd(temp_dir.path())
        .args(["answered", "999"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Prayer ID 999 not found."));
}

#[test]
fn test_delete_and_delete_again() {
    let temp_dir = TempDir::new().unwrap();

    journal_cmd(temp_dir.path())
        .args(["add", "Test prayer"])
        .assert()
        .success();

    journal_cmd(temp_dir.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prayer 1 deleted."));

    let data = read_journal(&temp_dir.path().join("prayers.json"));
    assert_eq!(data.as_array().unwrap().len(), 0);

    journal_cmd(temp_dir.path())
        .args(["delete", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Prayer ID 1 not found."));
}

#[test]
fn test_invalid_id_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    journal_cmd(temp_dir.path())
        .args(["delete", "abc"])
        .assert()
        .failure();
}

#[test]
fn test_corrupted_journal_warns_and_recovers() {
    let temp_dir = TempDir::new().unwrap();
    let journal = temp_dir.path().join("prayers.json");
    fs::write(&journal, "this is not json").unwrap();

    journal_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No prayers yet"))
        .stderr(predicate::str::contains("corrupted"));

    journal_cmd(temp_dir.path())
        .args(["add", "Fresh start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 1)"));
}

#[test]
fn test_corruption_warning_ignores_log_filter() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("prayers.json"), "[{").unwrap();

    journal_cmd(temp_dir.path())
        .env("RUST_LOG", "off")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:"))
        .stderr(predicate::str::contains("prayers.json is corrupted"));
}

#[test]
fn test_invalid_config_is_unexpected_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("prayer-journal.toml"), "journal_file = [").unwrap();

    journal_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unexpected error: TOML parsing error"));
}

#[test]
fn test_file_override() {
    let temp_dir = TempDir::new().unwrap();
    let journal = temp_dir.path().join("data/other.json");

    journal_cmd(temp_dir.path())
        .args(["add", "Elsewhere", "--file", journal.to_str().unwrap()])
        .assert()
        .success();

    assert!(journal.exists());
    assert!(!temp_dir.path().join("prayers.json").exists());
}

#[test]
fn test_config_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("prayer-journal.toml");

    journal_cmd(temp_dir.path())
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    assert!(config_path.exists());

    journal_cmd(temp_dir.path())
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(
        temp_dir.path().join("prayer-journal.toml"),
        "journal_file = \"journal.json\"\ndefault_category = \"Family\"\n\n[display]\nhide_answered = true\n",
    )
    .unwrap();

    journal_cmd(temp_dir.path())
        .args(["add", "Visible"])
        .assert()
        .success();
    journal_cmd(temp_dir.path())
        .args(["add", "Hidden"])
        .assert()
        .success();
    journal_cmd(temp_dir.path())
        .args(["answered", "2"])
        .assert()
        .success();

    let data = read_journal(&temp_dir.path().join("journal.json"));
    assert_eq!(data[0]["category"], "Family");

    journal_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Visible"))
        .stdout(predicate::str::contains("Hidden").not());
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    journal_cmd(temp_dir.path())
        .args(["list", "--config", "missing.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Run 'prayer-journal config init'"));
}
