//! Tests for the non-interactive subcommands and their error handling.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gradebook(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_writes_config_to_given_path() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("gb.toml");

    gradebook(&home)
        .args(["init", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("max_attempts = 3"));
    assert!(written.contains("done_keyword = \"done\""));
}

#[test]
fn init_does_not_overwrite_without_force() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("gb.toml");
    std::fs::write(&path, "# mine\n").unwrap();

    gradebook(&home)
        .args(["init", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

    gradebook(&home)
        .args(["init", "--force", "--path"])
        .arg(&path)
        .assert()
        .success();
    assert!(std::fs::read_to_string(&path).unwrap().contains("[input]"));
}

#[test]
fn config_file_is_honoured() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("gb.toml");
    std::fs::write(&path, "[input]\nmax_attempts = 9\n").unwrap();

    gradebook(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "input.max_attempts"])
        .assert()
        .success()
        .stdout(predicate::str::diff("9\n"));
}

#[test]
fn config_list_shows_sections() {
    let home = TempDir::new().unwrap();
    gradebook(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[input]"))
        .stdout(predicate::str::contains("[output]"));
}

#[test]
fn config_path_points_at_toml_file() {
    let home = TempDir::new().unwrap();
    gradebook(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn unknown_config_key_exits_with_configuration_code() {
    let home = TempDir::new().unwrap();
    gradebook(&home)
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"))
        .stderr(predicate::str::contains("gradebook config path"));
}

#[test]
fn missing_explicit_config_exits_with_configuration_code() {
    let home = TempDir::new().unwrap();
    gradebook(&home)
        .args(["--config", "does-not-exist.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn malformed_config_exits_with_configuration_code() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    std::fs::write(&path, "[input]\nmax_attempts = \"many\"\n").unwrap();

    gradebook(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "list"])
        .assert()
        .code(4);
}

#[test]
fn bad_arguments_exit_with_usage_code() {
    let home = TempDir::new().unwrap();
    gradebook(&home)
        .args(["run", "--max-attempts", "0"])
        .assert()
        .code(2);
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    gradebook(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gradebook"));
}

#[test]
fn log_file_receives_events() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("gradebook.log");

    gradebook(&home)
        .arg("-v")
        .arg("--log-file")
        .arg(&log)
        .write_stdin("1\nalice\n5\n")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Student added"));
}
