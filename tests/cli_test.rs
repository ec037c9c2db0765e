//! Integration tests for the tm binary
//!
//! tmux is replaced by `false`, so every session query answers "no such
//! session" and nothing ever attaches to a terminal.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn false_binary() -> Option<PathBuf> {
    ["/bin/false", "/usr/bin/false"]
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

fn tm(config: &Path, tmux: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tm"))
        .args(args)
        .env("TM_CONFIG_PATH", config)
        .env("TM_TMUX_PATH", tmux)
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("TM_DEBUG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute tm")
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, content).unwrap();
    path
}

/// Test that the help command works
#[test]
fn test_help_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_tm"))
        .arg("--help")
        .output()
        .expect("Failed to execute help command");

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: tm"), "Should show usage");
    assert!(stdout.contains("--dry-run"), "Should show dry-run flag");
    assert!(stdout.contains("--list"), "Should show list flag");
}

/// Test that the version command works
#[test]
fn test_version_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_tm"))
        .arg("--version")
        .output()
        .expect("Failed to execute version command");

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tm"), "Should show binary name");
    assert!(stdout.contains("0.1.0"), "Should show version number");
}

/// A session name is mandatory
#[test]
fn test_missing_name_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_tm"))
        .output()
        .expect("Failed to execute tm");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "Should explain usage");
}

/// Smart directories pick up project folders
#[test]
fn test_dry_run_smart_directory() {
    let Some(tmux) = false_binary() else {
        return;
    };
    let dir = TempDir::new().unwrap();
    let projects = dir.path().join("projects");
    std::fs::create_dir_all(projects.join("api")).unwrap();
    let config = write_config(
        &dir,
        &format!("smart_directories:\n  - {}\n", projects.display()),
    );

    let output = tm(&config, &tmux, &["--dry-run", "api"]);

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("create api"));
    assert!(stdout.contains(&projects.join("api").display().to_string()));
}

/// Aliases resolve to the canonical predefined session
#[test]
fn test_dry_run_predefined_alias() {
    let Some(tmux) = false_binary() else {
        return;
    };
    let dir = TempDir::new().unwrap();
    let notes = dir.path().join("notes");
    std::fs::create_dir(&notes).unwrap();
    let config = write_config(
        &dir,
        &format!(
            "sessions:\n  - name: notes\n    dir: {}\n    aliases: [n]\n",
            notes.display()
        ),
    );

    let output = tm(&config, &tmux, &["--dry-run", "n"]);

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("create notes"));
    assert!(stdout.contains(&notes.display().to_string()));
}

/// Listing with a tmux that fails yields an empty list
#[test]
fn test_list_json_without_server() {
    let Some(tmux) = false_binary() else {
        return;
    };
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");

    let output = tm(&config, &tmux, &["--list", "--json"]);

    assert!(output.status.success(), "{:?}", output);
    let sessions: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(sessions, serde_json::json!([]));
}

/// An explicitly requested config file has to exist
#[test]
fn test_missing_config_file_fails() {
    let Some(tmux) = false_binary() else {
        return;
    };
    let dir = TempDir::new().unwrap();

    let output = tm(&dir.path().join("missing.yaml"), &tmux, &["--dry-run", "x"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "{}", stderr);
}

/// A configured tmux path has to exist
#[test]
fn test_missing_tmux_binary_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");

    let output = tm(&config, &dir.path().join("tmux"), &["--dry-run", "x"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tmux path does not exist"), "{}", stderr);
}
