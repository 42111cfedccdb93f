//! Integration tests for config warning behavior.

use std::fs;
use std::process::Command;

fn run_in(dir: &std::path::Path, config: &str) -> std::process::Output {
    let config_dir = dir.join(".contactbook");
    fs::create_dir_all(&config_dir).expect("Failed to create .contactbook dir");
    fs::write(config_dir.join("config.toml"), config).expect("Failed to write config");
    fs::write(dir.join("script.txt"), "add A a@x.com\n").expect("Failed to write script");

    let home = tempfile::tempdir().expect("Failed to create home dir");
    Command::new(env!("CARGO_BIN_EXE_contactbook"))
        .current_dir(dir)
        .env("HOME", home.path())
        .args(["run", "script.txt"])
        .output()
        .expect("Failed to execute contactbook")
}

/// An invalid config file produces a warning and the command still runs.
#[test]
fn test_config_warning_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run_in(temp_dir.path(), "invalid toml [[[");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(
        stderr.contains("Tip: Check"),
        "Expected tip about config files in stderr, got: {}",
        stderr
    );
    assert!(output.status.success());
}

#[test]
fn test_config_warning_on_invalid_values() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run_in(temp_dir.path(), "[display]\nmax_name_width = 0\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
}

#[test]
fn test_no_warning_on_valid_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run_in(
        temp_dir.path(),
        r#"
[display]
empty_message = "Nobody here"

[form]
trim_whitespace = false
"#,
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("Warning: Could not load config"),
        "Unexpected warning in stderr: {}",
        stderr
    );
    assert!(output.status.success());
}

#[test]
fn test_project_config_changes_empty_message() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".contactbook");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[display]\nempty_message = \"Nobody here\"\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("empty.txt"), "").unwrap();

    let home = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_contactbook"))
        .current_dir(temp_dir.path())
        .env("HOME", home.path())
        .args(["run", "empty.txt"])
        .output()
        .expect("Failed to execute contactbook");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Nobody here"), "stdout: {}", stdout);
}
