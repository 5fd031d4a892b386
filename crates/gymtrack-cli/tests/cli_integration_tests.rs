//! CLI integration tests
//!
//! Each invocation is a separate process, so these also check that state
//! persists between runs.

use std::process::{Command, Output};
use tempfile::TempDir;

fn gymtrack(temp_dir: &TempDir, args: &[&str]) -> Output {
    let data_dir = temp_dir.path().join("data");
    Command::new(env!("CARGO_BIN_EXE_gymtrack"))
        .current_dir(temp_dir.path())
        .env_remove("GYMTRACK_DATA_DIR")
        .arg("--data-dir")
        .arg(&data_dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_add_assign_and_show_day() {
    let temp_dir = TempDir::new().unwrap();

    let id = stdout(&gymtrack(&temp_dir, &["add", "Bench Press", "-w", "60", "-r", "10"]))
        .trim()
        .to_string();
    assert!(!id.is_empty());
    stdout(&gymtrack(&temp_dir, &["add", "Squats", "-w", "80", "-r", "12"]));

    stdout(&gymtrack(&temp_dir, &["assign", &id, "mon"]));

    let monday = stdout(&gymtrack(&temp_dir, &["day", "mon"]));
    assert!(monday.contains("Monday (1)"));
    assert!(monday.contains("Bench Press"));

    let available = stdout(&gymtrack(&temp_dir, &["available", "mon"]));
    assert!(available.contains("Squats"));
    assert!(!available.contains("Bench Press"));

    assert!(temp_dir.path().join("data").join("gym-tracker.db").exists());
}

#[test]
fn test_delete_clears_week() {
    let temp_dir = TempDir::new().unwrap();

    let id = stdout(&gymtrack(&temp_dir, &["add", "Deadlifts", "-w", "100", "-r", "8"]))
        .trim()
        .to_string();
    stdout(&gymtrack(&temp_dir, &["assign", &id[..8], "fri"]));
    stdout(&gymtrack(&temp_dir, &["delete", &id]));

    let week = stdout(&gymtrack(&temp_dir, &["week"]));
    assert!(week.contains("Friday (0)"));
    assert!(!week.contains("Deadlifts"));
}

#[test]
fn test_invalid_input_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = gymtrack(&temp_dir, &["add", "   "]);
    assert!(!output.status.success());

    let output = gymtrack(&temp_dir, &["day", "sat"]);
    assert!(!output.status.success());

    let output = gymtrack(&temp_dir, &["reset"]);
    assert!(!output.status.success());
}
