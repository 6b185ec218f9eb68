//! Integration tests for `legoflake flakes` and `legoflake stage`

mod common;

use assert_fs::prelude::*;
use common::{stderr, stdout, TestProject};
use predicates::prelude::*;
use std::process::Command;

fn git_available() -> bool {
    which::which("git").is_ok()
}

#[test]
fn test_flakes_lists_artifacts() {
    let project = TestProject::initialized();
    project.create_file("flakes/desktop-a.nix", "{}");
    project.create_file("flakes/notes.txt", "ignored");

    let output = project.run(&["flakes"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("desktop-a.nix"));
    assert!(!text.contains("notes.txt"));
}

#[test]
fn test_flakes_empty() {
    let project = TestProject::new();

    let output = project.run(&["flakes"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("No flakes generated yet"));
}

#[test]
fn test_stage_copies_without_repository() {
    let project = TestProject::initialized();
    project.create_file("flakes/desktop-a.nix", "{ staged = true; }\n");

    let output = project.run(&["stage", "desktop-a.nix"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(project.read_file("flake.nix"), "{ staged = true; }\n");
    assert!(stderr(&output).contains("git add skipped"));
}

#[test]
fn test_stage_missing_artifact_fails() {
    let project = TestProject::initialized();

    let output = project.run(&["stage", "nope.nix"]);

    assert!(!output.status.success());
    assert!(!project.file_exists("flake.nix"));
}

#[test]
fn test_stage_adds_to_git_index() {
    if !git_available() {
        return;
    }
    let temp = assert_fs::TempDir::new().unwrap();
    let config = assert_fs::TempDir::new().unwrap();
    temp.child("presets").create_dir_all().unwrap();
    temp.child("flakes/laptop-v1.nix").write_str("{ v = 1; }\n").unwrap();
    let init = Command::new("git")
        .args(["init", "--quiet"])
        .current_dir(temp.path())
        .status()
        .unwrap();
    assert!(init.success());

    let output = Command::new(env!("CARGO_BIN_EXE_legoflake"))
        .args(["--root", temp.path().to_str().unwrap(), "stage", "laptop-v1.nix"])
        .env("LEGOFLAKE_CONFIG_DIR", config.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    temp.child("flake.nix").assert("{ v = 1; }\n");
    let staged = Command::new("git")
        .args(["diff", "--cached", "--name-only"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let names = String::from_utf8_lossy(&staged.stdout).into_owned();
    assert!(predicate::str::contains("flake.nix").eval(&names));
    assert!(predicate::str::contains("flakes/laptop-v1.nix").eval(&names));
}
