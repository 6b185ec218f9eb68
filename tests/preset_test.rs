//! Integration tests for `legoflake preset` subcommands

mod common;

use common::{stderr, stdout, TestProject};

fn read_preset(project: &TestProject, name: &str) -> toml::Value {
    toml::from_str(&project.read_file(&format!("presets/{name}.toml"))).unwrap()
}

#[test]
fn test_preset_new_uses_defaults() {
    let project = TestProject::initialized();

    let output = project.run(&["preset", "new", "desktop", "--user", "alice"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let preset = read_preset(&project, "desktop");
    assert_eq!(preset["host"]["preset_name"].as_str(), Some("desktop"));
    assert_eq!(preset["host"]["host_name"].as_str(), Some("desktop"));
    assert_eq!(preset["host"]["state_version"].as_str(), Some("24.05"));
    assert_eq!(preset["user"]["name"].as_str(), Some("alice"));
    assert_eq!(preset["user"]["description"].as_str(), Some("alice"));
    assert_eq!(preset["locale"]["timezone"].as_str(), Some("America/Sao_Paulo"));
    assert_eq!(preset["locale"]["default_locale"].as_str(), Some("en_US.UTF-8"));
    assert_eq!(preset["locale"]["lc_time"].as_str(), Some("pt_BR.UTF-8"));
    assert_eq!(preset["locale"]["keymap"].as_str(), Some("br-abnt2"));
    assert_eq!(preset["modules"]["active"].as_array().map(Vec::len), Some(0));
    assert_eq!(preset["metadata"]["last_applied_flake"].as_str(), Some(""));
}

#[test]
fn test_preset_new_applies_global_defaults() {
    let project = TestProject::initialized();
    project.write_global_config("[preset]\nuser = \"carol\"\nkeymap = \"us\"\nextra_locale = \"de_DE.UTF-8\"\n");

    let output = project.run(&["preset", "new", "laptop"]);

    assert!(output.status.success());
    let preset = read_preset(&project, "laptop");
    assert_eq!(preset["user"]["name"].as_str(), Some("carol"));
    assert_eq!(preset["locale"]["keymap"].as_str(), Some("us"));
    assert_eq!(preset["locale"]["lc_paper"].as_str(), Some("de_DE.UTF-8"));
}

#[test]
fn test_preset_new_refuses_existing_without_force() {
    let project = TestProject::initialized();
    assert!(project.run(&["preset", "new", "desktop"]).status.success());

    let output = project.run(&["preset", "new", "desktop"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("already exists"));

    let forced = project.run(&["preset", "new", "desktop", "--force", "--user", "bob"]);
    assert!(forced.status.success());
    assert_eq!(read_preset(&project, "desktop")["user"]["name"].as_str(), Some("bob"));
}

#[test]
fn test_preset_new_rejects_bad_name() {
    let project = TestProject::initialized();

    let output = project.run(&["preset", "new", "../escape"]);

    assert!(!output.status.success());
    assert!(!project.path().join("escape.toml").exists());
}

#[test]
fn test_preset_list_sorted() {
    let project = TestProject::initialized();
    for name in ["zeta", "alpha", "mid"] {
        assert!(project.run(&["preset", "new", name]).status.success());
    }
    project.create_file("presets/readme.md", "not a preset");

    let output = project.run(&["--json", "preset", "list"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["alpha", "mid", "zeta"]);
}

#[test]
fn test_preset_list_without_presets_dir_fails() {
    let project = TestProject::new();

    let output = project.run(&["preset", "list"]);

    assert!(!output.status.success());
}

#[test]
fn test_preset_set_updates_field_and_timestamp() {
    let project = TestProject::initialized();
    assert!(project.run(&["preset", "new", "desktop"]).status.success());
    let before = read_preset(&project, "desktop");

    let output = project.run(&["preset", "set", "desktop", "host_name", "workstation"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let after = read_preset(&project, "desktop");
    assert_eq!(after["host"]["host_name"].as_str(), Some("workstation"));
    let stamp = |v: &toml::Value| {
        chrono::DateTime::parse_from_rfc3339(v["metadata"]["last_modified"].as_str().unwrap()).unwrap()
    };
    assert!(stamp(&after) > stamp(&before));
}

#[test]
fn test_preset_set_unknown_field() {
    let project = TestProject::initialized();
    assert!(project.run(&["preset", "new", "desktop"]).status.success());

    let output = project.run(&["preset", "set", "desktop", "color", "blue"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Editable fields"));
}

#[test]
fn test_preset_show() {
    let project = TestProject::initialized();
    assert!(project.run(&["preset", "new", "desktop", "--user", "alice"]).status.success());

    let output = project.run(&["preset", "show", "desktop"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Preset desktop"));
    assert!(text.contains("keymap:           br-abnt2"));
    assert!(text.contains("(none)"));
}

#[test]
fn test_preset_show_missing() {
    let project = TestProject::initialized();

    let output = project.run(&["preset", "show", "ghost"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("not found"));
}

#[test]
fn test_preset_delete() {
    let project = TestProject::initialized();
    assert!(project.run(&["preset", "new", "desktop"]).status.success());

    let output = project.run(&["preset", "delete", "desktop"]);

    assert!(output.status.success());
    assert!(!project.file_exists("presets/desktop.toml"));
    assert!(!project.run(&["preset", "delete", "desktop"]).status.success());
}

#[test]
fn test_preset_list_empty_prints_hint() {
    let project = TestProject::initialized();

    let output = project.run(&["preset", "list"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("ℹ No presets found"));

    let quiet = project.run(&["--quiet", "preset", "list"]);
    assert!(stdout(&quiet).is_empty());
}
