//! Integration tests for `legoflake check` and project root discovery

mod common;

use common::{stderr, stdout, TestProject};

#[test]
fn test_check_fresh_project_passes() {
    let project = TestProject::initialized();

    let output = project.run(&["check"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Project is ready to build."));
}

#[test]
fn test_check_without_template_fails() {
    let project = TestProject::initialized();
    std::fs::remove_file(project.path().join("templates/base-flake.nix")).unwrap();

    let output = project.run(&["check"]);

    assert!(!output.status.success());
    assert!(stdout(&output).contains("Template not found"));
}

#[test]
fn test_check_reports_duplicate_alias() {
    let project = TestProject::initialized();
    project.create_file(
        "modules/overlays/flake-inputs.json",
        r#"[{"name":"a","url":"u","arg":"pkg","attr":"x"},{"name":"b","url":"u","arg":"pkg","attr":"y"}]"#,
    );

    let output = project.run(&["--json", "check"]);

    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["descriptors_valid"], false);
    assert!(value["errors"][0].as_str().unwrap().contains("'pkg'"));
}

#[test]
fn test_check_malformed_module_is_a_warning() {
    let project = TestProject::initialized();
    project.create_file("modules/hardware/gpu.nix", "# NIXOS-LEGO-MODULE: gpu\n");

    let output = project.run(&["check"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("hardware/gpu has an incomplete header"));
}

#[test]
fn test_root_discovered_from_subdirectory() {
    let project = TestProject::initialized();
    project.create_dir("modules/apps/deep");
    project.add_module("apps", "git", "VCS", "");

    let output = project
        .command()
        .current_dir(project.path().join("modules/apps/deep"))
        .args(["--json", "module", "list"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
}

#[test]
fn test_root_from_environment() {
    let project = TestProject::initialized();
    let other = TestProject::new();

    let output = other
        .command()
        .env("LEGOFLAKE_ROOT", project.path())
        .args(["preset", "new", "remote"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(project.file_exists("presets/remote.toml"));
}

#[test]
fn test_root_from_global_config() {
    let project = TestProject::initialized();
    let other = TestProject::new();
    other.write_global_config(&format!(
        "[project]\nroot = {:?}\n",
        project.path().to_str().unwrap()
    ));

    let output = other.run(&["preset", "new", "configured"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(project.file_exists("presets/configured.toml"));
}

#[test]
fn test_malformed_global_config_is_an_error() {
    let project = TestProject::initialized();
    project.write_global_config("[project\n");

    let output = project.run(&["check"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("global configuration"));
}
