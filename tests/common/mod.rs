//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Isolated global config directory
    pub config_dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            config_dir: TempDir::new().expect("Failed to create config directory"),
        }
    }

    /// Create a project and run `legoflake init` in it
    pub fn initialized() -> Self {
        let project = Self::new();
        let output = project.run(&["init"]);
        assert!(output.status.success(), "init failed: {}", stderr(&output));
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Write the global config file
    pub fn write_global_config(&self, content: &str) {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write global config");
    }

    /// Write a module with a complete header and the given body
    pub fn add_module(&self, category: &str, name: &str, purpose: &str, body: &str) {
        self.create_file(
            &format!("modules/{category}/{name}.nix"),
            &format!(
                "# NIXOS-LEGO-MODULE: {name}\n# PURPOSE: {purpose}\n# CATEGORY: {category}\n# AUTHOR: tester\n{body}"
            ),
        );
    }

    /// Build a command for the legoflake binary rooted at this project
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_legoflake"));
        cmd.current_dir(self.dir.path())
            .env("LEGOFLAKE_CONFIG_DIR", self.config_dir.path())
            .env_remove("LEGOFLAKE_ROOT")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run legoflake with arguments and return its output
    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute legoflake")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Captured stdout as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Captured stderr as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Flake input descriptor with one input that follows nixpkgs
pub const SAMPLE_FLAKE_INPUTS: &str = r#"[
  {
    "name": "zen-browser",
    "url": "github:0xc000022070/zen-browser-flake",
    "arg": "zenPkg",
    "attr": "packages.x86_64-linux.default",
    "follows_nixpkgs": true
  }
]"#;

/// Dev shell descriptor with one shell
pub const SAMPLE_DEVSHELLS: &str = r#"[
  {
    "name": "rust",
    "description": "Rust toolchain",
    "packages": ["cargo", "rustc"],
    "shellHook": "echo rust ready"
  }
]"#;

/// A small template exercising every scalar placeholder kind
pub const SAMPLE_TEMPLATE: &str = r#"# {{PRESET_NAME}}
inputs: {{FLAKE_INPUTS}}
outputs: { self, nixpkgs, {{FLAKE_OUTPUT_ARGS}}... }
special: {{FLAKE_SPECIAL_ARGS}}
host: {{HOST_NAME}} user: {{USER_NAME}} keymap: {{KEYMAP}}
modules: [{{MODULE_INJECTION_POINT}}]
shells: {{DEVSHELLS_INJECTION}}
"#;
