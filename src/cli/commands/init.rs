//! CLI implementation for `legoflake init` command
//!
//! This module handles the CLI interface for project initialization.

use anyhow::{Context as _, Result};

use super::Context;
use crate::cli::output::{print_detail, print_json, print_success};
use crate::core::init::init_project;

/// Execute the init command
pub async fn execute(ctx: &Context) -> Result<()> {
    let layout = &ctx.layout;
    let result = init_project(layout, &ctx.registry)
        .with_context(|| format!("Failed to initialize project in {}", layout.root().display()))?;

    if ctx.output.json {
        return print_json(&serde_json::json!({
            "root": layout.root(),
            "created_dirs": result.created_dirs,
            "template": result.template_path,
            "template_written": result.template_written,
        }));
    }

    print_success(format!("Initialized legoflake project in {}", layout.root().display()));
    for dir in &result.created_dirs {
        let shown = dir.strip_prefix(layout.root()).unwrap_or(dir);
        print_detail(format!("Created {}/", shown.display()));
    }
    if result.template_written {
        print_detail("Created templates/base-flake.nix");
    } else {
        print_detail("Kept existing templates/base-flake.nix");
    }

    Ok(())
}
