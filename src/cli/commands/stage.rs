//! CLI implementation for `legoflake stage`

use anyhow::{Context as _, Result};

use super::Context;
use crate::cli::output::{print_json, print_success, print_warning};
use crate::core::stage::{resolve_artifact, stage};

/// Copy a generated flake to flake.nix and stage it with git
pub async fn execute(ctx: &Context, artifact: &str) -> Result<()> {
    let path = resolve_artifact(&ctx.layout, artifact);
    let report = stage(&ctx.layout, &path).context("Failed to stage flake")?;

    if ctx.output.json {
        return print_json(&report);
    }

    print_success(format!("Copied {} to {}", path.display(), report.target.display()));
    if let Some(warning) = &report.warning {
        print_warning(format!("git add skipped: {warning}"));
    }
    Ok(())
}
