//! CLI implementation for `legoflake flakes`

use anyhow::{Context as _, Result};

use super::Context;
use crate::cli::output::{print_info, print_json, print_line};
use crate::core::artifact::list_artifacts;

/// List generated flakes, newest first
pub async fn execute(ctx: &Context) -> Result<()> {
    let dir = ctx.layout.flakes_dir();
    let artifacts =
        list_artifacts(&dir).with_context(|| format!("Failed to list {}", dir.display()))?;

    if ctx.output.json {
        return print_json(&artifacts);
    }

    if artifacts.is_empty() {
        print_info("No flakes generated yet. Run 'legoflake build <preset>'.");
        return Ok(());
    }
    for artifact in &artifacts {
        print_line(format!(
            "{}  {}",
            artifact.modified.format("%Y-%m-%d %H:%M:%S"),
            artifact.name
        ));
    }
    Ok(())
}
