//! Build command implementation
//!
//! Implements `legoflake build` to assemble a flake for one preset.

use anyhow::{bail, Context as _, Result};

use super::Context;
use crate::cli::output::{create_spinner, print_detail, print_json, print_success, print_warning};
use crate::core::assemble::{assemble, ModuleOutcome};
use crate::core::module::ModuleId;
use crate::core::preset::{validate_preset_name, Preset};
use crate::core::stage::stage;

/// Build options
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Preset to build
    pub preset: String,
    /// Modules to include; empty means the preset's active modules
    pub modules: Vec<ModuleId>,
    /// Artifact label; blank means a timestamp
    pub label: String,
    /// Copy the artifact to flake.nix and stage it
    pub stage: bool,
}

/// Execute the build command
pub async fn execute(ctx: &Context, options: BuildOptions) -> Result<()> {
    validate_preset_name(&options.preset)?;
    let preset_path = ctx.layout.preset_path(&options.preset);
    if !preset_path.exists() {
        bail!(
            "Preset '{}' not found. Create it with 'legoflake preset new {}'.",
            options.preset,
            options.preset
        );
    }
    let preset = Preset::load(&preset_path)?;

    let modules = if options.modules.is_empty() {
        preset.modules.active.clone()
    } else {
        options.modules
    };

    tracing::info!("Building preset '{}'", options.preset);
    let spinner = create_spinner(&format!("Assembling flake for '{}'...", options.preset));

    let layout = ctx.layout.clone();
    let label = options.label;
    let outcome = tokio::task::spawn_blocking(move || {
        let mut preset = preset;
        let report = assemble(&layout, &mut preset, &modules, &label);
        (preset, report)
    })
    .await;
    spinner.finish_and_clear();

    let (mut preset, report) = outcome.context("Build task panicked")?;
    let report = report.with_context(|| format!("Failed to build preset '{}'", options.preset))?;

    preset
        .save(&preset_path)
        .with_context(|| format!("Flake written, but preset '{}' could not be saved", options.preset))?;

    let staged = if options.stage {
        Some(stage(&ctx.layout, &report.artifact_path).context("Failed to stage flake")?)
    } else {
        None
    };

    if ctx.output.json {
        return print_json(&serde_json::json!({
            "preset": options.preset,
            "build": report,
            "stage": staged,
        }));
    }

    for skipped in report.skipped() {
        match &skipped.outcome {
            ModuleOutcome::SkippedUnreadable { error } => {
                print_warning(format!("Skipped {}: cannot read module ({error})", skipped.id));
            }
            ModuleOutcome::SkippedMalformed { line_count } => {
                print_warning(format!(
                    "Skipped {}: header incomplete ({line_count} line(s), need 4)",
                    skipped.id
                ));
            }
            ModuleOutcome::Included => {}
        }
    }

    print_success(format!("Built {}", report.artifact_name));
    print_detail(format!(
        "{} of {} module(s) included",
        report.included_count(),
        report.modules.len()
    ));
    print_detail(report.artifact_path.display().to_string());

    if let Some(staged) = staged {
        print_success(format!("Staged as {}", staged.target.display()));
        if let Some(warning) = staged.warning {
            print_warning(format!("git add skipped: {warning}"));
        }
    }

    Ok(())
}
