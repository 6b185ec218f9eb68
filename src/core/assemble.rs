//! Flake assembly
//!
//! Combines the base template, the preset's scalar fields, the snippets
//! derived from the descriptor files, and the requested modules into one
//! generated flake.
//!
//! Module order is exactly the caller's order. A module that cannot be read
//! or whose header is incomplete is skipped and reported in the
//! [`BuildReport`]; it never fails the build. A missing template, a malformed
//! descriptor file, and a failed write do.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

use crate::core::artifact::{artifact_file_name, validate_label};
use crate::core::descriptor::{load_dev_shells, load_flake_inputs, validate_flake_inputs};
use crate::core::module::{ModuleId, ModuleSource};
use crate::core::preset::{validate_preset_name, Preset};
use crate::core::snippet::{render_dev_shells, FlakeSnippets, WrapperArgs};
use crate::core::template::Placeholder;
use crate::error::AssembleError;
use crate::infra::filesystem;
use crate::infra::layout::ProjectLayout;

/// Indentation of a module wrapper inside the `modules` list
const WRAPPER_INDENT: &str = "        ";

/// Indentation of module body lines inside their wrapper
const BODY_INDENT: &str = "          ";

/// What happened to one requested module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModuleOutcome {
    /// Wrapped and injected
    Included,
    /// The fragment could not be read
    SkippedUnreadable { error: String },
    /// The fragment has fewer than four lines
    SkippedMalformed { line_count: usize },
}

impl ModuleOutcome {
    /// Whether the module made it into the flake
    pub fn is_included(&self) -> bool {
        matches!(self, Self::Included)
    }
}

/// Outcome of one requested module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleReport {
    /// Requested identity
    pub id: ModuleId,
    /// What happened to it
    pub outcome: ModuleOutcome,
}

/// Result of a successful build
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// Path of the written flake
    pub artifact_path: PathBuf,
    /// File name of the written flake
    pub artifact_name: String,
    /// Per-module outcomes in request order
    pub modules: Vec<ModuleReport>,
}

impl BuildReport {
    /// Number of modules injected into the flake
    pub fn included_count(&self) -> usize {
        self.modules.iter().filter(|m| m.outcome.is_included()).count()
    }

    /// Modules that were skipped
    pub fn skipped(&self) -> impl Iterator<Item = &ModuleReport> {
        self.modules.iter().filter(|m| !m.outcome.is_included())
    }
}

/// Build a flake for `preset` from `modules` and write it under `flakes/`.
///
/// On success the preset's active module list and last flake name are
/// updated in memory; saving the preset is left to the caller.
pub fn assemble(
    layout: &ProjectLayout,
    preset: &mut Preset,
    modules: &[ModuleId],
    label: &str,
) -> Result<BuildReport, AssembleError> {
    assemble_at(layout, preset, modules, label, Local::now())
}

/// [`assemble`] with an explicit build time for the timestamp label
pub fn assemble_at(
    layout: &ProjectLayout,
    preset: &mut Preset,
    modules: &[ModuleId],
    label: &str,
    now: DateTime<Local>,
) -> Result<BuildReport, AssembleError> {
    validate_preset_name(&preset.host.preset_name).map_err(|_| {
        AssembleError::InvalidPresetName {
            name: preset.host.preset_name.clone(),
        }
    })?;
    validate_label(label)?;

    let template_path = layout.template_path();
    let template =
        std::fs::read_to_string(&template_path).map_err(|e| AssembleError::TemplateMissing {
            path: template_path.clone(),
            error: e.to_string(),
        })?;

    let flake_inputs = load_flake_inputs(&layout.flake_inputs_path())?;
    validate_flake_inputs(&flake_inputs)?;
    let dev_shells = load_dev_shells(&layout.devshells_path())?;

    let snippets = FlakeSnippets::generate(&flake_inputs);
    let dev_shells_block = render_dev_shells(&dev_shells);

    tracing::info!(
        "Assembling flake for preset '{}' with {} module(s), {} flake input(s), {} dev shell(s)",
        preset.host.preset_name,
        modules.len(),
        flake_inputs.len(),
        dev_shells.len()
    );

    let (module_text, reports) = render_modules(layout, modules, &snippets.wrapper_args);

    let mut subs = preset.substitutions();
    subs.set(Placeholder::FlakeInputs, snippets.inputs_block)
        .set(Placeholder::FlakeOutputArgs, snippets.output_args)
        .set(Placeholder::FlakeSpecialArgs, snippets.special_args)
        .set(Placeholder::DevShellsInjection, dev_shells_block)
        .set(Placeholder::ModuleInjectionPoint, module_text);
    let flake = subs.apply(&template);

    let artifact_name = artifact_file_name(&preset.host.preset_name, label, now);
    let artifact_path = layout.flakes_dir().join(&artifact_name);
    filesystem::write_file_atomic(&artifact_path, &flake).map_err(|e| {
        AssembleError::ArtifactWrite {
            path: artifact_path.clone(),
            error: e.to_string(),
        }
    })?;

    preset.modules.active = modules.to_vec();
    preset.metadata.last_applied_flake.clone_from(&artifact_name);

    tracing::info!("Wrote {}", artifact_path.display());

    Ok(BuildReport {
        artifact_path,
        artifact_name,
        modules: reports,
    })
}

/// Read and wrap every requested module, in order
pub fn render_modules(
    layout: &ProjectLayout,
    modules: &[ModuleId],
    wrapper_args: &WrapperArgs,
) -> (String, Vec<ModuleReport>) {
    let mut text = String::new();
    let mut reports = Vec::with_capacity(modules.len());

    for id in modules {
        let path = layout.module_path(id);
        let outcome = match std::fs::read_to_string(&path) {
            Err(e) => {
                tracing::warn!("Skipping module {id}: cannot read {}: {e}", path.display());
                ModuleOutcome::SkippedUnreadable {
                    error: e.to_string(),
                }
            }
            Ok(content) => match ModuleSource::parse(&content) {
                None => {
                    let line_count = content.lines().count();
                    tracing::warn!("Skipping module {id}: header incomplete ({line_count} line(s))");
                    ModuleOutcome::SkippedMalformed { line_count }
                }
                Some(source) => {
                    tracing::debug!("Injecting module {id}");
                    text.push_str(&wrap_module(&source, wrapper_args));
                    ModuleOutcome::Included
                }
            },
        };
        reports.push(ModuleReport {
            id: id.clone(),
            outcome,
        });
    }

    (text, reports)
}

/// Wrap a module body as a NixOS module function.
///
/// The block starts with a newline so consecutive modules are separated by a
/// blank line. Blank body lines are emitted without indentation.
pub fn wrap_module(source: &ModuleSource, wrapper_args: &WrapperArgs) -> String {
    let mut out = format!(
        "\n{WRAPPER_INDENT}# ── {} ── {}\n{WRAPPER_INDENT}({{ {wrapper_args}, ... }}: {{\n",
        source.name, source.purpose
    );
    for line in source.body.split('\n') {
        if line.trim().is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!("{BODY_INDENT}{line}\n"));
        }
    }
    out.push_str(&format!("{WRAPPER_INDENT}}})\n"));
    out
}
