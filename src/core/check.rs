//! Check command logic
//!
//! Validates the template, the descriptor files, the module catalog and the
//! stored presets without generating anything.

use serde::Serialize;

use crate::core::catalog::{list_modules, malformed_modules};
use crate::core::category::CategoryRegistry;
use crate::core::descriptor::{load_dev_shells, load_flake_inputs, validate_flake_inputs};
use crate::core::preset::{list_presets, Preset};
use crate::infra::git;
use crate::infra::layout::ProjectLayout;

/// Result of the check operation
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Whether the base template exists
    pub template_present: bool,
    /// Whether both descriptor files parse and validate
    pub descriptors_valid: bool,
    /// Number of modules in the catalog
    pub module_count: usize,
    /// Modules whose header is incomplete
    pub malformed_modules: Vec<String>,
    /// Number of presets found
    pub preset_count: usize,
    /// Conditions that would make a build fail
    pub errors: Vec<String>,
    /// Conditions a build would tolerate
    pub warnings: Vec<String>,
}

impl CheckResult {
    /// Check if all validations passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Perform check operation on a project
pub fn check(layout: &ProjectLayout, registry: &CategoryRegistry) -> CheckResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let template_path = layout.template_path();
    let template_present = template_path.is_file();
    if !template_present {
        errors.push(format!("Template not found: {}", template_path.display()));
    }

    let mut descriptors_valid = true;
    match load_flake_inputs(&layout.flake_inputs_path()).and_then(|inputs| {
        validate_flake_inputs(&inputs)?;
        Ok(inputs)
    }) {
        Ok(inputs) => tracing::debug!("{} flake input(s) valid", inputs.len()),
        Err(e) => {
            descriptors_valid = false;
            errors.push(e.to_string());
        }
    }
    match load_dev_shells(&layout.devshells_path()) {
        Ok(shells) => tracing::debug!("{} dev shell(s) valid", shells.len()),
        Err(e) => {
            descriptors_valid = false;
            errors.push(e.to_string());
        }
    }

    let modules = list_modules(layout, registry);
    let malformed: Vec<String> = malformed_modules(&modules)
        .into_iter()
        .map(|m| m.id.to_string())
        .collect();
    for id in &malformed {
        warnings.push(format!("Module {id} has an incomplete header and will be skipped"));
    }

    let mut preset_count = 0;
    match list_presets(&layout.presets_dir()) {
        Ok(presets) => {
            preset_count = presets.len();
            for summary in presets {
                match Preset::load(&summary.path) {
                    Ok(preset) => {
                        for id in &preset.modules.active {
                            if !layout.module_path(id).is_file() {
                                warnings.push(format!(
                                    "Preset '{}' references missing module {id}",
                                    summary.name
                                ));
                            }
                        }
                    }
                    Err(e) => warnings.push(e.to_string()),
                }
            }
        }
        Err(e) => warnings.push(e.to_string()),
    }

    if git::find_git().is_err() {
        warnings.push("git not found in PATH; staged flakes will not be added".to_string());
    }

    CheckResult {
        template_present,
        descriptors_valid,
        module_count: modules.len(),
        malformed_modules: malformed,
        preset_count,
        errors,
        warnings,
    }
}
