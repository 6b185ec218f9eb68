//! Check command implementation
//!
//! Implements `legoflake check` to validate the project without building.

use anyhow::{bail, Result};

use super::Context;
use crate::cli::output::{print_json, print_line, status};
use crate::core::check;

/// Execute the check command
pub async fn execute(ctx: &Context) -> Result<()> {
    tracing::info!("Checking project at {}", ctx.layout.root().display());
    let result = check::check(&ctx.layout, &ctx.registry);

    if ctx.output.json {
        print_json(&result)?;
    } else {
        print_line("Checking project...\n");

        let mark = |ok: bool| if ok { status::SUCCESS } else { status::ERROR };
        print_line(format!("{} Base template", mark(result.template_present)));
        print_line(format!("{} Descriptor files", mark(result.descriptors_valid)));
        print_line(format!(
            "{} {} module(s), {} with incomplete header",
            mark(true),
            result.module_count,
            result.malformed_modules.len()
        ));
        print_line(format!("{} {} preset(s)", mark(true), result.preset_count));

        if !result.errors.is_empty() {
            print_line("\nErrors:");
            for error in &result.errors {
                print_line(format!("  {} {error}", status::ERROR));
            }
        }
        if !result.warnings.is_empty() {
            print_line("\nWarnings:");
            for warning in &result.warnings {
                print_line(format!("  {} {warning}", status::WARNING));
            }
        }
    }

    if !result.is_valid() {
        bail!("Check failed with {} error(s)", result.errors.len());
    }
    if !ctx.output.json {
        print_line("\nProject is ready to build.");
    }
    Ok(())
}
