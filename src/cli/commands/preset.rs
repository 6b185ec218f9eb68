//! Preset subcommand implementations
//!
//! Implements `legoflake preset list`, `preset new`, `preset show`,
//! `preset set`, and `preset delete`.

use anyhow::{bail, Context as _, Result};

use super::Context;
use crate::cli::output::{print_detail, print_info, print_json, print_line, print_success};
use crate::config::defaults::DEFAULT_USER;
use crate::core::preset::{
    delete_preset, list_presets, validate_preset_name, Preset, EDITABLE_FIELDS,
};

/// Execute the preset list command
pub async fn execute_list(ctx: &Context) -> Result<()> {
    let presets = list_presets(&ctx.layout.presets_dir())
        .context("No presets directory. Run 'legoflake init' first.")?;

    if ctx.output.json {
        return print_json(&presets);
    }

    if presets.is_empty() {
        print_info("No presets found. Create one with 'legoflake preset new <name>'.");
        return Ok(());
    }
    for preset in &presets {
        print_line(format!(
            "{}  (modified {})",
            preset.name,
            preset.modified.format("%Y-%m-%d %H:%M")
        ));
    }
    Ok(())
}

/// Execute the preset new command
pub async fn execute_new(ctx: &Context, name: &str, user: Option<String>, force: bool) -> Result<()> {
    validate_preset_name(name)?;
    let path = ctx.layout.preset_path(name);
    if path.exists() && !force {
        bail!(
            "Preset '{name}' already exists at {}. Use --force to replace it.",
            path.display()
        );
    }

    let user = user
        .or_else(|| ctx.config.preset.user.clone())
        .unwrap_or_else(|| DEFAULT_USER.to_string());
    let mut preset = Preset::with_defaults(name, &user, &ctx.config.preset_defaults());
    preset
        .save(&path)
        .with_context(|| format!("Failed to create preset '{name}'"))?;

    if ctx.output.json {
        return print_json(&preset);
    }
    print_success(format!("Created preset '{name}'"));
    print_detail(path.display().to_string());
    Ok(())
}

/// Execute the preset show command
pub async fn execute_show(ctx: &Context, name: &str) -> Result<()> {
    validate_preset_name(name)?;
    let preset = Preset::load(&ctx.layout.preset_path(name))?;

    if ctx.output.json {
        return print_json(&preset);
    }

    let host = &preset.host;
    let locale = &preset.locale;
    print_line(format!("Preset {}", host.preset_name));
    print_detail(format!("host_name:        {}", host.host_name));
    print_detail(format!("state_version:    {}", host.state_version));
    print_detail(format!("user_name:        {}", preset.user.name));
    print_detail(format!("user_description: {}", preset.user.description));
    print_detail(format!("timezone:         {}", locale.timezone));
    print_detail(format!("default_locale:   {}", locale.default_locale));
    print_detail(format!("keymap:           {}", locale.keymap));
    for (field, value) in [
        ("lc_address", &locale.lc_address),
        ("lc_identification", &locale.lc_identification),
        ("lc_measurement", &locale.lc_measurement),
        ("lc_monetary", &locale.lc_monetary),
        ("lc_name", &locale.lc_name),
        ("lc_numeric", &locale.lc_numeric),
        ("lc_paper", &locale.lc_paper),
        ("lc_telephone", &locale.lc_telephone),
        ("lc_time", &locale.lc_time),
    ] {
        print_detail(format!("{field:<18}{value}"));
    }

    print_line("Modules:");
    if preset.modules.active.is_empty() {
        print_detail("(none)");
    }
    for id in &preset.modules.active {
        print_detail(id.to_string());
    }

    print_line(format!("Created:       {}", preset.metadata.created_at.to_rfc3339()));
    print_line(format!("Last modified: {}", preset.metadata.last_modified.to_rfc3339()));
    if !preset.metadata.last_applied_flake.is_empty() {
        print_line(format!("Last flake:    {}", preset.metadata.last_applied_flake));
    }
    Ok(())
}

/// Execute the preset set command
pub async fn execute_set(ctx: &Context, name: &str, field: &str, value: &str) -> Result<()> {
    validate_preset_name(name)?;
    let path = ctx.layout.preset_path(name);
    let mut preset = Preset::load(&path)?;

    if let Err(e) = preset.set_field(field, value) {
        bail!("{e}. Editable fields: {}", EDITABLE_FIELDS.join(", "));
    }
    preset
        .save(&path)
        .with_context(|| format!("Failed to save preset '{name}'"))?;

    if ctx.output.json {
        return print_json(&preset);
    }
    print_success(format!("Set {field} = \"{value}\" on preset '{name}'"));
    Ok(())
}

/// Execute the preset delete command
pub async fn execute_delete(ctx: &Context, name: &str) -> Result<()> {
    validate_preset_name(name)?;
    let path = ctx.layout.preset_path(name);
    delete_preset(&path)?;

    if ctx.output.json {
        return print_json(&serde_json::json!({ "deleted": name, "path": path }));
    }
    print_success(format!("Deleted preset '{name}'"));
    Ok(())
}
