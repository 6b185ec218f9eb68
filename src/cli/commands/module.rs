//! Module subcommand implementations
//!
//! Implements `legoflake module list`, `module new`, `module show`, and
//! `module delete`.

use anyhow::{Context as _, Result};

use super::Context;
use crate::cli::output::{
    print_detail, print_info, print_json, print_line, print_success, print_warning,
};
use crate::config::defaults::{DEFAULT_MODULE_AUTHOR, DEFAULT_MODULE_PURPOSE};
use crate::core::catalog::list_modules;
use crate::core::category::{Category, CategoryRegistry};
use crate::core::module::ModuleId;
use crate::core::scaffold::{create_module, delete_module, inspect_module};

/// Execute the module list command
pub async fn execute_list(ctx: &Context, category: Option<Category>) -> Result<()> {
    let registry = match category {
        Some(category) => CategoryRegistry::only(category),
        None => ctx.registry.clone(),
    };
    let modules = list_modules(&ctx.layout, &registry);

    if ctx.output.json {
        return print_json(&modules);
    }

    if modules.is_empty() {
        print_info("No modules found. Create one with 'legoflake module new <category> <name>'.");
        return Ok(());
    }

    for category in registry.categories() {
        let in_category: Vec<_> = modules.iter().filter(|m| m.category == category).collect();
        if in_category.is_empty() {
            continue;
        }
        let description = ctx.registry.description(category).unwrap_or_default();
        print_line(format!("[{category}] {description}"));
        for module in in_category {
            if module.purpose.is_empty() {
                print_detail(&module.name);
            } else {
                print_detail(format!("{} - {}", module.name, module.purpose));
            }
        }
        print_line("");
    }
    print_line(format!("{} module(s)", modules.len()));

    Ok(())
}

/// Execute the module new command
pub async fn execute_new(
    ctx: &Context,
    category: Category,
    name: &str,
    purpose: Option<String>,
    author: Option<String>,
) -> Result<()> {
    let id = ModuleId::new(category, name)?;
    let purpose = purpose.unwrap_or_else(|| DEFAULT_MODULE_PURPOSE.to_string());
    let author = author
        .or_else(|| ctx.config.preset.author.clone())
        .unwrap_or_else(|| DEFAULT_MODULE_AUTHOR.to_string());

    let path = create_module(&ctx.layout, &id, &purpose, &author)
        .with_context(|| format!("Failed to create module {id}"))?;

    if ctx.output.json {
        return print_json(&serde_json::json!({ "id": id, "path": path }));
    }
    print_success(format!("Created module {id}"));
    print_detail(path.display().to_string());
    Ok(())
}

/// Execute the module show command
pub async fn execute_show(ctx: &Context, id: &ModuleId) -> Result<()> {
    let inspection = inspect_module(&ctx.layout, id)?;

    if ctx.output.json {
        let header = inspection.source.as_ref().map(|s| {
            serde_json::json!({
                "name": s.name,
                "purpose": s.purpose,
                "category": s.category,
                "author": s.author,
                "body_lines": s.body.lines().count(),
            })
        });
        return print_json(&serde_json::json!({
            "id": id,
            "path": inspection.path,
            "lines": inspection.line_count,
            "header": header,
        }));
    }

    print_line(format!("Module {id}"));
    print_detail(format!("Path:     {}", inspection.path.display()));
    match &inspection.source {
        Some(source) => {
            print_detail(format!("Name:     {}", source.name));
            print_detail(format!("Purpose:  {}", source.purpose));
            print_detail(format!("Category: {}", source.category));
            print_detail(format!("Author:   {}", source.author));
            print_detail(format!("Body:     {} line(s)", source.body.lines().count()));
        }
        None => print_warning(format!(
            "Header incomplete: {} line(s), at least 4 required. This module is skipped by builds.",
            inspection.line_count
        )),
    }
    Ok(())
}

/// Execute the module delete command
pub async fn execute_delete(ctx: &Context, id: &ModuleId) -> Result<()> {
    let path = delete_module(&ctx.layout, id).with_context(|| format!("Failed to delete module {id}"))?;

    if ctx.output.json {
        return print_json(&serde_json::json!({ "deleted": id, "path": path }));
    }
    print_success(format!("Deleted module {id}"));
    Ok(())
}
