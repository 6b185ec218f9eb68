//! Module catalog
//!
//! Scans `modules/<category>/` for `.nix` fragments. A category directory that
//! cannot be read contributes nothing; it never fails the scan.

use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::paths::NIX_EXTENSION;
use crate::core::category::{Category, CategoryRegistry};
use crate::core::module::{extract_purpose, ModuleId, ModuleSource};
use crate::infra::layout::ProjectLayout;

/// A discovered module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    /// Category the module lives in
    pub category: Category,
    /// File stem
    pub name: String,
    /// Declared purpose, empty when absent
    pub purpose: String,
    /// `category/name`
    pub id: ModuleId,
    /// Path to the fragment
    pub path: PathBuf,
}

/// List every module in the categories of `registry`, in registry order.
///
/// Within a category, modules are ordered by file name.
pub fn list_modules(layout: &ProjectLayout, registry: &CategoryRegistry) -> Vec<ModuleInfo> {
    registry
        .categories()
        .flat_map(|category| scan_category(&layout.category_dir(category), category))
        .collect()
}

fn scan_category(dir: &Path, category: Category) -> Vec<ModuleInfo> {
    let mut modules = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(NIX_EXTENSION) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Ok(id) = ModuleId::new(category, stem) else {
            tracing::debug!("Ignoring module with unusable name: {}", path.display());
            continue;
        };

        let purpose = std::fs::read_to_string(path)
            .map(|content| extract_purpose(&content))
            .unwrap_or_default();

        modules.push(ModuleInfo {
            category,
            name: stem.to_string(),
            purpose,
            id,
            path: path.to_path_buf(),
        });
    }

    modules
}

/// Catalog modules whose header has fewer than four lines
pub fn malformed_modules(modules: &[ModuleInfo]) -> Vec<&ModuleInfo> {
    modules
        .iter()
        .filter(|module| {
            std::fs::read_to_string(&module.path)
                .map(|content| ModuleSource::parse(&content).is_none())
                .unwrap_or(true)
        })
        .collect()
}
