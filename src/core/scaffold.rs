//! Module creation, inspection and removal

use std::path::PathBuf;

use crate::core::module::{scaffold_content, ModuleId, ModuleSource};
use crate::error::ModuleError;
use crate::infra::filesystem;
use crate::infra::layout::ProjectLayout;

/// Write a new module containing only the header.
///
/// Refuses to overwrite an existing module.
pub fn create_module(
    layout: &ProjectLayout,
    id: &ModuleId,
    purpose: &str,
    author: &str,
) -> Result<PathBuf, ModuleError> {
    let path = layout.module_path(id);
    if path.exists() {
        return Err(ModuleError::AlreadyExists { path });
    }

    let content = scaffold_content(id.name(), id.category(), purpose, author);
    filesystem::write_file_atomic(&path, &content).map_err(|e| ModuleError::Io {
        path: path.clone(),
        error: e.to_string(),
    })?;

    tracing::info!("Created module {id} at {}", path.display());
    Ok(path)
}

/// Remove a module file
pub fn delete_module(layout: &ProjectLayout, id: &ModuleId) -> Result<PathBuf, ModuleError> {
    let path = layout.module_path(id);
    if !path.is_file() {
        return Err(ModuleError::NotFound { path });
    }
    filesystem::remove_file(&path).map_err(|e| ModuleError::Io {
        path: path.clone(),
        error: e.to_string(),
    })?;

    tracing::info!("Deleted module {id}");
    Ok(path)
}

/// Header and body of a module, or `None` when the header is incomplete
#[derive(Debug, Clone)]
pub struct ModuleInspection {
    /// Path to the fragment
    pub path: PathBuf,
    /// Parsed fragment, if the header is complete
    pub source: Option<ModuleSource>,
    /// Total number of lines in the file
    pub line_count: usize,
}

/// Read a module and split it into header and body
pub fn inspect_module(layout: &ProjectLayout, id: &ModuleId) -> Result<ModuleInspection, ModuleError> {
    let path = layout.module_path(id);
    if !path.is_file() {
        return Err(ModuleError::NotFound { path });
    }
    let content = filesystem::read_file(&path).map_err(|e| ModuleError::Io {
        path: path.clone(),
        error: e.to_string(),
    })?;

    Ok(ModuleInspection {
        source: ModuleSource::parse(&content),
        line_count: content.lines().count(),
        path,
    })
}
