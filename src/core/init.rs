//! Project initialization logic
//!
//! Creates the fixed directory layout and a starter base template. Running it
//! again on an initialized project changes nothing.

use std::path::{Path, PathBuf};

use crate::core::category::CategoryRegistry;
use crate::core::template::starter_template;
use crate::error::InitError;
use crate::infra::filesystem;
use crate::infra::layout::ProjectLayout;

/// Result of initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitResult {
    /// Directories that did not exist before
    pub created_dirs: Vec<PathBuf>,
    /// Path to the base template
    pub template_path: PathBuf,
    /// Whether the starter template was written
    pub template_written: bool,
}

/// Directories every project needs, in creation order
pub fn required_directories(layout: &ProjectLayout, registry: &CategoryRegistry) -> Vec<PathBuf> {
    let mut dirs = vec![layout.presets_dir(), layout.flakes_dir(), layout.templates_dir()];
    dirs.extend(registry.categories().map(|c| layout.category_dir(c)));
    dirs
}

/// Validate initialization can proceed
pub fn validate_init(path: &Path) -> Result<(), InitError> {
    if !path.is_dir() {
        return Err(InitError::DirectoryNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Create the layout and the starter template if missing
pub fn init_project(layout: &ProjectLayout, registry: &CategoryRegistry) -> Result<InitResult, InitError> {
    validate_init(layout.root())?;

    let mut created_dirs = Vec::new();
    for dir in required_directories(layout, registry) {
        if dir.is_dir() {
            continue;
        }
        filesystem::create_dir_all(&dir).map_err(|e| InitError::IoError {
            path: dir.clone(),
            error: e.to_string(),
        })?;
        tracing::debug!("Created {}", dir.display());
        created_dirs.push(dir);
    }

    let template_path = layout.template_path();
    let template_written = if template_path.exists() {
        tracing::debug!("Keeping existing template {}", template_path.display());
        false
    } else {
        filesystem::write_file_atomic(&template_path, starter_template()).map_err(|e| {
            InitError::IoError {
                path: template_path.clone(),
                error: e.to_string(),
            }
        })?;
        true
    };

    tracing::info!(
        "Initialized project at {} ({} new director{})",
        layout.root().display(),
        created_dirs.len(),
        if created_dirs.len() == 1 { "y" } else { "ies" }
    );

    Ok(InitResult {
        created_dirs,
        template_path,
        template_written,
    })
}
