//! Stage a generated flake as the project's root flake
//!
//! Copies the artifact to `flake.nix` and registers `flakes/` and `flake.nix`
//! with git. The copy must succeed; git trouble is reported back as a
//! warning and the stage still counts as done.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::paths::{FLAKES_DIR, ROOT_FLAKE_FILE};
use crate::error::StageError;
use crate::infra::{filesystem, git};
use crate::infra::layout::ProjectLayout;

/// Result of a stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    /// The root flake that was written
    pub target: PathBuf,
    /// Why git staging did not happen, if it did not
    pub warning: Option<String>,
}

/// Copy `artifact` to the root flake and stage it with git
pub fn stage(layout: &ProjectLayout, artifact: &Path) -> Result<StageReport, StageError> {
    if !artifact.is_file() {
        return Err(StageError::ArtifactNotFound {
            path: artifact.to_path_buf(),
        });
    }

    let target = layout.root_flake_path();
    filesystem::copy_file(artifact, &target)?;
    tracing::info!("Copied {} to {}", artifact.display(), target.display());

    let warning = match git::add(layout.root(), &[FLAKES_DIR, ROOT_FLAKE_FILE]) {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!("Could not stage flake with git: {e}");
            Some(e.to_string())
        }
    };

    Ok(StageReport { target, warning })
}

/// Resolve an artifact given by file name or path
pub fn resolve_artifact(layout: &ProjectLayout, artifact: &str) -> PathBuf {
    let as_path = Path::new(artifact);
    if as_path.components().count() > 1 || as_path.is_absolute() {
        as_path.to_path_buf()
    } else {
        layout.flakes_dir().join(artifact)
    }
}
