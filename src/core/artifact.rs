//! Generated flake files
//!
//! Artifacts are named `<preset>-<label>.nix`, where the label is either
//! chosen by the caller or the build time. Reusing a label replaces the
//! earlier artifact.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::defaults::TIMESTAMP_LABEL_FORMAT;
use crate::config::paths::NIX_EXTENSION;
use crate::error::AssembleError;

/// Reject labels that would escape the output directory
pub fn validate_label(label: &str) -> Result<(), AssembleError> {
    if label.contains('/') || label.contains('\\') || label.contains("..") {
        return Err(AssembleError::InvalidLabel {
            label: label.to_string(),
        });
    }
    Ok(())
}

/// File name of an artifact.
///
/// A blank label falls back to `now` formatted as `YYYYMMDD-HHMMSS`.
pub fn artifact_file_name(preset_name: &str, label: &str, now: DateTime<Local>) -> String {
    let suffix = if label.trim().is_empty() {
        now.format(TIMESTAMP_LABEL_FORMAT).to_string()
    } else {
        label.to_string()
    };
    format!("{preset_name}-{suffix}.{NIX_EXTENSION}")
}

/// Listing entry for one generated flake
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSummary {
    /// File name
    pub name: String,
    /// Full path
    pub path: PathBuf,
    /// File modification time
    pub modified: DateTime<Utc>,
}

/// List generated flakes, newest first.
///
/// A missing output directory yields an empty list.
pub fn list_artifacts(dir: &Path) -> std::io::Result<Vec<ArtifactSummary>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut artifacts = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let metadata = entry.metadata()?;
        if !metadata.is_file() || path.extension().and_then(|e| e.to_str()) != Some(NIX_EXTENSION) {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let modified = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());
        artifacts.push(ArtifactSummary {
            name,
            path,
            modified,
        });
    }

    artifacts.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));
    Ok(artifacts)
}
