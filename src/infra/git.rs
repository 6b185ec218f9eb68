//! Git operations
//!
//! Stages paths in the project repository by running the `git` binary.

use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Git operation errors
#[derive(Error, Debug)]
pub enum GitError {
    /// `git` is not on the search path
    #[error("git executable not found: {error}")]
    NotInstalled { error: String },

    /// `git` could not be started
    #[error("Failed to run git in '{path}': {error}")]
    SpawnFailed { path: PathBuf, error: String },

    /// `git` ran and reported failure
    #[error("git {args} failed in '{path}': {stderr}")]
    CommandFailed {
        path: PathBuf,
        args: String,
        stderr: String,
    },
}

/// Locate the `git` executable
pub fn find_git() -> Result<PathBuf, GitError> {
    which::which("git").map_err(|e| GitError::NotInstalled {
        error: e.to_string(),
    })
}

/// Run `git add <paths>` inside `repo`
pub fn add(repo: &Path, paths: &[&str]) -> Result<(), GitError> {
    let git = find_git()?;
    tracing::debug!("Running {} add {} in {}", git.display(), paths.join(" "), repo.display());

    let output = Command::new(git)
        .arg("add")
        .args(paths)
        .current_dir(repo)
        .output()
        .map_err(|e| GitError::SpawnFailed {
            path: repo.to_path_buf(),
            error: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            path: repo.to_path_buf(),
            args: format!("add {}", paths.join(" ")),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_add_outside_repository_fails() {
        if find_git().is_err() {
            return;
        }
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("flake.nix"), "{}").unwrap();

        let result = add(temp.path(), &["flake.nix"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_add_in_repository() {
        let Ok(git) = find_git() else {
            return;
        };
        let temp = TempDir::new().unwrap();
        let init = Command::new(git)
            .args(["init", "--quiet"])
            .current_dir(temp.path())
            .status()
            .unwrap();
        assert!(init.success());
        std::fs::write(temp.path().join("flake.nix"), "{}").unwrap();

        add(temp.path(), &["flake.nix"]).unwrap();
    }
}
