//! Filesystem operations
//!
//! Handles file and directory operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a single file
pub fn remove_file(path: &Path) -> Result<(), FilesystemError> {
    std::fs::remove_file(path).map_err(|e| FilesystemError::RemoveFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Replace the content of a file in one step.
///
/// The content goes to a temporary file in the target directory which is then
/// renamed over the destination, so readers see the old file or the new one
/// and a failed write leaves nothing behind.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<(), FilesystemError> {
    let write_err = |e: std::io::Error| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp.write_all(content.as_bytes()).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Copy a file, overwriting the destination
pub fn copy_file(from: &Path, to: &Path) -> Result<(), FilesystemError> {
    std::fs::copy(from, to)
        .map(|_| ())
        .map_err(|e| FilesystemError::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            error: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_atomic_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("out.nix");

        write_file_atomic(&path, "{ }").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ }");
    }

    #[test]
    fn test_write_file_atomic_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.nix");

        write_file_atomic(&path, "first").unwrap();
        write_file_atomic(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        let entries = std::fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(entries, 1, "no temporary files should remain");
    }

    #[test]
    fn test_write_file_atomic_into_directory_fails() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("taken");
        std::fs::create_dir_all(target.join("inner")).unwrap();

        let result = write_file_atomic(&target, "content");

        assert!(matches!(result, Err(FilesystemError::WriteFile { .. })));
    }

    #[test]
    fn test_read_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        assert!(read_file(&temp.path().join("missing")).is_err());
    }
}
