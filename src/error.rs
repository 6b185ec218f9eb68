//! Error types for legoflake
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Project initialization errors
#[derive(Error, Debug)]
pub enum InitError {
    /// Directory not found
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// IO error during initialization
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Module fragment errors
#[derive(Error, Debug)]
pub enum ModuleError {
    /// Identity is not of the form `category/name`
    #[error("Invalid module id '{id}': {reason}")]
    InvalidId { id: String, reason: String },

    /// Category is not one of the known categories
    #[error("Unknown category '{category}'")]
    UnknownCategory { category: String },

    /// Scaffold target already exists
    #[error("Module already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// Module file not found
    #[error("Module not found: {path}")]
    NotFound { path: PathBuf },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}

/// Dependency and dev-shell descriptor errors
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// The descriptor file exists but could not be read
    #[error("Failed to read descriptor file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// The descriptor file is not a JSON array of the expected records
    #[error("Failed to parse descriptor file '{path}': {error}")]
    Parse { path: PathBuf, error: String },

    /// Two flake inputs expose the same module argument
    #[error("Flake inputs '{first}' and '{second}' both expose the argument '{alias}'")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    /// A flake input reuses one of the fixed module arguments
    #[error("Flake input '{name}' exposes the argument '{alias}', which every module already receives")]
    ReservedAlias { alias: String, name: String },

    /// A flake input has a blank argument name
    #[error("Flake input '{name}' has an empty argument name")]
    EmptyAlias { name: String },
}

/// Flake assembly errors
#[derive(Error, Debug)]
pub enum AssembleError {
    /// Base template could not be read
    #[error("Template not found at '{path}': {error}")]
    TemplateMissing { path: PathBuf, error: String },

    /// Descriptor loading or validation failed
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Label cannot be used as part of a file name
    #[error("Invalid flake label '{label}': must not contain path separators or '..'")]
    InvalidLabel { label: String },

    /// Preset name cannot be used as part of a file name
    #[error("Invalid preset name '{name}': must be non-empty and must not contain path separators or '..'")]
    InvalidPresetName { name: String },

    /// Output artifact could not be written
    #[error("Failed to write flake '{path}': {error}")]
    ArtifactWrite { path: PathBuf, error: String },
}

/// Preset storage errors
#[derive(Error, Debug)]
pub enum PresetError {
    /// Preset file not found
    #[error("Preset not found at '{path}'. Run 'legoflake preset new' to create one.")]
    NotFound { path: PathBuf },

    /// Failed to read preset file
    #[error("Failed to read preset '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Failed to parse preset file
    #[error("Failed to parse preset '{path}': {error}")]
    Parse { path: PathBuf, error: String },

    /// Failed to serialize preset
    #[error("Failed to serialize preset: {error}")]
    Serialize { error: String },

    /// Failed to write preset file
    #[error("Failed to write preset '{path}': {error}")]
    Write { path: PathBuf, error: String },

    /// Failed to list the presets directory
    #[error("Failed to list presets in '{path}': {error}")]
    List { path: PathBuf, error: String },

    /// Failed to delete preset file
    #[error("Failed to delete preset '{path}': {error}")]
    Delete { path: PathBuf, error: String },

    /// Name cannot be used as a file stem
    #[error("Invalid preset name '{name}': must be non-empty and must not contain path separators or '..'")]
    InvalidName { name: String },

    /// Field name not recognised by `preset set`
    #[error("Unknown preset field '{field}'")]
    UnknownField { field: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove file
    #[error("Failed to remove file '{path}': {error}")]
    RemoveFile { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to copy file
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },
}

/// Errors that stop the stage step
#[derive(Error, Debug)]
pub enum StageError {
    /// Artifact to stage does not exist
    #[error("Flake not found: {path}. Run 'legoflake flakes' to list generated flakes.")]
    ArtifactNotFound { path: PathBuf },

    /// Artifact could not be copied to the root flake
    #[error(transparent)]
    Copy(#[from] FilesystemError),
}
