//! Core business logic module
//!
//! This module contains the business logic for legoflake. Filesystem and
//! process helpers live in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`category`] - Module categories and their registry
//! - [`module`] - Module identity and header parsing
//! - [`catalog`] - Module discovery
//! - [`scaffold`] - Module creation, inspection and removal
//! - [`descriptor`] - Flake input and dev shell descriptor files
//! - [`snippet`] - Text derived from descriptors
//! - [`template`] - Placeholder substitution
//! - [`preset`] - Preset records and their store
//! - [`artifact`] - Generated flake naming and listing
//! - [`assemble`] - Flake assembly
//! - [`stage`] - Root flake bookkeeping
//! - [`init`] - Project initialization logic
//! - [`check`] - Project validation
//! - [`global_config`] - Global configuration management

pub mod artifact;
pub mod assemble;
pub mod catalog;
pub mod category;
pub mod check;
pub mod descriptor;
pub mod global_config;
pub mod init;
pub mod module;
pub mod preset;
pub mod scaffold;
pub mod snippet;
pub mod stage;
pub mod template;
