//! Infrastructure layer
//!
//! Handles filesystem layout, atomic writes, platform directories and
//! external processes.

pub mod dirs;
pub mod filesystem;
pub mod git;
pub mod layout;
