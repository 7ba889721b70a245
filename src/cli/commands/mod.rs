//! CLI commands for moba-convert.
//!
//! Each submodule implements a single CLI command with its argument
//! parsing and execution logic.

/// Shell completion script generation.
pub mod completions;

/// Show resolved paths and configuration.
pub mod config;

/// Convert bookmarks to PuTTY saved sessions.
pub mod putty;

/// Convert bookmarks to Rabbit Remote Control favorites.
pub mod rabbit;

/// Convert bookmarks to Remmina profiles.
pub mod remmina;
