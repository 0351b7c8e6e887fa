//! Configuration loading and merging
//!
//! Handles loading from config files, environment variables, and CLI arguments.
//! The package name resolves env > CLI > file > default; everything else
//! resolves CLI > file > default.

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};
