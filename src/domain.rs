//! Generator configuration types

use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable that overrides the package name, even over `--package`.
pub const PACKAGE_ENV: &str = "GENQRC_PACKAGE";

pub const DEFAULT_PACKAGE: &str = "qrc";
pub const DEFAULT_OUTPUT: &str = "qrc.rs";

/// Settings read from a `genqrc.toml` / `genqrc.yml` file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub package: Option<String>,
    pub output: Option<PathBuf>,
    pub dirs: Vec<String>,
    pub follow_symlinks: bool,
}

/// Fully resolved settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub package_name: String,
    pub output: PathBuf,
    pub dirs: Vec<String>,
    pub follow_symlinks: bool,
}
