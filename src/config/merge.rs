//! Merge CLI arguments, environment and config file into run options

use crate::domain::{Config, GenerateOptions, DEFAULT_OUTPUT, DEFAULT_PACKAGE};
use anyhow::Result;
use std::path::PathBuf;

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub package: Option<String>,
    pub output: Option<PathBuf>,
    pub dirs: Vec<String>,
    pub follow_symlinks: bool,
}

/// Resolve the options for one run.
///
/// `env_package` is the value of the package override variable; a non-empty
/// value wins over `--package`.
pub fn merge_cli_with_config(
    cli: CliOverrides,
    env_package: Option<String>,
    config: Config,
) -> Result<GenerateOptions> {
    let package_name = env_package
        .filter(|name| !name.is_empty())
        .or(cli.package)
        .or(config.package)
        .unwrap_or_else(|| DEFAULT_PACKAGE.to_string());

    let output = cli.output.or(config.output).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let dirs = if cli.dirs.is_empty() { config.dirs } else { cli.dirs };
    if dirs.is_empty() {
        anyhow::bail!("must provide at least one subdirectory path");
    }

    Ok(GenerateOptions {
        package_name,
        output,
        dirs,
        follow_symlinks: cli.follow_symlinks || config.follow_symlinks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(dirs: &[&str]) -> CliOverrides {
        CliOverrides { dirs: dirs.iter().map(|d| d.to_string()).collect(), ..Default::default() }
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let opts = merge_cli_with_config(cli(&["code"]), None, Config::default()).expect("merge");
        assert_eq!(opts.package_name, DEFAULT_PACKAGE);
        assert_eq!(opts.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(opts.dirs, vec!["code"]);
        assert!(!opts.follow_symlinks);
    }

    #[test]
    fn env_package_wins_over_flag() {
        let mut overrides = cli(&["code"]);
        overrides.package = Some("from_flag".to_string());

        let opts = merge_cli_with_config(overrides, Some("from_env".to_string()), Config::default())
            .expect("merge");
        assert_eq!(opts.package_name, "from_env");
    }

    #[test]
    fn empty_env_package_is_ignored() {
        let mut overrides = cli(&["code"]);
        overrides.package = Some("from_flag".to_string());

        let opts = merge_cli_with_config(overrides, Some(String::new()), Config::default())
            .expect("merge");
        assert_eq!(opts.package_name, "from_flag");
    }

    #[test]
    fn flag_wins_over_config_file() {
        let mut overrides = cli(&["code"]);
        overrides.package = Some("from_flag".to_string());
        overrides.output = Some(PathBuf::from("gen.rs"));
        let config = Config {
            package: Some("from_file".to_string()),
            output: Some(PathBuf::from("file.rs")),
            dirs: vec!["images".to_string()],
            follow_symlinks: true,
        };

        let opts = merge_cli_with_config(overrides, None, config).expect("merge");
        assert_eq!(opts.package_name, "from_flag");
        assert_eq!(opts.output, PathBuf::from("gen.rs"));
        assert_eq!(opts.dirs, vec!["code"]);
        assert!(opts.follow_symlinks);
    }

    #[test]
    fn config_dirs_used_when_cli_has_none() {
        let config = Config { dirs: vec!["images".to_string()], ..Default::default() };
        let opts = merge_cli_with_config(cli(&[]), None, config).expect("merge");
        assert_eq!(opts.dirs, vec!["images"]);
    }

    #[test]
    fn no_dirs_anywhere_is_an_error() {
        let err = merge_cli_with_config(cli(&[]), None, Config::default()).expect_err("no dirs");
        assert!(err.to_string().contains("must provide at least one subdirectory path"));
    }
}
