//! Command-line interface for genqrc

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::PACKAGE_ENV;

mod generate;

const AFTER_HELP: &str = "\
Every file under the given directories is packed and addressable as
\"qrc:///some/path\", where \"some/path\" is the file's path as scanned.

The generated file reads QRC_REPACK through LoaderConfig::from_env(); with
QRC_REPACK=1 the directories are repacked from disk at startup instead of
using the embedded bytes. Run genqrc again before shipping to refresh them.

From a build script, set GENQRC_PACKAGE to choose the module name.";

/// Pack resource directories into a generated Rust source file
#[derive(Parser)]
#[command(name = "genqrc")]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Directories whose files are packed
    #[arg(value_name = "DIR")]
    dirs: Vec<String>,

    /// Module name the generated file declares (GENQRC_PACKAGE takes precedence)
    #[arg(short, long, value_name = "NAME")]
    package: Option<String>,

    /// Generated file path [default: qrc.rs]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to config file (genqrc.toml or genqrc.yml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Follow symbolic links when scanning
    #[arg(long)]
    follow_symlinks: bool,

    /// Fail if the generated file is missing or stale instead of writing it
    #[arg(long)]
    check: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let work_dir = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&work_dir, cli.config.as_deref())?;

    let overrides = CliOverrides {
        package: cli.package,
        output: cli.output,
        dirs: cli.dirs,
        follow_symlinks: cli.follow_symlinks,
    };
    let options = merge_cli_with_config(overrides, std::env::var(PACKAGE_ENV).ok(), config)?;

    generate::run(&options, cli.check)
}
