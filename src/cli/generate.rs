//! Scan, pack, render and write the generated file

use anyhow::{Context, Result};
use std::time::Instant;

use crate::domain::GenerateOptions;
use genqrc::render::{is_up_to_date, render_source, write_atomic, TemplateData};
use genqrc::scan::ResourceScanner;

pub fn run(options: &GenerateOptions, check: bool) -> Result<()> {
    let start_time = Instant::now();

    let mut scanner = ResourceScanner::new().follow_symlinks(options.follow_symlinks);
    let packer = scanner.scan(&options.dirs)?;
    let resources_data = packer.pack()?;

    let source = render_source(&TemplateData {
        package_name: options.package_name.clone(),
        subdirs: options.dirs.clone(),
        follow_symlinks: options.follow_symlinks,
        resources_data,
    })?;

    if check {
        if !is_up_to_date(&options.output, source.as_bytes())? {
            anyhow::bail!(
                "{} is out of date; run genqrc to regenerate it",
                options.output.display()
            );
        }
        tracing::info!("{} is up to date", options.output.display());
        return Ok(());
    }

    write_atomic(&options.output, source.as_bytes())
        .with_context(|| format!("Failed writing {}", options.output.display()))?;

    let stats = scanner.stats();
    tracing::info!(
        "Wrote {} ({} files, {} bytes) in {:.2}s",
        options.output.display(),
        stats.files_packed,
        stats.bytes_packed,
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
