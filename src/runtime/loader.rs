//! Load strategy selection

use crate::error::Result;
use crate::pack::Resources;
use crate::scan::ResourceScanner;
use std::path::PathBuf;

/// Environment variable that switches generated files to live repacking.
pub const REPACK_ENV: &str = "QRC_REPACK";

/// Where a generated file gets its resources from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadMode {
    /// Parse the pack embedded in the generated file.
    #[default]
    Embedded,
    /// Re-scan the source directories on the live filesystem.
    Repack,
}

impl LoadMode {
    /// Select the mode from the value of [`REPACK_ENV`]; only `"1"` enables repacking.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some("1") => LoadMode::Repack,
            _ => LoadMode::Embedded,
        }
    }

    pub fn from_env() -> Self {
        Self::from_flag(std::env::var(REPACK_ENV).ok().as_deref())
    }
}

/// The directories a generated file was built from, captured at generation time.
#[derive(Debug, Clone, Copy)]
pub struct PackSource {
    pub subdirs: &'static [&'static str],
    pub follow_symlinks: bool,
}

/// Startup configuration handed to a generated `init` function.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    pub mode: LoadMode,
    /// Directory the source directories are resolved against when repacking.
    /// Defaults to the current directory.
    pub base_dir: Option<PathBuf>,
}

impl LoaderConfig {
    pub fn new(mode: LoadMode) -> Self {
        Self { mode, base_dir: None }
    }

    pub fn from_env() -> Self {
        Self::new(LoadMode::from_env())
    }

    pub fn base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Load resources according to [`LoaderConfig::mode`].
    pub fn load(&self, embedded: &'static [u8], source: &PackSource) -> Result<Resources> {
        match self.mode {
            LoadMode::Embedded => Resources::parse(embedded),
            LoadMode::Repack => Resources::parse(self.repack(source)?),
        }
    }

    /// Scan and pack the source directories from the live filesystem.
    pub fn repack(&self, source: &PackSource) -> Result<Vec<u8>> {
        tracing::info!("Repacking resources from {:?}", source.subdirs);
        let mut scanner = ResourceScanner::new().follow_symlinks(source.follow_symlinks);
        if let Some(base) = &self.base_dir {
            scanner = scanner.base_dir(base);
        }
        scanner.scan(source.subdirs)?.pack()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::ResourcesPacker;
    use std::fs;
    use tempfile::TempDir;

    static SOURCE: PackSource = PackSource { subdirs: &["code"], follow_symlinks: false };

    fn embedded() -> &'static [u8] {
        let mut packer = ResourcesPacker::new();
        packer.add("code/a.qml", b"embedded".to_vec());
        Box::leak(packer.pack().expect("pack").into_boxed_slice())
    }

    #[test]
    fn from_flag_only_enables_repack_for_one() {
        assert_eq!(LoadMode::from_flag(Some("1")), LoadMode::Repack);
        assert_eq!(LoadMode::from_flag(Some("0")), LoadMode::Embedded);
        assert_eq!(LoadMode::from_flag(Some("true")), LoadMode::Embedded);
        assert_eq!(LoadMode::from_flag(None), LoadMode::Embedded);
    }

    #[test]
    fn embedded_mode_ignores_filesystem() {
        let tmp = TempDir::new().expect("tmp");
        let config = LoaderConfig::new(LoadMode::Embedded).base_dir(tmp.path());
        let resources = config.load(embedded(), &SOURCE).expect("load");
        assert_eq!(resources.get("code/a.qml"), Some(&b"embedded"[..]));
    }

    #[test]
    fn repack_mode_reads_live_files() {
        let tmp = TempDir::new().expect("tmp");
        fs::create_dir(tmp.path().join("code")).expect("mkdir");
        fs::write(tmp.path().join("code/a.qml"), "live").expect("write");
        fs::write(tmp.path().join("code/b.qml"), "added").expect("write");

        let config = LoaderConfig::new(LoadMode::Repack).base_dir(tmp.path());
        let resources = config.load(embedded(), &SOURCE).expect("load");
        assert_eq!(resources.get("code/a.qml"), Some(&b"live"[..]));
        assert_eq!(resources.get("code/b.qml"), Some(&b"added"[..]));
    }

    #[test]
    fn repack_mode_surfaces_scan_errors() {
        let tmp = TempDir::new().expect("tmp");
        let config = LoaderConfig::new(LoadMode::Repack).base_dir(tmp.path());
        assert!(config.load(embedded(), &SOURCE).is_err());
    }
}
