//! Resource directory scanner

use crate::error::{Error, Result};
use crate::pack::ResourcesPacker;
use crate::utils::virtual_path;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Counters collected during a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub roots_scanned: usize,
    pub files_packed: usize,
    pub bytes_packed: u64,
    pub duplicates_replaced: usize,
}

/// Walks resource directories and feeds every regular file into a [`ResourcesPacker`].
pub struct ResourceScanner {
    base_dir: Option<PathBuf>,
    follow_symlinks: bool,
    stats: ScanStats,
}

impl Default for ResourceScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceScanner {
    /// Create a scanner resolving roots against the current directory.
    pub fn new() -> Self {
        Self { base_dir: None, follow_symlinks: false, stats: ScanStats::default() }
    }

    /// Resolve roots against `base_dir` instead of the current directory.
    ///
    /// Virtual paths stay relative to the roots as given.
    pub fn base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Set whether to follow symbolic links
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Scan every root and return the filled packer.
    ///
    /// The first walk or read error aborts the scan.
    pub fn scan<S: AsRef<str>>(&mut self, roots: &[S]) -> Result<ResourcesPacker> {
        self.stats = ScanStats::default();
        let mut packer = ResourcesPacker::new();

        for root in roots {
            self.scan_root(Path::new(root.as_ref()), &mut packer)?;
            self.stats.roots_scanned += 1;
        }
        self.stats.bytes_packed = packer.content_bytes();

        tracing::debug!(
            "Scanned {} roots: {} files, {} bytes, {} duplicates replaced",
            self.stats.roots_scanned,
            self.stats.files_packed,
            self.stats.bytes_packed,
            self.stats.duplicates_replaced
        );
        Ok(packer)
    }

    fn scan_root(&mut self, root: &Path, packer: &mut ResourcesPacker) -> Result<()> {
        let walk_root = match &self.base_dir {
            Some(base) => base.join(root),
            None => root.to_path_buf(),
        };
        tracing::debug!("Scanning {}", walk_root.display());

        let walker = WalkDir::new(&walk_root)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }

            let relative = entry.path().strip_prefix(&walk_root).unwrap_or(Path::new(""));
            let key = virtual_path(&root.join(relative))?;

            let data = fs::read(entry.path()).map_err(|e| Error::io(entry.path(), e))?;
            tracing::trace!("Packing {} ({} bytes)", key, data.len());

            if packer.add(&key, data) {
                self.stats.duplicates_replaced += 1;
            } else {
                self.stats.files_packed += 1;
            }
        }
        Ok(())
    }

    /// Get scanning statistics
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }
}
