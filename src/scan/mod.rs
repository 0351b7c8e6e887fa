//! Resource directory traversal

use crate::error::Result;
use crate::pack::ResourcesPacker;
use std::path::Path;

pub mod scanner;

pub use scanner::{ResourceScanner, ScanStats};

/// Scan `roots` relative to `base_dir` and pack them.
pub fn pack_dirs_in<S: AsRef<str>>(base_dir: &Path, roots: &[S]) -> Result<Vec<u8>> {
    ResourceScanner::new().base_dir(base_dir).scan(roots)?.pack()
}
