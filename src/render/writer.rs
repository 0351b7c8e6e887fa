//! Output file writing

use crate::error::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `content` to `path` through a temporary file in the same directory.
///
/// The target is only replaced once the content is fully written, so a failed
/// run leaves any previous output untouched.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(content).map_err(|e| Error::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| Error::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;

    tracing::debug!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// Whether `path` already holds exactly `content`.
pub fn is_up_to_date(path: &Path, content: &[u8]) -> Result<bool> {
    match fs::read(path) {
        Ok(existing) => Ok(existing == content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}
