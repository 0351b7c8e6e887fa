//! Loaded resource packs addressed by `qrc:` URL

use crate::error::{Error, Result};
use crate::pack::Resources;

/// Map a resource URL to its virtual path.
///
/// `qrc:///a/b`, `qrc://a/b`, `qrc:/a/b` and `:/a/b` all resolve to `a/b`.
pub fn resolve_url(url: &str) -> Result<&str> {
    let rest = url
        .strip_prefix("qrc:")
        .or_else(|| url.strip_prefix(':'))
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))?;

    let path = rest.trim_start_matches('/');
    if path.is_empty() {
        return Err(Error::InvalidUrl(url.to_string()));
    }
    Ok(path)
}

/// Packs made available to the program, newest first on lookup.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    packs: Vec<Resources>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pack. Its entries shadow same-named entries of earlier packs.
    pub fn load(&mut self, resources: Resources) {
        tracing::debug!("Loaded resource pack with {} entries", resources.len());
        self.packs.push(resources);
    }

    /// Look up a resource by virtual path.
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.packs.iter().rev().find_map(|pack| pack.get(path))
    }

    /// Look up a resource by `qrc:` URL. Unknown paths yield `Ok(None)`.
    pub fn open(&self, url: &str) -> Result<Option<&[u8]>> {
        Ok(self.get(resolve_url(url)?))
    }

    /// Number of loaded packs.
    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}
