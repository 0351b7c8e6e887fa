//! Pack builder

use super::format::{HEADER_SIZE, MAGIC, VERSION};
use crate::error::{Error, Result};
use crate::utils::normalize_path;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Collects (virtual path, content) pairs and serializes them into a pack.
///
/// Entries are kept sorted by virtual path, so packing the same set of files
/// always yields the same bytes regardless of insertion order.
#[derive(Debug, Default, Clone)]
pub struct ResourcesPacker {
    entries: BTreeMap<String, Vec<u8>>,
}

impl ResourcesPacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `data` under `path`. Host separators are normalized to forward slashes.
    ///
    /// Returns `true` when an entry with the same virtual path was replaced.
    pub fn add(&mut self, path: &str, data: Vec<u8>) -> bool {
        let path = normalize_path(path);
        let replaced = self.entries.insert(path.clone(), data).is_some();
        if replaced {
            tracing::debug!("Replaced duplicate resource entry {}", path);
        }
        replaced
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Virtual paths in pack order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Total content bytes across all entries.
    pub fn content_bytes(&self) -> u64 {
        self.entries.values().map(|data| data.len() as u64).sum()
    }

    /// Serialize all entries into a single pack blob.
    pub fn pack(&self) -> Result<Vec<u8>> {
        let count = u32::try_from(self.entries.len()).map_err(|_| Error::TooLarge("entry count"))?;

        let index_size: usize = self.entries.keys().map(|path| 4 + path.len() + 8 + 8).sum();
        let data_size: usize = self.entries.values().map(Vec::len).sum();
        let mut body = Vec::with_capacity(index_size + data_size);

        let mut offset: u64 = 0;
        for (path, data) in &self.entries {
            let path_len = u32::try_from(path.len()).map_err(|_| Error::TooLarge("path length"))?;
            body.extend_from_slice(&path_len.to_le_bytes());
            body.extend_from_slice(path.as_bytes());
            body.extend_from_slice(&offset.to_le_bytes());
            body.extend_from_slice(&(data.len() as u64).to_le_bytes());
            offset += data.len() as u64;
        }
        for data in self.entries.values() {
            body.extend_from_slice(data);
        }

        let digest = Sha256::digest(&body);

        let mut out = Vec::with_capacity(HEADER_SIZE + body.len());
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&count.to_le_bytes());
        out.extend_from_slice(&digest);
        out.extend_from_slice(&body);

        tracing::debug!("Packed {} resources into {} bytes", count, out.len());
        Ok(out)
    }
}
