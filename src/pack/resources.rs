//! Pack parsing and lookup

use super::format::{DIGEST_SIZE, HEADER_SIZE, MAGIC, VERSION};
use crate::error::{Error, Result};
use sha2::{Digest, Sha256};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ops::Range;

/// A parsed and validated resource pack.
///
/// Embedded packs are borrowed from the `'static` literal; repacked data is owned.
#[derive(Debug, Clone)]
pub struct Resources {
    data: Cow<'static, [u8]>,
    index: BTreeMap<String, Range<usize>>,
}

impl Resources {
    /// Parse a pack produced by [`ResourcesPacker::pack`](super::ResourcesPacker::pack).
    pub fn parse(data: impl Into<Cow<'static, [u8]>>) -> Result<Self> {
        let data = data.into();
        let index = parse_index(&data)?;
        Ok(Self { data, index })
    }

    /// Content of the resource at `path`, if present.
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.index.get(path).map(|range| &self.data[range.clone()])
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Virtual paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, n: usize, what: &'static str) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or(Error::Truncated(what))?;
        let slice = self.buf.get(self.pos..end).ok_or(Error::Truncated(what))?;
        self.pos = end;
        Ok(slice)
    }

    fn read_u32(&mut self, what: &'static str) -> Result<u32> {
        let bytes = self.take(4, what)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_u64(&mut self, what: &'static str) -> Result<u64> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.take(8, what)?);
        Ok(u64::from_le_bytes(raw))
    }
}

fn parse_index(data: &[u8]) -> Result<BTreeMap<String, Range<usize>>> {
    if data.len() < HEADER_SIZE {
        return Err(Error::Truncated("header"));
    }

    let mut cursor = Cursor { buf: data, pos: 0 };
    if cursor.take(MAGIC.len(), "magic")? != MAGIC {
        return Err(Error::BadMagic);
    }
    let version = cursor.read_u32("version")?;
    if version != VERSION {
        return Err(Error::UnsupportedVersion(version));
    }
    let count = cursor.read_u32("entry count")?;
    let expected_digest = cursor.take(DIGEST_SIZE, "digest")?;

    if Sha256::digest(&data[HEADER_SIZE..]).as_slice() != expected_digest {
        return Err(Error::ChecksumMismatch);
    }

    let mut entries: Vec<(String, u64, u64)> = Vec::new();
    for _ in 0..count {
        let path_len = cursor.read_u32("path length")? as usize;
        let raw_path = cursor.take(path_len, "path")?;
        let path = std::str::from_utf8(raw_path)
            .map_err(|_| Error::Corrupt("resource path is not valid UTF-8".to_string()))?;
        let offset = cursor.read_u64("data offset")?;
        let len = cursor.read_u64("data length")?;

        if let Some((previous, _, _)) = entries.last() {
            if previous.as_str() >= path {
                return Err(Error::Corrupt(format!(
                    "index out of order at '{}' (after '{}')",
                    path, previous
                )));
            }
        }
        entries.push((path.to_string(), offset, len));
    }

    let data_start = cursor.pos;
    let data_len = (data.len() - data_start) as u64;

    let mut index = BTreeMap::new();
    for (path, offset, len) in entries {
        let end = offset.checked_add(len).filter(|end| *end <= data_len).ok_or_else(|| {
            Error::Corrupt(format!("data range for '{}' exceeds pack size", path))
        })?;
        let range = (data_start + offset as usize)..(data_start + end as usize);
        index.insert(path, range);
    }
    Ok(index)
}
