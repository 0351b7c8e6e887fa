//! Pack layout constants.
//!
//! ```text
//! +-------------------------------+
//! | magic  "QRCPACK\0"  (8 bytes) |
//! | version u32 LE                |
//! | entry count u32 LE            |
//! | sha256 of body (32 bytes)     |
//! +-------------------------------+
//! | index: per entry              |
//! |   path len u32 LE, path utf-8 |
//! |   data offset u64 LE          |
//! |   data len u64 LE             |
//! +-------------------------------+
//! | data section                  |
//! +-------------------------------+
//! ```
//!
//! Offsets are relative to the start of the data section.

pub const MAGIC: &[u8; 8] = b"QRCPACK\0";
pub const VERSION: u32 = 1;
pub const DIGEST_SIZE: usize = 32;
pub const HEADER_SIZE: usize = MAGIC.len() + 4 + 4 + DIGEST_SIZE;
