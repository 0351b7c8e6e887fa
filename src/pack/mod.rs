//! Resource packing and parsing
//!
//! A pack is a single byte blob holding a sorted index of virtual paths
//! followed by the concatenated file contents. [`ResourcesPacker`] builds
//! one, [`Resources`] parses and serves it.

pub mod format;
pub mod packer;
pub mod resources;

pub use packer::ResourcesPacker;
pub use resources::Resources;
