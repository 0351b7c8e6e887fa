//! Runtime side of generated resource files
//!
//! Generated `qrc.rs` files call into this module at startup: a
//! [`LoaderConfig`] picks between the embedded pack and a live repack of the
//! source directories, and a [`ResourceRegistry`] serves the loaded packs by
//! `qrc:` URL.

pub mod loader;
pub mod registry;

pub use loader::{LoadMode, LoaderConfig, PackSource, REPACK_ENV};
pub use registry::{resolve_url, ResourceRegistry};
