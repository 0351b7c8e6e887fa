//! Resource packs for Rust programs.
//!
//! The `genqrc` binary scans resource directories and writes a `qrc.rs` file
//! embedding the packed bytes. This library is what that generated file calls
//! at startup:
//!
//! ```no_run
//! use genqrc::runtime::{LoaderConfig, ResourceRegistry};
//!
//! # mod qrc {
//! #     use genqrc::runtime::LoaderConfig;
//! #     pub fn init(_: &LoaderConfig) -> genqrc::Result<genqrc::Resources> { unimplemented!() }
//! # }
//! let resources = qrc::init(&LoaderConfig::from_env())?;
//! let mut registry = ResourceRegistry::new();
//! registry.load(resources);
//! let main_qml = registry.open("qrc:///code/main.qml")?;
//! # Ok::<(), genqrc::Error>(())
//! ```

pub mod error;
pub mod pack;
pub mod render;
pub mod runtime;
pub mod scan;
pub mod utils;

pub use error::{Error, Result};
pub use pack::{Resources, ResourcesPacker};
