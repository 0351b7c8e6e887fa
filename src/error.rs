//! Library error type

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while scanning, packing, parsing or loading resources.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a file or writing the generated output failed.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed without an underlying I/O error (symlink loop).
    #[error(transparent)]
    Walk(walkdir::Error),

    /// Virtual paths must be valid UTF-8.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("invalid resource pack: bad magic")]
    BadMagic,

    #[error("invalid resource pack: unsupported version {0}")]
    UnsupportedVersion(u32),

    #[error("invalid resource pack: truncated {0}")]
    Truncated(&'static str),

    #[error("invalid resource pack: checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid resource pack: {0}")]
    Corrupt(String),

    #[error("resource pack too large: {0}")]
    TooLarge(&'static str),

    /// The package name cannot be used as a Rust module name.
    #[error("invalid package name '{0}': must be a Rust identifier")]
    InvalidPackageName(String),

    #[error("invalid resource url '{0}': expected qrc:///path or :/path")]
    InvalidUrl(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf);
        match path {
            Some(path) if err.io_error().is_some() => Error::Io { path, source: err.into() },
            _ => Error::Walk(err),
        }
    }
}

/// Result type for resource operations.
pub type Result<T> = std::result::Result<T, Error>;
