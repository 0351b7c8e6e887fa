//! Path normalization

use crate::error::{Error, Result};
use std::path::{Component, Path, MAIN_SEPARATOR};

/// Convert the host separator to `/`.
///
/// On Unix a backslash is an ordinary file-name character and is left alone.
pub fn normalize_path(path: &str) -> String {
    if MAIN_SEPARATOR == '\\' {
        path.replace('\\', "/")
    } else {
        path.to_string()
    }
}

/// Render `path` as a slash-separated virtual path.
///
/// The path is cleaned lexically: `.` components are dropped and `dir/..`
/// pairs cancel out, so `./code/a.qml` and `images/../code/a.qml` both become
/// `code/a.qml`. Only leading `..` components survive. The root of an absolute
/// path is dropped, so `/srv/a.txt` is addressed as `qrc:///srv/a.txt`.
pub fn virtual_path(path: &Path) -> Result<String> {
    let non_utf8 = || Error::NonUtf8Path(path.to_path_buf());

    let mut parts: Vec<&str> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir | Component::RootDir => {}
            Component::ParentDir => match parts.last() {
                Some(&last) if last != ".." && !last.ends_with(':') => {
                    parts.pop();
                }
                _ => parts.push(".."),
            },
            Component::Prefix(prefix) => {
                parts.push(prefix.as_os_str().to_str().ok_or_else(non_utf8)?)
            }
            Component::Normal(name) => parts.push(name.to_str().ok_or_else(non_utf8)?),
        }
    }

    Ok(normalize_path(&parts.join("/")))
}
