// This file is automatically generated by genqrc. Do not edit.
//
// Set QRC_REPACK=1 to load resources from the source directories at startup.

#[allow(dead_code)]
pub mod widgets {
    use genqrc::runtime::{LoaderConfig, PackSource};
    use genqrc::{Resources, Result};

    /// Directories packed into this file.
    pub const SOURCE: PackSource = PackSource {
        subdirs: &["code", "images"],
        follow_symlinks: false,
    };

    /// Load the embedded resources, or repack `SOURCE` when `config.mode` is
    /// `LoadMode::Repack`.
    pub fn init(config: &LoaderConfig) -> Result<Resources> {
        config.load(QRC_RESOURCES_DATA, &SOURCE)
    }

    /// `init` with the load mode taken from `QRC_REPACK`.
    pub fn init_from_env() -> Result<Resources> {
        init(&LoaderConfig::from_env())
    }

    /// Pack `SOURCE` from the live filesystem.
    pub fn repack(config: &LoaderConfig) -> Result<Vec<u8>> {
        config.repack(&SOURCE)
    }

    static QRC_RESOURCES_DATA: &[u8] = b"QRCPACK\x00\x01\x00\x00\x00\x02\x00\x00\x00\xbb\xff%b\xb9Tv\xdaW\x05\xa8o\xda\x83D\\\x94\x8e\x13\
        \x10\xd7\x82\xdf\xe1\xf0(\x84\xde\xc6U\xef\x85\n\x00\x00\x00code/a.qml\x00\x00\x00\x00\x00\x00\x00\
        \x007\x00\x00\x00\x00\x00\x00\x00\x0f\x00\x00\x00images/logo.png7\x00\x00\x00\x00\x00\x00\x00\x08\
        \x00\x00\x00\x00\x00\x00\x00import QtQuick 2.0\n\nItem {\n    width: 64; height: 64\n}\n\x89PNG\r\
        \n\x1a\n";
}
