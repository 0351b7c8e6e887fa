//! Generated source template

use crate::error::{Error, Result};
use crate::runtime::REPACK_ENV;

/// Width of each embedded byte-literal line, not counting indentation.
const LITERAL_LINE_WIDTH: usize = 96;
const LITERAL_INDENT: &str = "        ";

const RESERVED_IDENTIFIERS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "gen",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Values substituted into the generated file.
#[derive(Debug, Clone)]
pub struct TemplateData {
    pub package_name: String,
    pub subdirs: Vec<String>,
    pub follow_symlinks: bool,
    pub resources_data: Vec<u8>,
}

/// Turn a package name into the module name used in the generated file.
///
/// Hyphens become underscores, so crate names can be passed as-is.
pub fn module_name(package_name: &str) -> Result<String> {
    let name = package_name.trim().replace('-', "_");
    let mut chars = name.chars();
    let valid_start = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !valid_start || !valid_rest || name == "_" || RESERVED_IDENTIFIERS.contains(&name.as_str())
    {
        return Err(Error::InvalidPackageName(package_name.to_string()));
    }
    Ok(name)
}

/// Render the generated source file.
pub fn render_source(data: &TemplateData) -> Result<String> {
    let module = module_name(&data.package_name)?;
    let subdirs =
        data.subdirs.iter().map(|dir| format!("{:?}", dir)).collect::<Vec<_>>().join(", ");

    let mut out = String::with_capacity(1024 + data.resources_data.len() * 2);
    out.push_str("// This file is automatically generated by genqrc. Do not edit.\n");
    out.push_str("//\n");
    out.push_str(&format!(
        "// Set {}=1 to load resources from the source directories at startup.\n\n",
        REPACK_ENV
    ));
    out.push_str("#[allow(dead_code)]\n");
    out.push_str(&format!("pub mod {} {{\n", module));
    out.push_str("    use genqrc::runtime::{LoaderConfig, PackSource};\n");
    out.push_str("    use genqrc::{Resources, Result};\n\n");
    out.push_str("    /// Directories packed into this file.\n");
    out.push_str("    pub const SOURCE: PackSource = PackSource {\n");
    out.push_str(&format!("        subdirs: &[{}],\n", subdirs));
    out.push_str(&format!("        follow_symlinks: {},\n", data.follow_symlinks));
    out.push_str("    };\n\n");
    out.push_str("    /// Load the embedded resources, or repack `SOURCE` when `config.mode` is\n");
    out.push_str("    /// `LoadMode::Repack`.\n");
    out.push_str("    pub fn init(config: &LoaderConfig) -> Result<Resources> {\n");
    out.push_str("        config.load(QRC_RESOURCES_DATA, &SOURCE)\n");
    out.push_str("    }\n\n");
    out.push_str(&format!("    /// `init` with the load mode taken from `{}`.\n", REPACK_ENV));
    out.push_str("    pub fn init_from_env() -> Result<Resources> {\n");
    out.push_str("        init(&LoaderConfig::from_env())\n");
    out.push_str("    }\n\n");
    out.push_str("    /// Pack `SOURCE` from the live filesystem.\n");
    out.push_str("    pub fn repack(config: &LoaderConfig) -> Result<Vec<u8>> {\n");
    out.push_str("        config.repack(&SOURCE)\n");
    out.push_str("    }\n\n");
    out.push_str("    static QRC_RESOURCES_DATA: &[u8] = ");
    out.push_str(&byte_literal(&data.resources_data));
    out.push_str(";\n");
    out.push_str("}\n");
    Ok(out)
}

/// Render bytes as a Rust byte-string literal, wrapped with line continuations.
fn byte_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + 8);
    out.push_str("b\"");
    let mut line_width = 0;
    for &byte in bytes {
        if line_width >= LITERAL_LINE_WIDTH {
            out.push_str("\\\n");
            out.push_str(LITERAL_INDENT);
            line_width = 0;
        }
        // A continuation swallows leading whitespace, so a space opening a line is escaped.
        let escaped = if byte == b' ' && line_width == 0 {
            "\\x20".to_string()
        } else {
            std::ascii::escape_default(byte).to_string()
        };
        line_width += escaped.len();
        out.push_str(&escaped);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(package_name: &str, bytes: &[u8]) -> TemplateData {
        TemplateData {
            package_name: package_name.to_string(),
            subdirs: vec!["code".to_string(), "images".to_string()],
            follow_symlinks: false,
            resources_data: bytes.to_vec(),
        }
    }

    #[test]
    fn module_name_normalizes_hyphens() {
        assert_eq!(module_name("my-widgets").expect("valid"), "my_widgets");
        assert_eq!(module_name("_private2").expect("valid"), "_private2");
    }

    #[test]
    fn module_name_rejects_non_identifiers() {
        for bad in ["", "_", "2d", "fn", "self", "a.b", "wid gets", "héllo"] {
            assert!(
                matches!(module_name(bad), Err(Error::InvalidPackageName(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn render_declares_module_and_sources() {
        let source = render_source(&data("widgets", b"\x00ab")).expect("render");

        assert!(source.contains("pub mod widgets {\n"));
        assert!(source.contains("subdirs: &[\"code\", \"images\"],"));
        assert!(source.contains("follow_symlinks: false,"));
        assert!(source.contains("static QRC_RESOURCES_DATA: &[u8] = b\"\\x00ab\";"));
        assert!(source.contains("QRC_REPACK=1"));
    }

    #[test]
    fn render_is_deterministic() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(2048).collect();
        assert_eq!(
            render_source(&data("widgets", &bytes)).expect("render"),
            render_source(&data("widgets", &bytes)).expect("render")
        );
    }

    #[test]
    fn byte_literal_escapes_quotes_and_control_bytes() {
        assert_eq!(byte_literal(b"a\"b\\c\n\t'"), "b\"a\\\"b\\\\c\\n\\t\\'\"");
    }

    #[test]
    fn byte_literal_escapes_space_after_continuation() {
        let mut bytes = vec![b'x'; LITERAL_LINE_WIDTH];
        bytes.push(b' ');
        bytes.push(b' ');
        let literal = byte_literal(&bytes);
        assert!(literal.contains(&format!("\\\n{}\\x20 \"", LITERAL_INDENT)));
    }
}
