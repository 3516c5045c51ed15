//! Glyph icons for the terminal tree
//!
//! Icons are Nerd Font code points; files whose extension has no glyph get
//! no icon from the provider and fall back to the generic file glyph when
//! rendered.

use revision_tree::{extension, IconList, IconProvider, NodeIcon};

pub const FOLDER: &str = "\u{f07b}";
pub const SUBMODULE: &str = "\u{e702}";
pub const FILE: &str = "\u{f016}";

/// Resolves file icons by extension, case-insensitively
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphIcons;

impl IconProvider for GlyphIcons {
    type Icon = &'static str;

    fn get(&self, _context: &str, file_name: &str) -> Option<&'static str> {
        let ext = extension(file_name)?.trim_start_matches('.').to_ascii_lowercase();
        glyph_for_extension(&ext)
    }
}

fn glyph_for_extension(ext: &str) -> Option<&'static str> {
    let glyph = match ext {
        "rs" => "\u{e7a8}",
        "js" | "mjs" | "cjs" => "\u{e74e}",
        "ts" | "mts" | "cts" => "\u{e628}",
        "py" | "pyi" => "\u{e73c}",
        "go" => "\u{e724}",
        "c" | "h" => "\u{e61e}",
        "cpp" | "cxx" | "cc" | "hpp" => "\u{e61d}",
        "cs" => "\u{f031b}",
        "java" => "\u{e738}",
        "md" | "mdx" => "\u{e73e}",
        "json" => "\u{e60b}",
        "toml" => "\u{e6b2}",
        "yaml" | "yml" => "\u{e6a8}",
        "html" | "htm" => "\u{e736}",
        "css" | "scss" => "\u{e749}",
        "sh" | "bash" | "zsh" => "\u{f489}",
        "png" | "jpg" | "jpeg" | "gif" | "svg" | "ico" => "\u{f1c5}",
        "zip" | "tar" | "gz" | "xz" | "7z" => "\u{f410}",
        "lock" => "\u{f023}",
        "txt" => "\u{f15c}",
        _ => return None,
    };
    Some(glyph)
}

/// Glyph to draw for a node icon, `icons` being the list file slots point into
pub fn glyph(icon: Option<&NodeIcon>, icons: &IconList<&'static str>) -> &'static str {
    match icon {
        Some(NodeIcon::Folder) => FOLDER,
        Some(NodeIcon::Submodule) => SUBMODULE,
        Some(NodeIcon::File { slot, .. }) => icons.get(*slot).copied().unwrap_or(FILE),
        None => FILE,
    }
}
