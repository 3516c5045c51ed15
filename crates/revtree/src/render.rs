//! Expanding and printing a revision tree

use crate::glyphs::glyph;
use anyhow::Result;
use revision_tree::{walk, EntryLoader, IconList, IconProvider, TreeBuilder, VisualNode};
use std::fmt::Write;

/// Expand every directory in `nodes` down to `depth` levels
///
/// A depth of 0 leaves the nodes untouched.
pub fn expand_to_depth<P, L>(
    builder: &mut TreeBuilder<P>,
    nodes: &mut [VisualNode],
    loader: &L,
    icons: &mut IconList<P::Icon>,
    depth: usize,
) -> Result<()>
where
    P: IconProvider,
    L: EntryLoader + ?Sized,
{
    if depth == 0 {
        return Ok(());
    }

    for node in nodes.iter_mut() {
        builder.load_children(node, loader, icons)?;
        expand_to_depth(builder, &mut node.children, loader, icons, depth - 1)?;
    }
    Ok(())
}

/// Render nodes as an indented list, one node per line
///
/// Collapsed directories show their placeholder as `…`.
pub fn render(nodes: &[VisualNode], icons: &IconList<&'static str>) -> String {
    let mut out = String::new();
    for (depth, node) in walk(nodes) {
        let indent = depth * 2;
        // Writing into a String cannot fail
        let _ = if node.is_placeholder() {
            writeln!(out, "{:indent$}…", "")
        } else {
            writeln!(
                out,
                "{:indent$}{} {}",
                "",
                glyph(node.icon.as_ref(), icons),
                node.label
            )
        };
    }
    out
}
