//! Pre-order traversal over a forest of visual nodes

use crate::tree::VisualNode;

/// Walk `nodes` and all their descendants in display order
///
/// Yields each node with its depth (top-level nodes have depth 0).
/// Placeholder children are included.
pub fn walk(nodes: &[VisualNode]) -> Walk<'_> {
    Walk::new(nodes)
}

/// Iterator returned by [`walk`]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a VisualNode)>,
}

impl<'a> Walk<'a> {
    fn new(nodes: &'a [VisualNode]) -> Self {
        // Reversed so the first node is popped first
        let stack = nodes.iter().rev().map(|node| (0, node)).collect();
        Self { stack }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a VisualNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, current) = self.stack.pop()?;

        for child in current.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }

        Some((depth, current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{NodeIcon, RepositoryEntry};

    fn leaf(name: &str) -> VisualNode {
        VisualNode::new(name, None, RepositoryEntry::blob(name))
    }

    fn dir(name: &str) -> VisualNode {
        VisualNode::new(name, Some(NodeIcon::Folder), RepositoryEntry::tree(name))
    }

    #[test]
    fn test_walk_preorder() {
        let mut dir1 = dir("dir1");
        let mut dir2 = dir("dir2");
        dir2.children.push(VisualNode::placeholder());
        dir1.children.push(leaf("file2.txt"));
        dir1.children.push(dir2);
        let nodes = vec![dir1, leaf("file1.txt")];

        let walked: Vec<_> = walk(&nodes).map(|(d, n)| (d, n.label.as_str())).collect();
        assert_eq!(
            walked,
            vec![
                (0, "dir1"),
                (1, "file2.txt"),
                (1, "dir2"),
                (2, ""),
                (0, "file1.txt"),
            ]
        );
    }

    #[test]
    fn test_walk_empty() {
        assert_eq!(walk(&[]).count(), 0);
    }
}
