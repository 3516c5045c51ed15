//! Visual node types handed to the tree widget

use crate::tree::{IconSlot, RepositoryEntry};
use std::fmt;

/// The icon shown next to a node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeIcon {
    /// The reserved folder icon, always available
    Folder,
    /// The reserved submodule icon, always available
    Submodule,
    /// An icon resolved for a file extension
    File {
        /// The extension the icon was resolved for, e.g. `.txt`
        key: String,
        /// Where the icon lives in the shared icon list
        slot: IconSlot,
    },
}

impl NodeIcon {
    /// The image key, only set for extension-based icons
    pub fn key(&self) -> Option<&str> {
        match self {
            NodeIcon::File { key, .. } => Some(key.as_str()),
            NodeIcon::Folder | NodeIcon::Submodule => None,
        }
    }

    /// The slot in the shared icon list, only set for extension-based icons
    pub fn slot(&self) -> Option<IconSlot> {
        match self {
            NodeIcon::File { slot, .. } => Some(*slot),
            NodeIcon::Folder | NodeIcon::Submodule => None,
        }
    }
}

impl fmt::Display for NodeIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeIcon::Folder => write!(f, "Folder"),
            NodeIcon::Submodule => write!(f, "Submodule"),
            NodeIcon::File { key, slot } => write!(f, "{} ({})", key, slot),
        }
    }
}

/// A single node of the visual tree
///
/// Nodes built from entries keep that entry; the synthetic placeholder
/// child of a collapsed directory has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualNode {
    /// Text shown for the node
    pub label: String,
    /// Icon shown for the node, `None` when no image is assigned
    pub icon: Option<NodeIcon>,
    /// Child nodes in display order
    pub children: Vec<VisualNode>,
    /// The entry the node was built from
    pub entry: Option<RepositoryEntry>,
}

impl VisualNode {
    /// Create a childless node for an entry
    pub fn new(label: impl Into<String>, icon: Option<NodeIcon>, entry: RepositoryEntry) -> Self {
        Self {
            label: label.into(),
            icon,
            children: Vec::new(),
            entry: Some(entry),
        }
    }

    /// Create the placeholder child that marks a node as expandable
    pub fn placeholder() -> Self {
        Self {
            label: String::new(),
            icon: None,
            children: Vec::new(),
            entry: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.entry.is_none()
    }

    /// Returns true if the node is expandable but not yet populated
    pub fn has_placeholder(&self) -> bool {
        matches!(self.children.as_slice(), [child] if child.is_placeholder())
    }

    /// The image key of the node's icon, if it has an extension-based one
    pub fn image_key(&self) -> Option<&str> {
        self.icon.as_ref().and_then(NodeIcon::key)
    }

    /// Name of the entry behind the node
    pub fn name(&self) -> Option<&str> {
        self.entry.as_ref().map(|e| e.name.as_str())
    }
}

impl fmt::Display for VisualNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.icon {
            Some(icon) => write!(f, "{} [{}]", self.label, icon),
            None => write!(f, "{}", self.label),
        }
    }
}

/// Follow a path of child indices through a node forest
pub fn node_at<'a>(nodes: &'a [VisualNode], indices: &[usize]) -> Option<&'a VisualNode> {
    let (first, rest) = indices.split_first()?;
    let mut current = nodes.get(*first)?;
    for index in rest {
        current = current.children.get(*index)?;
    }
    Some(current)
}
