//! Revision Tree Library
//!
//! Turns the entries of a repository revision into a lazily expandable
//! tree of visual nodes, each annotated with an icon.
//!
//! # Core Concepts
//!
//! - **RepositoryEntry**: an item of a repository tree listing (tree, blob or commit)
//! - **ItemClass**: what an entry becomes in the tree (directory, submodule or file)
//! - **IconCache**: at most one icon lookup per distinct file extension
//! - **TreeBuilder**: produces one `VisualNode` per entry, with placeholder
//!   children for directories so they can be expanded later
//!
//! # Example
//!
//! ```
//! use revision_tree::prelude::*;
//!
//! let provider = |_context: &str, file_name: &str| {
//!     file_name.ends_with(".rs").then_some("rust")
//! };
//! let mut builder = TreeBuilder::new(provider);
//!
//! let entries = vec![
//!     RepositoryEntry::tree("src"),
//!     RepositoryEntry::blob("main.rs"),
//!     RepositoryEntry::commit("vendor"),
//! ];
//!
//! let mut nodes = Vec::new();
//! let mut icons = IconList::new();
//! builder.build(entries, &mut nodes, &mut icons);
//!
//! assert_eq!(nodes[0].label, "src");
//! assert!(nodes[0].has_placeholder());
//! assert_eq!(nodes[1].image_key(), Some(".rs"));
//! assert_eq!(nodes[2].label, "vendor (Submodule)");
//! assert_eq!(icons.len(), 1);
//! ```

pub mod tree;

pub use tree::{
    classify, extension, node_at, walk, EntryKind, EntryLoader, IconCache, IconList, IconProvider,
    IconSlot, ItemClass, NodeIcon, RepositoryEntry, TreeBuilder, TreeOptions, VisualNode,
    SUBMODULE_SUFFIX,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::tree::prelude::*;
}
