//! Building visual trees out of repository entries
//!
//! Entries are classified, labelled and given icons by the [`TreeBuilder`].
//! Directories receive a single placeholder child and are only populated
//! when they are expanded through an [`EntryLoader`].

mod builder;
mod classify;
mod entry;
mod icons;
mod node;
mod options;
mod traversal;

pub use builder::{TreeBuilder, SUBMODULE_SUFFIX};
pub use classify::{classify, extension, ItemClass};
pub use entry::{EntryKind, EntryLoader, RepositoryEntry};
pub use icons::{IconCache, IconList, IconProvider, IconSlot};
pub use node::{node_at, NodeIcon, VisualNode};
pub use options::TreeOptions;
pub use traversal::{walk, Walk};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        classify, walk, EntryKind, EntryLoader, IconCache, IconList, IconProvider, IconSlot,
        ItemClass, NodeIcon, RepositoryEntry, TreeBuilder, TreeOptions, VisualNode,
    };
}
