//! Classification of repository entries into tree items

use crate::tree::{EntryKind, RepositoryEntry};

/// What a repository entry becomes in the visual tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemClass<'a> {
    /// A tree entry, expandable
    Directory,
    /// A commit entry of an embedded repository, always a leaf
    Submodule,
    /// Any other entry, with the file name used for icon lookups
    File { file_name: &'a str },
}

impl ItemClass<'_> {
    /// Returns true if nodes of this class get a placeholder child
    pub const fn is_expandable(&self) -> bool {
        matches!(self, ItemClass::Directory)
    }
}

/// Classify an entry by its kind
///
/// Kinds other than tree and commit, including unrecognized ones, are files.
pub fn classify(entry: &RepositoryEntry) -> ItemClass<'_> {
    match entry.kind {
        EntryKind::Tree => ItemClass::Directory,
        EntryKind::Commit => ItemClass::Submodule,
        EntryKind::Blob | EntryKind::Unknown => ItemClass::File {
            file_name: &entry.file_name,
        },
    }
}

/// Extension of a file name, including its leading dot
///
/// Only the last path component is considered. A name without a dot, or
/// ending in a dot, has no extension.
pub fn extension(file_name: &str) -> Option<&str> {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let dot = base.rfind('.')?;
    let ext = &base[dot..];
    (ext.len() > 1).then_some(ext)
}
