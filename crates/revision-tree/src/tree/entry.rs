//! Repository entries as supplied by the repository-access layer

use derive_more::Display;

/// The object type of a repository entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EntryKind {
    /// A directory listing
    #[display(fmt = "tree")]
    Tree,
    /// File contents
    #[display(fmt = "blob")]
    Blob,
    /// A commit of an embedded repository (submodule)
    #[display(fmt = "commit")]
    Commit,
    /// Anything else the repository reports
    #[display(fmt = "unknown")]
    Unknown,
}

/// One item in a repository tree listing
///
/// Entries are never modified once handed to the tree builder; each visual
/// node keeps the entry it was built from so it can be expanded later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    /// The entry's name within its parent tree
    pub name: String,
    /// The entry's object type
    pub kind: EntryKind,
    /// File name used for icon lookups, empty unless the entry is blob-like
    pub file_name: String,
    /// Object id of the entry, needed to enumerate sub-entries
    pub object_id: Option<String>,
    /// Path of the entry relative to the repository root
    pub path: String,
}

impl RepositoryEntry {
    /// Create an entry with no file name and a path equal to its name
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            kind,
            file_name: String::new(),
            object_id: None,
        }
    }

    /// Create a directory entry
    pub fn tree(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Tree)
    }

    /// Create a file entry whose file name is its name
    pub fn blob(name: impl Into<String>) -> Self {
        let entry = Self::new(name, EntryKind::Blob);
        Self {
            file_name: entry.name.clone(),
            ..entry
        }
    }

    /// Create a submodule entry
    pub fn commit(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Commit)
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_object_id(mut self, object_id: impl Into<String>) -> Self {
        self.object_id = Some(object_id.into());
        self
    }
}

/// Enumerates the sub-entries of an entry on demand
///
/// Only invoked when a node is expanded, never while building a level of
/// the tree.
pub trait EntryLoader {
    /// List the entries directly below `parent`
    fn sub_entries(&self, parent: &RepositoryEntry) -> anyhow::Result<Vec<RepositoryEntry>>;
}

impl<F> EntryLoader for F
where
    F: Fn(&RepositoryEntry) -> anyhow::Result<Vec<RepositoryEntry>>,
{
    fn sub_entries(&self, parent: &RepositoryEntry) -> anyhow::Result<Vec<RepositoryEntry>> {
        self(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_display() {
        assert_eq!(EntryKind::Tree.to_string(), "tree");
        assert_eq!(EntryKind::Blob.to_string(), "blob");
        assert_eq!(EntryKind::Commit.to_string(), "commit");
        assert_eq!(EntryKind::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_entry_constructors() {
        let blob = RepositoryEntry::blob("file1.txt");
        assert_eq!(blob.file_name, "file1.txt");
        assert_eq!(blob.path, "file1.txt");
        assert_eq!(blob.object_id, None);

        let tree = RepositoryEntry::tree("src").with_path("crates/src");
        assert_eq!(tree.file_name, "");
        assert_eq!(tree.path, "crates/src");
        assert_eq!(tree.kind, EntryKind::Tree);
    }
}
