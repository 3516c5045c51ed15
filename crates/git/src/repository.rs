use anyhow::{anyhow, Context, Result};
use git2::{ObjectType, Oid, Repository as Git2Repository, Tree, TreeEntry};
use log::debug;
use revision_tree::{EntryKind, EntryLoader, RepositoryEntry};
use std::path::{Path, PathBuf};

/// A wrapper around git2::Repository that lists revision trees
pub struct Repository {
    /// The underlying git2 repository
    inner: Git2Repository,
    /// The repository's working directory
    work_dir: PathBuf,
}

impl Repository {
    /// Open a git repository at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repository::discover(path)
            .with_context(|| format!("Failed to discover git repository at {}", path.display()))?;

        let work_dir = repo
            .workdir()
            .ok_or_else(|| anyhow!("Repository has no working directory"))?
            .to_path_buf();

        Ok(Self {
            inner: repo,
            work_dir,
        })
    }

    /// Get the repository's working directory
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Resolve a revision to the full id of the commit it points at
    pub fn resolve(&self, revision: &str) -> Result<String> {
        let commit = self
            .inner
            .revparse_single(revision)
            .with_context(|| format!("Failed to resolve revision {}", revision))?
            .peel_to_commit()?;
        Ok(commit.id().to_string())
    }

    /// Get the top-level entries of the tree at a revision
    pub fn entries(&self, revision: &str) -> Result<Vec<RepositoryEntry>> {
        let tree = self
            .inner
            .revparse_single(revision)
            .with_context(|| format!("Failed to resolve revision {}", revision))?
            .peel_to_tree()
            .with_context(|| format!("Revision {} has no tree", revision))?;

        let entries = list_tree(&tree, "");
        debug!("Revision {} has {} top-level entries", revision, entries.len());
        Ok(entries)
    }

    /// Get the entries of the tree object `id`, located at `parent_path`
    pub fn tree_entries(&self, id: &str, parent_path: &str) -> Result<Vec<RepositoryEntry>> {
        let oid = Oid::from_str(id).with_context(|| format!("Invalid object id {}", id))?;
        let tree = self
            .inner
            .find_tree(oid)
            .with_context(|| format!("Failed to find tree {} at {}", id, parent_path))?;

        Ok(list_tree(&tree, parent_path))
    }
}

impl EntryLoader for Repository {
    fn sub_entries(&self, parent: &RepositoryEntry) -> Result<Vec<RepositoryEntry>> {
        if parent.kind != EntryKind::Tree {
            return Ok(Vec::new());
        }

        let id = parent
            .object_id
            .as_deref()
            .ok_or_else(|| anyhow!("Entry {} has no object id", parent.path))?;
        self.tree_entries(id, &parent.path)
    }
}

/// Map a git object type to an entry kind
///
/// Submodules show up in trees as commit objects (gitlinks).
pub fn entry_kind(kind: Option<ObjectType>) -> EntryKind {
    match kind {
        Some(ObjectType::Tree) => EntryKind::Tree,
        Some(ObjectType::Blob) => EntryKind::Blob,
        Some(ObjectType::Commit) => EntryKind::Commit,
        _ => EntryKind::Unknown,
    }
}

fn list_tree(tree: &Tree<'_>, parent_path: &str) -> Vec<RepositoryEntry> {
    tree.iter()
        .map(|entry| to_repository_entry(&entry, parent_path))
        .collect()
}

fn to_repository_entry(entry: &TreeEntry<'_>, parent_path: &str) -> RepositoryEntry {
    let name = String::from_utf8_lossy(entry.name_bytes()).to_string();
    let path = if parent_path.is_empty() {
        name.clone()
    } else {
        format!("{}/{}", parent_path, name)
    };
    let kind = entry_kind(entry.kind());

    let file_name = match kind {
        EntryKind::Blob => path.clone(),
        _ => String::new(),
    };

    RepositoryEntry::new(name, kind)
        .with_path(path)
        .with_file_name(file_name)
        .with_object_id(entry.id().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind() {
        assert_eq!(entry_kind(Some(ObjectType::Tree)), EntryKind::Tree);
        assert_eq!(entry_kind(Some(ObjectType::Blob)), EntryKind::Blob);
        assert_eq!(entry_kind(Some(ObjectType::Commit)), EntryKind::Commit);
        assert_eq!(entry_kind(Some(ObjectType::Tag)), EntryKind::Unknown);
        assert_eq!(entry_kind(None), EntryKind::Unknown);
    }
}
