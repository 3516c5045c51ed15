//! Populating node collections from repository entries

use crate::tree::{
    classify, extension, EntryLoader, IconCache, IconList, IconProvider, ItemClass, NodeIcon,
    RepositoryEntry, TreeOptions, VisualNode,
};
use anyhow::{Context, Result};
use log::{debug, trace};
use std::path::Component;

/// Appended to the label of submodule nodes
pub const SUBMODULE_SUFFIX: &str = " (Submodule)";

/// Builds visual nodes out of repository entries
///
/// The builder owns the icon provider and the [`IconCache`], so the cache is
/// shared by every level built with it. Cached slots are checked against the
/// icon list passed in, so a builder can also be reused with a new list.
///
/// # Example
///
/// ```
/// use revision_tree::prelude::*;
///
/// let mut builder = TreeBuilder::new(|_: &str, _: &str| None::<()>);
/// let mut nodes = Vec::new();
/// let mut icons = IconList::new();
///
/// builder.build(
///     vec![RepositoryEntry::tree("a"), RepositoryEntry::commit("b")],
///     &mut nodes,
///     &mut icons,
/// );
///
/// assert_eq!(nodes[0].icon, Some(NodeIcon::Folder));
/// assert_eq!(nodes[0].children.len(), 1);
/// assert_eq!(nodes[1].label, "b (Submodule)");
/// assert!(nodes[1].children.is_empty());
/// ```
pub struct TreeBuilder<P: IconProvider> {
    provider: P,
    cache: IconCache,
    options: TreeOptions,
}

impl<P: IconProvider> TreeBuilder<P> {
    /// Create a builder with an empty cache and default options
    pub fn new(provider: P) -> Self {
        Self::with_options(provider, TreeOptions::default())
    }

    pub fn with_options(provider: P, options: TreeOptions) -> Self {
        Self {
            provider,
            cache: IconCache::new(),
            options,
        }
    }

    /// Replace the cache, e.g. to carry slots over from an earlier builder
    pub fn with_cache(mut self, cache: IconCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &IconCache {
        &self.cache
    }

    /// Give back the cache, dropping the builder
    pub fn into_cache(self) -> IconCache {
        self.cache
    }

    /// Forget all resolved extensions
    ///
    /// Call this when the icon list is recreated, otherwise cached slots
    /// would point into the old list.
    pub fn reset_cache(&mut self) {
        debug!("Resetting icon cache ({} extensions)", self.cache.len());
        self.cache.clear();
    }

    /// Append one node per entry to `nodes`, in input order
    ///
    /// Icons resolved for new extensions are appended to `icons`. Sub-entries
    /// are never enumerated here; directories get a placeholder child instead.
    pub fn build<I>(
        &mut self,
        entries: I,
        nodes: &mut Vec<VisualNode>,
        icons: &mut IconList<P::Icon>,
    ) where
        I: IntoIterator<Item = RepositoryEntry>,
    {
        let before = nodes.len();
        let icons_before = icons.len();

        for entry in entries {
            let node = self.build_node(entry, icons);
            nodes.push(node);
        }

        debug!(
            "Built {} nodes, {} new icons",
            nodes.len() - before,
            icons.len() - icons_before
        );
    }

    fn build_node(&mut self, entry: RepositoryEntry, icons: &mut IconList<P::Icon>) -> VisualNode {
        let class = classify(&entry);
        trace!("Classified {} ({}) as {:?}", entry.name, entry.kind, class);

        let (label, icon) = match class {
            ItemClass::Directory => (entry.name.clone(), Some(NodeIcon::Folder)),
            ItemClass::Submodule => (
                format!("{}{}", entry.name, SUBMODULE_SUFFIX),
                Some(NodeIcon::Submodule),
            ),
            ItemClass::File { file_name } => {
                (entry.name.clone(), self.file_icon(file_name, icons))
            }
        };
        let expandable = class.is_expandable();

        let mut node = VisualNode::new(label, icon, entry);
        if expandable {
            node.children.push(VisualNode::placeholder());
        }
        node
    }

    fn file_icon(&mut self, file_name: &str, icons: &mut IconList<P::Icon>) -> Option<NodeIcon> {
        let Some(ext) = extension(file_name) else {
            trace!("No extension for {:?}, skipping icon lookup", file_name);
            return None;
        };

        let slot = self.cache.resolve(
            ext,
            file_name,
            &self.options.icon_context,
            &self.provider,
            icons,
        )?;

        Some(NodeIcon::File {
            key: ext.to_string(),
            slot,
        })
    }

    /// Populate a collapsed node with its sub-entries
    ///
    /// Replaces the placeholder child with one node per sub-entry. Returns
    /// `Ok(false)` without touching the node if it has no placeholder, i.e.
    /// it is a leaf or was expanded before. On error the placeholder stays.
    pub fn load_children<L>(
        &mut self,
        node: &mut VisualNode,
        loader: &L,
        icons: &mut IconList<P::Icon>,
    ) -> Result<bool>
    where
        L: EntryLoader + ?Sized,
    {
        if !node.has_placeholder() {
            return Ok(false);
        }
        let Some(entry) = node.entry.as_ref() else {
            return Ok(false);
        };

        debug!("Loading children of {}", entry.path);
        let sub_entries = loader
            .sub_entries(entry)
            .with_context(|| format!("Failed to load sub-entries of {}", entry.path))?;

        node.children.clear();
        self.build(sub_entries, &mut node.children, icons);
        Ok(true)
    }

    /// Find the node at a repository path, expanding directories on the way
    ///
    /// `path` is split on `/` and matched against entry names level by
    /// level. Returns the child indices leading to the node, or `None` if
    /// some component does not exist or the path leaves the repository.
    pub fn select_path<L>(
        &mut self,
        nodes: &mut [VisualNode],
        path: &str,
        loader: &L,
        icons: &mut IconList<P::Icon>,
    ) -> Result<Option<Vec<usize>>>
    where
        L: EntryLoader + ?Sized,
    {
        let cleaned = path_clean::clean(path);
        let mut components = Vec::new();
        for component in cleaned.components() {
            match component {
                Component::Normal(part) => match part.to_str() {
                    Some(part) => components.push(part),
                    None => return Ok(None),
                },
                Component::CurDir => {}
                // Leading `..`, roots and prefixes never name an entry
                _ => {
                    debug!("{} is not a path inside the repository", path);
                    return Ok(None);
                }
            }
        }

        if components.is_empty() {
            return Ok(None);
        }

        let mut indices = Vec::with_capacity(components.len());
        let mut level: &mut [VisualNode] = nodes;

        for (depth, name) in components.iter().enumerate() {
            let current = level;
            let Some(position) = current.iter().position(|n| n.name() == Some(*name)) else {
                debug!("No entry named {} while selecting {}", name, path);
                return Ok(None);
            };
            indices.push(position);

            let node = &mut current[position];
            if depth + 1 < components.len() {
                self.load_children(node, loader, icons)?;
            }
            level = node.children.as_mut_slice();
        }

        Ok(Some(indices))
    }
}
