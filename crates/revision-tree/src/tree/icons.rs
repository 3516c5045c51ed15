//! Icon collection, icon provider seam and the per-extension icon cache

use derive_more::{Display, From};
use log::{debug, trace};
use std::collections::HashMap;

/// Index of an icon within an [`IconList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
#[display(fmt = "IconSlot({})", _0)]
pub struct IconSlot(pub usize);

impl IconSlot {
    pub const fn new(index: usize) -> Self {
        IconSlot(index)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

/// The shared, append-only collection of icons referenced by nodes
///
/// Every icon is stored under a key (the file extension it was resolved for)
/// and addressed by the slot it was added at.
#[derive(Debug, Clone)]
pub struct IconList<I> {
    icons: Vec<(String, I)>,
}

impl<I> Default for IconList<I> {
    fn default() -> Self {
        Self { icons: Vec::new() }
    }
}

impl<I> IconList<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an icon under `key` and return its slot
    pub fn add(&mut self, key: impl Into<String>, icon: I) -> IconSlot {
        let slot = IconSlot::new(self.icons.len());
        self.icons.push((key.into(), icon));
        slot
    }

    pub fn get(&self, slot: IconSlot) -> Option<&I> {
        self.icons.get(slot.get()).map(|(_, icon)| icon)
    }

    /// Slot of the first icon stored under `key`
    pub fn slot_of(&self, key: &str) -> Option<IconSlot> {
        self.icons
            .iter()
            .position(|(k, _)| k == key)
            .map(IconSlot::new)
    }

    pub fn key(&self, slot: IconSlot) -> Option<&str> {
        self.icons.get(slot.get()).map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn clear(&mut self) {
        self.icons.clear();
    }
}

/// Resolves the icon associated with a file
///
/// A miss is signalled by returning `None`; providers never fail.
pub trait IconProvider {
    type Icon;

    /// Look up the icon for `file_name`; `context` is usually the
    /// repository's working directory
    fn get(&self, context: &str, file_name: &str) -> Option<Self::Icon>;
}

impl<F, I> IconProvider for F
where
    F: Fn(&str, &str) -> Option<I>,
{
    type Icon = I;

    fn get(&self, context: &str, file_name: &str) -> Option<I> {
        self(context, file_name)
    }
}

/// Maps file extensions to resolved icon slots
///
/// An extension is looked up at most once; extensions the provider had no
/// icon for are remembered as such.
#[derive(Debug, Clone, Default)]
pub struct IconCache {
    slots: HashMap<String, Option<IconSlot>>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the icon slot for `extension`
    ///
    /// On the first request for an extension the provider is asked with
    /// `sample_file_name`, and a returned icon is appended to `icons`. Later
    /// requests are answered from the cache whatever file triggers them, as
    /// long as the cached slot still holds that extension in `icons`.
    pub fn resolve<P: IconProvider + ?Sized>(
        &mut self,
        extension: &str,
        sample_file_name: &str,
        context: &str,
        provider: &P,
        icons: &mut IconList<P::Icon>,
    ) -> Option<IconSlot> {
        match self.slots.get(extension) {
            Some(None) => {
                trace!("Icon cache hit for {}: no icon", extension);
                return None;
            }
            Some(Some(slot)) if icons.key(*slot) == Some(extension) => {
                trace!("Icon cache hit for {}: {}", extension, slot);
                return Some(*slot);
            }
            Some(Some(slot)) => {
                debug!(
                    "Cached {} for {} is not in this icon list, resolving again",
                    slot, extension
                );
            }
            None => {}
        }

        let slot = match icons.slot_of(extension) {
            Some(slot) => Some(slot),
            None => {
                trace!(
                    "Icon cache miss for {}, asking provider with {}",
                    extension,
                    sample_file_name
                );
                provider
                    .get(context, sample_file_name)
                    .map(|icon| icons.add(extension, icon))
            }
        };

        self.slots.insert(extension.to_string(), slot);
        slot
    }

    /// Cached result for an extension, `None` if it was never resolved
    pub fn get(&self, extension: &str) -> Option<Option<IconSlot>> {
        self.slots.get(extension).copied()
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.slots.contains_key(extension)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Forget every resolved extension
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
