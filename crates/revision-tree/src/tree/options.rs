//! Configuration options for tree building.

use serde::{Deserialize, Serialize};

/// Options controlling how a [`TreeBuilder`](crate::tree::TreeBuilder) resolves icons.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    /// Context handed to the icon provider with every lookup, usually the
    /// repository's working directory.
    pub icon_context: String,
}

impl TreeOptions {
    /// Create new tree options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the icon provider context.
    pub fn icon_context(mut self, context: impl Into<String>) -> Self {
        self.icon_context = context.into();
        self
    }
}
