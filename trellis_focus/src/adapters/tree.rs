// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for the Trellis element tree.
//!
//! ## Feature
//!
//! Enable with `tree_adapter`.

use trellis_tree::{ElementId, Tree};

use crate::leave::ContainmentView;

impl ContainmentView<ElementId> for Tree {
    fn is_live(&self, node: ElementId) -> bool {
        Tree::is_alive(self, node)
    }

    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        Tree::contains(self, ancestor, node)
    }
}

/// Common container of a menu item set: the nearest ancestor element that
/// contains every item.
///
/// Recomputed by callers whenever the item set changes; `None` for an empty
/// set, matching the navigation engine's inert state.
pub fn menu_container(tree: &Tree, items: &[ElementId]) -> Option<ElementId> {
    tree.common_ancestor(items)
}
