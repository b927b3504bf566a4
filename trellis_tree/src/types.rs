// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the element tree: identifiers, capability flags, and local data.

use kurbo::Rect;

/// Identifier for an element in the tree (generational).
///
/// An `ElementId` stays valid only while the element it names is alive; after
/// removal the slot may be reused with a bumped generation, and the old id
/// becomes stale. Stale ids are detectable via [`crate::Tree::is_alive`] and
/// degrade to no-ops or `None` in every query.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Element flags controlling which interaction behaviors may target an element.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element can receive focus (participates in keyboard traversal).
        const FOCUSABLE   = 0b0000_0001;
        /// Element can be activated (responds to Enter/Space or click).
        const ACTIVATABLE = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::FOCUSABLE | Self::ACTIVATABLE
    }
}

/// Local data for an element.
#[derive(Clone, Debug)]
pub struct LocalElement {
    /// World-space bounds. The tree applies no transforms; hosts supply final
    /// boxes. Used only by point queries such as [`crate::Tree::element_at`].
    pub bounds: Rect,
    /// Interaction capability flags.
    pub flags: ElementFlags,
}

impl Default for LocalElement {
    fn default() -> Self {
        Self {
            bounds: Rect::ZERO,
            flags: ElementFlags::default(),
        }
    }
}
