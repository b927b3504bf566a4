// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw hover tracking from pointer enter/leave events.

use alloc::collections::BTreeSet;

/// Raw hover state per element.
///
/// A thin layer over pointer enter/leave events: an element is hovered from
/// the enter event until the matching leave event. The one wrinkle is
/// attachment time — if the pointer is already over an element when tracking
/// begins, no enter event will ever arrive, so callers perform a liveness
/// check once at setup and [`seed`](Self::seed) the result.
#[derive(Clone, Debug, Default)]
pub struct HoverSet<K: Ord> {
    hovered: BTreeSet<K>,
}

impl<K: Ord> HoverSet<K> {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            hovered: BTreeSet::new(),
        }
    }

    /// Record a pointer-enter event. Returns `true` if the element was not
    /// already hovered.
    pub fn on_enter(&mut self, target: K) -> bool {
        self.hovered.insert(target)
    }

    /// Record a pointer-leave event. Returns `true` if the element was
    /// hovered.
    pub fn on_leave(&mut self, target: &K) -> bool {
        self.hovered.remove(target)
    }

    /// Mark an element as hovered at attachment time.
    ///
    /// Call once at setup with the result of the host's hover query, covering
    /// the pointer that was already present before tracking began.
    pub fn seed(&mut self, target: K) -> bool {
        self.hovered.insert(target)
    }

    /// Whether the element is currently hovered.
    pub fn is_hovered(&self, target: &K) -> bool {
        self.hovered.contains(target)
    }

    /// Whether no element is hovered.
    pub fn is_empty(&self) -> bool {
        self.hovered.is_empty()
    }

    /// Drop all hover state.
    pub fn clear(&mut self) {
        self.hovered.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_leave_toggle_state() {
        let mut set: HoverSet<u32> = HoverSet::new();

        assert!(!set.is_hovered(&1));
        assert!(set.on_enter(1));
        assert!(set.is_hovered(&1));
        assert!(set.on_leave(&1));
        assert!(!set.is_hovered(&1));
    }

    #[test]
    fn duplicate_events_are_reported() {
        let mut set: HoverSet<u32> = HoverSet::new();

        assert!(set.on_enter(1));
        assert!(!set.on_enter(1), "second enter is not a state change");
        assert!(set.on_leave(&1));
        assert!(!set.on_leave(&1), "second leave is not a state change");
    }

    #[test]
    fn seed_covers_already_present_pointer() {
        let mut set: HoverSet<u32> = HoverSet::new();

        assert!(set.seed(3));
        assert!(set.is_hovered(&3));
        // A leave after seeding behaves like any other leave.
        assert!(set.on_leave(&3));
        assert!(set.is_empty());
    }

    #[test]
    fn elements_track_independently() {
        let mut set: HoverSet<u32> = HoverSet::new();

        set.on_enter(1);
        set.on_enter(2);
        set.on_leave(&1);
        assert!(!set.is_hovered(&1));
        assert!(set.is_hovered(&2));

        set.clear();
        assert!(set.is_empty());
    }
}
