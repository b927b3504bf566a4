// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard menu navigation behavior.
//!
//! Auto-focuses the first navigable item on attachment and moves focus among
//! a dynamic item set in response to directional keys, with
//! escape-to-dismiss and activate-on-select semantics.
//!
//! The behavior caches nothing between events. Each key event re-snapshots
//! the item set, re-derives the common container, and re-reads the focused
//! element from the host, so dynamic item sets and external focus changes
//! (for example a mouse click) are respected on the next keystroke.

use alloc::vec::Vec;

use trellis_focus::{first_item, MenuAction, MenuIntent, MenuPolicy, MenuSpace, SequentialPolicy};

use crate::host::{ElementLookup, EventResult, FocusControl};

/// A key relevant to menu navigation, as mapped from the host's key codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuKey {
    /// Move focus to the previous item.
    ArrowUp,
    /// Move focus to the next item.
    ArrowDown,
    /// Release focus from the focused item.
    Escape,
    /// Activate the focused item.
    Enter,
    /// Activate the focused item.
    Space,
    /// Any key the behavior does not handle.
    Other,
}

impl MenuKey {
    fn intent(self) -> Option<MenuIntent> {
        match self {
            Self::ArrowUp => Some(MenuIntent::Previous),
            Self::ArrowDown => Some(MenuIntent::Next),
            Self::Escape => Some(MenuIntent::Dismiss),
            Self::Enter | Self::Space => Some(MenuIntent::Activate),
            Self::Other => None,
        }
    }
}

/// Pull-based source of the ordered menu item set.
///
/// The set is externally owned and may change between invocations; the
/// behavior asks for a fresh snapshot at every decision point and never
/// keeps one. Any closure returning the current items works:
///
/// ```rust
/// use trellis_behavior::menu::ItemSource;
///
/// let source = || vec![1_u32, 2, 3];
/// assert_eq!(source.snapshot(), vec![1, 2, 3]);
/// ```
pub trait ItemSource<K> {
    /// The current item set, in traversal order.
    fn snapshot(&self) -> Vec<K>;
}

impl<K, F> ItemSource<K> for F
where
    F: Fn() -> Vec<K>,
{
    fn snapshot(&self) -> Vec<K> {
        self()
    }
}

/// Keyboard navigation over a dynamic menu item set.
///
/// Created with [`MenuNavigation::attach`], fed key events by the host via
/// [`MenuNavigation::on_key_down`], and torn down with
/// [`MenuNavigation::detach`]. The host should scope key delivery to
/// [`MenuNavigation::container`]; the behavior re-checks that scope itself,
/// so over-delivery is harmless.
#[derive(Debug)]
pub struct MenuNavigation<S> {
    source: S,
    policy: SequentialPolicy,
    attached: bool,
}

impl<S> MenuNavigation<S> {
    /// Attach the behavior to an item source.
    ///
    /// If the current snapshot is non-empty, focus is requested on the item
    /// designated "first" (the head of the ordered sequence). No-op when the
    /// snapshot is empty or its first item is not live.
    pub fn attach<H>(host: &mut H, source: S) -> Self
    where
        H: FocusControl,
        S: ItemSource<H::Id>,
    {
        let items = source.snapshot();
        let space = MenuSpace { items: &items };
        if let Some(first) = first_item(&space)
            && host.is_live(first)
        {
            host.request_focus(first);
        }
        Self {
            source,
            policy: SequentialPolicy::default(),
            attached: true,
        }
    }

    /// The common container of the current item snapshot.
    ///
    /// This is the element key events should be scoped to. Recomputed fresh
    /// on every call; `None` when the snapshot is empty (navigation is
    /// disabled) or after detach.
    pub fn container<H>(&self, host: &H) -> Option<H::Id>
    where
        H: ElementLookup,
        S: ItemSource<H::Id>,
    {
        if !self.attached {
            return None;
        }
        host.common_container(&self.source.snapshot())
    }

    /// Offer a key-down event to the behavior.
    ///
    /// `target` is the element the event was delivered to. Events outside
    /// the current common container, events against an empty snapshot, and
    /// keys the behavior does not handle are all [`EventResult::Ignored`].
    pub fn on_key_down<H>(&self, host: &mut H, target: H::Id, key: MenuKey) -> EventResult
    where
        H: FocusControl,
        S: ItemSource<H::Id>,
    {
        if !self.attached {
            return EventResult::Ignored;
        }
        let items = self.source.snapshot();
        let Some(container) = host.common_container(&items) else {
            return EventResult::Ignored;
        };
        if !host.contains(container, target) {
            return EventResult::Ignored;
        }
        let Some(intent) = key.intent() else {
            return EventResult::Ignored;
        };

        // "Current position" is whichever element has focus right now;
        // stale focus degrades to the no-focus floor.
        let focused = host.focused().filter(|f| host.is_live(*f));
        let space = MenuSpace { items: &items };
        match self.policy.resolve(focused, intent, &space) {
            Some(MenuAction::Focus(id)) => {
                host.request_focus(id);
                EventResult::Consumed
            }
            Some(MenuAction::Blur(id)) => {
                host.release_focus(id);
                EventResult::Consumed
            }
            Some(MenuAction::Activate(id)) => {
                host.activate(id);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    /// Whether the behavior is attached.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Detach the behavior. Idempotent; there is no navigation state to
    /// cancel, subsequent events are ignored.
    pub fn detach(&mut self) {
        self.attached = false;
    }
}
