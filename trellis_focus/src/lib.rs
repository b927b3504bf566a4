// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Focus: menu focus traversal and focus-leave primitives.
//!
//! This crate models keyboard-driven menu focus as a combination of:
//! - **Menu intents** ([`MenuIntent`]) such as [`MenuIntent::Next`],
//!   [`MenuIntent::Previous`], dismissal, and activation.
//! - An **ordered snapshot of menu items** ([`MenuSpace`]) supplied fresh by
//!   the caller at every decision point. The engine never caches a snapshot:
//!   item sets are dynamic and may change between keystrokes.
//! - Pluggable **policies** ([`MenuPolicy`]) that turn an origin (the
//!   currently focused element, if any), an intent, and the snapshot into a
//!   [`MenuAction`] for the host to apply.
//!
//! The crate holds no positional state. "Current position" is always derived
//! from which element currently has focus, so focus changes made outside the
//! engine (for example by a mouse click) are respected on the next keystroke.
//!
//! ## Minimal example
//!
//! A three-item menu traversed forward with wraparound:
//!
//! ```rust
//! use trellis_focus::{MenuAction, MenuIntent, MenuPolicy, MenuSpace, SequentialPolicy};
//!
//! let items = [1_u32, 2, 3];
//! let space = MenuSpace { items: &items };
//! let policy = SequentialPolicy::default();
//!
//! // ArrowDown moves from the second item to the third…
//! assert_eq!(
//!     policy.resolve(Some(2), MenuIntent::Next, &space),
//!     Some(MenuAction::Focus(3)),
//! );
//! // …and wraps back to the first.
//! assert_eq!(
//!     policy.resolve(Some(3), MenuIntent::Next, &space),
//!     Some(MenuAction::Focus(1)),
//! );
//! ```
//!
//! ## Floor behavior
//!
//! When no menu item currently has focus — either nothing is focused, or the
//! focused element is not a member of the snapshot — every traversal intent
//! resolves to the *first* item. This treats "no focused item" as a position
//! before the start of the sequence and is deliberately deterministic; see
//! the tests for the exact contract.
//!
//! ## Focus-leave detection
//!
//! The [`leave`] module decides whether focus has departed a region, using
//! containment (not identity) so focus moving between a region and its
//! descendants never counts as leaving.
//!
//! The core types are generic over the element identifier `K`, so callers can
//! use any small, copyable handle (for example `trellis_tree::ElementId` with
//! the `tree_adapter` feature, or an application-specific id).
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for optional dependencies.
//! - `libm`: enables `no_std` builds of optional dependencies that need
//!   floating-point math.
//! - `tree_adapter`: enables the tree adapter in [`adapters`], implementing
//!   the leave module's containment view for `trellis_tree::Tree`.
//!
//! This crate is `no_std`.

#![no_std]

pub mod adapters;
pub mod leave;

/// A menu navigation intent, as mapped from keyboard input by the host.
///
/// These values represent high-level intents such as arrow-key movement,
/// Escape dismissal, and Enter/Space activation. Concrete policies interpret
/// the traversal intents according to their own rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuIntent {
    /// Move focus to the previous item (for example, ArrowUp).
    Previous,
    /// Move focus to the next item (for example, ArrowDown).
    Next,
    /// Release focus from the focused item without moving it elsewhere
    /// (for example, Escape).
    Dismiss,
    /// Activate the focused item (for example, Enter or Space).
    Activate,
}

/// An action for the host to apply to an element.
///
/// Policies emit actions rather than performing side effects, so the same
/// traversal logic runs against a real UI or a test double.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuAction<K> {
    /// Request focus on the element.
    Focus(K),
    /// Remove focus from the element without focusing another.
    Blur(K),
    /// Invoke the element's activation behavior.
    Activate(K),
}

/// A read-only snapshot of the ordered menu item set.
///
/// A `MenuSpace` is built fresh by the caller at every decision point from
/// whatever source owns the item set. Policies treat it as an immutable
/// snapshot; item order in the slice is the traversal order.
#[derive(Clone, Debug)]
pub struct MenuSpace<'a, K> {
    /// Menu items in traversal order.
    pub items: &'a [K],
}

/// Wrap mode configuration for menu traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Do not wrap; stepping past either end yields no action.
    Never,
    /// Wrap around: past the last item continues at the first, and before the
    /// first continues at the last.
    Always,
}

/// Trait for menu traversal policies.
///
/// A policy receives the current origin (the focused element, if any), an
/// intent, and a read-only snapshot of the item set, and returns the action
/// the host should apply, if any.
pub trait MenuPolicy<K>
where
    K: Copy + Eq,
{
    /// Resolve an intent against the current origin and item snapshot.
    fn resolve(
        &self,
        origin: Option<K>,
        intent: MenuIntent,
        space: &MenuSpace<'_, K>,
    ) -> Option<MenuAction<K>>;
}

/// Sequential traversal policy over snapshot order.
///
/// Traversal follows the order of the item slice. Dismissal and activation
/// apply only when the origin is a member of the snapshot: focus resting on
/// an element outside the item set is never blurred or activated.
#[derive(Copy, Clone, Debug)]
pub struct SequentialPolicy {
    /// Wrap behavior at the ends of the sequence.
    pub wrap: WrapMode,
}

impl Default for SequentialPolicy {
    fn default() -> Self {
        Self {
            wrap: WrapMode::Always,
        }
    }
}

impl<K> MenuPolicy<K> for SequentialPolicy
where
    K: Copy + Eq,
{
    fn resolve(
        &self,
        origin: Option<K>,
        intent: MenuIntent,
        space: &MenuSpace<'_, K>,
    ) -> Option<MenuAction<K>> {
        match intent {
            MenuIntent::Previous => {
                step(origin, space, self.wrap, Step::Backward).map(MenuAction::Focus)
            }
            MenuIntent::Next => step(origin, space, self.wrap, Step::Forward).map(MenuAction::Focus),
            MenuIntent::Dismiss => member(origin, space).map(MenuAction::Blur),
            MenuIntent::Activate => member(origin, space).map(MenuAction::Activate),
        }
    }
}

/// The item designated "first" in a snapshot, used for auto-focus on
/// attachment. `None` for an empty set.
pub fn first_item<K: Copy>(space: &MenuSpace<'_, K>) -> Option<K> {
    space.items.first().copied()
}

#[derive(Copy, Clone)]
enum Step {
    Forward,
    Backward,
}

fn step<K>(origin: Option<K>, space: &MenuSpace<'_, K>, wrap: WrapMode, step: Step) -> Option<K>
where
    K: Copy + Eq,
{
    let items = space.items;
    if items.is_empty() {
        return None;
    }

    // Locate the origin within the snapshot, if present. An origin that is
    // absent (nothing focused, or focus resting outside the item set) floors
    // to the first item for both directions.
    let origin_pos = origin.and_then(|o| items.iter().position(|i| *i == o));
    let Some(pos) = origin_pos else {
        return items.first().copied();
    };

    match step {
        Step::Forward => {
            if pos + 1 < items.len() {
                Some(items[pos + 1])
            } else if matches!(wrap, WrapMode::Always) {
                items.first().copied()
            } else {
                None
            }
        }
        Step::Backward => {
            if pos > 0 {
                Some(items[pos - 1])
            } else if matches!(wrap, WrapMode::Always) {
                items.last().copied()
            } else {
                None
            }
        }
    }
}

fn member<K>(origin: Option<K>, space: &MenuSpace<'_, K>) -> Option<K>
where
    K: Copy + Eq,
{
    origin.filter(|o| space.items.contains(o))
}
