// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capability traits.
//!
//! Behaviors never touch a concrete UI. Everything they need from the
//! environment — focus movement, containment, the hover pseudo-state, timers
//! — is expressed as a small capability trait the host implements. This
//! keeps the behaviors deterministic and lets tests substitute a double for
//! the parts that are global, mutable state in a real UI (most notably
//! "which element currently has focus").

use trellis_hover::TimerToken;

/// Result of offering an input event to a behavior.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventResult {
    /// The behavior acted on the event; the host should not apply defaults.
    Consumed,
    /// The event was not for this behavior; propagation continues.
    Ignored,
}

/// Read-only structural view of the host's elements.
pub trait ElementLookup {
    /// Element identifier. A small, copyable handle such as
    /// `trellis_tree::ElementId`.
    type Id: Copy + Eq;

    /// Whether `id` refers to a live element.
    fn is_live(&self, id: Self::Id) -> bool;

    /// Whether `ancestor` contains `node` (ancestor-or-self).
    fn contains(&self, ancestor: Self::Id, node: Self::Id) -> bool;

    /// Nearest common ancestor of a set of elements, or `None` for an empty
    /// set or elements without one.
    fn common_container(&self, items: &[Self::Id]) -> Option<Self::Id>;
}

/// Focus movement and activation primitives.
///
/// `focused` reflects global, externally mutable state: behaviors query it
/// fresh at every decision point and never cache it.
pub trait FocusControl: ElementLookup {
    /// The element that currently has focus, if any.
    fn focused(&self) -> Option<Self::Id>;

    /// Move focus to an element.
    fn request_focus(&mut self, id: Self::Id);

    /// Remove focus from an element without focusing another.
    fn release_focus(&mut self, id: Self::Id);

    /// Invoke an element's activation behavior (click).
    fn activate(&mut self, id: Self::Id);
}

/// Pointer hover pseudo-state query.
pub trait PointerView: ElementLookup {
    /// Whether the pointer is currently over the element or one of its
    /// descendants. Queried once when a hover behavior attaches, to catch a
    /// pointer that was already present.
    fn pointer_over(&self, id: Self::Id) -> bool;
}

/// Cancellable one-shot timers on the host's event queue.
///
/// Timers share the single-threaded queue with event delivery: a timer never
/// fires while an event handler is running, and cancelling before the
/// deadline guarantees the callback is never delivered.
pub trait TimerHost {
    /// Current time in milliseconds on the host's monotonic clock.
    fn now_ms(&self) -> u64;

    /// Arrange for `token` to be delivered back at `deadline_ms`.
    fn schedule(&mut self, token: TimerToken, deadline_ms: u64);

    /// Cancel a scheduled timer. Must be idempotent: cancelling a token that
    /// already fired, was already cancelled, or was never scheduled is a
    /// no-op.
    fn cancel(&mut self, token: TimerToken);
}
