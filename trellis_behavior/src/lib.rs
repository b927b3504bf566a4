// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Behavior: attachable interaction behaviors for UI elements.
//!
//! ## Overview
//!
//! Three behaviors with consistent accessibility and interaction semantics,
//! so UI components do not re-implement event wiring:
//!
//! - [`menu::MenuNavigation`] — keyboard-driven menu navigation: auto-focus
//!   of the first item, ArrowUp/ArrowDown traversal with wraparound over a
//!   dynamic item set, Escape to release focus, Enter/Space to activate.
//! - [`leave::FocusLeave`] — notifies a handler exactly when focus moves
//!   from inside a region to outside it (or out of the document entirely).
//! - [`hover::Hover`] / [`hover::DelayedHover`] — a raw hover signal and a
//!   delayed one that only turns on after the pointer has dwelled over the
//!   element for a configured delay, deactivating instantly on leave.
//!
//! ## Host model
//!
//! Behaviors see the UI only through the capability traits in [`host`]:
//! structural lookup, focus control, the hover pseudo-state, and cancellable
//! timers. The host delivers discrete events (key-down, focus-out, pointer
//! enter/leave, timer fired) to the attached behaviors in the order its
//! single-threaded event loop produces them; the behaviors are deterministic
//! state machines layered over the cores in `trellis_focus` and
//! `trellis_hover`.
//!
//! The subscription lifecycle is explicit: `attach` acquires, the host feeds
//! events, `detach` releases — unconditionally (pending timers are
//! cancelled regardless of state) and idempotently. Nothing is cached across
//! events: item sets, regions, containers, and the focused element are
//! re-derived fresh at every decision point, so externally mutated state is
//! always respected.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod host;
pub mod hover;
pub mod leave;
pub mod menu;

pub use host::EventResult;

#[cfg(test)]
mod testhost;
