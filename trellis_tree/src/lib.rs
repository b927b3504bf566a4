// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Tree: a generational element tree for interaction behaviors.
//!
//! This crate models the structural side of a UI that interaction behaviors
//! care about: which element is inside which, which elements are still alive,
//! and what the nearest common ancestor of a set of elements is. It is the
//! reference host-side structure for the behaviors in `trellis_behavior`,
//! which otherwise only see elements through capability traits.
//!
//! - Represents a hierarchy of elements with per-element bounds and
//!   capability flags.
//! - Provides containment (ancestor-or-self), root paths, and
//!   common-ancestor queries over live elements.
//! - Provides a simple world-space point query ([`Tree::element_at`]) used
//!   for pointer liveness checks when a hover behavior attaches.
//!
//! ## Not a layout engine
//!
//! This crate performs no layout and applies no transforms or clips. Hosts
//! compute positions with whatever layout system they choose and store the
//! resulting world-space boxes here. Bounds exist solely so hover behaviors
//! can answer "is the pointer already over this element?" at attach time.
//!
//! ## Liveness
//!
//! Identifiers are generational: removing an element frees its slot, and a
//! later insert may reuse the slot with a bumped generation. Stale ids are
//! never dangling — every query checks liveness and degrades to `None`,
//! `false`, or an empty result.
//!
//! ## API overview
//!
//! - [`Tree`]: container managing elements and structural queries.
//! - [`LocalElement`]: per-element data (bounds, flags).
//! - [`ElementFlags`]: focusability and activatability controls.
//! - [`ElementId`]: generational handle of an element.
//!
//! Key operations:
//! - [`Tree::insert`] / [`Tree::remove`] / [`Tree::reparent`]
//! - [`Tree::contains`] and [`Tree::common_ancestor`]
//! - [`Tree::path_from_root`] for ancestor chains
//! - [`Tree::element_at`] for point queries
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::{AncestorPath, Tree};
pub use types::{ElementFlags, ElementId, LocalElement};
