// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters for integrating focus primitives with other Trellis crates.
//!
//! Each adapter is gated behind a feature flag to keep the core crate
//! lightweight and `no_std` by default.
//!
//! ## Available Adapters
//!
//! - [`tree`] (`tree_adapter` feature): implements the leave module's
//!   [`crate::leave::ContainmentView`] for `trellis_tree::Tree` and derives
//!   menu containers from its common-ancestor query.

#[cfg(feature = "tree_adapter")]
pub mod tree;
