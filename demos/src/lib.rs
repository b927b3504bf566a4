// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Trellis interaction behaviors.
//!
//! See `examples/` for the individual walkthroughs:
//! - `menu_walkthrough`: keyboard navigation, focus-leave, and delayed hover
//!   wired to one small host.
