// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Hover: hover tracking and delayed-hover state machines.
//!
//! Two layers, both deterministic and host-driven:
//!
//! - [`HoverSet`] tracks raw pointer presence per element from discrete
//!   enter/leave events, with a one-time [`HoverSet::seed`] for the case
//!   where the pointer is already over an element when tracking attaches.
//! - [`DwellState`] derives a *delayed* hover signal: an element only
//!   becomes active after the pointer has rested over it continuously for a
//!   configured delay, while deactivation on leave is immediate and
//!   unconditional.
//!
//! Neither layer owns a clock or a timer. Callers pass timestamps in
//! milliseconds, and [`DwellState`] hands out [`TimerRequest`]s for the host
//! to schedule and [`TimerToken`]s for the host to cancel. Because a leave
//! removes the pending entry before returning its token, a timer that fires
//! after cancellation finds nothing to activate — there is no race window in
//! a single-threaded event queue.
//!
//! ## Example
//!
//! ```rust
//! use trellis_hover::{DwellState, EnterTransition, LeaveTransition};
//!
//! let mut dwell: DwellState<u32> = DwellState::new(100);
//!
//! // Pointer enters element 7 at t=0: a timer is requested for t=100.
//! let EnterTransition::Scheduled(req) = dwell.on_enter(7, 0) else {
//!     panic!("non-zero delay schedules a timer");
//! };
//! assert_eq!(req.deadline_ms, 100);
//! assert!(!dwell.is_active(&7));
//!
//! // The host fires the timer at the deadline: the element activates.
//! assert_eq!(dwell.on_timer(req.token), Some(7));
//! assert!(dwell.is_active(&7));
//!
//! // Leaving deactivates immediately.
//! assert!(matches!(dwell.on_leave(&7), LeaveTransition::Deactivated));
//! assert!(!dwell.is_active(&7));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dwell;
mod tracker;

pub use dwell::{DwellState, EnterTransition, LeaveTransition, TimerRequest, TimerToken};
pub use tracker::HoverSet;
