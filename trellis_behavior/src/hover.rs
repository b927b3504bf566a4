// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover behaviors: a raw hover signal and a delayed one.
//!
//! [`Hover`] is the thin layer over pointer enter/leave events plus a
//! one-time liveness check at attach. [`DelayedHover`] adds the dwell timer:
//! its signal only turns on after the pointer has rested over the element
//! for the configured delay, and turns off immediately on leave. Both expose
//! pull-based boolean accessors; a pending dwell is observably identical to
//! no hover at all.

use trellis_hover::{DwellState, EnterTransition, HoverSet, LeaveTransition, TimerToken};

use crate::host::{ElementLookup, PointerView, TimerHost};

/// Raw hover signal for a single element.
#[derive(Debug)]
pub struct Hover<K: Ord> {
    target: K,
    raw: HoverSet<K>,
    attached: bool,
}

impl<K: Ord + Copy> Hover<K> {
    /// Attach to an element, seeding from the host's hover pseudo-state so a
    /// pointer already over the element is not missed.
    pub fn attach<H>(host: &H, target: K) -> Self
    where
        H: PointerView + ElementLookup<Id = K>,
    {
        let mut raw = HoverSet::new();
        if host.pointer_over(target) {
            raw.seed(target);
        }
        Self {
            target,
            raw,
            attached: true,
        }
    }

    /// Record a pointer-enter event on the element.
    pub fn on_pointer_enter(&mut self) {
        if self.attached {
            self.raw.on_enter(self.target);
        }
    }

    /// Record a pointer-leave event on the element.
    pub fn on_pointer_leave(&mut self) {
        if self.attached {
            self.raw.on_leave(&self.target);
        }
    }

    /// The current hover state.
    pub fn get(&self) -> bool {
        self.raw.is_hovered(&self.target)
    }

    /// Detach the behavior. Idempotent.
    pub fn detach(&mut self) {
        self.raw.clear();
        self.attached = false;
    }

    /// Whether the behavior is attached.
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

/// Delayed hover signal for a single element.
///
/// Wraps a [`DwellState`] and drives the host's timer primitives: entering
/// schedules a dwell timer, leaving cancels it unconditionally, and the
/// host's timer delivery feeds [`DelayedHover::on_timer`]. The non-delayed
/// signal remains available via [`DelayedHover::raw`].
#[derive(Debug)]
pub struct DelayedHover<K: Ord> {
    target: K,
    dwell: DwellState<K>,
    raw: HoverSet<K>,
    attached: bool,
}

impl<K: Ord + Copy> DelayedHover<K> {
    /// Attach to an element with the given dwell delay in milliseconds.
    ///
    /// Performs the liveness check once: if the pointer is already over the
    /// element, the dwell starts now (or activates synchronously for a zero
    /// delay), exactly as if an enter event had just been delivered.
    pub fn attach<H>(host: &mut H, target: K, delay_ms: u64) -> Self
    where
        H: PointerView + TimerHost + ElementLookup<Id = K>,
    {
        let mut behavior = Self {
            target,
            dwell: DwellState::new(delay_ms),
            raw: HoverSet::new(),
            attached: true,
        };
        if host.pointer_over(target) {
            behavior.raw.seed(target);
            behavior.apply_enter(host);
        }
        behavior
    }

    /// Record a pointer-enter event on the element.
    pub fn on_pointer_enter<H: TimerHost>(&mut self, host: &mut H) {
        if !self.attached {
            return;
        }
        self.raw.on_enter(self.target);
        self.apply_enter(host);
    }

    /// Record a pointer-leave event on the element.
    ///
    /// Deactivation is immediate; any pending dwell timer is cancelled on
    /// the host and invalidated in the state machine, so a late firing is
    /// inert even if the host's cancel raced the deadline.
    pub fn on_pointer_leave<H: TimerHost>(&mut self, host: &mut H) {
        if !self.attached {
            return;
        }
        self.raw.on_leave(&self.target);
        if let LeaveTransition::Canceled(token) = self.dwell.on_leave(&self.target) {
            host.cancel(token);
        }
    }

    /// Handle a fired dwell timer. Returns whether the element activated.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        self.attached && self.dwell.on_timer(token).is_some()
    }

    /// The delayed hover signal.
    pub fn get(&self) -> bool {
        self.dwell.is_active(&self.target)
    }

    /// The raw, non-delayed hover signal.
    pub fn raw(&self) -> bool {
        self.raw.is_hovered(&self.target)
    }

    /// The configured dwell delay in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.dwell.delay_ms()
    }

    /// Change the dwell delay. Applies from the next schedule; an in-flight
    /// timer keeps its original deadline.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.dwell.set_delay_ms(delay_ms);
    }

    /// Detach the behavior, cancelling any outstanding timer. Idempotent.
    pub fn detach<H: TimerHost>(&mut self, host: &mut H) {
        for token in self.dwell.clear() {
            host.cancel(token);
        }
        self.raw.clear();
        self.attached = false;
    }

    /// Whether the behavior is attached.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    fn apply_enter<H: TimerHost>(&mut self, host: &mut H) {
        match self.dwell.on_enter(self.target, host.now_ms()) {
            EnterTransition::Scheduled(req) => host.schedule(req.token, req.deadline_ms),
            EnterTransition::Activated | EnterTransition::Unchanged => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testhost::TestHost;
    use kurbo::{Point, Rect};
    use trellis_tree::{ElementId, LocalElement};

    fn hoverable(host: &mut TestHost) -> ElementId {
        host.tree.insert(
            None,
            LocalElement {
                bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
                ..LocalElement::default()
            },
        )
    }

    #[test]
    fn raw_hover_tracks_enter_and_leave() {
        let mut host = TestHost::new();
        let el = hoverable(&mut host);
        let mut hover = Hover::attach(&host, el);

        assert!(!hover.get());
        hover.on_pointer_enter();
        assert!(hover.get());
        hover.on_pointer_leave();
        assert!(!hover.get());
    }

    #[test]
    fn raw_hover_seeds_an_already_present_pointer() {
        let mut host = TestHost::new();
        let el = hoverable(&mut host);
        host.pointer = Some(Point::new(50.0, 50.0));

        let hover = Hover::attach(&host, el);
        assert!(hover.get(), "pointer was already over the element");
    }

    #[test]
    fn raw_hover_detach_is_idempotent() {
        let mut host = TestHost::new();
        let el = hoverable(&mut host);
        let mut hover = Hover::attach(&host, el);

        hover.on_pointer_enter();
        hover.detach();
        hover.detach();
        assert!(!hover.get());
        hover.on_pointer_enter();
        assert!(!hover.get(), "events after detach are ignored");
    }

    #[test]
    fn delayed_signal_waits_for_the_dwell() {
        let mut host = TestHost::new();
        let el = hoverable(&mut host);
        let mut hover = DelayedHover::attach(&mut host, el, 100);

        // Enter at t=0.
        hover.on_pointer_enter(&mut host);
        assert!(hover.raw());
        assert!(!hover.get());

        // t=99: nothing due yet.
        assert!(host.advance_to(99).is_empty());
        assert!(!hover.get());

        // t=100: the dwell timer fires and the signal turns on.
        for token in host.advance_to(100) {
            assert!(hover.on_timer(token));
        }
        assert!(hover.get());
    }

    #[test]
    fn zero_delay_activates_in_the_same_tick() {
        let mut host = TestHost::new();
        let el = hoverable(&mut host);
        let mut hover = DelayedHover::attach(&mut host, el, 0);

        hover.on_pointer_enter(&mut host);
        assert!(hover.get());
        assert!(host.scheduled.is_empty(), "zero delay never schedules");
    }

    #[test]
    fn leave_cancels_the_pending_timer() {
        let mut host = TestHost::new();
        let el = hoverable(&mut host);
        let mut hover = DelayedHover::attach(&mut host, el, 100);

        hover.on_pointer_enter(&mut host);
        host.advance_to(50);
        hover.on_pointer_leave(&mut host);
        assert!(!hover.get());
        assert_eq!(host.canceled.len(), 1);

        // The deadline passes with nothing due, and even a spurious firing
        // of the old token cannot resurrect the signal.
        let stale = host.canceled[0];
        assert!(host.advance_to(150).is_empty());
        assert!(!hover.on_timer(stale));
        assert!(!hover.get());
    }

    #[test]
    fn leave_deactivates_immediately_after_activation() {
        let mut host = TestHost::new();
        let el = hoverable(&mut host);
        let mut hover = DelayedHover::attach(&mut host, el, 10);

        hover.on_pointer_enter(&mut host);
        for token in host.advance_to(10) {
            hover.on_timer(token);
        }
        assert!(hover.get());

        hover.on_pointer_leave(&mut host);
        assert!(!hover.get());
    }

    #[test]
    fn reentry_restarts_the_dwell() {
        let mut host = TestHost::new();
        let el = hoverable(&mut host);
        let mut hover = DelayedHover::attach(&mut host, el, 100);

        hover.on_pointer_enter(&mut host);
        host.advance_to(80);
        hover.on_pointer_leave(&mut host);

        // Back in at t=80; the deadline is 180, not 100.
        hover.on_pointer_enter(&mut host);
        for token in host.advance_to(100) {
            hover.on_timer(token);
        }
        assert!(!hover.get(), "prior partial dwell does not count");
        for token in host.advance_to(180) {
            assert!(hover.on_timer(token));
        }
        assert!(hover.get());
    }

    #[test]
    fn attach_seeds_an_already_present_pointer() {
        let mut host = TestHost::new();
        let el = hoverable(&mut host);
        host.pointer = Some(Point::new(10.0, 10.0));

        let mut hover = DelayedHover::attach(&mut host, el, 100);
        assert!(hover.raw());
        assert!(!hover.get());
        for token in host.advance_to(100) {
            assert!(hover.on_timer(token));
        }
        assert!(hover.get());
    }

    #[test]
    fn attach_with_zero_delay_over_pointer_is_active_immediately() {
        let mut host = TestHost::new();
        let el = hoverable(&mut host);
        host.pointer = Some(Point::new(10.0, 10.0));

        let hover = DelayedHover::attach(&mut host, el, 0);
        assert!(hover.get());
    }

    #[test]
    fn delay_change_mid_hover_keeps_the_inflight_deadline() {
        let mut host = TestHost::new();
        let el = hoverable(&mut host);
        let mut hover = DelayedHover::attach(&mut host, el, 100);

        hover.on_pointer_enter(&mut host);
        hover.set_delay_ms(500);

        // The timer scheduled at enter keeps its t=100 deadline.
        for token in host.advance_to(100) {
            assert!(hover.on_timer(token));
        }
        assert!(hover.get());
        assert_eq!(hover.delay_ms(), 500);
    }

    #[test]
    fn detach_cancels_and_is_idempotent() {
        let mut host = TestHost::new();
        let el = hoverable(&mut host);
        let mut hover = DelayedHover::attach(&mut host, el, 100);

        hover.on_pointer_enter(&mut host);
        hover.detach(&mut host);
        assert_eq!(host.canceled.len(), 1);
        assert!(host.scheduled.is_empty());

        hover.detach(&mut host);
        assert!(!hover.is_attached());
        hover.on_pointer_enter(&mut host);
        assert!(!hover.get());
        assert!(!hover.raw());
    }

    #[test]
    fn detaching_a_behavior_that_never_hovered_is_fine() {
        let mut host = TestHost::new();
        let el = hoverable(&mut host);
        let mut hover = DelayedHover::attach(&mut host, el, 100);

        hover.detach(&mut host);
        hover.detach(&mut host);
        assert!(host.canceled.is_empty(), "no timer was ever outstanding");
    }
}
