// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delayed-hover ("dwell") state machine.
//!
//! An element passes through three phases: idle, pending (pointer present,
//! timer running), and active (dwell elapsed). Consumers of the delayed
//! signal only observe [`DwellState::is_active`]; a pending element is
//! observably identical to an idle one.
//!
//! ## Timer protocol
//!
//! The machine owns no clock. [`DwellState::on_enter`] reads the configured
//! delay *at schedule time* and returns a [`TimerRequest`] carrying a fresh
//! [`TimerToken`] and an absolute deadline; the host schedules it.
//! [`DwellState::on_leave`] removes the entry and returns the token so the
//! host can cancel. Cancellation is belt-and-braces: even if the host never
//! cancels and the timer fires late, [`DwellState::on_timer`] finds no entry
//! matching the stale token and does nothing. Re-entering after a leave
//! mints a new token, so the dwell always restarts from zero.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// Handle identifying one scheduled dwell timer.
///
/// Tokens are minted per schedule and never reused, so a token uniquely
/// names a single pending activation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

/// A timer the host should schedule on behalf of the state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    /// Token to pass back to [`DwellState::on_timer`] when the timer fires,
    /// and to the host's cancel primitive if the element is left first.
    pub token: TimerToken,
    /// Absolute deadline in milliseconds, on the caller's clock.
    pub deadline_ms: u64,
}

/// Result of a pointer-enter event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EnterTransition {
    /// Zero delay: the element became active synchronously, no timer needed.
    Activated,
    /// A dwell timer must be scheduled for the element to become active.
    Scheduled(TimerRequest),
    /// The element was already pending or active; nothing changed.
    Unchanged,
}

/// Result of a pointer-leave event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LeaveTransition {
    /// The element was active and is now idle.
    Deactivated,
    /// The element was pending; the host should cancel the returned timer.
    Canceled(TimerToken),
    /// The element was not hovered; nothing changed.
    Unchanged,
}

#[derive(Clone, Debug)]
enum Phase {
    Pending { token: TimerToken },
    Active,
}

/// Delayed-hover state machine for a set of elements.
///
/// Tracks, per element, whether the pointer has dwelled long enough for the
/// delayed signal to turn on. Events and timestamps are supplied by the
/// host; see the module docs for the timer protocol.
#[derive(Clone, Debug)]
pub struct DwellState<K: Ord> {
    delay_ms: u64,
    entries: BTreeMap<K, Phase>,
    next_token: u64,
}

impl<K: Ord + Clone> DwellState<K> {
    /// Create a state machine with the given dwell delay in milliseconds.
    ///
    /// A delay of zero makes activation synchronous with pointer entry.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            entries: BTreeMap::new(),
            next_token: 1,
        }
    }

    /// The currently configured dwell delay in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Change the dwell delay.
    ///
    /// The delay is evaluated when a timer is scheduled, not when it fires:
    /// changing it mid-hover does not reschedule an in-flight timer.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    /// Record a pointer-enter event at `now_ms`.
    ///
    /// With a zero delay the element activates synchronously. Otherwise a
    /// fresh token is minted and returned in a [`TimerRequest`] with deadline
    /// `now_ms + delay`; the element stays observably inactive until the
    /// host fires that timer via [`Self::on_timer`].
    pub fn on_enter(&mut self, target: K, now_ms: u64) -> EnterTransition {
        if self.entries.contains_key(&target) {
            return EnterTransition::Unchanged;
        }
        if self.delay_ms == 0 {
            self.entries.insert(target, Phase::Active);
            return EnterTransition::Activated;
        }
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.entries.insert(target, Phase::Pending { token });
        EnterTransition::Scheduled(TimerRequest {
            token,
            deadline_ms: now_ms.saturating_add(self.delay_ms),
        })
    }

    /// Record a pointer-leave event.
    ///
    /// Unconditional and immediate: the element is idle when this returns,
    /// whatever phase it was in. A pending entry's token is handed back for
    /// host-side cancellation and is invalidated here, so a late firing of
    /// that timer cannot resurrect the active state.
    pub fn on_leave(&mut self, target: &K) -> LeaveTransition {
        match self.entries.remove(target) {
            Some(Phase::Active) => LeaveTransition::Deactivated,
            Some(Phase::Pending { token }) => LeaveTransition::Canceled(token),
            None => LeaveTransition::Unchanged,
        }
    }

    /// Handle a fired dwell timer.
    ///
    /// Promotes the pending element whose schedule minted `token` and returns
    /// it. Stale tokens — canceled by a leave, superseded by re-entry, or
    /// simply unknown — return `None`.
    pub fn on_timer(&mut self, token: TimerToken) -> Option<K> {
        let target = self.entries.iter().find_map(|(k, phase)| match phase {
            Phase::Pending { token: t } if *t == token => Some(k.clone()),
            _ => None,
        })?;
        self.entries.insert(target.clone(), Phase::Active);
        Some(target)
    }

    /// The delayed hover signal: whether the element's dwell has elapsed.
    pub fn is_active(&self, target: &K) -> bool {
        matches!(self.entries.get(target), Some(Phase::Active))
    }

    /// Whether the pointer is over the element at all (pending or active),
    /// as tracked by this machine.
    pub fn is_hovering(&self, target: &K) -> bool {
        self.entries.contains_key(target)
    }

    /// Drop all state and return the tokens of any still-pending timers so
    /// the host can cancel them on teardown.
    pub fn clear(&mut self) -> Vec<TimerToken> {
        let tokens = self
            .entries
            .values()
            .filter_map(|phase| match phase {
                Phase::Pending { token } => Some(*token),
                Phase::Active => None,
            })
            .collect();
        self.entries.clear();
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(t: EnterTransition) -> TimerRequest {
        match t {
            EnterTransition::Scheduled(req) => req,
            other => panic!("expected a scheduled timer, got {other:?}"),
        }
    }

    #[test]
    fn activation_waits_for_the_timer() {
        let mut dwell: DwellState<u32> = DwellState::new(100);

        let req = scheduled(dwell.on_enter(7, 0));
        assert_eq!(req.deadline_ms, 100);

        // Anywhere before the timer fires — t=99 included — the delayed
        // signal is still off, although the raw presence is tracked.
        assert!(!dwell.is_active(&7));
        assert!(dwell.is_hovering(&7));

        assert_eq!(dwell.on_timer(req.token), Some(7));
        assert!(dwell.is_active(&7));
    }

    #[test]
    fn zero_delay_activates_synchronously() {
        let mut dwell: DwellState<u32> = DwellState::new(0);

        assert_eq!(dwell.on_enter(7, 1234), EnterTransition::Activated);
        assert!(dwell.is_active(&7));
    }

    #[test]
    fn leave_cancels_pending_activation() {
        let mut dwell: DwellState<u32> = DwellState::new(100);

        // Enter at t=0, leave at t=50: the pending timer is surrendered.
        let req = scheduled(dwell.on_enter(7, 0));
        assert_eq!(dwell.on_leave(&7), LeaveTransition::Canceled(req.token));
        assert!(!dwell.is_active(&7));
        assert!(!dwell.is_hovering(&7));

        // Even if the host never canceled and the timer fires at t=100, the
        // stale token activates nothing.
        assert_eq!(dwell.on_timer(req.token), None);
        assert!(!dwell.is_active(&7));
    }

    #[test]
    fn leave_deactivates_immediately() {
        let mut dwell: DwellState<u32> = DwellState::new(0);

        dwell.on_enter(7, 0);
        assert!(dwell.is_active(&7));
        assert_eq!(dwell.on_leave(&7), LeaveTransition::Deactivated);
        assert!(!dwell.is_active(&7));
    }

    #[test]
    fn leave_without_hover_is_unchanged() {
        let mut dwell: DwellState<u32> = DwellState::new(100);
        assert_eq!(dwell.on_leave(&7), LeaveTransition::Unchanged);
    }

    #[test]
    fn reentry_restarts_the_dwell_with_a_fresh_token() {
        let mut dwell: DwellState<u32> = DwellState::new(100);

        let first = scheduled(dwell.on_enter(7, 0));
        dwell.on_leave(&7);

        let second = scheduled(dwell.on_enter(7, 50));
        assert_ne!(first.token, second.token);
        assert_eq!(second.deadline_ms, 150, "no memory of prior partial dwell");

        // The first token is dead; only the second activates.
        assert_eq!(dwell.on_timer(first.token), None);
        assert!(!dwell.is_active(&7));
        assert_eq!(dwell.on_timer(second.token), Some(7));
        assert!(dwell.is_active(&7));
    }

    #[test]
    fn duplicate_enter_is_unchanged() {
        let mut dwell: DwellState<u32> = DwellState::new(100);

        let req = scheduled(dwell.on_enter(7, 0));
        assert_eq!(dwell.on_enter(7, 10), EnterTransition::Unchanged);

        // The original schedule still stands.
        assert_eq!(dwell.on_timer(req.token), Some(7));
    }

    #[test]
    fn delay_is_read_at_schedule_time() {
        let mut dwell: DwellState<u32> = DwellState::new(100);

        let req = scheduled(dwell.on_enter(7, 0));
        assert_eq!(req.deadline_ms, 100);

        // Changing the delay mid-hover does not reschedule the in-flight
        // timer; the original token and deadline remain authoritative.
        dwell.set_delay_ms(500);
        assert_eq!(dwell.on_timer(req.token), Some(7));

        // The new delay applies from the next schedule on.
        dwell.on_leave(&7);
        let next = scheduled(dwell.on_enter(7, 1000));
        assert_eq!(next.deadline_ms, 1500);
    }

    #[test]
    fn elements_dwell_independently() {
        let mut dwell: DwellState<u32> = DwellState::new(100);

        let a = scheduled(dwell.on_enter(1, 0));
        let b = scheduled(dwell.on_enter(2, 10));
        assert_ne!(a.token, b.token);

        assert_eq!(dwell.on_timer(a.token), Some(1));
        assert!(dwell.is_active(&1));
        assert!(!dwell.is_active(&2));

        assert_eq!(dwell.on_leave(&2), LeaveTransition::Canceled(b.token));
        assert!(dwell.is_active(&1));
    }

    #[test]
    fn clear_returns_pending_tokens_for_cancellation() {
        let mut dwell: DwellState<u32> = DwellState::new(100);

        let pending = scheduled(dwell.on_enter(1, 0));
        dwell.on_enter(2, 0);
        let active = scheduled(dwell.on_enter(3, 0));
        assert_eq!(dwell.on_timer(active.token), Some(3));

        let mut tokens = dwell.clear();
        tokens.sort();
        assert!(tokens.contains(&pending.token));
        assert_eq!(tokens.len(), 2, "only pending entries hold timers");
        assert!(!dwell.is_active(&3));
        assert!(!dwell.is_hovering(&1));

        // Clearing twice is harmless.
        assert!(dwell.clear().is_empty());
    }
}
