// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host double backed by `trellis_tree`, shared by the behavior
//! tests.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Point;
use trellis_hover::TimerToken;
use trellis_tree::{ElementId, Tree};

use crate::host::{ElementLookup, FocusControl, PointerView, TimerHost};

/// Deterministic host: a real element tree, explicit focus state, a pointer
/// position resolved through element bounds, and a manual timer queue.
pub(crate) struct TestHost {
    pub(crate) tree: Tree,
    pub(crate) focused: Option<ElementId>,
    pub(crate) blurred: Vec<ElementId>,
    pub(crate) activated: Vec<ElementId>,
    pub(crate) pointer: Option<Point>,
    pub(crate) now: u64,
    pub(crate) scheduled: HashMap<TimerToken, u64>,
    pub(crate) canceled: Vec<TimerToken>,
}

impl TestHost {
    pub(crate) fn new() -> Self {
        Self {
            tree: Tree::new(),
            focused: None,
            blurred: Vec::new(),
            activated: Vec::new(),
            pointer: None,
            now: 0,
            scheduled: HashMap::new(),
            canceled: Vec::new(),
        }
    }

    /// Advance the clock to `t` and pop every timer due by then, in deadline
    /// order. The caller feeds the returned tokens to the behavior under
    /// test, mimicking the host event loop.
    pub(crate) fn advance_to(&mut self, t: u64) -> Vec<TimerToken> {
        self.now = t;
        let mut due: Vec<(u64, TimerToken)> = self
            .scheduled
            .iter()
            .filter(|(_, deadline)| **deadline <= t)
            .map(|(token, deadline)| (*deadline, *token))
            .collect();
        due.sort_unstable();
        for (_, token) in &due {
            self.scheduled.remove(token);
        }
        due.into_iter().map(|(_, token)| token).collect()
    }
}

impl ElementLookup for TestHost {
    type Id = ElementId;

    fn is_live(&self, id: ElementId) -> bool {
        self.tree.is_alive(id)
    }

    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        self.tree.contains(ancestor, node)
    }

    fn common_container(&self, items: &[ElementId]) -> Option<ElementId> {
        self.tree.common_ancestor(items)
    }
}

impl FocusControl for TestHost {
    fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    fn request_focus(&mut self, id: ElementId) {
        if self.tree.is_alive(id) {
            self.focused = Some(id);
        }
    }

    fn release_focus(&mut self, id: ElementId) {
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.blurred.push(id);
    }

    fn activate(&mut self, id: ElementId) {
        self.activated.push(id);
    }
}

impl PointerView for TestHost {
    fn pointer_over(&self, id: ElementId) -> bool {
        let Some(point) = self.pointer else {
            return false;
        };
        self.tree
            .element_at(point)
            .is_some_and(|hit| self.tree.contains(id, hit))
    }
}

impl TimerHost for TestHost {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn schedule(&mut self, token: TimerToken, deadline_ms: u64) {
        self.scheduled.insert(token, deadline_ms);
    }

    fn cancel(&mut self, token: TimerToken) {
        self.scheduled.remove(&token);
        self.canceled.push(token);
    }
}
