// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus-leave notification behavior.
//!
//! Notifies a handler exactly when focus moves from inside a region to
//! outside it. The handler takes no arguments; it is a pure notification of
//! "focus left this region".

use trellis_focus::leave::{focus_departed, ContainmentView, InvariantViolation};

use crate::host::ElementLookup;

/// Watches a region for focus departure.
///
/// The region is supplied by a closure and re-evaluated on every event, so a
/// region that has not mounted yet (`None`) keeps the detector inert until
/// it appears. The host feeds focus-loss events through
/// [`FocusLeave::on_focus_out`] together with the element about to receive
/// focus.
#[derive(Debug)]
pub struct FocusLeave<R, F> {
    region: R,
    handler: F,
    attached: bool,
}

impl<R, F> FocusLeave<R, F> {
    /// Attach the detector to a region source and a notification handler.
    pub fn attach(region: R, handler: F) -> Self {
        Self {
            region,
            handler,
            attached: true,
        }
    }

    /// Offer a focus-loss event on the region, with the incoming focus
    /// target (`None` when focus left the document entirely).
    ///
    /// Returns whether the handler fired. A non-live incoming target is a
    /// contract violation at the host boundary and fails fast.
    pub fn on_focus_out<H>(
        &mut self,
        host: &H,
        incoming: Option<H::Id>,
    ) -> Result<bool, InvariantViolation>
    where
        H: ElementLookup,
        R: Fn() -> Option<H::Id>,
        F: FnMut(),
    {
        if !self.attached {
            return Ok(false);
        }
        let region = (self.region)();
        let departed = focus_departed(&LookupView(host), region, incoming)?;
        if departed {
            (self.handler)();
        }
        Ok(departed)
    }

    /// Whether the detector is attached.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Detach the detector. Idempotent; subsequent events are ignored.
    pub fn detach(&mut self) {
        self.attached = false;
    }
}

/// Containment view over any host lookup, for the leave core.
struct LookupView<'a, H>(&'a H);

impl<H: ElementLookup> ContainmentView<H::Id> for LookupView<'_, H> {
    fn is_live(&self, node: H::Id) -> bool {
        self.0.is_live(node)
    }

    fn contains(&self, ancestor: H::Id, node: H::Id) -> bool {
        self.0.contains(ancestor, node)
    }
}
