// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus-leave detection: deciding whether focus has departed a region.
//!
//! The decision uses containment, not identity. Focus frequently lands on a
//! descendant of the watched region (nested interactive elements), and that
//! must not count as leaving. Focus moving to "nowhere" — the window losing
//! focus entirely — always counts as leaving.
//!
//! The incoming focus target crosses a trust boundary: it originates in the
//! host environment, outside this system's control. A target that is not a
//! live element is a programming-contract violation and fails fast with
//! [`InvariantViolation`] rather than being silently ignored.

use core::fmt;

/// Read-only containment view over a host's element structure.
///
/// Implemented for `trellis_tree::Tree` under the `tree_adapter` feature;
/// hosts with their own element store implement it directly.
pub trait ContainmentView<K> {
    /// Whether `node` refers to a live element.
    fn is_live(&self, node: K) -> bool;
    /// Whether `ancestor` contains `node` (ancestor-or-self).
    fn contains(&self, ancestor: K, node: K) -> bool;
}

/// Contract violation at the host boundary.
///
/// Raised when a value that must be a live element — such as an incoming
/// focus target delivered by the host — is not one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvariantViolation(pub &'static str);

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invariant violation: {}", self.0)
    }
}

impl core::error::Error for InvariantViolation {}

/// Decide whether focus has departed `region`, given the element about to
/// receive focus.
///
/// - An undefined or stale `region` is a valid quiescent state: the detector
///   is inert and reports `Ok(false)`.
/// - `incoming` of `None` means focus left the document entirely (for
///   example, window blur): departure.
/// - A live `incoming` target counts as departure exactly when the region
///   does not contain it.
/// - A non-live `incoming` target is a contract violation and returns
///   [`InvariantViolation`].
pub fn focus_departed<K, V>(
    view: &V,
    region: Option<K>,
    incoming: Option<K>,
) -> Result<bool, InvariantViolation>
where
    K: Copy,
    V: ContainmentView<K>,
{
    let Some(region) = region else {
        return Ok(false);
    };
    if !view.is_live(region) {
        return Ok(false);
    }
    match incoming {
        None => Ok(true),
        Some(next) => {
            if !view.is_live(next) {
                return Err(InvariantViolation("incoming focus target is not a live element"));
            }
            Ok(!view.contains(region, next))
        }
    }
}
