//! Canonical ordering over values, slots, and containers
//!
//! This is the normalization order, not the wire order. The rank skeleton
//! is fixed:
//!
//! | Kind | Rank |
//! |------|------|
//! | Reference | −2 |
//! | Opaque (and unoccupied) | −1 |
//! | Structured | 0 |
//!
//! Refinement applies only within a rank: references compare
//! lexicographically by text, opaque payloads are mutually equal (stable,
//! non-discriminating), structured values delegate to their own domain
//! order. Containers compare lexicographically element-wise.

use crate::container::MultiProperty;
use crate::functional::FunctionalProperty;
use crate::slot::Slot;
use crate::value::{PropertyValue, RANK_OPAQUE};
use std::cmp::Ordering;

/// Compare two values: kind rank first, per-kind refinement on a tie.
pub fn cmp_values(a: &PropertyValue, b: &PropertyValue) -> Ordering {
    match a.kind_rank().cmp(&b.kind_rank()) {
        Ordering::Equal => {}
        ord => return ord,
    }
    match (a, b) {
        (PropertyValue::Reference(x), PropertyValue::Reference(y)) => x.cmp(y),
        (PropertyValue::Opaque(_), PropertyValue::Opaque(_)) => Ordering::Equal,
        (PropertyValue::Structured(x), PropertyValue::Structured(y)) => {
            x.cmp_structured(y.as_ref())
        }
        // Ranks matched, so the kinds matched; unreachable mixes fall out equal
        _ => Ordering::Equal,
    }
}

/// Compare two optional values; absence ranks with opaque payloads.
pub(crate) fn cmp_optional(a: Option<&PropertyValue>, b: Option<&PropertyValue>) -> Ordering {
    let rank = |v: Option<&PropertyValue>| v.map_or(RANK_OPAQUE, PropertyValue::kind_rank);
    match rank(a).cmp(&rank(b)) {
        Ordering::Equal => {}
        ord => return ord,
    }
    match (a, b) {
        (Some(x), Some(y)) => cmp_values(x, y),
        // One or both unoccupied at the opaque rank: equal
        _ => Ordering::Equal,
    }
}

/// Compare two slots under the canonical order
pub fn cmp_slots(a: &Slot, b: &Slot) -> Ordering {
    cmp_optional(a.value(), b.value())
}

/// Compare two non-functional containers: element-wise in sequence order
/// up to the shorter length, first differing pair decides, otherwise the
/// shorter container is less. Lexicographic, not permutation-invariant.
pub fn cmp_multi(a: &MultiProperty, b: &MultiProperty) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match cmp_slots(x, y) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

/// Compare two functional containers under the canonical order
pub fn cmp_functional(a: &FunctionalProperty, b: &FunctionalProperty) -> Ordering {
    cmp_optional(a.value(), b.value())
}

/// Wrapper that provides Ord for slots under the canonical order
///
/// This allows using standard library sorting for normalization passes.
pub struct SlotOrd<'a> {
    pub slot: &'a Slot,
}

impl<'a> SlotOrd<'a> {
    pub fn new(slot: &'a Slot) -> Self {
        Self { slot }
    }
}

impl PartialEq for SlotOrd<'_> {
    fn eq(&self, other: &Self) -> bool {
        cmp_slots(self.slot, other.slot) == Ordering::Equal
    }
}

impl Eq for SlotOrd<'_> {}

impl PartialOrd for SlotOrd<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlotOrd<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_slots(self.slot, other.slot)
    }
}
