//! One position in a property's value sequence
//!
//! Slots do not cache their own index and do not point back at their
//! owner. Identity (`SlotId`) is the only durable coordinate: positions
//! are re-derived by the owning container on every use, so mutation can
//! never leave a stale cached index behind.

use crate::value::{PropertyValue, StructuredValue, RANK_OPAQUE};
use astreams_json_ld::Iri;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Stable identity of a slot within its owning container.
///
/// Identity survives reordering (prepend, remove of other slots, swap);
/// it dies when the slot itself is removed or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) u64);

/// A retained reference to a slot.
///
/// Handles carry identity only and are resolved against the owning
/// container (`position`, `next`, `prev`). Once the slot has been removed
/// or replaced the handle is detached and resolution fails loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotHandle {
    pub(crate) id: SlotId,
}

/// One occupied (or cleared) position in a property's value sequence.
#[derive(Debug)]
pub struct Slot {
    id: SlotId,
    value: Option<PropertyValue>,
}

impl Slot {
    pub(crate) fn new(id: SlotId, value: Option<PropertyValue>) -> Self {
        Slot { id, value }
    }

    pub(crate) fn id(&self) -> SlotId {
        self.id
    }

    /// A handle to this slot for later re-resolution against the owner
    pub fn handle(&self) -> SlotHandle {
        SlotHandle { id: self.id }
    }

    /// The active value, if any
    pub fn value(&self) -> Option<&PropertyValue> {
        self.value.as_ref()
    }

    /// True if any kind of value is set
    pub fn has_any(&self) -> bool {
        self.value.is_some()
    }

    /// True if the active value is a reference
    pub fn is_reference(&self) -> bool {
        matches!(self.value, Some(PropertyValue::Reference(_)))
    }

    /// True if the active value is an opaque payload
    pub fn is_opaque(&self) -> bool {
        matches!(self.value, Some(PropertyValue::Opaque(_)))
    }

    /// True if the active value is a structured object
    pub fn is_structured(&self) -> bool {
        matches!(self.value, Some(PropertyValue::Structured(_)))
    }

    /// The reference IRI. None unless `is_reference`; callers check the
    /// predicate first.
    pub fn reference(&self) -> Option<&Iri> {
        self.value.as_ref().and_then(PropertyValue::reference_iri)
    }

    /// The opaque payload. None unless `is_opaque`.
    pub fn opaque(&self) -> Option<&JsonValue> {
        self.value.as_ref().and_then(PropertyValue::opaque_payload)
    }

    /// The structured value. None unless `is_structured`.
    pub fn structured(&self) -> Option<&dyn StructuredValue> {
        self.value.as_ref().and_then(PropertyValue::structured_value)
    }

    /// Set a reference, replacing any active value of another kind
    pub fn set_reference(&mut self, iri: Iri) {
        self.value = Some(PropertyValue::Reference(iri));
    }

    /// Set an opaque payload, replacing any active value of another kind
    pub fn set_opaque(&mut self, payload: JsonValue) {
        self.value = Some(PropertyValue::Opaque(payload));
    }

    /// Set a structured value, replacing any active value of another kind
    pub fn set_structured(&mut self, value: Arc<dyn StructuredValue>) {
        self.value = Some(PropertyValue::Structured(value));
    }

    /// Set the active value directly
    pub fn set_value(&mut self, value: PropertyValue) {
        self.value = Some(value);
    }

    /// Ensure no value is set
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Numeric kind rank of the active value; an unoccupied slot ranks
    /// with opaque payloads.
    pub fn kind_rank(&self) -> i32 {
        self.value
            .as_ref()
            .map_or(RANK_OPAQUE, PropertyValue::kind_rank)
    }
}
