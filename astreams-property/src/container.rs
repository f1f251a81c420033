//! Non-functional property containers: an ordered sequence of value slots
//!
//! Sequence order is the authoritative wire order (insertion order) and is
//! distinct from the normalization order the [`crate::comparator`] module
//! provides. The container exclusively owns its slots and is the sole
//! authority for their positions: retained [`SlotHandle`]s re-resolve on
//! every use and fail loudly once their slot is gone.

use crate::comparator;
use crate::decode::{decode_element, StructuredDecoder};
use crate::error::{Error, Result};
use crate::slot::{Slot, SlotHandle, SlotId};
use crate::term::VocabTerm;
use crate::value::{PropertyValue, StructuredValue};
use astreams_json_ld::{AliasMap, Iri};
use serde_json::{Map, Value as JsonValue};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// A non-functional property: zero or more values in insertion order.
#[derive(Debug)]
pub struct MultiProperty {
    term: VocabTerm,
    alias: String,
    slots: Vec<Slot>,
    next_slot: u64,
}

impl MultiProperty {
    /// Create an empty property for a vocabulary term
    pub fn new(term: VocabTerm) -> Self {
        MultiProperty {
            term,
            alias: String::new(),
            slots: Vec::new(),
            next_slot: 0,
        }
    }

    /// Decode a property from the document object holding its key.
    ///
    /// The key is the bare term name, or `alias:name` when `aliases`
    /// binds the term's namespace to an alias. A single value and an
    /// array of values are both accepted; each element decodes
    /// independently and tolerantly (unrecognized shapes are preserved
    /// opaque). An element that matches a structured shape but fails to
    /// decode aborts the remainder of this property's decode.
    ///
    /// An absent key yields an empty container, distinguishable from a
    /// decode failure by the `Result` channel.
    pub fn deserialize(
        term: VocabTerm,
        document: &Map<String, JsonValue>,
        aliases: &AliasMap,
        decoder: &dyn StructuredDecoder,
    ) -> Result<MultiProperty> {
        let alias = aliases
            .alias_for(term.namespace())
            .unwrap_or("")
            .to_string();
        let key = term.key_for(&alias);

        let mut property = MultiProperty {
            term,
            alias,
            slots: Vec::new(),
            next_slot: 0,
        };
        let Some(found) = document.get(&key) else {
            return Ok(property);
        };

        match found {
            JsonValue::Array(elements) => {
                for element in elements {
                    let value = decode_element(element, aliases, decoder)?;
                    property.append(value);
                }
            }
            scalar => {
                let value = decode_element(scalar, aliases, decoder)?;
                property.append(value);
            }
        }
        debug!(
            property = property.name(),
            len = property.len(),
            "decoded non-functional property"
        );
        Ok(property)
    }

    fn make_slot(&mut self, value: PropertyValue) -> Slot {
        let id = SlotId(self.next_slot);
        self.next_slot += 1;
        Slot::new(id, Some(value))
    }

    /// Append a value at the back. No existing position shifts.
    pub fn append(&mut self, value: PropertyValue) -> SlotHandle {
        let slot = self.make_slot(value);
        let handle = slot.handle();
        self.slots.push(slot);
        handle
    }

    /// Append a reference value at the back
    pub fn append_reference(&mut self, iri: Iri) -> SlotHandle {
        self.append(PropertyValue::Reference(iri))
    }

    /// Append a structured value at the back
    pub fn append_structured(&mut self, value: Arc<dyn StructuredValue>) -> SlotHandle {
        self.append(PropertyValue::Structured(value))
    }

    /// Append an opaque payload at the back
    pub fn append_opaque(&mut self, payload: JsonValue) -> SlotHandle {
        self.append(PropertyValue::Opaque(payload))
    }

    /// Prepend a value at the front. Every existing position shifts up
    /// one; handles stay valid and re-resolve to the shifted positions.
    pub fn prepend(&mut self, value: PropertyValue) -> SlotHandle {
        let slot = self.make_slot(value);
        let handle = slot.handle();
        self.slots.insert(0, slot);
        handle
    }

    /// Prepend a reference value at the front
    pub fn prepend_reference(&mut self, iri: Iri) -> SlotHandle {
        self.prepend(PropertyValue::Reference(iri))
    }

    /// Prepend a structured value at the front
    pub fn prepend_structured(&mut self, value: Arc<dyn StructuredValue>) -> SlotHandle {
        self.prepend(PropertyValue::Structured(value))
    }

    /// Prepend an opaque payload at the front
    pub fn prepend_opaque(&mut self, payload: JsonValue) -> SlotHandle {
        self.prepend(PropertyValue::Opaque(payload))
    }

    /// Replace the slot at an index with a freshly linked slot holding
    /// `value`, returning the new slot's handle. Handles retained for the
    /// old slot become detached.
    ///
    /// Panics if the index is out of bounds.
    pub fn replace(&mut self, index: usize, value: PropertyValue) -> SlotHandle {
        let slot = self.make_slot(value);
        let handle = slot.handle();
        self.slots[index] = slot;
        handle
    }

    /// Remove the slot at an index. Later slots shift down one position;
    /// their handles stay valid. Handles to the removed slot become
    /// detached.
    ///
    /// Panics if the index is out of bounds.
    pub fn remove(&mut self, index: usize) {
        self.slots.remove(index);
    }

    /// Exchange the slots at two indices. No handle is detached; both
    /// re-resolve to their new positions.
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.slots.swap(i, j);
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if there are no values
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot at an index. Panics if the index is out of bounds.
    pub fn at(&self, index: usize) -> &Slot {
        &self.slots[index]
    }

    /// Mutable access to the slot at an index. Panics if the index is
    /// out of bounds.
    pub fn at_mut(&mut self, index: usize) -> &mut Slot {
        &mut self.slots[index]
    }

    /// A handle to the slot at an index. Panics if out of bounds.
    pub fn handle_at(&self, index: usize) -> SlotHandle {
        self.slots[index].handle()
    }

    /// The current position of the slot a handle refers to.
    ///
    /// Fails with [`Error::DetachedSlot`] when the slot has been removed
    /// or replaced, never a stale position.
    pub fn position(&self, handle: SlotHandle) -> Result<usize> {
        self.slots
            .iter()
            .position(|slot| slot.id() == handle.id)
            .ok_or_else(|| Error::detached_slot(self.name()))
    }

    /// The handle one position after `handle`, or None at the back.
    /// Fails if `handle` is detached.
    pub fn next(&self, handle: SlotHandle) -> Result<Option<SlotHandle>> {
        let index = self.position(handle)?;
        Ok(self.slots.get(index + 1).map(Slot::handle))
    }

    /// The handle one position before `handle`, or None at the front.
    /// Fails if `handle` is detached.
    pub fn prev(&self, handle: SlotHandle) -> Result<Option<SlotHandle>> {
        let index = self.position(handle)?;
        if index == 0 {
            Ok(None)
        } else {
            Ok(Some(self.slots[index - 1].handle()))
        }
    }

    /// Iterate slots in sequence order
    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Numeric kind rank of the slot at an index. Panics if out of
    /// bounds.
    pub fn kind_rank(&self, index: usize) -> i32 {
        self.slots[index].kind_rank()
    }

    /// Whether the slot at `i` orders before the slot at `j` under the
    /// canonical order: rank first, per-kind comparison on a tie. For
    /// normalization sorting, not wire order. Panics if out of bounds.
    pub fn less(&self, i: usize, j: usize) -> bool {
        comparator::cmp_slots(&self.slots[i], &self.slots[j]) == Ordering::Less
    }

    /// Whether this container orders before another: element-wise in
    /// sequence order up to the shorter length, first differing pair
    /// decides, otherwise the shorter container is less. Lexicographic,
    /// not permutation-invariant.
    pub fn less_than(&self, other: &MultiProperty) -> bool {
        comparator::cmp_multi(self, other) == Ordering::Less
    }

    /// Encode to a JSON array, one element per slot in sequence order.
    /// A cleared slot encodes as null.
    pub fn serialize(&self) -> Result<JsonValue> {
        let mut elements = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            let element = match slot.value() {
                Some(value) => value.serialize()?,
                None => JsonValue::Null,
            };
            elements.push(element);
        }
        Ok(JsonValue::Array(elements))
    }

    /// The vocabulary name of this property
    pub fn name(&self) -> &str {
        self.term.name()
    }

    /// The vocabulary term of this property
    pub fn term(&self) -> &VocabTerm {
        &self.term
    }

    /// The namespace alias active for this property's key
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Bind the namespace alias used when writing this property's key
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
    }

    /// Namespace aliases this property and its structured values need
    /// declared. The container's own namespace binding is reported first;
    /// a child's alias never overwrites one already present for the same
    /// namespace.
    pub fn json_ld_context(&self) -> AliasMap {
        let mut aliases = AliasMap::new();
        aliases.insert(self.term.namespace(), self.alias.clone());
        for slot in &self.slots {
            if let Some(value) = slot.value() {
                aliases.merge(&value.json_ld_context());
            }
        }
        aliases
    }
}
