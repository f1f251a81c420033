//! Property value kinds: reference, opaque payload, structured object
//!
//! A property value takes exactly one of three shapes. The closed enum
//! makes the mutual-exclusivity invariant structural: writing one kind
//! replaces whatever was active before.

use crate::error::Result;
use astreams_json_ld::{AliasMap, Iri};
use serde_json::Value as JsonValue;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Kind rank of a reference. References order before everything else.
pub const RANK_REFERENCE: i32 = -2;

/// Kind rank of an opaque payload. Unoccupied slots share this rank:
/// unset and undecodable are indistinguishable to the canonical order.
pub const RANK_OPAQUE: i32 = -1;

/// Kind rank of a structured value. Structured values order last.
pub const RANK_STRUCTURED: i32 = 0;

/// A fully decoded object of a declared vocabulary type.
///
/// Structured values are owned by the embedding application and shared
/// into slots. The engine needs three things from them: the namespace
/// aliases they require declared, their encoder, and a total order among
/// themselves for normalization.
pub trait StructuredValue {
    /// The vocabulary type name (e.g. "Object", "PublicKey").
    fn type_name(&self) -> &str;

    /// Namespace aliases this value, recursively, needs declared.
    fn json_ld_context(&self) -> AliasMap;

    /// Encode this value to a JSON-LD tree.
    fn serialize(&self) -> Result<JsonValue>;

    /// Domain total order among structured values of the permitted kinds.
    fn cmp_structured(&self, other: &dyn StructuredValue) -> Ordering;
}

/// One value a property may hold.
#[derive(Clone)]
pub enum PropertyValue {
    /// An absolute identifier standing in for a value without embedding it
    Reference(Iri),

    /// An unrecognized payload preserved verbatim for lossless round-trips
    Opaque(JsonValue),

    /// A shared handle to a decoded vocabulary object
    Structured(Arc<dyn StructuredValue>),
}

impl PropertyValue {
    /// Create a reference value
    pub fn reference(iri: Iri) -> Self {
        PropertyValue::Reference(iri)
    }

    /// Create an opaque value preserving the payload verbatim
    pub fn opaque(payload: JsonValue) -> Self {
        PropertyValue::Opaque(payload)
    }

    /// Create a structured value from a shared vocabulary object
    pub fn structured(value: Arc<dyn StructuredValue>) -> Self {
        PropertyValue::Structured(value)
    }

    /// Numeric kind rank: Reference = −2, Opaque = −1, Structured = 0.
    ///
    /// Containers compare ranks first and fall through to the per-kind
    /// comparator only on a tie.
    pub fn kind_rank(&self) -> i32 {
        match self {
            PropertyValue::Reference(_) => RANK_REFERENCE,
            PropertyValue::Opaque(_) => RANK_OPAQUE,
            PropertyValue::Structured(_) => RANK_STRUCTURED,
        }
    }

    /// Check if this is a reference
    pub fn is_reference(&self) -> bool {
        matches!(self, PropertyValue::Reference(_))
    }

    /// Check if this is an opaque payload
    pub fn is_opaque(&self) -> bool {
        matches!(self, PropertyValue::Opaque(_))
    }

    /// Check if this is a structured value
    pub fn is_structured(&self) -> bool {
        matches!(self, PropertyValue::Structured(_))
    }

    /// Try to get the reference IRI
    pub fn reference_iri(&self) -> Option<&Iri> {
        match self {
            PropertyValue::Reference(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get the opaque payload
    pub fn opaque_payload(&self) -> Option<&JsonValue> {
        match self {
            PropertyValue::Opaque(payload) => Some(payload),
            _ => None,
        }
    }

    /// Try to get the structured value
    pub fn structured_value(&self) -> Option<&dyn StructuredValue> {
        match self {
            PropertyValue::Structured(value) => Some(value.as_ref()),
            _ => None,
        }
    }

    /// Encode this value: reference → textual form, opaque → verbatim,
    /// structured → the value's own encoder.
    pub fn serialize(&self) -> Result<JsonValue> {
        match self {
            PropertyValue::Reference(iri) => Ok(JsonValue::String(iri.as_str().to_string())),
            PropertyValue::Opaque(payload) => Ok(payload.clone()),
            PropertyValue::Structured(value) => value.serialize(),
        }
    }

    /// Namespace aliases this value needs declared. Only structured
    /// values contribute; references and opaque payloads need none.
    pub fn json_ld_context(&self) -> AliasMap {
        match self {
            PropertyValue::Structured(value) => value.json_ld_context(),
            _ => AliasMap::new(),
        }
    }
}

impl fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Reference(iri) => f.debug_tuple("Reference").field(iri).finish(),
            PropertyValue::Opaque(payload) => f.debug_tuple("Opaque").field(payload).finish(),
            PropertyValue::Structured(value) => f
                .debug_tuple("Structured")
                .field(&value.type_name())
                .finish(),
        }
    }
}
