//! Functional property containers: at most one value, no positional surface

use crate::comparator;
use crate::decode::{decode_element, StructuredDecoder};
use crate::error::Result;
use crate::term::VocabTerm;
use crate::value::{PropertyValue, StructuredValue, RANK_OPAQUE};
use astreams_json_ld::{AliasMap, Iri};
use serde_json::{Map, Value as JsonValue};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// A functional property: zero or one value.
#[derive(Debug)]
pub struct FunctionalProperty {
    term: VocabTerm,
    alias: String,
    value: Option<PropertyValue>,
}

impl FunctionalProperty {
    /// Create an empty property for a vocabulary term
    pub fn new(term: VocabTerm) -> Self {
        FunctionalProperty {
            term,
            alias: String::new(),
            value: None,
        }
    }

    /// Decode a property from the document object holding its key.
    ///
    /// The key is resolved the same way as for non-functional properties.
    /// The value must be a scalar; an array is not a recognized shape for
    /// a functional property and is preserved verbatim as opaque. An
    /// absent key yields an empty property.
    pub fn deserialize(
        term: VocabTerm,
        document: &Map<String, JsonValue>,
        aliases: &AliasMap,
        decoder: &dyn StructuredDecoder,
    ) -> Result<FunctionalProperty> {
        let alias = aliases
            .alias_for(term.namespace())
            .unwrap_or("")
            .to_string();
        let key = term.key_for(&alias);

        let mut property = FunctionalProperty {
            term,
            alias,
            value: None,
        };
        let Some(found) = document.get(&key) else {
            return Ok(property);
        };

        property.value = Some(match found {
            JsonValue::Array(_) => PropertyValue::Opaque(found.clone()),
            scalar => decode_element(scalar, aliases, decoder)?,
        });
        debug!(property = property.name(), "decoded functional property");
        Ok(property)
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
    pub fn get_reference(&self) -> Option<&Iri> {
        self.value.as_ref().and_then(PropertyValue::reference_iri)
    }

    /// The opaque payload. None unless `is_opaque`.
    pub fn get_opaque(&self) -> Option<&JsonValue> {
        self.value.as_ref().and_then(PropertyValue::opaque_payload)
    }

    /// The structured value. None unless `is_structured`.
    pub fn get_structured(&self) -> Option<&dyn StructuredValue> {
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

    /// Ensure no value is set
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Numeric kind rank of the active value; an empty property ranks
    /// with opaque payloads.
    pub fn kind_rank(&self) -> i32 {
        self.value
            .as_ref()
            .map_or(RANK_OPAQUE, PropertyValue::kind_rank)
    }

    /// Whether this property orders before another under the canonical
    /// order. For normalization, not wire order.
    pub fn less_than(&self, other: &FunctionalProperty) -> bool {
        comparator::cmp_functional(self, other) == Ordering::Less
    }

    /// Encode to a scalar JSON value, never an array. An empty property
    /// encodes as null; callers normally check `has_any` first and omit
    /// the key instead.
    pub fn serialize(&self) -> Result<JsonValue> {
        match &self.value {
            Some(value) => value.serialize(),
            None => Ok(JsonValue::Null),
        }
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

    /// Namespace aliases this property and its structured value need
    /// declared; the child's contribution never overwrites the
    /// container's own binding.
    pub fn json_ld_context(&self) -> AliasMap {
        let mut aliases = AliasMap::new();
        aliases.insert(self.term.namespace(), self.alias.clone());
        if let Some(value) = &self.value {
            aliases.merge(&value.json_ld_context());
        }
        aliases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::NoStructured;
    use serde_json::json;

    fn term() -> VocabTerm {
        VocabTerm::new("publicKey", "https://w3id.org/security/v1")
    }

    #[test]
    fn test_set_reference_clears_other_kinds() {
        let mut property = FunctionalProperty::new(term());
        property.set_opaque(json!({"unknown": true}));
        property.set_reference(Iri::parse("https://ex/key/1").unwrap());

        assert!(property.is_reference());
        assert!(!property.is_opaque());
        assert!(!property.is_structured());
        assert!(property.has_any());
    }

    #[test]
    fn test_scalar_serialize() {
        let mut property = FunctionalProperty::new(term());
        property.set_reference(Iri::parse("https://ex/key/1").unwrap());
        assert_eq!(property.serialize().unwrap(), json!("https://ex/key/1"));

        property.clear();
        assert_eq!(property.serialize().unwrap(), JsonValue::Null);
    }

    #[test]
    fn test_deserialize_scalar_and_absent() {
        let document = json!({"publicKey": "https://ex/key/1"});
        let property = FunctionalProperty::deserialize(
            term(),
            document.as_object().unwrap(),
            &AliasMap::new(),
            &NoStructured,
        )
        .unwrap();
        assert_eq!(
            property.get_reference().unwrap().as_str(),
            "https://ex/key/1"
        );

        let absent = json!({});
        let property = FunctionalProperty::deserialize(
            term(),
            absent.as_object().unwrap(),
            &AliasMap::new(),
            &NoStructured,
        )
        .unwrap();
        assert!(!property.has_any());
    }

    #[test]
    fn test_deserialize_array_stays_opaque() {
        let document = json!({"publicKey": ["https://ex/key/1", "https://ex/key/2"]});
        let property = FunctionalProperty::deserialize(
            term(),
            document.as_object().unwrap(),
            &AliasMap::new(),
            &NoStructured,
        )
        .unwrap();

        assert!(property.is_opaque());
        assert_eq!(
            property.get_opaque().unwrap(),
            &json!(["https://ex/key/1", "https://ex/key/2"])
        );
    }
}
