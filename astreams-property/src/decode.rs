//! Tolerant per-element decoding dispatch
//!
//! Dispatch order: strings that parse as absolute IRIs become references;
//! JSON objects go to the property's registered structured decoder;
//! everything else, including every object the decoder does not recognize,
//! is preserved verbatim as an opaque value. One foreign element never
//! fails the document; only a recognized shape that actively errors does.

use crate::error::Result;
use crate::value::{PropertyValue, StructuredValue};
use astreams_json_ld::{AliasMap, Iri};
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;
use tracing::trace;

/// Decodes JSON objects into the structured kinds a property permits.
///
/// One registered decoder serves all of a property's structured kinds:
/// - `Ok(Some(value))`: the object decoded as a permitted kind
/// - `Ok(None)`: the object matches no recognized shape; the element
///   falls back to opaque and decoding continues
/// - `Err(..)`: the object matched a recognized shape but failed to
///   decode; propagated, aborting the remainder of the property's decode
pub trait StructuredDecoder {
    fn decode(
        &self,
        object: &Map<String, JsonValue>,
        aliases: &AliasMap,
    ) -> Result<Option<Arc<dyn StructuredValue>>>;
}

/// Decoder for properties that permit no structured kinds; every JSON
/// object is preserved as opaque.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStructured;

impl StructuredDecoder for NoStructured {
    fn decode(
        &self,
        _object: &Map<String, JsonValue>,
        _aliases: &AliasMap,
    ) -> Result<Option<Arc<dyn StructuredValue>>> {
        Ok(None)
    }
}

/// Decode one element of a property's value.
pub(crate) fn decode_element(
    element: &JsonValue,
    aliases: &AliasMap,
    decoder: &dyn StructuredDecoder,
) -> Result<PropertyValue> {
    match element {
        JsonValue::String(s) => match Iri::parse(s) {
            Ok(iri) => Ok(PropertyValue::Reference(iri)),
            Err(_) => {
                trace!(value = %s, "string is not an absolute IRI, keeping opaque");
                Ok(PropertyValue::Opaque(element.clone()))
            }
        },
        JsonValue::Object(object) => match decoder.decode(object, aliases)? {
            Some(value) => Ok(PropertyValue::Structured(value)),
            None => {
                trace!("object matched no structured kind, keeping opaque");
                Ok(PropertyValue::Opaque(element.clone()))
            }
        },
        other => Ok(PropertyValue::Opaque(other.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absolute_string_becomes_reference() {
        let value = decode_element(&json!("https://ex/1"), &AliasMap::new(), &NoStructured).unwrap();
        assert_eq!(value.reference_iri().unwrap().as_str(), "https://ex/1");
    }

    #[test]
    fn test_plain_string_stays_opaque() {
        let value = decode_element(&json!("a plain name"), &AliasMap::new(), &NoStructured).unwrap();
        assert_eq!(value.opaque_payload().unwrap(), &json!("a plain name"));
    }

    #[test]
    fn test_unrecognized_object_stays_opaque() {
        let payload = json!({"type": "Unknown42"});
        let value = decode_element(&payload, &AliasMap::new(), &NoStructured).unwrap();
        assert_eq!(value.opaque_payload().unwrap(), &payload);
    }

    #[test]
    fn test_scalars_stay_opaque() {
        for payload in [json!(17), json!(true), json!(null), json!([1, 2])] {
            let value = decode_element(&payload, &AliasMap::new(), &NoStructured).unwrap();
            assert_eq!(value.opaque_payload().unwrap(), &payload);
        }
    }
}
