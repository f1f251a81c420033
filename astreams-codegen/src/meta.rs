//! Declarative description of one vocabulary property
//!
//! The meta-model is the generator's whole input: which value kinds a
//! property permits, whether it is functional, and the hook names an
//! emission backend binds for each kind's encode/decode/ordering. The
//! reference kind (an absolute IRI) is implicit, since every property may
//! hold one, as is the opaque fallback; `kinds` lists only the structured and
//! literal kinds the vocabulary declares.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How a name appears in documentation versus generated identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    /// Name as written in the vocabulary ("publicKey")
    pub lower: String,
    /// Name as written in type identifiers ("PublicKey")
    pub camel: String,
}

impl Identifier {
    pub fn new(lower: impl Into<String>, camel: impl Into<String>) -> Self {
        Identifier {
            lower: lower.into(),
            camel: camel.into(),
        }
    }

    /// The snake_case spelling used in generated method and member names
    pub fn snake(&self) -> String {
        let mut out = String::with_capacity(self.camel.len() + 4);
        for (i, ch) in self.camel.chars().enumerate() {
            if ch.is_ascii_uppercase() {
                if i > 0 {
                    out.push('_');
                }
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    fn is_empty(&self) -> bool {
        self.lower.is_empty() || self.camel.is_empty()
    }
}

/// One permitted value kind of a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindMeta {
    pub name: Identifier,

    /// The concrete value type the backend binds this kind to
    pub concrete_type: String,

    /// Reference-like kinds are nilable: absence is the null value.
    /// Value-like kinds need an explicit presence flag, because a default
    /// value is indistinguishable from absence.
    pub nilable: bool,

    /// Whether this kind carries per-language alternatives alongside the
    /// plain value
    pub natural_language_map: bool,

    /// Hook names the backend binds for this kind
    pub serialize_fn: String,
    pub deserialize_fn: String,
    pub less_fn: String,
}

/// The declarative description of one vocabulary property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyMeta {
    pub vocab_name: Identifier,

    /// Namespace IRI whose alias governs the property's wire key
    pub namespace: String,

    /// Permitted kinds beyond the implicit reference and opaque fallback
    pub kinds: Vec<KindMeta>,

    /// Functional properties hold at most one value
    pub functional: bool,
}

impl PropertyMeta {
    /// The property name as defined in the vocabulary
    pub fn property_name(&self) -> &str {
        &self.vocab_name.lower
    }

    /// The generated container type name
    pub fn struct_name(&self) -> String {
        format!("{}Property", self.vocab_name.camel)
    }

    /// The generated slot/iterator type name; functional properties have
    /// no positional surface and no iterator type.
    pub fn iterator_name(&self) -> Option<String> {
        if self.functional {
            None
        } else {
            Some(format!("{}PropertyIterator", self.vocab_name.camel))
        }
    }

    /// The generated entry-point name for decoding this property
    pub fn deserialize_fn_name(&self) -> String {
        format!("deserialize_{}_property", self.vocab_name.snake())
    }

    /// The presence-flag member name for the kind at `index`.
    ///
    /// Fails for nilable kinds: they track presence by null and carry no
    /// flag. Panics if `index` is out of range.
    pub fn has_member_name(&self, index: usize) -> Result<String> {
        let kind = &self.kinds[index];
        if kind.nilable {
            return Err(Error::PresenceForNilable {
                property: self.property_name().to_string(),
                kind: kind.name.camel.clone(),
            });
        }
        Ok(format!("has_{}_member", kind.name.snake()))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.vocab_name.is_empty() {
            return Err(Error::EmptyIdentifier {
                property: self.vocab_name.lower.clone(),
            });
        }
        for (i, kind) in self.kinds.iter().enumerate() {
            if kind.name.is_empty() {
                return Err(Error::EmptyIdentifier {
                    property: self.property_name().to_string(),
                });
            }
            if self.kinds[..i].iter().any(|k| k.name.camel == kind.name.camel) {
                return Err(Error::DuplicateKind {
                    property: self.property_name().to_string(),
                    kind: kind.name.camel.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object_kind() -> KindMeta {
        KindMeta {
            name: Identifier::new("object", "Object"),
            concrete_type: "Arc<dyn StructuredValue>".to_string(),
            nilable: true,
            natural_language_map: false,
            serialize_fn: "serialize_object".to_string(),
            deserialize_fn: "deserialize_object".to_string(),
            less_fn: "less_object".to_string(),
        }
    }

    #[test]
    fn test_snake_spelling() {
        assert_eq!(Identifier::new("publicKey", "PublicKey").snake(), "public_key");
        assert_eq!(Identifier::new("object", "Object").snake(), "object");
    }

    #[test]
    fn test_names() {
        let meta = PropertyMeta {
            vocab_name: Identifier::new("publicKey", "PublicKey"),
            namespace: "https://w3id.org/security/v1".to_string(),
            kinds: vec![object_kind()],
            functional: true,
        };

        assert_eq!(meta.property_name(), "publicKey");
        assert_eq!(meta.struct_name(), "PublicKeyProperty");
        assert_eq!(meta.iterator_name(), None);
        assert_eq!(meta.deserialize_fn_name(), "deserialize_public_key_property");
    }

    #[test]
    fn test_iterator_name_for_non_functional() {
        let meta = PropertyMeta {
            vocab_name: Identifier::new("relationship", "Relationship"),
            namespace: "https://www.w3.org/ns/activitystreams".to_string(),
            kinds: vec![object_kind()],
            functional: false,
        };
        assert_eq!(
            meta.iterator_name(),
            Some("RelationshipPropertyIterator".to_string())
        );
    }

    #[test]
    fn test_has_member_name_rejects_nilable() {
        let meta = PropertyMeta {
            vocab_name: Identifier::new("relationship", "Relationship"),
            namespace: "https://www.w3.org/ns/activitystreams".to_string(),
            kinds: vec![object_kind()],
            functional: false,
        };
        assert!(matches!(
            meta.has_member_name(0),
            Err(Error::PresenceForNilable { .. })
        ));
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let meta = PropertyMeta {
            vocab_name: Identifier::new("relationship", "Relationship"),
            namespace: "https://www.w3.org/ns/activitystreams".to_string(),
            kinds: vec![object_kind(), object_kind()],
            functional: false,
        };
        assert!(matches!(
            meta.validate(),
            Err(Error::DuplicateKind { .. })
        ));
    }
}
