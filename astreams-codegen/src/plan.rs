//! Generator decisions: meta-model in, accessor plan out
//!
//! Hundreds of vocabulary properties stay consistent because every one is
//! derived from the same decision table. The output is plain data: an
//! emission backend turns a [`PropertyPlan`] into source text in whatever
//! language it targets; nothing here writes code.
//!
//! Decision table:
//!
//! | Axis | Decision |
//! |------|----------|
//! | functional | scalar surface; no iterator type, no positional accessors |
//! | non-functional | full sequence surface; get/set/is live on the iterator |
//! | exactly one kind | unqualified `get`/`set`/`is` |
//! | several kinds | kind-qualified `get_<kind>` etc. |
//! | nilable kind | presence by null |
//! | value-like kind | explicit `has_<kind>_member` presence flag |
//!
//! Reference accessors (`get_iri`, `set_iri`, `is_iri`, and the sequence
//! variants) are always emitted and always IRI-qualified.

use crate::error::Result;
use crate::meta::PropertyMeta;
use serde::{Deserialize, Serialize};

/// How a generated member tracks whether it is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStrategy {
    /// Absence is the null value
    Null,
    /// A separate boolean flag accompanies the member
    Flag,
}

/// The operation an accessor performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorOp {
    Get,
    Set,
    Is,
    Append,
    Prepend,
    /// Indexed replace: detaches the old slot, installs a new one
    ReplaceAt,
}

/// One accessor the backend must emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorPlan {
    pub op: AccessorOp,
    /// Kind camel name; None for the built-in reference accessors
    pub kind: Option<String>,
    pub method_name: String,
}

/// One stored member the backend must emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPlan {
    /// Kind camel name
    pub kind: String,
    pub member_name: String,
    pub concrete_type: String,
    pub presence: PresenceStrategy,
    /// The presence-flag member, for `PresenceStrategy::Flag` kinds
    pub presence_member: Option<String>,
    /// Whether the backend pairs this member with a per-language map
    pub natural_language_map: bool,
}

/// The full decision set for one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPlan {
    pub property_name: String,
    pub namespace: String,
    pub struct_name: String,
    /// None for functional properties
    pub iterator_name: Option<String>,
    pub deserialize_fn_name: String,
    pub functional: bool,
    pub members: Vec<MemberPlan>,
    pub accessors: Vec<AccessorPlan>,
}

impl PropertyMeta {
    /// Derive the full accessor plan for this property.
    ///
    /// Fails on meta-model contract violations (empty identifiers,
    /// duplicate kinds). Generation specializes the engine contract,
    /// never relaxes it: every plan satisfies the slot and container
    /// semantics of the runtime.
    pub fn plan(&self) -> Result<PropertyPlan> {
        self.validate()?;

        let unqualified = self.kinds.len() == 1;
        let mut members = Vec::with_capacity(self.kinds.len());
        let mut accessors = Vec::new();

        for kind in &self.kinds {
            let snake = kind.name.snake();
            let camel = kind.name.camel.clone();

            let presence = if kind.nilable {
                PresenceStrategy::Null
            } else {
                PresenceStrategy::Flag
            };
            members.push(MemberPlan {
                kind: camel.clone(),
                member_name: format!("{}_member", snake),
                concrete_type: kind.concrete_type.clone(),
                presence,
                presence_member: match presence {
                    PresenceStrategy::Flag => Some(format!("has_{}_member", snake)),
                    PresenceStrategy::Null => None,
                },
                natural_language_map: kind.natural_language_map,
            });

            let suffix = |base: &str| {
                if unqualified {
                    base.to_string()
                } else {
                    format!("{}_{}", base, snake)
                }
            };
            accessors.push(accessor(AccessorOp::Get, Some(camel.as_str()), suffix("get")));
            accessors.push(accessor(AccessorOp::Set, Some(camel.as_str()), suffix("set")));
            accessors.push(accessor(AccessorOp::Is, Some(camel.as_str()), suffix("is")));

            if !self.functional {
                // Append/prepend are always kind-qualified; the indexed
                // replace follows the same naming rule as the plain set.
                accessors.push(accessor(
                    AccessorOp::Append,
                    Some(camel.as_str()),
                    format!("append_{}", snake),
                ));
                accessors.push(accessor(
                    AccessorOp::Prepend,
                    Some(camel.as_str()),
                    format!("prepend_{}", snake),
                ));
                accessors.push(accessor(AccessorOp::ReplaceAt, Some(camel.as_str()), suffix("set")));
            }
        }

        // Reference accessors are built in and always IRI-qualified
        accessors.push(accessor(AccessorOp::Get, None, "get_iri".to_string()));
        accessors.push(accessor(AccessorOp::Set, None, "set_iri".to_string()));
        accessors.push(accessor(AccessorOp::Is, None, "is_iri".to_string()));
        if !self.functional {
            accessors.push(accessor(AccessorOp::Append, None, "append_iri".to_string()));
            accessors.push(accessor(AccessorOp::Prepend, None, "prepend_iri".to_string()));
            accessors.push(accessor(AccessorOp::ReplaceAt, None, "set_iri".to_string()));
        }

        Ok(PropertyPlan {
            property_name: self.property_name().to_string(),
            namespace: self.namespace.clone(),
            struct_name: self.struct_name(),
            iterator_name: self.iterator_name(),
            deserialize_fn_name: self.deserialize_fn_name(),
            functional: self.functional,
            members,
            accessors,
        })
    }
}

fn accessor(op: AccessorOp, kind: Option<&str>, method_name: String) -> AccessorPlan {
    AccessorPlan {
        op,
        kind: kind.map(str::to_string),
        method_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{Identifier, KindMeta};

    fn kind(lower: &str, camel: &str, nilable: bool) -> KindMeta {
        KindMeta {
            name: Identifier::new(lower, camel),
            concrete_type: format!("{}Value", camel),
            nilable,
            natural_language_map: false,
            serialize_fn: format!("serialize_{}", lower),
            deserialize_fn: format!("deserialize_{}", lower),
            less_fn: format!("less_{}", lower),
        }
    }

    fn meta(kinds: Vec<KindMeta>, functional: bool) -> PropertyMeta {
        PropertyMeta {
            vocab_name: Identifier::new("relationship", "Relationship"),
            namespace: "https://www.w3.org/ns/activitystreams".to_string(),
            kinds,
            functional,
        }
    }

    fn method(plan: &PropertyPlan, op: AccessorOp, kind: Option<&str>) -> Option<String> {
        plan.accessors
            .iter()
            .find(|a| a.op == op && a.kind.as_deref() == kind)
            .map(|a| a.method_name.clone())
    }

    #[test]
    fn test_single_kind_is_unqualified() {
        let plan = meta(vec![kind("object", "Object", true)], false)
            .plan()
            .unwrap();

        assert_eq!(method(&plan, AccessorOp::Get, Some("Object")).unwrap(), "get");
        assert_eq!(method(&plan, AccessorOp::Set, Some("Object")).unwrap(), "set");
        assert_eq!(method(&plan, AccessorOp::Is, Some("Object")).unwrap(), "is");
    }

    #[test]
    fn test_several_kinds_are_qualified() {
        let plan = meta(
            vec![kind("object", "Object", true), kind("link", "Link", true)],
            false,
        )
        .plan()
        .unwrap();

        assert_eq!(
            method(&plan, AccessorOp::Get, Some("Object")).unwrap(),
            "get_object"
        );
        assert_eq!(
            method(&plan, AccessorOp::Get, Some("Link")).unwrap(),
            "get_link"
        );
    }

    #[test]
    fn test_reference_accessors_always_qualified() {
        let plan = meta(vec![kind("object", "Object", true)], false)
            .plan()
            .unwrap();
        assert_eq!(method(&plan, AccessorOp::Get, None).unwrap(), "get_iri");
        assert_eq!(method(&plan, AccessorOp::Append, None).unwrap(), "append_iri");
    }

    #[test]
    fn test_functional_has_no_sequence_surface() {
        let plan = meta(vec![kind("publicKey", "PublicKey", true)], true)
            .plan()
            .unwrap();

        assert!(plan.iterator_name.is_none());
        assert!(plan
            .accessors
            .iter()
            .all(|a| !matches!(a.op, AccessorOp::Append | AccessorOp::Prepend | AccessorOp::ReplaceAt)));
    }

    #[test]
    fn test_presence_strategy_per_kind() {
        let plan = meta(
            vec![kind("object", "Object", true), kind("name", "Name", false)],
            false,
        )
        .plan()
        .unwrap();

        let object = &plan.members[0];
        assert_eq!(object.presence, PresenceStrategy::Null);
        assert_eq!(object.presence_member, None);

        let name = &plan.members[1];
        assert_eq!(name.presence, PresenceStrategy::Flag);
        assert_eq!(name.presence_member.as_deref(), Some("has_name_member"));
    }

    #[test]
    fn test_member_names() {
        let plan = meta(vec![kind("publicKey", "PublicKey", true)], true)
            .plan()
            .unwrap();
        assert_eq!(plan.members[0].member_name, "public_key_member");
    }
}
