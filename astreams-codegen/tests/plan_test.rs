//! Decision-table behavior over realistic vocabulary properties

use astreams_codegen::{
    AccessorOp, Identifier, KindMeta, PresenceStrategy, PropertyMeta, PropertyPlan,
};

fn object_kind() -> KindMeta {
    KindMeta {
        name: Identifier::new("object", "Object"),
        concrete_type: "ObjectValue".to_string(),
        nilable: true,
        natural_language_map: false,
        serialize_fn: "serialize_object".to_string(),
        deserialize_fn: "deserialize_object".to_string(),
        less_fn: "less_object".to_string(),
    }
}

fn string_kind(lower: &str, camel: &str, natural_language_map: bool) -> KindMeta {
    KindMeta {
        name: Identifier::new(lower, camel),
        concrete_type: "String".to_string(),
        nilable: false,
        natural_language_map,
        serialize_fn: format!("serialize_{}", lower),
        deserialize_fn: format!("deserialize_{}", lower),
        less_fn: format!("less_{}", lower),
    }
}

fn relationship() -> PropertyMeta {
    PropertyMeta {
        vocab_name: Identifier::new("relationship", "Relationship"),
        namespace: "https://www.w3.org/ns/activitystreams".to_string(),
        kinds: vec![object_kind()],
        functional: false,
    }
}

fn public_key() -> PropertyMeta {
    PropertyMeta {
        vocab_name: Identifier::new("publicKey", "PublicKey"),
        namespace: "https://w3id.org/security/v1".to_string(),
        kinds: vec![KindMeta {
            name: Identifier::new("publicKey", "PublicKey"),
            concrete_type: "PublicKeyValue".to_string(),
            nilable: true,
            natural_language_map: false,
            serialize_fn: "serialize_public_key".to_string(),
            deserialize_fn: "deserialize_public_key".to_string(),
            less_fn: "less_public_key".to_string(),
        }],
        functional: true,
    }
}

fn methods(plan: &PropertyPlan, op: AccessorOp) -> Vec<&str> {
    plan.accessors
        .iter()
        .filter(|a| a.op == op)
        .map(|a| a.method_name.as_str())
        .collect()
}

#[test]
fn test_non_functional_sequence_surface() {
    let plan = relationship().plan().unwrap();

    assert_eq!(plan.struct_name, "RelationshipProperty");
    assert_eq!(
        plan.iterator_name.as_deref(),
        Some("RelationshipPropertyIterator")
    );
    assert_eq!(plan.deserialize_fn_name, "deserialize_relationship_property");
    assert_eq!(methods(&plan, AccessorOp::Append), ["append_object", "append_iri"]);
    assert_eq!(
        methods(&plan, AccessorOp::Prepend),
        ["prepend_object", "prepend_iri"]
    );
}

#[test]
fn test_functional_scalar_surface() {
    let plan = public_key().plan().unwrap();

    assert_eq!(plan.struct_name, "PublicKeyProperty");
    assert!(plan.functional);
    assert!(plan.iterator_name.is_none());
    assert!(methods(&plan, AccessorOp::Append).is_empty());
    assert!(methods(&plan, AccessorOp::Prepend).is_empty());
    assert!(methods(&plan, AccessorOp::ReplaceAt).is_empty());

    // Single kind: unqualified get/set/is next to the IRI-qualified ones
    assert_eq!(methods(&plan, AccessorOp::Get), ["get", "get_iri"]);
    assert_eq!(methods(&plan, AccessorOp::Set), ["set", "set_iri"]);
    assert_eq!(methods(&plan, AccessorOp::Is), ["is", "is_iri"]);
}

#[test]
fn test_natural_language_map_carried_through() {
    let mut meta = relationship();
    meta.kinds.push(string_kind("name", "Name", true));
    let plan = meta.plan().unwrap();

    let name = plan.members.iter().find(|m| m.kind == "Name").unwrap();
    assert!(name.natural_language_map);
    assert_eq!(name.presence, PresenceStrategy::Flag);
    assert_eq!(name.presence_member.as_deref(), Some("has_name_member"));

    // Two kinds: accessors become kind-qualified
    assert_eq!(
        methods(&plan, AccessorOp::Get),
        ["get_object", "get_name", "get_iri"]
    );
}

#[test]
fn test_plan_serializes_for_backends() {
    let plan = relationship().plan().unwrap();
    let encoded = serde_json::to_string(&plan).unwrap();
    let decoded: PropertyPlan = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, plan);
}

#[test]
fn test_duplicate_kind_fails_planning() {
    let mut meta = relationship();
    meta.kinds.push(object_kind());
    assert!(meta.plan().is_err());
}
