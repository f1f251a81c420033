//! # Vocabulary Property Generator
//!
//! The declarative meta-model and decision logic a code generator uses to
//! instantiate one property implementation per vocabulary term, uniformly
//! across hundreds of terms.
//!
//! The generator is a small compiler: the meta-model (kinds ×
//! multiplicity × nilability) is its input language, the decision table
//! in [`plan`] is its whole semantics, and a [`PropertyPlan`] (plain,
//! serializable data) is its output. Emitting source text from a plan is
//! an external backend's job.
//!
//! ## Example
//!
//! ```
//! use astreams_codegen::{Identifier, KindMeta, PropertyMeta};
//!
//! let meta = PropertyMeta {
//!     vocab_name: Identifier::new("relationship", "Relationship"),
//!     namespace: "https://www.w3.org/ns/activitystreams".to_string(),
//!     kinds: vec![KindMeta {
//!         name: Identifier::new("object", "Object"),
//!         concrete_type: "ObjectValue".to_string(),
//!         nilable: true,
//!         natural_language_map: false,
//!         serialize_fn: "serialize_object".to_string(),
//!         deserialize_fn: "deserialize_object".to_string(),
//!         less_fn: "less_object".to_string(),
//!     }],
//!     functional: false,
//! };
//!
//! let plan = meta.plan().unwrap();
//! assert_eq!(plan.struct_name, "RelationshipProperty");
//! assert!(plan.iterator_name.is_some());
//! ```

pub mod error;
pub mod meta;
pub mod plan;

pub use error::{Error, Result};
pub use meta::{Identifier, KindMeta, PropertyMeta};
pub use plan::{AccessorOp, AccessorPlan, MemberPlan, PresenceStrategy, PropertyPlan};
