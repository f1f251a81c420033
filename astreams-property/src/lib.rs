//! # ActivityStreams Property Runtime
//!
//! The value-holding and value-ordering engine underlying a typed
//! ActivityStreams object model. Every vocabulary property is functional
//! (at most one value) or non-functional (an ordered list); each value is
//! one of three kinds:
//! - a structured object of a declared vocabulary type,
//! - a reference to a remote resource (an absolute IRI),
//! - an opaque payload preserved verbatim for lossless round-trips.
//!
//! This crate provides:
//! - Core value types: [`PropertyValue`], [`Slot`], [`SlotHandle`]
//! - Containers: [`MultiProperty`] (non-functional), [`FunctionalProperty`]
//! - Canonical comparators for normalization ordering
//! - Tolerant JSON-LD decoding with opaque fallback and alias-aware keys
//!
//! ## Design Principles
//!
//! 1. **Wire order is sequence order**: insertion order is authoritative;
//!    normalization ordering is a separate, explicit comparator.
//! 2. **Owner-authoritative positions**: slots never cache their index;
//!    retained handles re-resolve against the container and fail loudly
//!    once their slot is gone.
//! 3. **Lossless by default**: unrecognized elements decode to opaque
//!    values rather than failing the document.
//!
//! ## Example
//!
//! ```
//! use astreams_property::{MultiProperty, NoStructured, VocabTerm};
//! use astreams_json_ld::AliasMap;
//! use serde_json::json;
//!
//! let document = json!({"relationship": ["https://ex/1", {"type": "Unknown42"}]});
//! let property = MultiProperty::deserialize(
//!     VocabTerm::new("relationship", "https://www.w3.org/ns/activitystreams"),
//!     document.as_object().unwrap(),
//!     &AliasMap::new(),
//!     &NoStructured,
//! ).unwrap();
//!
//! assert_eq!(property.len(), 2);
//! assert!(property.at(0).is_reference());
//! assert!(property.at(1).is_opaque());
//! ```

pub mod comparator;
pub mod container;
pub mod decode;
pub mod error;
pub mod functional;
pub mod slot;
pub mod term;
pub mod value;

pub use container::MultiProperty;
pub use decode::{NoStructured, StructuredDecoder};
pub use error::{Error, Result};
pub use functional::FunctionalProperty;
pub use slot::{Slot, SlotHandle, SlotId};
pub use term::VocabTerm;
pub use value::{
    PropertyValue, StructuredValue, RANK_OPAQUE, RANK_REFERENCE, RANK_STRUCTURED,
};
