//! Minimal JSON-LD plumbing for ActivityStreams property containers
//!
//! This library provides the two pieces of JSON-LD handling the property
//! runtime needs:
//! - Absolute-IRI validation and the [`Iri`] reference type
//! - Namespace alias bookkeeping ([`AliasMap`]) for `@context` parsing,
//!   contribution merging, and re-emission
//!
//! # Example
//!
//! ```
//! use astreams_json_ld::{AliasMap, Iri};
//! use serde_json::json;
//!
//! // Parse a document @context into namespace -> alias bindings
//! let aliases = AliasMap::from_context(&json!([
//!     "https://www.w3.org/ns/activitystreams",
//!     {"sec": "https://w3id.org/security/v1"}
//! ])).unwrap();
//! assert_eq!(aliases.alias_for("https://w3id.org/security/v1"), Some("sec"));
//!
//! // References are validated absolute IRIs
//! let iri = Iri::parse("https://example.com/actors/1").unwrap();
//! assert_eq!(iri.as_str(), "https://example.com/actors/1");
//! ```

pub mod alias;
pub mod error;
pub mod iri;

pub use alias::AliasMap;
pub use error::{JsonLdError, Result};
pub use iri::Iri;

use serde_json::Value as JsonValue;

/// Parse a JSON-LD `@context` value into an [`AliasMap`].
///
/// Convenience for [`AliasMap::from_context`].
pub fn parse_aliases(context: &JsonValue) -> Result<AliasMap> {
    AliasMap::from_context(context)
}
