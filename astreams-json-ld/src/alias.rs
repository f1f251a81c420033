//! Namespace alias bookkeeping for `@context` round-tripping.
//!
//! A document's `@context` binds short prefixes ("aliases") to namespace
//! IRIs. Property containers and the structured values nested inside them
//! each contribute the namespaces they need declared; contributions merge
//! upward without ever overwriting an alias the caller already supplied.

use crate::error::{JsonLdError, Result};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;

/// Maps namespace IRIs to the alias a document declares for them.
///
/// An empty alias means the namespace is declared bare (its terms appear
/// unprefixed), as in `"@context": "https://www.w3.org/ns/activitystreams"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: BTreeMap<String, String>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an alias map from a JSON-LD `@context` value.
    ///
    /// Accepts the three context shapes: a bare namespace string, an
    /// object of `alias: namespace` pairs, or an array of either. Array
    /// entries are processed in document order, so a later binding for
    /// the same namespace wins (this is parsing, not contribution
    /// merging). `@`-keyword entries and term definitions whose value is
    /// not a namespace are skipped.
    pub fn from_context(context: &JsonValue) -> Result<AliasMap> {
        let mut aliases = AliasMap::new();
        aliases.extend_from_context(context)?;
        Ok(aliases)
    }

    fn extend_from_context(&mut self, context: &JsonValue) -> Result<()> {
        match context {
            JsonValue::Null => Ok(()),

            JsonValue::String(namespace) => {
                self.entries.insert(namespace.clone(), String::new());
                Ok(())
            }

            JsonValue::Object(map) => {
                // Unwrap a document passed whole rather than its @context.
                if let Some(inner) = map.get("@context") {
                    return self.extend_from_context(inner);
                }
                for (alias, entry) in map {
                    if alias.starts_with('@') {
                        continue;
                    }
                    if let Some(namespace) = entry_namespace(entry) {
                        self.entries.insert(namespace.to_string(), alias.clone());
                    }
                }
                Ok(())
            }

            JsonValue::Array(parts) => {
                for part in parts {
                    self.extend_from_context(part)?;
                }
                Ok(())
            }

            other => Err(JsonLdError::InvalidContext {
                message: format!("unsupported @context value: {}", other),
            }),
        }
    }

    /// The alias bound to a namespace, if any. An empty string means the
    /// namespace is declared bare.
    pub fn alias_for(&self, namespace: &str) -> Option<&str> {
        self.entries.get(namespace).map(String::as_str)
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.entries.contains_key(namespace)
    }

    /// Bind an alias to a namespace, replacing any existing binding.
    pub fn insert(&mut self, namespace: impl Into<String>, alias: impl Into<String>) {
        self.entries.insert(namespace.into(), alias.into());
    }

    /// Merge another map's entries as a contribution: a namespace already
    /// present keeps its alias. Alias assignment is fixed at generation
    /// time, so the first writer wins.
    pub fn merge(&mut self, other: &AliasMap) {
        for (namespace, alias) in &other.entries {
            self.entries
                .entry(namespace.clone())
                .or_insert_with(|| alias.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate (namespace, alias) pairs in namespace order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, a)| (n.as_str(), a.as_str()))
    }

    /// Re-emit this map as a JSON-LD `@context` value.
    ///
    /// Bare namespaces emit as strings; aliased namespaces collect into a
    /// single `alias: namespace` object. A lone bare namespace emits as a
    /// bare string, otherwise everything wraps in an array. Output order
    /// is deterministic (namespace order for strings, alias order within
    /// the object).
    pub fn to_context(&self) -> JsonValue {
        let mut bare = Vec::new();
        let mut aliased = Map::new();
        for (namespace, alias) in &self.entries {
            if alias.is_empty() {
                bare.push(JsonValue::String(namespace.clone()));
            } else {
                aliased.insert(alias.clone(), JsonValue::String(namespace.clone()));
            }
        }

        match (bare.len(), aliased.len()) {
            (0, 0) => JsonValue::Null,
            (1, 0) => bare.into_iter().next().unwrap(),
            (0, _) => JsonValue::Object(aliased),
            _ => {
                let mut parts = bare;
                if !aliased.is_empty() {
                    parts.push(JsonValue::Object(aliased));
                }
                JsonValue::Array(parts)
            }
        }
    }
}

/// The namespace IRI named by one `@context` term entry, if the entry
/// binds one: either a string value or an expanded `{"@id": ...}` object.
fn entry_namespace(entry: &JsonValue) -> Option<&str> {
    match entry {
        JsonValue::String(s) => Some(s),
        JsonValue::Object(map) => map.get("@id").and_then(JsonValue::as_str),
        _ => None,
    }
}
