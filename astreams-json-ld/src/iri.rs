//! IRI validation and the `Iri` reference type.
//!
//! Property values that reference a remote resource hold an absolute IRI.
//! Absoluteness is decided by the RFC 3986 scheme rule rather than a
//! hardcoded scheme list, so `urn:`, `did:`, `mailto:` and friends all work.

use crate::error::{JsonLdError, Result};
use std::fmt;
use std::sync::Arc;

/// An absolute IRI.
///
/// Construction goes through [`Iri::parse`], so a held `Iri` always has a
/// valid scheme and no whitespace. Ordering is lexicographic over the text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Parse an absolute IRI from a string.
    ///
    /// Fails when the string has no scheme (`name`, `#frag`, `/path`) or
    /// contains whitespace. Compact forms like `as:Note` do parse: a
    /// compact IRI is indistinguishable from a `urn:`-style IRI without a
    /// context, and callers that care resolve aliases first.
    pub fn parse(s: &str) -> Result<Iri> {
        if !is_absolute(s) || s.chars().any(char::is_whitespace) {
            return Err(JsonLdError::InvalidIri { iri: s.to_string() });
        }
        Ok(Iri(Arc::from(s)))
    }

    /// The textual form of this IRI.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns true if the IRI is absolute (has an RFC 3986 scheme).
///
/// A scheme is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` followed by ":".
pub fn is_absolute(iri: &str) -> bool {
    match iri.find(':') {
        Some(pos) if pos > 0 => {
            let scheme = &iri[..pos];
            scheme.as_bytes()[0].is_ascii_alphabetic()
                && scheme
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'-' || b == b'.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("https://www.w3.org/ns/activitystreams"));
        assert!(is_absolute("urn:isbn:0451450523"));
        assert!(is_absolute("did:example:123"));
        assert!(is_absolute("mailto:user@example.com"));
        assert!(!is_absolute("relationship"));
        assert!(!is_absolute("#fragment"));
        assert!(!is_absolute(":missing-scheme"));
        assert!(!is_absolute(""));
    }

    #[test]
    fn test_parse_accepts_absolute() {
        let iri = Iri::parse("https://ex/1").unwrap();
        assert_eq!(iri.as_str(), "https://ex/1");
        assert_eq!(format!("{}", iri), "https://ex/1");
    }

    #[test]
    fn test_parse_rejects_relative_and_whitespace() {
        assert!(Iri::parse("just a name").is_err());
        assert!(Iri::parse("no-scheme").is_err());
        assert!(Iri::parse("https://ex/with space").is_err());
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = Iri::parse("https://a.example/").unwrap();
        let b = Iri::parse("https://b.example/").unwrap();
        assert!(a < b);
    }

}
