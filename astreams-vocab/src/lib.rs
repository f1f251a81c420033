//! Vocabulary Namespace Constants
//!
//! This crate provides a centralized location for the JSON-LD namespace IRIs
//! used throughout the astreams workspace.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `activitystreams` - ActivityStreams 2.0 vocabulary (https://www.w3.org/ns/activitystreams)
//! - `security` - W3ID security vocabulary for actor key material (https://w3id.org/security/v1)
//! - `toot` - Mastodon extension vocabulary (http://joinmastodon.org/ns)

/// ActivityStreams 2.0 vocabulary constants
pub mod activitystreams {
    /// The ActivityStreams 2.0 context IRI
    pub const NAMESPACE: &str = "https://www.w3.org/ns/activitystreams";

    /// The special Public collection addressing IRI
    pub const PUBLIC: &str = "https://www.w3.org/ns/activitystreams#Public";
}

/// W3ID security vocabulary constants (actor key material)
pub mod security {
    /// The security v1 context IRI
    pub const NAMESPACE: &str = "https://w3id.org/security/v1";
}

/// Mastodon extension vocabulary constants
pub mod toot {
    /// The Mastodon extension context IRI
    pub const NAMESPACE: &str = "http://joinmastodon.org/ns";
}
