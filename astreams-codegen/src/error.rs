//! Error types for astreams-codegen

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Meta-model validation error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A property or kind identifier is missing a spelling
    #[error("empty identifier for property \"{property}\"")]
    EmptyIdentifier { property: String },

    /// Two kinds of one property share a name
    #[error("duplicate kind \"{kind}\" for property \"{property}\"")]
    DuplicateKind { property: String, kind: String },

    /// A presence-flag member was requested for a nilable kind, which
    /// tracks presence by null
    #[error("kind \"{kind}\" of property \"{property}\" is nilable and has no presence member")]
    PresenceForNilable { property: String, kind: String },
}
