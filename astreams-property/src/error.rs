//! Error types for astreams-property

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Property runtime error type
#[derive(Error, Debug)]
pub enum Error {
    /// An element matched a structured kind's shape but failed to decode
    #[error("could not deserialize \"{property}\" property: {message}")]
    Decode { property: String, message: String },

    /// Navigation through a handle whose slot is no longer owned
    #[error("detached slot handle for \"{property}\" property")]
    DetachedSlot { property: String },

    /// A structured value's own encoder failed
    #[error("could not serialize \"{property}\" property: {message}")]
    Serialize { property: String, message: String },
}

impl Error {
    /// Create a decode error
    pub fn decode(property: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Decode {
            property: property.into(),
            message: message.into(),
        }
    }

    /// Create a detached slot error
    pub fn detached_slot(property: impl Into<String>) -> Self {
        Error::DetachedSlot {
            property: property.into(),
        }
    }

    /// Create a serialize error
    pub fn serialize(property: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Serialize {
            property: property.into(),
            message: message.into(),
        }
    }
}
