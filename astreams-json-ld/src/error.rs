use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum JsonLdError {
    #[error("Invalid context: {message}")]
    InvalidContext { message: String },

    #[error("Invalid IRI: {iri}")]
    InvalidIri { iri: String },
}

pub type Result<T> = std::result::Result<T, JsonLdError>;
