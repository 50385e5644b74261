//! Error types for the configuration model.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by schemas, descriptors and the payload codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The configuration type is not registered in the descriptor.
    #[error("unknown spec type {0}")]
    UnknownType(String),

    /// An entry names a type the descriptor cannot serialize.
    #[error("missing type {0:?}")]
    MissingType(String),

    /// The schema's message name has no registered codec.
    #[error("unknown message type {0:?}")]
    UnknownMessageType(String),

    /// Encoding a payload to its canonical form failed.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Decoding a payload from its canonical form failed.
    #[error("decoding error: {0}")]
    Decoding(String),

    /// The textual config object could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The schema type name is not a DNS-1123 label.
    #[error("invalid type: {0:?}")]
    InvalidType(String),

    /// The schema plural name is not a DNS-1123 label.
    #[error("invalid plural: {0:?}")]
    InvalidPlural(String),

    /// The payload is a different message type than the schema expects.
    #[error("spec message type {found:?} does not match schema message type {expected:?}")]
    SpecMismatch { expected: String, found: String },

    /// Rejected by the schema's additional validator. The message is the
    /// validator's own, unchanged.
    #[error("{0}")]
    Validation(String),

    /// Two schemas registered under the same type name.
    #[error("duplicate type {0:?}")]
    DuplicateType(String),

    /// Two schemas registered under the same message name.
    #[error("duplicate message name {0:?}")]
    DuplicateMessageName(String),
}

impl ModelError {
    /// Returns true for structural or content validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidType(_)
                | Self::InvalidPlural(_)
                | Self::UnknownMessageType(_)
                | Self::SpecMismatch { .. }
                | Self::Validation(_)
        )
    }
}
