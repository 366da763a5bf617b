//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Source text is not valid JSON or does not have the expected shape
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    /// A marker referenced a markup or atom that does not exist
    #[error("{kind} index {index} out of range (document has {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
    /// A markup section carried a tag name with no target node
    #[error("Unsupported markup section tag '{0}'")]
    UnsupportedSectionTag(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::MalformedInput(err.to_string())
    }
}
