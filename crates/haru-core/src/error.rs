//! Error types for the todo board library.

use thiserror::Error;

/// Classification of remote store failures.
///
/// The store makes no distinction between transient and permanent failures;
/// the kind only records what went wrong, never whether a retry would help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// The store could not be reached or the transport broke mid-call
    Network,
    /// The store refused the call (authentication or rules)
    Permission,
    /// The store's payload could not be decoded
    Decode,
    /// The store understood the call but rejected it
    Rejected,
}

impl StoreErrorKind {
    /// Convert to a short string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreErrorKind::Network => "network",
            StoreErrorKind::Permission => "permission",
            StoreErrorKind::Decode => "decode",
            StoreErrorKind::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A failed call against the remote store.
///
/// Carries the failure classification plus a human-readable message. The
/// underlying transport error is flattened into the message so the value
/// stays cheap to clone across subscription channels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} error: {message}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub message: String,
}

impl StoreError {
    /// Creates a new store error with the given kind and message.
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Network, message)
    }

    /// Creates a permission error.
    pub fn permission(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Permission, message)
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Decode, message)
    }

    /// Creates a rejection error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Rejected, message)
    }
}

/// Comprehensive error type for all board operations.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Remote store call failed
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BoardError {
        BoardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BoardError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error with a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        BoardError::Configuration {
            message: message.into(),
        }
    }
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Result type alias for raw store calls
pub type StoreResult<T> = std::result::Result<T, StoreError>;
