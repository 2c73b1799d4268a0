//! Error types for namespaced ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing, validating, or decoding IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The candidate does not satisfy the namespaced ID grammar.
    #[error("invalid namespaced ID '{input}': {reason}")]
    InvalidIdentifier {
        input: String,
        reason: InvalidReason,
    },

    /// The outer JSON string literal could not be decoded.
    #[error("malformed JSON encoding: {0}")]
    MalformedEncoding(String),
}

/// Why a candidate string was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The combined string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The combined string exceeds the maximum encoded length.
    #[error("length {length} exceeds maximum of {max} characters")]
    TooLong { length: usize, max: usize },

    /// No `:` separator was found.
    #[error("missing ':' separator between namespace and name")]
    MissingSeparator,

    /// The namespace part violates the namespace grammar.
    #[error("invalid namespace '{0}'")]
    InvalidNamespace(String),

    /// The name part is empty or contains a forbidden character.
    #[error("invalid name '{0}'")]
    InvalidName(String),
}

impl IdError {
    pub(crate) fn invalid(input: impl Into<String>, reason: InvalidReason) -> Self {
        let input = input.into();
        tracing::debug!(input = %input, reason = %reason, "rejected namespaced ID");
        IdError::InvalidIdentifier { input, reason }
    }

    /// Returns true if the candidate failed identifier validation.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, IdError::InvalidIdentifier { .. })
    }

    /// Returns true if the JSON literal itself could not be decoded.
    pub fn is_malformed_encoding(&self) -> bool {
        matches!(self, IdError::MalformedEncoding(_))
    }

    /// Returns the validation failure cause, if this is a validation error.
    pub fn reason(&self) -> Option<&InvalidReason> {
        match self {
            IdError::InvalidIdentifier { reason, .. } => Some(reason),
            IdError::MalformedEncoding(_) => None,
        }
    }
}

impl From<serde_json::Error> for IdError {
    fn from(err: serde_json::Error) -> Self {
        IdError::MalformedEncoding(err.to_string())
    }
}
