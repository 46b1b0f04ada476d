//! Error types for the Palaver engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::directory::EntityId;

/// A shared error type for the entire Palaver engine.
///
/// Every variant is a local validation failure recovered at the controller
/// boundary: the attempted transition is rejected and all state is left
/// unchanged. There is no retryable category and no partial-failure state.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PalaverError {
    /// Unknown or disallowed entity reference
    #[error("Invalid entity {id}: {reason}")]
    InvalidEntity { id: EntityId, reason: String },

    /// Attempted to send blank or whitespace-only text
    #[error("Message text is empty")]
    EmptyMessage,

    /// A logged-in-only transition was attempted while logged out
    #[error("No user is logged in")]
    NotLoggedIn,

    /// `login` was attempted while a session already exists
    #[error("User {id} is already logged in")]
    AlreadyLoggedIn { id: EntityId },

    /// `send_message` was attempted with no open conversation
    #[error("No conversation is open")]
    NoActiveConversation,
}

impl PalaverError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidEntity error for an id missing from the directory
    pub fn unknown_entity(id: EntityId) -> Self {
        Self::InvalidEntity {
            id,
            reason: "not in the directory".to_string(),
        }
    }

    /// Creates an InvalidEntity error for a reference the rules disallow
    pub fn disallowed_entity(id: EntityId, reason: impl Into<String>) -> Self {
        Self::InvalidEntity {
            id,
            reason: reason.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidEntity error
    pub fn is_invalid_entity(&self) -> bool {
        matches!(self, Self::InvalidEntity { .. })
    }

    /// Check if this is an EmptyMessage error
    pub fn is_empty_message(&self) -> bool {
        matches!(self, Self::EmptyMessage)
    }
}

/// A type alias for `Result<T, PalaverError>`.
pub type Result<T> = std::result::Result<T, PalaverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_entity_is_invalid_entity() {
        let err = PalaverError::unknown_entity(42);
        assert!(err.is_invalid_entity());
        assert!(!err.is_empty_message());
        assert_eq!(err.to_string(), "Invalid entity 42: not in the directory");
    }

    #[test]
    fn test_disallowed_entity_keeps_reason() {
        let err = PalaverError::disallowed_entity(7, "self-chat is disallowed");
        assert_eq!(err.to_string(), "Invalid entity 7: self-chat is disallowed");
    }
}
