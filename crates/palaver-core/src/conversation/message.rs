//! Conversation message types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a message within its owning conversation.
///
/// Ids are dense and zero-based: a message's id equals the conversation
/// length at the time it was appended. They reflect the conversation's own
/// sequence, never global ordering or wall-clock time.
pub type MessageId = usize;

/// Whether a message was sent by the current user or received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Sent by the current user.
    Sent,
    /// Received from the conversation partner.
    Received,
}

/// A single message in a conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Position-derived id, unique within the owning conversation.
    pub id: MessageId,
    /// Message body. Blank sends are rejected upstream.
    pub text: String,
    /// Sent by the current user, or received.
    pub direction: Direction,
    /// Display-only time of day, e.g. "03:42 PM".
    pub timestamp: String,
    /// Calendar date used for timeline grouping.
    pub date: NaiveDate,
    /// Author display name. `Some` only for messages received in a group
    /// conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
}

impl Message {
    /// Creates a message with a placeholder id of 0.
    ///
    /// The store assigns the real id when the message is appended.
    pub fn new(
        text: impl Into<String>,
        direction: Direction,
        timestamp: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            text: text.into(),
            direction,
            timestamp: timestamp.into(),
            date,
            sender_name: None,
        }
    }

    /// Attaches a group sender name.
    pub fn with_sender(mut self, sender_name: impl Into<String>) -> Self {
        self.sender_name = Some(sender_name.into());
        self
    }
}
