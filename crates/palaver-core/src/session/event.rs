//! Session input events.

use serde::{Deserialize, Serialize};

use crate::directory::EntityId;

/// The input events a presentation layer feeds into the engine.
///
/// Each event maps to exactly one controller transition and is processed
/// to completion before the next is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Log in as the given entity.
    Login { entity_id: EntityId },
    /// End the session, keeping conversations in memory.
    Logout,
    /// Open another entity's conversation.
    SelectEntity { entity_id: EntityId },
    /// Replace the contact search filter.
    SetSearchFilter { text: String },
    /// Send a message to the active entity's conversation.
    SendMessage { text: String },
}
