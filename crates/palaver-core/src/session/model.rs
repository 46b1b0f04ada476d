//! Session state domain model.

use serde::{Deserialize, Serialize};

use crate::directory::EntityId;

/// The logged-in user's view state: identity, selection, and search text.
///
/// Exactly one `SessionState` exists while a user is logged in; "logged
/// out" is the absence of one. Selection is keyed by entity id, never by
/// list position, so a filtered contact list can never skew the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// The logged-in user's entity id.
    pub current_user: EntityId,
    /// The entity whose conversation is open. `None` only when the
    /// directory holds no entity besides the current user.
    pub active_entity: Option<EntityId>,
    /// Case-insensitive substring filter over the contact list.
    pub search_filter: String,
}

impl SessionState {
    /// Creates the state established by a fresh login: no search filter,
    /// selection on the given default entity.
    pub fn new(current_user: EntityId, active_entity: Option<EntityId>) -> Self {
        Self {
            current_user,
            active_entity,
            search_filter: String::new(),
        }
    }
}
