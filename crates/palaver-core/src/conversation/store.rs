//! In-memory conversation store.

use std::collections::HashMap;

use crate::directory::{Directory, EntityId};
use crate::error::{PalaverError, Result};

use super::message::Message;

/// Holds the ordered message history for every directory entity.
///
/// The store is append-only: messages are never edited or removed. One
/// conversation exists per entity for the lifetime of the store, so an
/// append against an id with no conversation means the id was never in the
/// directory this store was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationStore {
    conversations: HashMap<EntityId, Vec<Message>>,
}

impl ConversationStore {
    /// Creates an empty store with no conversations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one empty conversation per directory entity.
    pub fn for_directory(directory: &Directory) -> Self {
        let conversations = directory
            .list()
            .iter()
            .map(|entity| (entity.id, Vec::new()))
            .collect();
        Self { conversations }
    }

    /// Creates a store from pre-built conversations. Used by the seeder.
    pub(crate) fn from_conversations(conversations: HashMap<EntityId, Vec<Message>>) -> Self {
        Self { conversations }
    }

    /// Read-only view of an entity's history, oldest first.
    ///
    /// Entities without a conversation yield an empty slice, never an error.
    pub fn get(&self, entity_id: EntityId) -> &[Message] {
        self.conversations
            .get(&entity_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Appends a message to the end of an entity's conversation.
    ///
    /// The message's id is assigned here: it becomes the conversation
    /// length at the time of the append, keeping ids dense and zero-based.
    /// Returns a reference to the stored message.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntity` if the entity has no conversation, i.e. it
    /// was not registered in the directory.
    pub fn append(&mut self, entity_id: EntityId, mut message: Message) -> Result<&Message> {
        let conversation = self
            .conversations
            .get_mut(&entity_id)
            .ok_or_else(|| PalaverError::unknown_entity(entity_id))?;

        message.id = conversation.len();
        conversation.push(message);
        // Safe to unwrap because we just pushed an element
        Ok(conversation.last().unwrap())
    }

    /// The most recent message in an entity's conversation, if any.
    pub fn last_message(&self, entity_id: EntityId) -> Option<&Message> {
        self.get(entity_id).last()
    }

    /// Number of messages in an entity's conversation.
    pub fn len(&self, entity_id: EntityId) -> usize {
        self.get(entity_id).len()
    }
}
