//! Entity domain model.
//!
//! Represents the addressable contacts and groups a user can converse with.
//! Entities are immutable after creation and sourced from the directory.

use serde::{Deserialize, Serialize};

/// Unique identifier for a directory entity.
pub type EntityId = u32;

/// Distinguishes one-on-one contacts from named groups.
///
/// Group membership lives inside the `Group` variant, so a member list can
/// only exist on a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntityKind {
    /// A single person.
    Individual,
    /// A named group of people.
    Group {
        /// Display names of the group's members, in registration order.
        member_names: Vec<String>,
    },
}

/// An addressable contact or group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier
    pub id: EntityId,
    /// Name shown in the contact list
    pub display_name: String,
    /// Individual contact or group
    pub kind: EntityKind,
}

impl Entity {
    /// Creates an individual contact.
    pub fn individual(id: EntityId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            kind: EntityKind::Individual,
        }
    }

    /// Creates a group with the given member names.
    pub fn group<I, S>(id: EntityId, display_name: impl Into<String>, member_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            display_name: display_name.into(),
            kind: EntityKind::Group {
                member_names: member_names.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Returns true if this entity is a group.
    pub fn is_group(&self) -> bool {
        matches!(self.kind, EntityKind::Group { .. })
    }

    /// Member names for groups, `None` for individuals.
    pub fn member_names(&self) -> Option<&[String]> {
        match &self.kind {
            EntityKind::Group { member_names } => Some(member_names),
            EntityKind::Individual => None,
        }
    }
}
