//! Directory domain module.
//!
//! The directory is the static catalog of addressable entities. It is
//! read-only: registration happens once at construction and the catalog
//! never changes afterwards.
//!
//! # Module Structure
//!
//! - `model`: entity domain model (`Entity`, `EntityKind`, `EntityId`)
//! - `roster`: the built-in default catalog

mod model;
mod roster;

// Re-export public API
pub use model::{Entity, EntityId, EntityKind};
pub use roster::default_roster;

use serde::{Deserialize, Serialize};

/// Static catalog of addressable entities.
///
/// Iteration order is registration order, which is also display order.
/// Lookups are read-only and side-effect free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    entities: Vec<Entity>,
}

impl Directory {
    /// Creates a directory from the given entities, keeping their order.
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Creates a directory populated with the built-in roster.
    pub fn with_default_roster() -> Self {
        Self::new(default_roster())
    }

    /// All entities in registration order.
    pub fn list(&self) -> &[Entity] {
        &self.entities
    }

    /// Looks up an entity by id.
    pub fn find(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    /// Returns true if an entity with the given id is registered.
    pub fn contains(&self, id: EntityId) -> bool {
        self.find(id).is_some()
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the directory has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
