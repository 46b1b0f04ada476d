//! Built-in directory roster.

use super::model::Entity;

/// Returns the built-in contact catalog: eighteen individuals and two
/// groups, in display order.
pub fn default_roster() -> Vec<Entity> {
    vec![
        Entity::individual(1, "Emma Thompson"),
        Entity::individual(2, "James Wilson"),
        Entity::group(
            3,
            "Project Team",
            ["Sarah Parker", "Michael Brown", "Lisa Anderson"],
        ),
        Entity::individual(4, "Oliver Davis"),
        Entity::group(
            5,
            "Marketing Team",
            ["John Smith", "Emily White", "David Clark"],
        ),
        Entity::individual(6, "Sophie Turner"),
        Entity::individual(7, "William Brown"),
        Entity::individual(8, "Isabella Martinez"),
        Entity::individual(9, "Lucas Anderson"),
        Entity::individual(10, "Olivia Taylor"),
        Entity::individual(11, "Ethan Wright"),
        Entity::individual(12, "Ava Johnson"),
        Entity::individual(13, "Noah Garcia"),
        Entity::individual(14, "Mia Robinson"),
        Entity::individual(15, "Liam Thomas"),
        Entity::individual(16, "Charlotte Lee"),
        Entity::individual(17, "Henry Clark"),
        Entity::individual(18, "Amelia White"),
        Entity::individual(19, "Benjamin King"),
        Entity::individual(20, "Sofia Rodriguez"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roster_shape() {
        let roster = default_roster();
        assert_eq!(roster.len(), 20);
        assert_eq!(roster.iter().filter(|e| e.is_group()).count(), 2);

        let ids: HashSet<_> = roster.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), roster.len());
    }
}
