//! Player -- the character moving through the world and everything it has done so far.
use std::collections::HashSet;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{Id, ItemHolder, WorldObject};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub description: String,
    pub location: Id,
    /// Carried items, in the order they were picked up.
    pub inventory: IndexSet<Id>,
    pub discovered: IndexSet<Id>,
    /// Non-repeatable special actions that have already run.
    pub completed_actions: HashSet<Id>,
    pub understanding_triggered: bool,
    /// Set once any `trigger_revelation` effect has been applied.
    pub revelation_unlocked: bool,
    pub revelation_triggered: bool,
}
impl Default for Player {
    fn default() -> Player {
        Self {
            name: "Turbo".into(),
            description: "default".into(),
            location: Id::new(),
            inventory: IndexSet::new(),
            discovered: IndexSet::new(),
            completed_actions: HashSet::new(),
            understanding_triggered: false,
            revelation_unlocked: false,
            revelation_triggered: false,
        }
    }
}
impl WorldObject for Player {
    fn id(&self) -> &str {
        &self.name
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}
impl Player {
    /// Create a player standing at (and having discovered) `start_location`.
    pub fn new(name: &str, description: &str, start_location: &str) -> Player {
        let mut player = Player {
            name: name.to_string(),
            description: description.to_string(),
            location: start_location.to_string(),
            ..Player::default()
        };
        player.discovered.insert(start_location.to_string());
        player
    }

    /// Record a location as discovered. Returns false if it already was.
    pub fn discover(&mut self, location_id: &str) -> bool {
        self.discovered.insert(location_id.to_string())
    }

    pub fn has_completed(&self, action_id: &str) -> bool {
        self.completed_actions.contains(action_id)
    }

    pub fn mark_completed(&mut self, action_id: &str) {
        self.completed_actions.insert(action_id.to_string());
    }
}
impl ItemHolder for Player {
    fn add_item(&mut self, item_id: Id) -> bool {
        self.inventory.insert(item_id)
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.inventory.contains(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_with_start_location_discovered() {
        let player = Player::new("Turbo", "A good dog", "living_room");
        assert_eq!(player.location, "living_room");
        assert!(player.inventory.is_empty());
        assert!(player.completed_actions.is_empty());
        assert_eq!(player.discovered.len(), 1);
        assert!(player.discovered.contains("living_room"));
        assert!(!player.understanding_triggered);
        assert!(!player.revelation_triggered);
    }

    #[test]
    fn inventory_keeps_pickup_order_and_ignores_duplicates() {
        let mut player = Player::default();
        assert!(player.add_item("stool".into()));
        assert!(player.add_item("helmet".into()));
        assert!(player.add_item("key".into()));
        assert!(!player.add_item("stool".into()));
        let order: Vec<_> = player.inventory.iter().map(String::as_str).collect();
        assert_eq!(order, ["stool", "helmet", "key"]);
        assert!(player.contains_item("helmet"));
        assert!(!player.contains_item("bike"));
    }

    #[test]
    fn discover_is_idempotent() {
        let mut player = Player::new("Turbo", "", "den");
        assert!(player.discover("garden"));
        assert!(!player.discover("garden"));
        assert!(!player.discover("den"));
        assert_eq!(player.discovered.len(), 2);
    }

    #[test]
    fn completed_actions_are_tracked() {
        let mut player = Player::default();
        assert!(!player.has_completed("dig"));
        player.mark_completed("dig");
        assert!(player.has_completed("dig"));
    }
}
