//! Data structures representing the game session.
//!
//! This module defines [`TurboWorld`], the single session object that every
//! command handler receives. It owns the loaded content, the player, and the
//! quest configuration.

use std::collections::HashMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::loader::quest::QuestConfig;
use crate::quest::{self, QuestPhase};
use crate::view::StatusLine;
use crate::{EngineError, Id, Item, ItemHolder, Location, Player, SpecialAction, TURBO_VERSION};

/// Methods common to any named object in the world.
pub trait WorldObject {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}

/// Opening text shown when a session starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Intro {
    pub welcome: String,
    pub description: String,
    pub instructions: String,
    pub prompt: String,
}

/// Global story text that isn't tied to a location or action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub author: String,
    pub version: String,
    pub blurb: String,
    pub intro: Intro,
    pub help: Vec<String>,
    pub invalid_command: String,
    pub exit_message: String,
}

/// Complete state of the running game.
///
/// Content (locations, items, special actions, story text) is loaded once; only
/// location `visited` flags, the player, and the session flags change during play.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurboWorld {
    pub story: Story,
    pub locations: HashMap<Id, Location>,
    pub items: HashMap<Id, Item>,
    pub actions: HashMap<Id, SpecialAction>,
    pub player: Player,
    pub quest: QuestConfig,
    pub turn_count: usize,
    pub won: bool,
    pub running: bool,
    pub version: String,
}
impl TurboWorld {
    /// Create a new empty world with a default player.
    pub fn new_empty() -> TurboWorld {
        let world = Self {
            story: Story::default(),
            locations: HashMap::new(),
            items: HashMap::new(),
            actions: HashMap::new(),
            player: Player::default(),
            quest: QuestConfig::default(),
            turn_count: 0,
            won: false,
            running: true,
            version: TURBO_VERSION.to_string(),
        };
        info!("new, empty 'TurboWorld' created");
        world
    }

    /// Obtain a reference to the location the player occupies.
    /// # Errors
    /// - if the player's location id is not found in the world
    pub fn player_location_ref(&self) -> Result<&Location, EngineError> {
        self.locations
            .get(&self.player.location)
            .ok_or_else(|| EngineError::UnknownLocation(self.player.location.clone()))
    }

    /// Obtain a mutable reference to the location the player occupies.
    /// # Errors
    /// - if the player's location id is not found in the world
    pub fn player_location_mut(&mut self) -> Result<&mut Location, EngineError> {
        self.locations
            .get_mut(&self.player.location)
            .ok_or_else(|| EngineError::UnknownLocation(self.player.location.clone()))
    }

    /// Look up an item definition.
    /// # Errors
    /// - if no item with this id was loaded
    pub fn item_ref(&self, item_id: &str) -> Result<&Item, EngineError> {
        self.items
            .get(item_id)
            .ok_or_else(|| EngineError::UnknownItem(item_id.to_string()))
    }

    /// Ids of every quest item in the content, sorted for stable output.
    pub fn quest_item_ids(&self) -> Vec<&Id> {
        let mut ids: Vec<&Id> = self
            .items
            .values()
            .filter(|item| item.quest_item)
            .map(|item| &item.id)
            .collect();
        ids.sort();
        ids
    }

    /// Number of quest items defined by the content.
    pub fn total_quest_items(&self) -> usize {
        self.items.values().filter(|item| item.quest_item).count()
    }

    /// Number of distinct quest items currently carried by the player.
    pub fn quest_items_found(&self) -> usize {
        self.player
            .inventory
            .iter()
            .filter(|id| self.items.get(*id).is_some_and(|item| item.quest_item))
            .count()
    }

    /// True if the player carries every quest item (and at least one exists).
    pub fn has_all_quest_items(&self) -> bool {
        let ids = self.quest_item_ids();
        !ids.is_empty() && ids.iter().all(|id| self.player.contains_item(id))
    }

    /// Current narrative phase of the quest.
    pub fn phase(&self) -> QuestPhase {
        QuestPhase::of(&self.player)
    }

    /// Name of the player's location, or the raw id if it can't be resolved.
    pub fn location_name(&self) -> String {
        self.player_location_ref()
            .map_or_else(|_| self.player.location.clone(), |loc| loc.name.clone())
    }

    /// Snapshot of the values a front end keeps on screen between commands.
    pub fn status_line(&self) -> StatusLine {
        StatusLine {
            location: self.location_name(),
            item_count: self.player.inventory.len(),
            quest: quest::status_label(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Exit;

    fn make_item(id: &str, quest_item: bool) -> Item {
        Item {
            id: id.into(),
            name: format!("Item {id}"),
            description: "A test item".into(),
            pickup_message: None,
            use_message: None,
            quest_item,
        }
    }

    fn make_location(id: &str) -> Location {
        Location {
            id: id.into(),
            name: format!("Location {id}"),
            description: "A test location".into(),
            first_visit_description: None,
            visited: false,
            exits: vec![Exit::new("out", "elsewhere")],
            actions: Vec::new(),
        }
    }

    #[test]
    fn new_empty_creates_running_world() {
        let world = TurboWorld::new_empty();
        assert!(world.locations.is_empty());
        assert!(world.items.is_empty());
        assert!(world.actions.is_empty());
        assert!(world.running);
        assert!(!world.won);
        assert_eq!(world.version, crate::TURBO_VERSION);
    }

    #[test]
    fn player_location_ref_resolves_or_errors() {
        let mut world = TurboWorld::new_empty();
        world.locations.insert("den".into(), make_location("den"));
        world.player.location = "den".into();
        assert_eq!(world.player_location_ref().expect("den exists").id, "den");

        world.player.location = "attic".into();
        assert_eq!(
            world.player_location_ref().unwrap_err(),
            EngineError::UnknownLocation("attic".into())
        );
        assert_eq!(world.location_name(), "attic");
    }

    #[test]
    fn quest_counts_follow_inventory() {
        let mut world = TurboWorld::new_empty();
        for (id, quest) in [("helmet", true), ("gloves", true), ("key", false)] {
            world.items.insert(id.into(), make_item(id, quest));
        }
        assert_eq!(world.total_quest_items(), 2);
        assert_eq!(world.quest_items_found(), 0);
        assert!(!world.has_all_quest_items());

        world.player.add_item("key".into());
        world.player.add_item("helmet".into());
        assert_eq!(world.quest_items_found(), 1);

        world.player.add_item("gloves".into());
        assert_eq!(world.quest_items_found(), 2);
        assert!(world.has_all_quest_items());
    }

    #[test]
    fn no_quest_items_means_never_complete() {
        let world = TurboWorld::new_empty();
        assert!(!world.has_all_quest_items());
    }

    #[test]
    fn status_line_reports_location_and_items() {
        let mut world = TurboWorld::new_empty();
        world.locations.insert("den".into(), make_location("den"));
        world.items.insert("key".into(), make_item("key", false));
        world.player.location = "den".into();
        world.player.add_item("key".into());

        let status = world.status_line();
        assert_eq!(status.location, "Location den");
        assert_eq!(status.item_count, 1);
        assert_eq!(status.quest, world.quest.status.starting);
    }
}
