//! Item module --
//!
//! Items are granted to the player by special actions and never leave the
//! inventory once collected.

use serde::{Deserialize, Serialize};

use crate::{Id, WorldObject};

/// Anything that can carry items.
pub trait ItemHolder {
    /// Add an item. Returns false if it was already held.
    fn add_item(&mut self, item_id: Id) -> bool;
    fn contains_item(&self, item_id: &str) -> bool;
}

/// An item definition, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub pickup_message: Option<String>,
    pub use_message: Option<String>,
    pub quest_item: bool,
}
impl WorldObject for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}
impl Item {
    /// Text shown when the item is picked up.
    pub fn pickup_text(&self) -> String {
        self.pickup_message
            .clone()
            .unwrap_or_else(|| format!("You found: {}", self.name))
    }
}
