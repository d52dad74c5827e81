//! `repl::look` module
//!
//! Handlers that describe the player's surroundings and belongings.

use crate::quest;
use crate::view::{InventoryLine, View, ViewItem};
use crate::{EngineError, TurboWorld, WorldObject};

/// Render the current location (first-visit text if it's new) and mark it visited.
///
/// # Errors
/// - if the player's location can't be resolved
pub fn describe_current_location(world: &mut TurboWorld, view: &mut View) -> Result<(), EngineError> {
    let location = world.player_location_ref()?;
    view.push(ViewItem::LocationDescription {
        name: location.name.clone(),
        description: location.current_description().to_string(),
        actions: location.action_commands(),
        exits: location.exit_commands(),
    });
    if let Some(hint) = quest::location_hint(world) {
        view.push(ViewItem::QuestHint(hint));
    }
    world.player_location_mut()?.visited = true;
    Ok(())
}

/// Show the current location again.
///
/// # Errors
/// - if the player's location can't be resolved
pub fn look_handler(world: &mut TurboWorld, view: &mut View) -> Result<(), EngineError> {
    describe_current_location(world, view)
}

/// List carried items in the order they were found.
pub fn inventory_handler(world: &TurboWorld, view: &mut View) {
    let items = world
        .player
        .inventory
        .iter()
        .map(|id| match world.items.get(id) {
            Some(item) => InventoryLine {
                name: item.name().to_string(),
                description: item.description().to_string(),
            },
            None => InventoryLine {
                name: id.clone(),
                description: "(unknown item)".to_string(),
            },
        })
        .collect();
    view.push(ViewItem::Inventory {
        owner: world.player.name.clone(),
        items,
    });
}

/// Summarize the player's progress.
pub fn stats_handler(world: &TurboWorld, view: &mut View) {
    view.push(ViewItem::Stats {
        name: world.player.name.clone(),
        location: world.location_name(),
        items_held: world.player.inventory.len(),
        quest_found: world.quest_items_found(),
        quest_total: world.total_quest_items(),
        understanding: world.player.understanding_triggered,
        areas_explored: world.player.discovered.len(),
    });
}
