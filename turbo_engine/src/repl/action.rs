//! `repl::action` module
//!
//! Runs location-scoped special actions and follows them with a short reminder
//! of where the player is and what they can do there.

use crate::special::{ActionOutcome, execute_special_action};
use crate::view::{View, ViewItem};
use crate::{EngineError, TurboWorld, quest};

/// Sample commands shown in a location reminder.
const REMINDER_ACTIONS: usize = 3;

/// Execute the special action `action_id`, then remind the player of their options.
///
/// # Errors
/// - if the action, an item it refers to, or the player's location can't be resolved
pub fn special_action_handler(
    world: &mut TurboWorld,
    view: &mut View,
    action_id: &str,
) -> Result<ActionOutcome, EngineError> {
    let outcome = execute_special_action(world, view, action_id)?;
    if world.running {
        view.push(location_reminder(world)?);
    }
    Ok(outcome)
}

/// Build the short "you are here" reminder for the current location.
///
/// # Errors
/// - if the player's location can't be resolved
pub fn location_reminder(world: &TurboWorld) -> Result<ViewItem, EngineError> {
    let location = world.player_location_ref()?;
    let all_actions = location.action_commands();
    let more_actions = all_actions.len() > REMINDER_ACTIONS;
    let quest_status = (world.quest_items_found() > 0).then(|| quest::status_label(world));
    Ok(ViewItem::LocationReminder {
        name: location.name.clone(),
        actions: all_actions.into_iter().take(REMINDER_ACTIONS).collect(),
        more_actions,
        exits: location.exit_commands(),
        quest_status,
    })
}
