//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use log::info;

use crate::repl::look::describe_current_location;
use crate::view::{View, ViewItem};
use crate::{EngineError, TurboWorld, WorldObject};

/// Move the player through the exit matching `command`, if the current location has one.
///
/// Returns `Ok(false)` when no exit matches, so the caller can try other resolutions.
///
/// # Errors
/// - if the current location or the destination can't be resolved (the player stays put)
pub fn move_to_handler(world: &mut TurboWorld, view: &mut View, command: &str) -> Result<bool, EngineError> {
    let Some(destination_id) = world
        .player_location_ref()?
        .exit_matching(command)
        .map(|exit| exit.to.clone())
    else {
        return Ok(false);
    };

    let destination_name = world
        .locations
        .get(&destination_id)
        .ok_or_else(|| EngineError::UnknownLocation(destination_id.clone()))?
        .name()
        .to_string();

    world.player.location.clone_from(&destination_id);
    if world.player.discover(&destination_id) {
        info!("{} discovered {destination_name} ({destination_id})", world.player.name);
    }
    info!("{} moved to {destination_name} ({destination_id})", world.player.name);

    view.push(ViewItem::TransitionMessage(format!("You move to the {destination_name}...")));
    describe_current_location(world, view)?;
    Ok(true)
}
