//! `repl::system` module
//!
//! Contains repl loop handlers for session-level commands: the opening
//! narration, help, quitting, and unrecognized input.

use log::info;

use crate::quest;
use crate::view::{View, ViewItem};
use crate::{EngineError, TurboWorld, WorldObject};

/// Push the opening narration.
pub fn intro_handler(world: &TurboWorld, view: &mut View) {
    let intro = &world.story.intro;
    info!("starting \"{}\" v{}", world.story.title, world.story.version);
    view.push(ViewItem::Intro {
        title: world.story.title.clone(),
        welcome: intro.welcome.clone(),
        description: intro.description.clone(),
        instructions: intro.instructions.clone(),
    });
}

/// Show the content's help text.
pub fn help_handler(world: &TurboWorld, view: &mut View) {
    view.push(ViewItem::Help(world.story.help.clone()));
}

/// End the session with the content's exit message.
pub fn quit_handler(world: &mut TurboWorld, view: &mut View) {
    info!(
        "{} quit after {} turn(s) (won: {})",
        world.player.name(),
        world.turn_count,
        world.won
    );
    info!("ending inventory:");
    world
        .player
        .inventory
        .iter()
        .filter_map(|id| world.items.get(id))
        .for_each(|item| info!("- {} ({})", item.name(), item.id()));

    view.push(ViewItem::Farewell(world.story.exit_message.clone()));
    world.running = false;
}

/// Explain that the command wasn't understood and list what can be done here.
///
/// # Errors
/// - if the player's location can't be resolved
pub fn invalid_command_handler(world: &TurboWorld, view: &mut View) -> Result<(), EngineError> {
    let location = world.player_location_ref()?;
    view.push(ViewItem::InvalidCommand {
        message: world.story.invalid_command.clone(),
        actions: location.action_commands(),
        exits: location.exit_commands(),
    });
    if let Some(hint) = quest::location_hint(world) {
        view.push(ViewItem::QuestHint(hint));
    }
    Ok(())
}
