//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that manipulate the [`TurboWorld`].
//! [`process_input`] resolves one line of input completely (interpreter and
//! quest controller) and is what the loop, and the tests, drive.

pub mod action;
mod input;
pub mod look;
pub mod movement;
pub mod system;

pub use action::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::command::{BUILTIN_COMMANDS, Command, parse_command};
use crate::quest::{self, ExamineOutcome};
use crate::style::GameStyle;
use crate::view::{Presenter, View, ViewItem};
use crate::{EngineError, TurboWorld};

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Resolve one line of player input against the world.
///
/// Empty input is ignored entirely. Once the session has stopped (quit or a
/// winning effect) further input only produces an engine message.
pub fn process_input(world: &mut TurboWorld, view: &mut View, input: &str) -> ReplControl {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    let command = parse_command(input);
    if command.is_empty() {
        return ReplControl::Continue;
    }
    if !world.running {
        view.push(ViewItem::EngineMessage(
            "The adventure is over. Restart the game to play again.".to_string(),
        ));
        return ReplControl::Quit;
    }

    world.turn_count += 1;
    info!("================> BEGIN TURN {} <================", world.turn_count);

    let mut fresh_understanding = false;
    let result: Result<(), EngineError> = match &command {
        Quit => {
            quit_handler(world, view);
            Ok(())
        },
        Help => {
            help_handler(world, view);
            Ok(())
        },
        Inventory => {
            inventory_handler(world, view);
            Ok(())
        },
        Stats => {
            stats_handler(world, view);
            Ok(())
        },
        Look => look_handler(world, view),
        ExamineAllItems => {
            fresh_understanding = quest::examine_all_items(world, view) == ExamineOutcome::Understood;
            Ok(())
        },
        Other(text) => location_command_handler(world, view, text),
        Empty => Ok(()),
    };

    if let Err(err) = result {
        warn!("command {command:?} failed: {err}");
        view.push(ViewItem::Error(err.to_string()));
    }

    // the understanding moment gets its own turn; the reveal follows on the next one
    if !command.is_quit() && !fresh_understanding {
        quest::check_revelation(world, view);
    }

    if world.running {
        ReplControl::Continue
    } else {
        ReplControl::Quit
    }
}

/// Resolve a non-built-in command: movement first, then the location's special actions.
///
/// # Errors
/// - if the player's location, a destination, or an action can't be resolved
pub fn location_command_handler(world: &mut TurboWorld, view: &mut View, command: &str) -> Result<(), EngineError> {
    if move_to_handler(world, view, command)? {
        return Ok(());
    }
    let action_id = world.player_location_ref()?.action_matching(command).cloned();
    match action_id {
        Some(action_id) => special_action_handler(world, view, &action_id).map(|_| ()),
        None => invalid_command_handler(world, view),
    }
}

/// Terms offered by tab completion: built-ins plus every authored exit and action command.
pub fn completion_terms(world: &TurboWorld) -> Vec<String> {
    let mut terms: Vec<String> = BUILTIN_COMMANDS.iter().map(ToString::to_string).collect();
    for location in world.locations.values() {
        terms.extend(location.exit_commands());
        terms.extend(location.action_commands());
    }
    terms.sort_unstable();
    terms.dedup();
    terms
}

/// Run the main read-eval-print loop until the player quits or the session ends.
///
/// # Errors
/// - if the player's starting location can't be resolved
/// - on terminal input failure
pub fn run_repl(world: &mut TurboWorld, presenter: &mut dyn Presenter) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new(completion_terms(world));

    intro_handler(world, &mut view);
    view.flush(presenter, &world.status_line());

    let intro_prompt = world.story.intro.prompt.clone();
    if !intro_prompt.is_empty()
        && let InputEvent::Eof = input_manager
            .read_line(&format!("{intro_prompt} "))
            .context("reading intro prompt")?
    {
        return Ok(());
    }

    describe_current_location(world, &mut view).context("showing starting location")?;
    view.flush(presenter, &world.status_line());

    let prompt = format!("{} ", "🐕 >".transition_style());
    loop {
        let input_event = input_manager.read_line(&prompt).context("reading player input")?;
        let line = match input_event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush(presenter, &world.status_line());
                continue;
            },
        };

        let control = process_input(world, &mut view, &line);
        view.flush(presenter, &world.status_line());
        if control == ReplControl::Quit {
            break;
        }
    }
    info!("session ended after {} turn(s), won: {}", world.turn_count, world.won);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{ActionBinding, Exit, Location};
    use crate::special::{Effect, SpecialAction};
    use crate::{ItemHolder, Player};

    fn world() -> TurboWorld {
        let mut world = TurboWorld::new_empty();
        world.locations.insert(
            "den".into(),
            Location {
                id: "den".into(),
                name: "Den".into(),
                description: "A den.".into(),
                first_visit_description: None,
                visited: true,
                exits: vec![Exit::new("yard", "yard")],
                actions: vec![ActionBinding {
                    command: "howl".into(),
                    action: "howl".into(),
                }],
            },
        );
        world.locations.insert(
            "yard".into(),
            Location {
                id: "yard".into(),
                name: "Yard".into(),
                description: "A yard.".into(),
                first_visit_description: Some("A big yard!".into()),
                visited: false,
                exits: vec![Exit::new("den", "den")],
                actions: Vec::new(),
            },
        );
        world.actions.insert(
            "howl".into(),
            SpecialAction {
                id: "howl".into(),
                description: Some("Awoo!".into()),
                requirements: Vec::new(),
                effects: vec![Effect::WinGame],
                repeatable: true,
                repeat_message: None,
            },
        );
        world.player = Player::new("Rex", "", "den");
        world
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut world = world();
        let mut view = View::new();
        assert_eq!(process_input(&mut world, &mut view, "   "), ReplControl::Continue);
        assert!(view.is_empty());
        assert_eq!(world.turn_count, 0);
    }

    #[test]
    fn movement_takes_priority_and_renders_destination() {
        let mut world = world();
        let mut view = View::new();
        process_input(&mut world, &mut view, "Yard");
        assert_eq!(world.player.location, "yard");
        assert!(world.locations["yard"].visited);
        assert!(view.items[0].is_transition_message());
        assert!(matches!(
            &view.items[1],
            ViewItem::LocationDescription { description, .. } if description == "A big yard!"
        ));
        assert!(!view.items.iter().any(ViewItem::is_location_reminder));
    }

    #[test]
    fn winning_action_stops_the_session() {
        let mut world = world();
        let mut view = View::new();
        assert_eq!(process_input(&mut world, &mut view, "howl"), ReplControl::Quit);
        assert!(world.won);
        assert!(!world.running);
        assert!(!view.items.iter().any(ViewItem::is_location_reminder));

        let mut view = View::new();
        assert_eq!(process_input(&mut world, &mut view, "look"), ReplControl::Quit);
        assert!(matches!(view.items.as_slice(), [ViewItem::EngineMessage(_)]));
    }

    #[test]
    fn runtime_errors_become_error_items() {
        let mut world = world();
        world.player.location = "nowhere".into();
        let mut view = View::new();
        assert_eq!(process_input(&mut world, &mut view, "sniff"), ReplControl::Continue);
        assert_eq!(
            view.items,
            vec![ViewItem::Error("Error: Location 'nowhere' not found!".into())]
        );
        assert!(world.player.inventory.is_empty());
    }

    #[test]
    fn quit_stops_and_says_goodbye() {
        let mut world = world();
        world.story.exit_message = "Bye!".into();
        world.player.add_item("bone".into());
        let mut view = View::new();
        assert_eq!(process_input(&mut world, &mut view, "exit"), ReplControl::Quit);
        assert_eq!(view.items, vec![ViewItem::Farewell("Bye!".into())]);
        assert!(!world.running);
    }

    #[test]
    fn completion_terms_cover_builtins_and_content() {
        let terms = completion_terms(&world());
        for term in ["inventory", "examine all items", "yard", "den", "howl"] {
            assert!(terms.iter().any(|t| t == term), "missing {term}");
        }
        let mut sorted = terms.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(terms, sorted);
    }
}
