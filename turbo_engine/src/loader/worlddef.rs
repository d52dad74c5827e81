//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use turbo_data::{ExitDef, GameDef, ItemDef, LocationDef, SpecialActionDef, WorldDef};

use crate::item::Item;
use crate::location::{ActionBinding, Exit, Location};
use crate::player::Player;
use crate::special::SpecialAction;
use crate::world::{Intro, Story, TurboWorld};

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - if the file can't be read or isn't valid RON for a `WorldDef`
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Convert a `WorldDef` into a populated `TurboWorld` (quest narration is loaded separately).
///
/// # Errors
/// - if the player's starting location isn't among the defined locations
pub fn build_world_from_def(def: &WorldDef) -> Result<TurboWorld> {
    let mut world = TurboWorld::new_empty();
    world.story = story_from_def(&def.game);

    for location_def in &def.locations {
        let location = location_from_def(location_def);
        world.locations.insert(location.id.clone(), location);
    }

    for item_def in &def.items {
        let item = item_from_def(item_def);
        world.items.insert(item.id.clone(), item);
    }

    for action_def in &def.actions {
        let action = action_from_def(action_def);
        world.actions.insert(action.id.clone(), action);
    }

    let player_def = &def.game.player;
    if !world.locations.contains_key(&player_def.start_location) {
        bail!("player start location '{}' is not a defined location", player_def.start_location);
    }
    world.player = Player::new(&player_def.name, &player_def.description, &player_def.start_location);

    Ok(world)
}

fn story_from_def(def: &GameDef) -> Story {
    Story {
        title: def.title.clone(),
        author: def.author.clone(),
        version: def.version.clone(),
        blurb: def.blurb.clone(),
        intro: Intro {
            welcome: def.intro.welcome.clone(),
            description: def.intro.description.clone(),
            instructions: def.intro.instructions.clone(),
            prompt: def.intro.prompt.clone(),
        },
        help: def.help.clone(),
        invalid_command: def.invalid_command.clone(),
        exit_message: def.exit_message.clone(),
    }
}

fn location_from_def(def: &LocationDef) -> Location {
    Location {
        id: def.id.clone(),
        name: def.name.clone(),
        description: def.desc.clone(),
        first_visit_description: def.first_visit_desc.clone(),
        visited: def.visited,
        exits: def.exits.iter().map(exit_from_def).collect(),
        actions: def
            .actions
            .iter()
            .map(|binding| ActionBinding {
                command: binding.command.clone(),
                action: binding.action.clone(),
            })
            .collect(),
    }
}

fn exit_from_def(def: &ExitDef) -> Exit {
    Exit::new(&def.command, &def.to)
}

fn item_from_def(def: &ItemDef) -> Item {
    Item {
        id: def.id.clone(),
        name: def.name.clone(),
        description: def.desc.clone(),
        pickup_message: def.pickup_message.clone(),
        use_message: def.use_message.clone(),
        quest_item: def.quest_item,
    }
}

fn action_from_def(def: &SpecialActionDef) -> SpecialAction {
    SpecialAction {
        id: def.id.clone(),
        description: def.desc.clone(),
        requirements: def.requirements.iter().map(Into::into).collect(),
        effects: def.effects.iter().map(Into::into).collect(),
        repeatable: def.repeatable,
        repeat_message: def.repeat_message.clone(),
    }
}
