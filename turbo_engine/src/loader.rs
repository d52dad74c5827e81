//! Loader utilities for building a `TurboWorld` from serialized data.
//!
//! World content is loaded from a `WorldDef` (RON), while quest narration
//! remains TOML-backed.

pub mod quest;
pub mod worlddef;

use std::path::Path;

use crate::data_paths::data_path;
use crate::loader::quest::load_quest_config;
use crate::loader::worlddef::{build_world_from_def, load_worlddef};
use crate::{TurboWorld, WorldObject};
use anyhow::{Context, Result, bail};
use log::info;
use turbo_data::WorldDef;

/// Load the `TurboWorld` from the bundled data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or missing references.
pub fn load_world() -> Result<TurboWorld> {
    load_world_from(&data_path("world.ron"), &data_path("quest.toml"))
}

/// Load a `TurboWorld` from explicit world and quest file paths.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or missing references.
/// A missing or malformed quest file is not an error (defaults are used).
pub fn load_world_from(world_ron_path: &Path, quest_toml_path: &Path) -> Result<TurboWorld> {
    let worlddef = load_worlddef(world_ron_path).context("while loading worlddef from file")?;
    validate_worlddef(&worlddef)?;
    let mut world = build_world_from_def(&worlddef).context("while building world from worlddef")?;
    info!("{} locations added to TurboWorld", world.locations.len());
    info!(
        "{} items added to TurboWorld ({} quest items)",
        world.items.len(),
        world.total_quest_items()
    );
    info!("{} special actions added to TurboWorld", world.actions.len());

    world.quest = load_quest_config(quest_toml_path);
    info!(
        "player \"{}\" added to TurboWorld at {}",
        world.player.name(),
        world.player.location
    );
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = turbo_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
