#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Turbo's Quest engine.
//!
//! Loads a small, data-driven adventure (locations, items, special actions and
//! quest narration) and runs it one command at a time. Handlers push semantic
//! [`ViewItem`]s; a [`Presenter`] decides how they look.

pub const TURBO_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod error;
pub mod item;
pub mod loader;
pub mod location;
pub mod player;
pub mod quest;
pub mod repl;
pub mod special;
pub mod style;
pub mod view;
pub mod world;

pub use turbo_data::Id;

// Re-exports for convenience
pub use error::EngineError;
pub use item::{Item, ItemHolder};
pub use loader::{load_world, load_world_from};
pub use location::Location;
pub use player::Player;
pub use quest::QuestPhase;
pub use repl::{ReplControl, process_input, run_repl};
pub use special::SpecialAction;
pub use view::{ConsolePresenter, Presenter, StatusLine, View, ViewItem};
pub use world::{TurboWorld, WorldObject};
