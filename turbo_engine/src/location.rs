//! Location definitions and command lookup.
//!
//! A location lists its exits and its location-scoped special actions in the
//! order they were authored. Both are matched against already-normalized
//! player commands.

use serde::{Deserialize, Serialize};

use crate::{Id, WorldObject};

/// A movement command and the location it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    pub command: String,
    pub to: Id,
}
impl Exit {
    pub fn new(command: &str, to: &str) -> Self {
        Self {
            command: command.to_string(),
            to: to.to_string(),
        }
    }

    /// True if `command` names this exit, either by its command key or its destination id.
    pub fn matches(&self, command: &str) -> bool {
        self.command == command || self.to.eq_ignore_ascii_case(command)
    }
}

/// A command bound to a special action while the player is in this location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBinding {
    pub command: String,
    pub action: Id,
}

/// Any visitable place in the game world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub first_visit_description: Option<String>,
    pub visited: bool,
    pub exits: Vec<Exit>,
    pub actions: Vec<ActionBinding>,
}
impl WorldObject for Location {
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
impl Location {
    /// Find the exit reached by `command`, if any.
    pub fn exit_matching(&self, command: &str) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.matches(command))
    }

    /// Find the special action bound to `command` here, if any.
    pub fn action_matching(&self, command: &str) -> Option<&Id> {
        self.actions
            .iter()
            .find(|binding| binding.command == command)
            .map(|binding| &binding.action)
    }

    pub fn action_commands(&self) -> Vec<String> {
        self.actions.iter().map(|binding| binding.command.clone()).collect()
    }

    pub fn exit_commands(&self) -> Vec<String> {
        self.exits.iter().map(|exit| exit.command.clone()).collect()
    }

    /// Description to render now: the first-visit variant until the location
    /// has been visited, the repeat variant afterwards.
    pub fn current_description(&self) -> &str {
        match (&self.first_visit_description, self.visited) {
            (Some(first), false) => first,
            _ => &self.description,
        }
    }
}
