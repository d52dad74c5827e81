//! Preconditions for special actions.

use serde::{Deserialize, Serialize};
use turbo_data::RequirementDef;

use crate::{Id, ItemHolder, TurboWorld, WorldObject};

/// A condition that must hold before a special action may run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirement {
    HasItem { item: Id, message: Option<String> },
}
impl Requirement {
    pub fn is_met(&self, world: &TurboWorld) -> bool {
        match self {
            Requirement::HasItem { item, .. } => world.player.contains_item(item),
        }
    }

    /// Message shown when this requirement blocks an action.
    pub fn denial_message(&self, world: &TurboWorld) -> String {
        match self {
            Requirement::HasItem { item, message } => message.clone().unwrap_or_else(|| {
                let name = world.items.get(item).map_or(item.as_str(), |it| it.name());
                format!("You need {name} to do that.")
            }),
        }
    }
}

impl From<&RequirementDef> for Requirement {
    fn from(def: &RequirementDef) -> Self {
        match def {
            RequirementDef::HasItem { item, message } => Requirement::HasItem {
                item: item.clone(),
                message: message.clone(),
            },
        }
    }
}
