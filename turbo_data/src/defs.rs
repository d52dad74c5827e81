use serde::{Deserialize, Serialize};

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level content document loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub locations: Vec<LocationDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub actions: Vec<SpecialActionDef>,
}

/// Game-level metadata, global story text and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub blurb: String,
    pub player: PlayerDef,
    pub intro: IntroDef,
    #[serde(default)]
    pub help: Vec<String>,
    pub invalid_command: String,
    pub exit_message: String,
}

/// Player character definition, including where the adventure begins.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayerDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_location: Id,
}

/// Text shown once when the session starts.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntroDef {
    pub welcome: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub prompt: String,
}

/// Location definition. Exit and action bindings keep their authored order,
/// which is also the order they are listed to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub first_visit_desc: Option<String>,
    #[serde(default)]
    pub visited: bool,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    #[serde(default)]
    pub actions: Vec<ActionBindingDef>,
}

/// A movement command and the location it leads to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub command: String,
    pub to: Id,
}

/// A location-scoped command bound to a special action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionBindingDef {
    pub command: String,
    pub action: Id,
}

/// Item definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub pickup_message: Option<String>,
    #[serde(default)]
    pub use_message: Option<String>,
    #[serde(default)]
    pub quest_item: bool,
}

/// Scripted event reachable through a location's action bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialActionDef {
    pub id: Id,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub requirements: Vec<RequirementDef>,
    #[serde(default)]
    pub effects: Vec<EffectDef>,
    #[serde(default = "default_repeatable")]
    pub repeatable: bool,
    #[serde(default)]
    pub repeat_message: Option<String>,
}

fn default_repeatable() -> bool {
    true
}

/// Preconditions checked before a special action runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequirementDef {
    HasItem {
        item: Id,
        #[serde(default)]
        message: Option<String>,
    },
}

/// Effects applied, in order, once a special action's requirements pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectDef {
    GiveItem { item: Id },
    TriggerRevelation,
    WinGame,
}
