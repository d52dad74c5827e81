//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which aggregates them until the
//! end of the turn. Variants carry only data; styling and layout belong to the presenter.

use serde::{Deserialize, Serialize};
use variantly::Variantly;

/// One carried item, as listed by the `inventory` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub name: String,
    pub description: String,
}

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Variantly)]
pub enum ViewItem {
    /// A special action's requirement wasn't met.
    ActionDenied(String),
    ActionDescription(String),
    /// A one-shot action was invoked again.
    ActionRepeat(String),
    EngineMessage(String),
    Error(String),
    Farewell(String),
    Help(Vec<String>),
    Intro {
        title: String,
        welcome: String,
        description: String,
        instructions: String,
    },
    InvalidCommand {
        message: String,
        actions: Vec<String>,
        exits: Vec<String>,
    },
    Inventory {
        owner: String,
        items: Vec<InventoryLine>,
    },
    ItemAcquired {
        name: String,
        message: String,
    },
    LocationDescription {
        name: String,
        description: String,
        actions: Vec<String>,
        exits: Vec<String>,
    },
    LocationReminder {
        name: String,
        /// At most three sample commands.
        actions: Vec<String>,
        more_actions: bool,
        exits: Vec<String>,
        quest_status: Option<String>,
    },
    MomentOfUnderstanding {
        title: String,
        lines: Vec<String>,
        followup: Vec<String>,
    },
    QuestHint(Vec<String>),
    QuestMessage(Vec<String>),
    QuestProgress {
        found: usize,
        total: usize,
        flavor: Option<String>,
        hint: Option<String>,
    },
    Revelation {
        title: String,
        lines: Vec<String>,
        followup: Vec<String>,
    },
    Stats {
        name: String,
        location: String,
        items_held: usize,
        quest_found: usize,
        quest_total: usize,
        understanding: bool,
        areas_explored: usize,
    },
    TransitionMessage(String),
}
