//! Special actions.
//!
//! A special action is a scripted, location-scoped event: a player command bound
//! to it in the current location runs its requirement checks, prints its
//! description, and applies its effects in order.

pub mod effect;
pub mod requirement;

pub use effect::Effect;
pub use requirement::Requirement;

use log::info;
use serde::{Deserialize, Serialize};

use crate::view::{View, ViewItem};
use crate::{EngineError, Id, TurboWorld};

/// Description used when an action has none authored.
pub const DEFAULT_ACTION_DESCRIPTION: &str = "Something happens...";
/// Repeat text used when a one-shot action has none authored.
pub const DEFAULT_REPEAT_MESSAGE: &str = "You've already done that.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialAction {
    pub id: Id,
    pub description: Option<String>,
    pub requirements: Vec<Requirement>,
    pub effects: Vec<Effect>,
    pub repeatable: bool,
    pub repeat_message: Option<String>,
}
impl SpecialAction {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_ACTION_DESCRIPTION)
    }

    pub fn repeat_text(&self) -> &str {
        self.repeat_message.as_deref().unwrap_or(DEFAULT_REPEAT_MESSAGE)
    }
}

/// How a special action invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Requirements passed and every effect was applied.
    Completed,
    /// A one-shot action that already ran; only the repeat message was shown.
    Repeated,
    /// A requirement wasn't met; nothing changed.
    Denied,
}

/// Run the special action `action_id` against the world.
///
/// # Errors
/// - if the action id is unknown
/// - if any effect refers to an unknown item (checked before anything is applied)
pub fn execute_special_action(
    world: &mut TurboWorld,
    view: &mut View,
    action_id: &str,
) -> Result<ActionOutcome, EngineError> {
    let action = world
        .actions
        .get(action_id)
        .cloned()
        .ok_or_else(|| EngineError::UnknownAction(action_id.to_string()))?;

    if world.player.has_completed(&action.id) {
        info!("└─ action: {} already completed", action.id);
        view.push(ViewItem::ActionRepeat(action.repeat_text().to_string()));
        return Ok(ActionOutcome::Repeated);
    }

    if let Some(unmet) = action.requirements.iter().find(|req| !req.is_met(world)) {
        info!("└─ action: {} denied ({unmet:?})", action.id);
        view.push(ViewItem::ActionDenied(unmet.denial_message(world)));
        return Ok(ActionOutcome::Denied);
    }

    for effect in &action.effects {
        effect.check_refs(world)?;
    }

    info!("└─ action: {} executing", action.id);
    view.push(ViewItem::ActionDescription(action.description_text().to_string()));
    for effect in &action.effects {
        effect::apply_effect(world, view, effect)?;
    }

    if !action.repeatable {
        world.player.mark_completed(&action.id);
    }
    Ok(ActionOutcome::Completed)
}
