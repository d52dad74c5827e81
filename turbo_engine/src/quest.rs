//! Quest controller.
//!
//! The quest runs through three phases, derived entirely from the player's
//! narrative flags:
//!
//! * `Exploring` until "examine all items" succeeds while every quest item is held,
//! * `Understanding` until the final revelation fires,
//! * `Revealed` from then on.
//!
//! The revelation is gated jointly by understanding and by a `trigger_revelation`
//! effect having been applied, in either order. The REPL calls
//! [`check_revelation`] after each processed command.

use log::info;

use crate::view::{View, ViewItem};
use crate::{Player, TurboWorld};

/// Narrative phase of the quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestPhase {
    Exploring,
    Understanding,
    Revealed,
}
impl QuestPhase {
    pub fn of(player: &Player) -> QuestPhase {
        if player.revelation_triggered {
            QuestPhase::Revealed
        } else if player.understanding_triggered {
            QuestPhase::Understanding
        } else {
            QuestPhase::Exploring
        }
    }
}

/// Result of the "examine all items" command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamineOutcome {
    MissingItems,
    Understood,
    AlreadyUnderstood,
}

/// Compare all collected quest items, possibly triggering the moment of understanding.
pub fn examine_all_items(world: &mut TurboWorld, view: &mut View) -> ExamineOutcome {
    if !world.has_all_quest_items() {
        view.push(ViewItem::QuestMessage(world.quest.examine.missing.clone()));
        return ExamineOutcome::MissingItems;
    }
    if world.player.understanding_triggered {
        view.push(ViewItem::QuestMessage(world.quest.examine.already.clone()));
        return ExamineOutcome::AlreadyUnderstood;
    }

    let text = &world.quest.understanding;
    view.push(ViewItem::MomentOfUnderstanding {
        title: text.title.clone(),
        lines: text.lines.clone(),
        followup: text.followup.clone(),
    });
    world.player.understanding_triggered = true;
    info!("quest: understanding reached on turn {}", world.turn_count);
    ExamineOutcome::Understood
}

/// Fire the final revelation if understanding and the revelation trigger are
/// both in place and it hasn't fired yet. Returns true if it fired.
pub fn check_revelation(world: &mut TurboWorld, view: &mut View) -> bool {
    let player = &world.player;
    if !player.understanding_triggered || !player.revelation_unlocked || player.revelation_triggered {
        return false;
    }

    let text = &world.quest.revelation;
    view.push(ViewItem::Revelation {
        title: text.title.clone(),
        lines: text.lines.clone(),
        followup: text.followup.clone(),
    });
    world.player.revelation_triggered = true;
    world.won = true;
    info!("quest: final revelation on turn {}", world.turn_count);
    true
}

/// Report progress after a quest item has been added to the inventory.
pub fn announce_progress(world: &TurboWorld, view: &mut View) {
    let found = world.quest_items_found();
    let total = world.total_quest_items();
    let progress = &world.quest.progress;
    let hint = (found >= total && !progress.complete_hint.is_empty()).then(|| progress.complete_hint.clone());
    view.push(ViewItem::QuestProgress {
        found,
        total,
        flavor: progress.flavor_for(found, total).map(ToString::to_string),
        hint,
    });
    info!("quest: {found}/{total} quest items found");
}

/// Quest status label shown in the status line and location reminders.
pub fn status_label(world: &TurboWorld) -> String {
    let status = &world.quest.status;
    match world.phase() {
        QuestPhase::Revealed => status.revealed.clone(),
        QuestPhase::Understanding => status.understanding.clone(),
        QuestPhase::Exploring => match world.quest_items_found() {
            0 => status.starting.clone(),
            found => status.exploring_label(found, world.total_quest_items()),
        },
    }
}

/// Phase hint appended to location descriptions, if one applies right now.
pub fn location_hint(world: &TurboWorld) -> Option<Vec<String>> {
    let hints = &world.quest.hints;
    let lines = match world.phase() {
        QuestPhase::Exploring if world.has_all_quest_items() => &hints.all_items,
        QuestPhase::Understanding => &hints.awaiting_revelation,
        _ => return None,
    };
    (!lines.is_empty()).then(|| lines.clone())
}
