//! Effects applied by special actions.
//!
//! Effects run in declared order once an action's requirements pass. Every item
//! an effect refers to is checked with [`Effect::check_refs`] before the first
//! effect is applied, so a bad reference never leaves the world half-changed.

use log::info;
use serde::{Deserialize, Serialize};
use turbo_data::EffectDef;

use crate::quest;
use crate::view::{View, ViewItem};
use crate::{EngineError, Id, ItemHolder, TurboWorld};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    GiveItem(Id),
    TriggerRevelation,
    WinGame,
}
impl Effect {
    /// Confirm that everything this effect refers to exists.
    ///
    /// # Errors
    /// - if an item id is unknown
    pub fn check_refs(&self, world: &TurboWorld) -> Result<(), EngineError> {
        match self {
            Effect::GiveItem(item_id) => world.item_ref(item_id).map(|_| ()),
            Effect::TriggerRevelation | Effect::WinGame => Ok(()),
        }
    }
}

impl From<&EffectDef> for Effect {
    fn from(def: &EffectDef) -> Self {
        match def {
            EffectDef::GiveItem { item } => Effect::GiveItem(item.clone()),
            EffectDef::TriggerRevelation => Effect::TriggerRevelation,
            EffectDef::WinGame => Effect::WinGame,
        }
    }
}

/// Apply a single effect to the world.
///
/// # Errors
/// - if a referenced item is unknown
pub fn apply_effect(world: &mut TurboWorld, view: &mut View, effect: &Effect) -> Result<(), EngineError> {
    match effect {
        Effect::GiveItem(item_id) => give_item(world, view, item_id)?,
        Effect::TriggerRevelation => trigger_revelation(world, view),
        Effect::WinGame => win_game(world),
    }
    Ok(())
}

fn give_item(world: &mut TurboWorld, view: &mut View, item_id: &str) -> Result<(), EngineError> {
    let item = world.item_ref(item_id)?.clone();
    info!("└─ effect: GiveItem({item_id})");
    let newly_added = world.player.add_item(item.id.clone());
    view.push(ViewItem::ItemAcquired {
        name: item.name.clone(),
        message: item.pickup_text(),
    });
    if newly_added && item.quest_item {
        quest::announce_progress(world, view);
    }
    Ok(())
}

fn trigger_revelation(world: &mut TurboWorld, view: &mut View) {
    info!("└─ effect: TriggerRevelation");
    world.player.revelation_unlocked = true;
    if !world.player.understanding_triggered {
        view.push(ViewItem::QuestMessage(world.quest.revelation.not_ready.clone()));
    }
}

fn win_game(world: &mut TurboWorld) {
    info!("└─ effect: WinGame");
    world.won = true;
    world.running = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Item;

    fn world_with(id: &str, quest_item: bool) -> TurboWorld {
        let mut world = TurboWorld::new_empty();
        world.items.insert(
            id.into(),
            Item {
                id: id.into(),
                name: "Colorful Helmet".into(),
                description: String::new(),
                pickup_message: Some("You carefully retrieve the helmet.".into()),
                use_message: None,
                quest_item,
            },
        );
        world
    }

    #[test]
    fn give_quest_item_reports_progress() {
        let mut world = world_with("helmet", true);
        let mut view = View::new();
        apply_effect(&mut world, &mut view, &Effect::GiveItem("helmet".into())).expect("known item");
        assert!(world.player.contains_item("helmet"));
        assert_eq!(
            view.items[0],
            ViewItem::ItemAcquired {
                name: "Colorful Helmet".into(),
                message: "You carefully retrieve the helmet.".into(),
            }
        );
        assert!(matches!(
            view.items[1],
            ViewItem::QuestProgress { found: 1, total: 1, .. }
        ));
    }

    #[test]
    fn give_ordinary_item_has_no_progress() {
        let mut world = world_with("key", false);
        let mut view = View::new();
        apply_effect(&mut world, &mut view, &Effect::GiveItem("key".into())).expect("known item");
        assert_eq!(view.items.len(), 1);
    }

    #[test]
    fn trigger_revelation_before_understanding_says_not_ready() {
        let mut world = TurboWorld::new_empty();
        let mut view = View::new();
        apply_effect(&mut world, &mut view, &Effect::TriggerRevelation).expect("no refs");
        assert!(world.player.revelation_unlocked);
        assert!(!world.player.revelation_triggered);
        assert_eq!(
            view.items,
            vec![ViewItem::QuestMessage(world.quest.revelation.not_ready.clone())]
        );

        let mut view = View::new();
        world.player.understanding_triggered = true;
        apply_effect(&mut world, &mut view, &Effect::TriggerRevelation).expect("no refs");
        assert!(view.is_empty());
    }

    #[test]
    fn win_game_stops_the_session() {
        let mut world = TurboWorld::new_empty();
        let mut view = View::new();
        apply_effect(&mut world, &mut view, &Effect::WinGame).expect("no refs");
        assert!(world.won);
        assert!(!world.running);
    }

    #[test]
    fn check_refs_flags_unknown_items() {
        let world = TurboWorld::new_empty();
        assert_eq!(
            Effect::GiveItem("ghost".into()).check_refs(&world),
            Err(EngineError::UnknownItem("ghost".into()))
        );
        assert_eq!(Effect::WinGame.check_refs(&world), Ok(()));
    }
}
