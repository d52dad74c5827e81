mod common;

use common::{bundled_world, run, run_all};
use turbo_engine::{ItemHolder, QuestPhase, ViewItem};

const ROUTE_TO_SHED: &[&str] = &[
    "kitchen",
    "get step stool",
    "jump on counter",
    "balcony",
    "examine storage box",
    "garden",
    "dig here",
    "tool shed",
];

#[test]
fn full_walkthrough_reaches_the_revelation() {
    let mut world = bundled_world();
    run_all(&mut world, ROUTE_TO_SHED);
    assert_eq!(world.player.location, "tool_shed");
    assert_eq!(world.quest_items_found(), 2);

    let items = run(&mut world, "unlock shed");
    assert!(world.player.contains_item("small_mtb_bike"));
    assert!(world.player.revelation_unlocked);
    assert!(items.iter().any(ViewItem::is_quest_progress));
    // unlocked before understanding, so the reveal has to wait
    assert!(items.iter().any(|item| matches!(item, ViewItem::QuestMessage(lines)
        if *lines == world.quest.revelation.not_ready)));
    assert!(!items.iter().any(ViewItem::is_revelation));

    let items = run(&mut world, "examine all items");
    assert!(items.iter().any(ViewItem::is_moment_of_understanding));
    assert!(!items.iter().any(ViewItem::is_revelation));
    assert_eq!(world.phase(), QuestPhase::Understanding);
    assert!(!world.won);

    let items = run(&mut world, "look");
    assert!(items.iter().any(ViewItem::is_revelation));
    assert_eq!(world.phase(), QuestPhase::Revealed);
    assert!(world.won);
    assert!(world.running);

    let items = run(&mut world, "look");
    assert!(!items.iter().any(ViewItem::is_revelation));

    run(&mut world, "quit");
    assert!(!world.running);
    assert!(world.won);
}

#[test]
fn unlocking_without_the_key_is_denied() {
    let mut world = bundled_world();
    run_all(&mut world, &["kitchen", "balcony", "garden", "tool shed"]);
    let items = run(&mut world, "unlock shed");
    assert_eq!(
        items[0],
        ViewItem::ActionDenied("You need the key to unlock this shed.".into())
    );
    assert!(!world.player.contains_item("small_mtb_bike"));
    assert!(!world.player.revelation_unlocked);
    assert!(items.iter().any(ViewItem::is_location_reminder));
}

#[test]
fn unknown_command_is_rejected_with_options() {
    let mut world = bundled_world();
    let items = run(&mut world, "fly to the moon");
    match &items[0] {
        ViewItem::InvalidCommand { message, actions, exits } => {
            assert_eq!(*message, world.story.invalid_command);
            assert_eq!(actions[0], "follow maxwell's gaze");
            assert_eq!(*exits, vec!["kitchen".to_string(), "bedroom".to_string()]);
        },
        other => panic!("expected an invalid command response, got {other:?}"),
    }
    assert_eq!(world.player.location, "living_room");
    assert!(world.player.inventory.is_empty());
}

#[test]
fn exits_match_by_command_or_destination_id() {
    let mut world = bundled_world();
    run(&mut world, "  KITCHEN ");
    assert_eq!(world.player.location, "kitchen");
    run(&mut world, "living room");
    assert_eq!(world.player.location, "living_room");

    run(&mut world, "kitchen");
    run(&mut world, "Living_Room");
    assert_eq!(world.player.location, "living_room");
    assert!(world.player.discovered.contains("kitchen"));
}

#[test]
fn first_visit_description_is_shown_once() {
    let mut world = bundled_world();
    let first = run(&mut world, "bedroom");
    let again = {
        run(&mut world, "living room");
        run(&mut world, "bedroom")
    };
    let description = |items: &[ViewItem]| {
        items.iter().find_map(|item| match item {
            ViewItem::LocationDescription { description, .. } => Some(description.clone()),
            _ => None,
        })
    };
    let bedroom = &world.locations["bedroom"];
    assert_eq!(description(&first), bedroom.first_visit_description.clone());
    assert_eq!(description(&again), Some(bedroom.description.clone()));
}

#[test]
fn one_shot_action_repeats_its_message() {
    let mut world = bundled_world();
    run(&mut world, "kitchen");
    let first = run(&mut world, "get step stool");
    assert!(first[0].is_action_description());
    assert!(world.player.contains_item("step_stool"));

    let second = run(&mut world, "get step stool");
    assert_eq!(
        second[0],
        ViewItem::ActionRepeat("You've already gotten the step stool from this cabinet.".into())
    );
    assert!(!second.iter().any(ViewItem::is_item_acquired));
    assert_eq!(world.player.inventory.len(), 1);
}

#[test]
fn repeatable_action_runs_every_time() {
    let mut world = bundled_world();
    run(&mut world, "kitchen");
    for _ in 0..2 {
        let items = run(&mut world, "examine cabinet");
        assert!(items[0].is_action_description());
    }
}

#[test]
fn examining_items_early_changes_nothing() {
    let mut world = bundled_world();
    run_all(&mut world, &["kitchen", "get step stool", "jump on counter"]);
    let items = run(&mut world, "examine all items");
    assert_eq!(items, vec![ViewItem::QuestMessage(world.quest.examine.missing.clone())]);
    assert!(!world.player.understanding_triggered);
    assert_eq!(world.phase(), QuestPhase::Exploring);
}

#[test]
fn quest_counter_never_decreases() {
    let mut world = bundled_world();
    let mut last = 0;
    for input in ROUTE_TO_SHED.iter().chain(&["unlock shed", "examine inside", "garden", "dig here"]) {
        run(&mut world, input);
        let found = world.quest_items_found();
        assert!(found >= last, "counter dropped after '{input}'");
        last = found;
    }
    assert_eq!(last, 3);
}

#[test]
fn builtins_work_everywhere() {
    let mut world = bundled_world();
    run(&mut world, "kitchen");
    assert!(matches!(run(&mut world, "i")[0], ViewItem::Inventory { .. }));
    assert!(run(&mut world, "l").iter().any(ViewItem::is_location_description));
    assert!(run(&mut world, "help")[0].is_help());
    match &run(&mut world, "stats")[0] {
        ViewItem::Stats { location, areas_explored, .. } => {
            assert_eq!(location, "Kitchen");
            assert_eq!(*areas_explored, 2);
        },
        other => panic!("expected stats, got {other:?}"),
    }
}

#[test]
fn status_line_follows_progress() {
    let mut world = bundled_world();
    assert_eq!(world.status_line().quest, "Starting...");
    run_all(&mut world, &["kitchen", "get step stool", "jump on counter"]);
    let status = world.status_line();
    assert_eq!(status.location, "Kitchen");
    assert_eq!(status.item_count, 2);
    assert_eq!(status.quest, "Phase 1: 1/3 special items found");
}
