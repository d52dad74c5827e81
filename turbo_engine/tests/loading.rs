mod common;

use std::io::Write;

use common::{bundled_world, data_file};
use turbo_engine::loader::quest::QuestConfig;
use turbo_engine::{QuestPhase, load_world_from};

const SMALL_WORLD: &str = r#"(
    game: (
        title: "Porch Test",
        player: (name: "Rex", start_location: "porch"),
        intro: (welcome: "Hi"),
        invalid_command: "Huh?",
        exit_message: "Bye",
    ),
    locations: [
        (
            id: "porch",
            name: "Porch",
            desc: "A porch.",
            exits: [(command: "yard", to: "yard")],
            actions: [(command: "sniff", action: "sniff")],
        ),
    ],
    items: [(id: "bone", name: "Bone", desc: "A bone.", quest_item: true)],
    actions: [(id: "sniff", effects: [giveItem(item: "bone")])],
)"#;

fn write_temp(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(text.as_bytes()).expect("write temp file");
    file
}

#[test]
fn bundled_world_loads_with_expected_content() {
    let world = bundled_world();
    assert_eq!(world.story.title, "Turbo's Quest");
    assert_eq!(world.player.name, "Turbo");
    assert_eq!(world.player.location, "living_room");
    assert!(world.player.discovered.contains("living_room"));
    assert_eq!(world.locations.len(), 6);
    assert_eq!(world.total_quest_items(), 3);
    assert_eq!(world.phase(), QuestPhase::Exploring);
    assert!(world.running);
    assert!(!world.won);
    assert!(world.locations.values().all(|location| !location.visited));
}

#[test]
fn bundled_quest_file_matches_built_in_text() {
    let world = bundled_world();
    assert_eq!(world.quest, QuestConfig::default());
}

#[test]
fn dangling_exit_fails_to_load() {
    let broken = SMALL_WORLD.replace(r#"to: "yard""#, r#"to: "moon""#);
    let file = write_temp(&broken);
    let err = load_world_from(file.path(), &data_file("quest.toml")).expect_err("dangling exit");
    let message = format!("{err:#}");
    assert!(message.contains("missing location 'moon'"), "{message}");
}

#[test]
fn dangling_item_in_effect_fails_to_load() {
    let broken = SMALL_WORLD
        .replace(r#"to: "yard""#, r#"to: "porch""#)
        .replace(r#"giveItem(item: "bone")"#, r#"giveItem(item: "ball")"#);
    let file = write_temp(&broken);
    let err = load_world_from(file.path(), &data_file("quest.toml")).expect_err("dangling item");
    assert!(format!("{err:#}").contains("missing item 'ball'"));
}

#[test]
fn missing_quest_file_uses_defaults() {
    let valid = SMALL_WORLD.replace(r#"to: "yard""#, r#"to: "porch""#);
    let file = write_temp(&valid);
    let world = load_world_from(file.path(), &data_file("no_such_quest.toml")).expect("valid world");
    assert_eq!(world.quest, QuestConfig::default());
    assert_eq!(world.player.location, "porch");
    assert_eq!(world.actions["sniff"].description_text(), "Something happens...");
}

#[test]
fn unreadable_world_file_is_an_error() {
    assert!(load_world_from(&data_file("no_such_world.ron"), &data_file("quest.toml")).is_err());
    let file = write_temp("( game: ");
    assert!(load_world_from(file.path(), &data_file("quest.toml")).is_err());
}
