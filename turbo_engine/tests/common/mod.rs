#![allow(dead_code)]

use std::path::PathBuf;

use turbo_engine::{TurboWorld, View, ViewItem, load_world_from, process_input};

pub fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

pub fn bundled_world() -> TurboWorld {
    load_world_from(&data_file("world.ron"), &data_file("quest.toml")).expect("bundled world loads")
}

/// Feed one command and return everything it produced.
pub fn run(world: &mut TurboWorld, input: &str) -> Vec<ViewItem> {
    let mut view = View::new();
    process_input(world, &mut view, input);
    view.take_frame()
}

/// Feed several commands in order, discarding their output.
pub fn run_all(world: &mut TurboWorld, inputs: &[&str]) {
    for input in inputs {
        run(world, input);
    }
}
