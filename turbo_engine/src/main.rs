#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Turbo's Quest **
//! A dog, a cat, and a secret.

use turbo_engine::style::GameStyle;
use turbo_engine::{ConsolePresenter, TURBO_VERSION, WorldObject, load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;

use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Turbo's Quest world (engine v{TURBO_VERSION})...");
    let mut world = load_world().context("while loading TurboWorld")?;
    info!("TurboWorld loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("while clearing the screen")?;
    info!("Starting the game!");

    println!("{:^64}", world.story.title.to_uppercase().bright_yellow().underline());
    if !world.story.author.is_empty() {
        println!("{:^64}", world.story.author.description_style());
    }
    println!(
        "\nYou are {}, {}\n",
        world.player.name().bold().bright_blue(),
        world.player.description()
    );

    let mut presenter = ConsolePresenter::new();
    run_repl(&mut world, &mut presenter)
}
