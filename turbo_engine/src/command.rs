//! Command module
//!
//! Normalizes raw player input and recognizes the built-in commands. Anything
//! that isn't a built-in is handed back as `Command::Other` so the REPL can
//! resolve it against the current location's exits and special actions.
use variantly;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    Empty,
    ExamineAllItems,
    Help,
    Inventory,
    Look,
    Quit,
    Stats,
    /// A normalized command that must be resolved against the current location.
    Other(String),
}

/// Trim, lowercase, and collapse runs of whitespace to a single space.
pub fn normalize_command(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Parses an input string and returns the corresponding `Command`.
pub fn parse_command(input: &str) -> Command {
    let normalized = normalize_command(input);
    let words: Vec<&str> = normalized.split(' ').filter(|w| !w.is_empty()).collect();
    match words.as_slice() {
        [] => Command::Empty,
        ["quit" | "exit"] => Command::Quit,
        ["help"] => Command::Help,
        ["inventory" | "i"] => Command::Inventory,
        ["stats"] => Command::Stats,
        ["look" | "l"] => Command::Look,
        ["examine", "all", "items"] | ["examine" | "compare", "items"] | ["look", "at", "all", "items"] => {
            Command::ExamineAllItems
        },
        _ => Command::Other(normalized),
    }
}

/// Built-in command words offered for tab completion.
pub const BUILTIN_COMMANDS: &[&str] = &[
    "quit",
    "exit",
    "help",
    "inventory",
    "stats",
    "look",
    "examine all items",
    "compare items",
    "look at all items",
];
