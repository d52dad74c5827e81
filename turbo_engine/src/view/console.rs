//! Terminal presenter.
//!
//! Renders each frame in the order its items were pushed, wrapping text to the
//! terminal width, and finishes with the status line.

use colored::Colorize as _;
use textwrap::{fill, termwidth};

use crate::style::{GameStyle as _, indented_block, normal_block};
use crate::view::icons::{
    ICON_ACTIONS, ICON_BRAIN, ICON_DENIED, ICON_DOG, ICON_ENGINE, ICON_ERROR, ICON_EXITS, ICON_HINT, ICON_HOME,
    ICON_PIN, ICON_QUEST, ICON_SUCCESS,
};
use crate::view::{Presenter, StatusLine, ViewItem};

/// Always-available commands mentioned alongside invalid-command help.
const OTHER_COMMANDS: &str = "'help', 'inventory', 'look', 'stats'";

/// Prints frames to stdout.
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    last_status: Option<StatusLine>,
}
impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for ConsolePresenter {
    fn present(&mut self, frame: &[ViewItem], status: &StatusLine) {
        if frame.is_empty() {
            return;
        }
        for item in frame {
            println!("{}", render_item(item));
        }
        if self.last_status.as_ref() != Some(status) {
            println!("\n{}", render_status(status));
            self.last_status = Some(status.clone());
        }
        println!();
    }
}

/// Render the status line shown under a frame when any of its values changed.
pub fn render_status(status: &StatusLine) -> String {
    let width = termwidth();
    let text = format!(
        "{ICON_PIN} {} | {ICON_QUEST} Items: {} | {}",
        status.location, status.item_count, status.quest
    );
    format!("{:.>width$}\n{}", "status".section_style(), text.status_style())
}

/// Render a single view item as display text.
pub fn render_item(item: &ViewItem) -> String {
    match item {
        ViewItem::Intro {
            title,
            welcome,
            description,
            instructions,
        } => {
            let rule = "=".repeat(61);
            let mut out = vec![
                rule.clone(),
                welcome.highlight_style().to_string(),
                rule,
                fill(description, normal_block()),
            ];
            if !instructions.is_empty() {
                out.push(String::new());
                out.push(fill(instructions, normal_block()));
            }
            if !title.is_empty() {
                out.insert(0, title.subheading_style().to_string());
            }
            out.join("\n")
        },
        ViewItem::TransitionMessage(msg) => {
            format!("\n{}", fill(&format!("{ICON_DOG} {msg}"), normal_block()).transition_style())
        },
        ViewItem::LocationDescription {
            name,
            description,
            actions,
            exits,
        } => {
            let mut out = vec![
                format!("\n--- {ICON_HOME} {} ---", name.location_titlebar_style()),
                fill(description, normal_block()).description_style().to_string(),
            ];
            if !actions.is_empty() {
                out.push(format!("\n{ICON_ACTIONS} You can:"));
                out.extend(bullets(actions, |a| a.action_style().to_string()));
            }
            if !exits.is_empty() {
                out.push(format!("\n{ICON_EXITS} You can go to:"));
                out.extend(bullets(exits, |e| e.exit_style().to_string()));
            }
            out.join("\n")
        },
        ViewItem::QuestHint(lines) => format!("\n{}", quest_lines(lines)),
        ViewItem::ActionDescription(msg) => fill(msg, normal_block()),
        ViewItem::ActionDenied(msg) => {
            fill(&format!("{} {}", ICON_DENIED, msg.denied_style()), normal_block())
        },
        ViewItem::ActionRepeat(msg) => fill(msg, normal_block()).italic().to_string(),
        ViewItem::ItemAcquired { name, message } => format!(
            "{} {}\n{}",
            ICON_SUCCESS.bright_green(),
            name.item_style(),
            fill(message, normal_block())
        ),
        ViewItem::QuestProgress {
            found,
            total,
            flavor,
            hint,
        } => {
            let mut out = vec![format!(
                "\n{ICON_QUEST} {}",
                format!("Progress: You've found {found}/{total} special items!").quest_style()
            )];
            out.extend(flavor.iter().map(|f| fill(f, normal_block())));
            out.extend(hint.iter().map(|h| fill(h, normal_block()).highlight_style().to_string()));
            out.join("\n")
        },
        ViewItem::QuestMessage(lines) => lines
            .iter()
            .map(|line| fill(line, normal_block()))
            .collect::<Vec<_>>()
            .join("\n"),
        ViewItem::MomentOfUnderstanding { title, lines, followup } => {
            banner(title, lines, followup, 50)
        },
        ViewItem::Revelation { title, lines, followup } => banner(title, lines, followup, 60),
        ViewItem::Inventory { owner, items } => {
            if items.is_empty() {
                format!("\n{owner} isn't carrying anything right now.")
            } else {
                let mut out = vec![format!("\n{ICON_QUEST} {}", format!("{owner}'s Current Items:").subheading_style())];
                out.extend(items.iter().map(|line| {
                    fill(
                        &format!("- {}: {}", line.name.item_style(), line.description),
                        indented_block(),
                    )
                }));
                out.join("\n")
            }
        },
        ViewItem::Stats {
            name,
            location,
            items_held,
            quest_found,
            quest_total,
            understanding,
            areas_explored,
        } => {
            let mut out = vec![
                format!("\n--- {name}'s Status ---"),
                format!("Location: {}", location.location_style()),
                format!("Items Found: {items_held}"),
                format!("Quest Progress: {quest_found}/{quest_total} special items"),
            ];
            if *understanding {
                out.push(format!(
                    "{ICON_BRAIN} Understanding: You've realized something important about these items!"
                ));
            }
            out.push(format!("Areas Explored: {areas_explored}"));
            out.join("\n")
        },
        ViewItem::Help(lines) => lines.join("\n"),
        ViewItem::InvalidCommand {
            message,
            actions,
            exits,
        } => {
            let mut out = vec![fill(message, normal_block()), format!("\n{ICON_HINT} You can try:")];
            out.extend(bullets(actions, |a| a.action_style().to_string()));
            if !exits.is_empty() {
                out.push("  Or go to:".to_string());
                out.extend(bullets(exits, |e| e.exit_style().to_string()));
            }
            out.push(format!("  Other commands: {OTHER_COMMANDS}"));
            out.join("\n")
        },
        ViewItem::LocationReminder {
            name,
            actions,
            more_actions,
            exits,
            quest_status,
        } => {
            let mut out = vec![format!("\n{ICON_PIN} Currently in: {}", name.location_style())];
            if !actions.is_empty() {
                let more = if *more_actions { ", and more ('look' to see all)" } else { "" };
                out.push(format!("{ICON_ACTIONS} Can do: {}{more}", actions.join(", ")));
            }
            if !exits.is_empty() {
                out.push(format!("{ICON_EXITS} Can go to: {}", exits.join(", ")));
            }
            if let Some(status) = quest_status {
                out.push(format!("{ICON_QUEST} {}", status.quest_style()));
            }
            out.join("\n")
        },
        ViewItem::Error(msg) => fill(&format!("{:<4}{}", ICON_ERROR, msg.error_style()), normal_block()),
        ViewItem::Farewell(msg) => format!("\n{}", fill(msg, normal_block()).highlight_style()),
        ViewItem::EngineMessage(msg) => format!("{ICON_ENGINE} {}", msg.engine_style()),
    }
}

fn bullets(entries: &[String], style: impl Fn(&str) -> String) -> Vec<String> {
    entries.iter().map(|entry| format!("  - {}", style(entry))).collect()
}

fn quest_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| fill(line, normal_block()).quest_style().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn banner(title: &str, lines: &[String], followup: &[String], rule_width: usize) -> String {
    let rule = "=".repeat(rule_width);
    let mut out = vec![
        format!("\n{rule}"),
        title.highlight_style().to_string(),
        rule.clone(),
        String::new(),
    ];
    out.extend(lines.iter().map(|line| fill(line, normal_block())));
    out.push(rule);
    if !followup.is_empty() {
        out.push(String::new());
        out.push(quest_lines(followup));
    }
    out.join("\n")
}
