//! Quest narration configuration and loader.
//!
//! Every piece of text the quest controller emits (progress flavor, the
//! moment of understanding, the final revelation, status labels and location
//! hints) lives in `quest.toml`. Any section or key missing from the file
//! keeps its built-in default, and a missing or malformed file falls back to
//! the defaults entirely.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete quest narration configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestConfig {
    pub progress: ProgressText,
    pub examine: ExamineText,
    pub understanding: UnderstandingText,
    pub revelation: RevelationText,
    pub status: StatusText,
    pub hints: HintText,
}

/// Text shown when a quest item is picked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressText {
    /// Flavor for the 1st, 2nd, ... quest item found (the last entry repeats if there are more items).
    pub flavor: Vec<String>,
    /// Flavor once the final quest item is found.
    pub complete: String,
    /// Hint appended once the final quest item is found.
    pub complete_hint: String,
}

/// Responses to "examine all items" outside the understanding moment itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamineText {
    pub missing: Vec<String>,
    pub already: Vec<String>,
}

/// The multi-line "moment of understanding" narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnderstandingText {
    pub title: String,
    pub lines: Vec<String>,
    pub followup: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevelationText {
    /// Shown when the revelation is unlocked before understanding is reached.
    pub not_ready: Vec<String>,
    pub title: String,
    pub lines: Vec<String>,
    pub followup: Vec<String>,
}

/// Quest status labels. `exploring` may use `{found}` and `{total}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusText {
    pub starting: String,
    pub exploring: String,
    pub understanding: String,
    pub revealed: String,
}

/// Hints appended to location descriptions and invalid-command help.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintText {
    pub all_items: Vec<String>,
    pub awaiting_revelation: Vec<String>,
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(ToString::to_string).collect()
}

impl Default for ProgressText {
    fn default() -> Self {
        Self {
            flavor: lines(&[
                "Maxwell purrs softly. You're on the right track!",
                "Maxwell's tail swishes with excitement. One more to go!",
            ]),
            complete: "Maxwell's eyes are bright with anticipation. You have all the pieces now...".to_string(),
            complete_hint: "💡 Try using 'examine all items' to understand what you've collected!".to_string(),
        }
    }
}

impl Default for ExamineText {
    fn default() -> Self {
        Self {
            missing: lines(&[
                "You don't have all the special items yet to compare them properly.",
                "Keep following Maxwell's guidance!",
            ]),
            already: lines(&[
                "You look at the three items together again:",
                "The colorful helmet, the adventure gloves, and the beautiful bike.",
                "Now you understand - they're all designed for someone special...",
                "Maxwell's plan is becoming clearer!",
            ]),
        }
    }
}

impl Default for UnderstandingText {
    fn default() -> Self {
        Self {
            title: "🧠 MOMENT OF UNDERSTANDING 🧠".to_string(),
            lines: lines(&[
                "You gather all three special items together and examine them carefully...",
                "The colorful helmet with its protective padding...",
                "The adventure gloves with their sturdy grip...",
                "The beautiful bike, perfectly crafted and ready for fun...",
                "",
                "You tilt your head as you study each item more closely.",
                "Wait a minute... something's becoming clear about these items...",
                "",
                "As you look at them all together, a pattern emerges.",
                "They're not just random adventure gear...",
                "They all seem to be made for the same person!",
                "But who in your family would need ALL of these things?",
                "",
                "Your ears perk up with growing excitement...",
                "These items aren't meant for any of the adult humans you know...",
                "They're all perfectly sized for someone much smaller!",
                "Someone who doesn't live in your house yet...",
                "",
                "Your tail starts wagging as understanding dawns.",
                "Maxwell appears beside you, purring softly, his eyes twinkling",
                "with approval. You're getting closer to understanding his secret!",
                "",
                "💡 You're starting to understand Maxwell's mysterious quest!",
                "But there's still one more piece to the puzzle...",
                "What does this all MEAN for your family?",
            ]),
            followup: lines(&[
                "🎯 QUEST PROGRESS: You've unlocked the next phase!",
                "💭 Now that you understand these items have a special purpose,",
                "   you need to discover WHY Maxwell wanted you to find them.",
                "",
                "🎮 NEXT STEP: Visit any location or use 'look' to trigger Maxwell's",
                "   final revelation about what these items really mean!",
            ]),
        }
    }
}

impl Default for RevelationText {
    fn default() -> Self {
        Self {
            not_ready: lines(&[
                "You sense that Maxwell's quest is almost complete...",
                "But you feel like you need to understand something about these items first.",
            ]),
            title: "🎉 THE WONDERFUL REVELATION! 🎉".to_string(),
            lines: lines(&[
                "Maxwell's mysterious behavior suddenly makes perfect sense!",
                "You sit quietly, thinking about the special items...",
                "Helmet... gloves... bike... all perfectly sized for someone small...",
                "",
                "Suddenly, your tail starts wagging uncontrollably!",
                "",
                "🍼 A NEW LITTLE FAMILY MEMBER IS COMING! 🍼",
                "",
                "A tiny human who will grow up to use these adventure items!",
                "",
                "Maxwell appears beside you, purring loudly.",
                "His feline intuition knew this wonderful secret all along!",
                "",
                "You spin in a happy circle, barking with joy!",
                "A new baby is coming to your family!",
            ]),
            followup: lines(&[
                "🎾 Congratulations! You've solved Maxwell's mystery!",
                "Thanks for playing Turbo's Quest!",
                "",
                "Type 'quit' to end the adventure.",
            ]),
        }
    }
}

impl Default for StatusText {
    fn default() -> Self {
        Self {
            starting: "Starting...".to_string(),
            exploring: "Phase 1: {found}/{total} special items found".to_string(),
            understanding: "Phase 2: Understanding achieved, final revelation pending".to_string(),
            revealed: "Quest Complete: Maxwell's wonderful secret revealed!".to_string(),
        }
    }
}

impl Default for HintText {
    fn default() -> Self {
        Self {
            all_items: lines(&[
                "🎯 QUEST PHASE 1: You have all three special items!",
                "💭 Try 'examine all items' to understand their significance.",
            ]),
            awaiting_revelation: lines(&[
                "🎯 QUEST PHASE 2: Maxwell's final revelation awaits!",
                "💫 Continue exploring to discover the wonderful truth!",
            ]),
        }
    }
}

impl ProgressText {
    /// Flavor line for having found `found` of `total` quest items.
    pub fn flavor_for(&self, found: usize, total: usize) -> Option<&str> {
        if found == 0 {
            return None;
        }
        if found >= total {
            return Some(&self.complete);
        }
        self.flavor
            .get(found - 1)
            .or_else(|| self.flavor.last())
            .map(String::as_str)
    }
}

impl StatusText {
    /// Fill the exploring label's placeholders.
    pub fn exploring_label(&self, found: usize, total: usize) -> String {
        self.exploring
            .replace("{found}", &found.to_string())
            .replace("{total}", &total.to_string())
    }
}

/// Loads the quest configuration from a TOML file, falling back to defaults on error.
///
/// This function never fails. A `warn!` is logged when the file can't be read
/// or parsed.
pub fn load_quest_config(toml_path: &Path) -> QuestConfig {
    match try_load_quest_config(toml_path) {
        Ok(config) => {
            info!("quest narration loaded from '{}'", toml_path.display());
            config
        },
        Err(e) => {
            warn!(
                "Could not load quest narration from '{}': {:#}. Using built-in defaults.",
                toml_path.display(),
                e
            );
            QuestConfig::default()
        },
    }
}

/// Attempts to load the quest configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
fn try_load_quest_config(toml_path: &Path) -> Result<QuestConfig> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading quest narration from '{}'", toml_path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing quest narration from '{}'", toml_path.display()))
}
