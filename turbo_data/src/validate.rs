use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use turbo_data::{GameDef, IntroDef, LocationDef, PlayerDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         player: PlayerDef {
///             name: "Rex".into(),
///             description: "A good dog".into(),
///             start_location: "porch".into(),
///         },
///         intro: IntroDef {
///             welcome: "Hello".into(),
///             ..IntroDef::default()
///         },
///         invalid_command: "Huh?".into(),
///         exit_message: "Bye".into(),
///         ..GameDef::default()
///     },
///     locations: vec![LocationDef {
///         id: "porch".into(),
///         name: "Porch".into(),
///         desc: "A porch.".into(),
///         first_visit_desc: None,
///         visited: false,
///         exits: Vec::new(),
///         actions: Vec::new(),
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut locations = HashSet::new();
    let mut items = HashSet::new();
    let mut actions = HashSet::new();

    track_ids(
        "location",
        world.locations.iter().map(|l| l.id.as_str()),
        &mut locations,
        &mut errors,
    );
    track_ids("item", world.items.iter().map(|i| i.id.as_str()), &mut items, &mut errors);
    track_ids(
        "action",
        world.actions.iter().map(|a| a.id.as_str()),
        &mut actions,
        &mut errors,
    );

    let ids = IdSets {
        locations: &locations,
        items: &items,
        actions: &actions,
    };

    if world.game.player.start_location.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game player start location missing".to_string(),
        });
    } else {
        check_ref(
            "location",
            &world.game.player.start_location,
            ids.locations,
            "game player start location".to_string(),
            &mut errors,
        );
    }

    for location in &world.locations {
        validate_location(location, &ids, &mut errors);
    }

    for action in &world.actions {
        let context = format!("action '{}'", action.id);
        for req in &action.requirements {
            match req {
                RequirementDef::HasItem { item, .. } => {
                    check_ref("item", item, ids.items, format!("{context} requirement"), &mut errors);
                },
            }
        }
        for effect in &action.effects {
            match effect {
                EffectDef::GiveItem { item } => {
                    check_ref("item", item, ids.items, format!("{context} effect"), &mut errors);
                },
                EffectDef::TriggerRevelation | EffectDef::WinGame => {},
            }
        }
    }

    errors
}

struct IdSets<'a> {
    locations: &'a HashSet<String>,
    items: &'a HashSet<String>,
    actions: &'a HashSet<String>,
}

fn validate_location(location: &LocationDef, ids: &IdSets<'_>, errors: &mut Vec<ValidationError>) {
    let mut commands = HashSet::new();
    for exit in &location.exits {
        let context = format!("location '{}' exit '{}'", location.id, exit.command);
        check_command(&exit.command, &context, &mut commands, errors);
        check_ref("location", &exit.to, ids.locations, context, errors);
    }
    for binding in &location.actions {
        let context = format!("location '{}' action '{}'", location.id, binding.command);
        check_command(&binding.command, &context, &mut commands, errors);
        check_ref("action", &binding.action, ids.actions, context, errors);
    }
}

/// Commands are matched after lowercasing and whitespace collapsing, so authored
/// keys must already be in that form and must not repeat within a location.
fn check_command(command: &str, context: &str, seen: &mut HashSet<String>, errors: &mut Vec<ValidationError>) {
    let normalized = command.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    if normalized.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context}: empty command"),
        });
        return;
    }
    if normalized != command {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context}: command must be lowercase and single-spaced"),
        });
    }
    if !seen.insert(normalized) {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context}: command declared twice"),
        });
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}
