//! Runtime errors raised while resolving content references.
//!
//! Content is validated when it is loaded, so these only surface if a world is
//! assembled by hand or mutated into an inconsistent state. The REPL reports
//! them to the player and leaves the session untouched.

use thiserror::Error;

use crate::Id;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Error: Location '{0}' not found!")]
    UnknownLocation(Id),
    #[error("Error: Action '{0}' not found!")]
    UnknownAction(Id),
    #[error("Error: Item '{0}' not found in game data.")]
    UnknownItem(Id),
}
