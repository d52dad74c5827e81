//! module Icons
//!
//! Just a centralized out-of-the-way module to define Unicode icons used for
//! various message types. The use for each is self-evident from the constant
//! name.

pub(crate) const ICON_ACTIONS: &str = "🎯";
pub(crate) const ICON_BRAIN: &str = "🧠";
pub(crate) const ICON_DENIED: &str = "\u{274C}"; // ❌
pub(crate) const ICON_DOG: &str = "🐕";
pub(crate) const ICON_ENGINE: &str = "⚙";
pub(crate) const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
pub(crate) const ICON_EXITS: &str = "🚪";
pub(crate) const ICON_HINT: &str = "💡";
pub(crate) const ICON_HOME: &str = "🏠";
pub(crate) const ICON_PIN: &str = "📍";
pub(crate) const ICON_QUEST: &str = "🎾";
pub(crate) const ICON_SUCCESS: &str = "\u{2611}"; // ☑
