//! Emitter settings.

use serde::{Deserialize, Serialize};

/// Naming and layout of the emitted Lucid code.
///
/// Every field has a default, so a description may omit the section or any
/// part of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// The FSM register; states are written as `<register>.<STATE>` and the
    /// next state as `<register>.d`.
    pub state_register: String,

    /// Substring of a condition that means the second read port's data is
    /// used, so `rb` must be driven before the guard.
    pub read_marker: String,

    /// One indentation level.
    pub indent: String,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            state_register: "game_state".to_string(),
            read_marker: "rb_data".to_string(),
            indent: "  ".to_string(),
        }
    }
}
