//! JSON machine descriptions.
//!
//! A description is the on-disk form of a [`StateMachine`] plus the emitter
//! settings to compile it with:
//!
//! ```json
//! {
//!   "emitter": { "state_register": "game_state" },
//!   "states": [
//!     {
//!       "name": "START",
//!       "output": { "signals": { "start": "1" } },
//!       "transition": { "conditions": "button_0", "targets": "RUN", "label": " 0 pressed" }
//!     },
//!     {
//!       "name": "RUN",
//!       "output": {
//!         "signals": { "we": "1", "rb": ["a", "b"] },
//!         "labels": { "rb": "a/b" }
//!       },
//!       "transition": { "conditions": ["button_a", "button_b"], "targets": "START" }
//!     }
//!   ]
//! }
//! ```
//!
//! States are registered in array order.

use crate::compile::EmitterConfig;
use crate::core::{StateMachine, StateOutput, TransitionRule};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors loading or saving a description.
#[derive(Debug, Error)]
pub enum DescriptionError {
    #[error("Failed to read description '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write description '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed description: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One state entry of a description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateDescription {
    pub name: String,
    #[serde(default)]
    pub output: StateOutput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionRule>,
}

/// A whole machine plus emitter settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineDescription {
    #[serde(default)]
    pub emitter: EmitterConfig,
    #[serde(default)]
    pub states: Vec<StateDescription>,
}

impl MachineDescription {
    pub fn from_json_str(json: &str) -> Result<Self, DescriptionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DescriptionError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| DescriptionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let description = Self::from_json_str(&json)?;
        debug!(path = %path.display(), states = description.states.len(), "loaded description");
        Ok(description)
    }

    /// Capture an existing machine.
    pub fn from_machine(machine: &StateMachine, emitter: EmitterConfig) -> Self {
        let states = machine
            .states()
            .map(|(name, entry)| StateDescription {
                name: name.to_string(),
                output: entry.output.clone(),
                transition: entry.rule.clone(),
            })
            .collect();
        Self { emitter, states }
    }

    /// Register every state, in order, on a fresh machine.
    pub fn to_machine(&self) -> StateMachine {
        let mut machine = StateMachine::new();
        for state in &self.states {
            machine.add_state(
                state.name.clone(),
                state.output.clone(),
                state.transition.clone(),
            );
        }
        machine
    }

    pub fn to_json_pretty(&self) -> Result<String, DescriptionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DescriptionError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| DescriptionError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Signal;

    const SAMPLE: &str = r#"{
        "states": [
            {
                "name": "START",
                "output": { "signals": { "start": "1" } },
                "transition": { "conditions": "button_0", "targets": "RUN", "label": " 0 pressed" }
            },
            {
                "name": "RUN",
                "output": {
                    "signals": { "we": "1", "rb": ["a", "b"] },
                    "labels": { "rb": "a/b" }
                },
                "transition": { "conditions": ["button_a", "button_b"], "targets": "START" }
            },
            { "name": "END" }
        ]
    }"#;

    #[test]
    fn parses_sample_description() {
        let description = MachineDescription::from_json_str(SAMPLE).unwrap();

        assert_eq!(description.emitter, EmitterConfig::default());
        assert_eq!(description.states.len(), 3);

        let run = &description.states[1];
        assert_eq!(run.output.get(Signal::ReadB).map(|c| c.len()), Some(2));
        assert_eq!(run.output.label(Signal::ReadB), Some("a/b"));
        assert!(description.states[2].transition.is_none());
    }

    #[test]
    fn builds_machine_in_order() {
        let machine = MachineDescription::from_json_str(SAMPLE)
            .unwrap()
            .to_machine();

        let names: Vec<&str> = machine.state_names().collect();
        assert_eq!(names, vec!["START", "RUN", "END"]);

        let code = machine.compile().unwrap();
        assert!(code.contains("  if(button_b) {"));
    }

    #[test]
    fn unknown_signal_is_rejected() {
        let json = r#"{"states": [{"name": "A", "output": {"signals": {"wx": "1"}}}]}"#;
        let err = MachineDescription::from_json_str(json).unwrap_err();
        assert!(matches!(err, DescriptionError::Parse(_)));
    }

    #[test]
    fn machine_survives_a_round_trip() {
        let original = MachineDescription::from_json_str(SAMPLE).unwrap();
        let json = original.to_json_pretty().unwrap();
        let reloaded = MachineDescription::from_json_str(&json).unwrap();
        assert_eq!(original, reloaded);
    }

    #[test]
    fn saves_and_loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fsm.json");

        let original = MachineDescription::from_json_str(SAMPLE).unwrap();
        original.save(&path).unwrap();

        let loaded = MachineDescription::from_path(&path).unwrap();
        assert_eq!(loaded.states.len(), 3);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = MachineDescription::from_path("/nonexistent/fsm.json").unwrap_err();
        assert!(matches!(err, DescriptionError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/fsm.json"));
    }
}
