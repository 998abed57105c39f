//! Build manifests written next to compiled output.
//!
//! The compiled Lucid text carries no framing, so the list of states (needed
//! for the FSM declaration) and the settings used to produce it are recorded
//! here instead.

use crate::compile::EmitterConfig;
use crate::core::StateMachine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Version identifier for the manifest format
pub const MANIFEST_VERSION: u32 = 1;

/// Errors that can occur reading or writing a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported manifest version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Record of one compilation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildManifest {
    /// Manifest format version
    pub version: u32,

    /// Unique build identifier
    pub id: String,

    /// When the output was generated
    pub generated_at: DateTime<Utc>,

    /// State names in registration (emission) order
    pub states: Vec<String>,

    /// Emitter settings used
    pub emitter: EmitterConfig,
}

impl BuildManifest {
    pub fn new(machine: &StateMachine, emitter: &EmitterConfig) -> Self {
        Self {
            version: MANIFEST_VERSION,
            id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            states: machine.state_names().map(str::to_string).collect(),
            emitter: emitter.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, ManifestError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ManifestError::SerializationFailed(e.to_string()))
    }

    /// Parse a manifest, rejecting versions other than [`MANIFEST_VERSION`].
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(json)
            .map_err(|e| ManifestError::DeserializationFailed(e.to_string()))?;
        if manifest.version != MANIFEST_VERSION {
            return Err(ManifestError::UnsupportedVersion {
                found: manifest.version,
                supported: MANIFEST_VERSION,
            });
        }
        Ok(manifest)
    }
}
