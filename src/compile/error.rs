//! Compilation errors.

use crate::core::Signal;
use thiserror::Error;

/// Shape errors found while broadcasting a state's cases.
///
/// Any of these aborts compilation of the whole machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompileError {
    #[error("State '{state}': attribute '{signal}' has {found} cases, expected {expected}")]
    AttributeLength {
        state: String,
        signal: Signal,
        expected: usize,
        found: usize,
    },

    #[error("State '{state}': transition rule has {found} conditions, expected {expected}")]
    ConditionLength {
        state: String,
        expected: usize,
        found: usize,
    },

    #[error("State '{state}': transition rule has {found} targets, expected {expected}")]
    TargetLength {
        state: String,
        expected: usize,
        found: usize,
    },
}

impl CompileError {
    /// Name of the state that failed.
    pub fn state(&self) -> &str {
        match self {
            Self::AttributeLength { state, .. }
            | Self::ConditionLength { state, .. }
            | Self::TargetLength { state, .. } => state,
        }
    }
}
