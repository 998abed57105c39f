//! Compilation of a state machine to Lucid control logic.
//!
//! Each state is broadcast into aligned rows (see [`broadcast`]) and the
//! rows are written out by [`LucidEmitter`]. Blocks are concatenated in
//! registration order. The first shape error aborts the whole machine and
//! no partial text is returned.

pub mod broadcast;
pub mod config;
pub mod emit;
pub mod error;

pub use broadcast::{case_count, expand, Row};
pub use config::EmitterConfig;
pub use emit::LucidEmitter;
pub use error::CompileError;

use crate::core::StateMachine;
use tracing::{debug, instrument, trace};

/// Compile every state of `machine`.
#[instrument(level = "debug", skip_all, fields(states = machine.len()))]
pub fn compile_machine(
    machine: &StateMachine,
    config: &EmitterConfig,
) -> Result<String, CompileError> {
    let emitter = LucidEmitter::new(config);
    let mut lines = Vec::new();

    for (name, entry) in machine.states() {
        let rule = entry.rule.as_ref();
        let rows = expand(name, &entry.output, rule)?;
        trace!(state = name, cases = rows.len(), "broadcast state");
        emitter.emit_state(name, rule, &rows, &mut lines);
    }

    debug!(lines = lines.len(), "compiled machine");
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Signal, StateOutput, TransitionRule};

    #[test]
    fn blocks_follow_registration_order() {
        let mut machine = StateMachine::new();
        machine.add_state("C", StateOutput::new().we("1"), Some(TransitionRule::always("A")));
        machine.add_state("A", StateOutput::new().we("1"), Some(TransitionRule::always("B")));
        machine.add_state("B", StateOutput::new().we("1"), Some(TransitionRule::always("C")));

        let code = machine.compile().unwrap();
        let c = code.find("game_state.C:").unwrap();
        let a = code.find("game_state.A:").unwrap();
        let b = code.find("game_state.B:").unwrap();
        assert!(c < a && a < b);
    }

    #[test]
    fn one_bad_state_fails_the_whole_machine() {
        let mut machine = StateMachine::new();
        machine.add_state("GOOD", StateOutput::new().we("1"), Some(TransitionRule::always("BAD")));
        machine.add_state(
            "BAD",
            StateOutput::new().ra(["a", "b"]).rb(["x", "y", "z"]),
            Some(TransitionRule::always("GOOD")),
        );

        let err = machine.compile().unwrap_err();
        assert_eq!(err.state(), "BAD");
        assert!(matches!(
            err,
            CompileError::AttributeLength {
                signal: Signal::ReadB,
                ..
            }
        ));
        assert!(err.to_string().contains("'rb'"));
    }

    #[test]
    fn output_has_no_trailing_newline() {
        let mut machine = StateMachine::new();
        machine.add_state("A", StateOutput::new(), Some(TransitionRule::always("A")));

        assert_eq!(machine.compile().unwrap(), "game_state.A:\n  game_state.d = game_state.A;");
    }
}
