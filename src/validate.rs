//! Opt-in check that every transition target names a registered state.
//!
//! Compilation never looks at target names. This pass walks the finished
//! machine and uses Stillwater's `Validation` to report every dangling
//! reference at once instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use lucid_fsm::core::{StateMachine, StateOutput, TransitionRule};
//! use lucid_fsm::validate::check_targets;
//!
//! let mut machine = StateMachine::new();
//! machine.add_state("A", StateOutput::new(), Some(TransitionRule::branch("x == 1", "B", "C")));
//! machine.add_state("B", StateOutput::new(), Some(TransitionRule::always("A")));
//!
//! let result = check_targets(&machine);
//! assert!(result.is_failure());
//! ```

use crate::core::StateMachine;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Which edge of a rule holds the dangling name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A true-branch target.
    Then,
    /// The else target of a branching rule.
    Otherwise,
}

/// A transition target that is not a registered state.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("State '{state}' transitions to undeclared state '{target}'")]
pub struct DanglingTarget {
    pub state: String,
    pub target: String,
    pub kind: TargetKind,
}

/// Collect every dangling target in `machine`, in registration order.
pub fn check_targets(machine: &StateMachine) -> Validation<(), NonEmptyVec<DanglingTarget>> {
    let mut dangling = Vec::new();

    for (name, entry) in machine.states() {
        let Some(rule) = &entry.rule else {
            continue;
        };

        let then = rule.targets().iter().map(|t| (t, TargetKind::Then));
        let otherwise = rule
            .otherwise_target()
            .map(|t| (t, TargetKind::Otherwise));

        for (target, kind) in then.chain(otherwise) {
            if !machine.contains(target) {
                dangling.push(DanglingTarget {
                    state: name.to_string(),
                    target: target.to_string(),
                    kind,
                });
            }
        }
    }

    match NonEmptyVec::from_vec(dangling) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

/// [`check_targets`] as a plain `Result`, for callers that only need the list.
pub fn dangling_targets(machine: &StateMachine) -> Result<(), Vec<DanglingTarget>> {
    match check_targets(machine) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StateOutput, TransitionRule};

    #[test]
    fn closed_machine_passes() {
        let mut machine = StateMachine::new();
        machine.add_state("A", StateOutput::new(), Some(TransitionRule::always("B")));
        machine.add_state("B", StateOutput::new(), Some(TransitionRule::branch("x == 1", "A", "B")));
        machine.add_state("END", StateOutput::new().finished("1"), None);

        assert!(check_targets(&machine).is_success());
        assert_eq!(dangling_targets(&machine), Ok(()));
    }

    #[test]
    fn accumulates_every_dangling_reference() {
        let mut machine = StateMachine::new();
        machine.add_state(
            "A",
            StateOutput::new(),
            Some(TransitionRule::new(["x", "y"], ["B", "MISSING_1"]).otherwise("MISSING_2")),
        );
        machine.add_state("B", StateOutput::new(), Some(TransitionRule::always("MISSING_3")));

        match check_targets(&machine) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                let targets: Vec<&str> = errors.iter().map(|e| e.target.as_str()).collect();
                assert_eq!(targets, vec!["MISSING_1", "MISSING_2", "MISSING_3"]);
                assert!(errors
                    .iter()
                    .any(|e| e.kind == TargetKind::Otherwise && e.state == "A"));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn error_message_names_both_states() {
        let err = DanglingTarget {
            state: "A".to_string(),
            target: "Z".to_string(),
            kind: TargetKind::Then,
        };
        assert_eq!(err.to_string(), "State 'A' transitions to undeclared state 'Z'");
    }
}
