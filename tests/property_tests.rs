//! Property-based tests for broadcasting and emission.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated state shapes.

use lucid_fsm::compile::{case_count, expand, CompileError};
use lucid_fsm::core::{Signal, StateMachine, StateOutput, TransitionRule};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_signal()(index in 0..Signal::ALL.len()) -> Signal {
        Signal::ALL[index]
    }
}

prop_compose! {
    fn token()(token in "[a-z][a-z0-9_]{0,8}") -> String {
        token
    }
}

prop_compose! {
    fn state_name()(name in "[A-Z][A-Z0-9_]{0,8}") -> String {
        name
    }
}

proptest! {
    #[test]
    fn singletons_are_replicated(
        n in 2usize..8,
        vector_signal in arbitrary_signal(),
        scalar_signal in arbitrary_signal(),
        scalar in token(),
        condition in token(),
    ) {
        prop_assume!(vector_signal != scalar_signal);

        let values: Vec<String> = (0..n).map(|i| format!("v{}", i)).collect();
        let output = StateOutput::new()
            .set(vector_signal, values.clone())
            .set(scalar_signal, scalar.clone());
        let rule = TransitionRule::new(condition.clone(), "NEXT");

        let rows = expand("S", &output, Some(&rule)).unwrap();
        prop_assert_eq!(rows.len(), n);

        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.condition, condition.as_str());
            prop_assert_eq!(row.target, Some("NEXT"));
            prop_assert_eq!(row.value(scalar_signal), Some(scalar.as_str()));
            prop_assert_eq!(row.value(vector_signal), Some(values[i].as_str()));
        }
    }

    #[test]
    fn compiled_state_has_one_guard_per_case(
        n in 2usize..8,
        signal in arbitrary_signal(),
    ) {
        let values: Vec<String> = (0..n).map(|i| format!("v{}", i)).collect();
        let conditions: Vec<String> = (0..n).map(|i| format!("button_{}", i)).collect();

        let mut machine = StateMachine::new();
        machine.add_state(
            "S",
            StateOutput::new().set(signal, values),
            Some(TransitionRule::new(conditions, "S")),
        );

        let code = machine.compile().unwrap();
        prop_assert_eq!(code.matches("  if(").count(), n);
        prop_assert_eq!(code.matches("game_state.d = game_state.S;").count(), n);
    }

    #[test]
    fn differing_vector_lengths_are_rejected(
        a in 2usize..6,
        b in 2usize..6,
        first in arbitrary_signal(),
        second in arbitrary_signal(),
    ) {
        prop_assume!(a != b && first != second);

        let output = StateOutput::new()
            .set(first, (0..a).map(|i| format!("a{}", i)).collect::<Vec<_>>())
            .set(second, (0..b).map(|i| format!("b{}", i)).collect::<Vec<_>>());

        let (earlier, later) = if first < second { (first, second) } else { (second, first) };
        let expected = if earlier == first { a } else { b };
        let found = if later == first { a } else { b };

        prop_assert_eq!(
            case_count("S", &output),
            Err(CompileError::AttributeLength {
                state: "S".to_string(),
                signal: later,
                expected,
                found,
            })
        );

        let mut machine = StateMachine::new();
        machine.add_state("S", output, Some(TransitionRule::always("S")));
        prop_assert!(machine.compile().is_err());
    }

    #[test]
    fn blocks_follow_registration_order(
        names in prop::collection::vec(state_name(), 1..10)
    ) {
        let mut machine = StateMachine::new();
        for name in &names {
            machine.add_state(name.clone(), StateOutput::new().we("1"), Some(TransitionRule::always(names[0].clone())));
        }

        let code = machine.compile().unwrap();
        let headers: Vec<&str> = code
            .lines()
            .filter(|line| line.starts_with("game_state.") && line.ends_with(':'))
            .collect();
        let expected: Vec<String> = machine
            .state_names()
            .map(|name| format!("game_state.{}:", name))
            .collect();

        prop_assert_eq!(headers.len(), expected.len());
        for (header, expected) in headers.iter().zip(&expected) {
            prop_assert_eq!(*header, expected.as_str());
        }
    }

    #[test]
    fn default_label_joins_with_separator(values in prop::collection::vec(token(), 1..6)) {
        let output = StateOutput::new().set(Signal::ReadB, values.clone());
        prop_assert_eq!(output.to_string(), format!("rb = {}", values.join(" | ")));
    }

    #[test]
    fn override_label_ignores_values(
        values in prop::collection::vec(token(), 1..6),
        label in "[a-zA-Z0-9 /-]{1,16}",
    ) {
        let output = StateOutput::new()
            .set(Signal::ReadB, values)
            .label_for(Signal::ReadB, label.clone());
        prop_assert_eq!(output.to_string(), format!("rb = {}", label));
    }
}
