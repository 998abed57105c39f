//! Case broadcasting and shape validation for a single state.
//!
//! A state's case count N comes from its vector attributes. Conditions,
//! attributes and targets of length one are replicated to N; anything else
//! must already have N entries.

use super::error::CompileError;
use crate::core::{Signal, StateOutput, TransitionRule, ALWAYS};

/// One aligned case of a state.
#[derive(Clone, Debug, PartialEq)]
pub struct Row<'a> {
    pub condition: &'a str,
    /// Driven signals in canonical order.
    pub assignments: Vec<(Signal, &'a str)>,
    /// `None` for a terminal state without a rule.
    pub target: Option<&'a str>,
}

impl<'a> Row<'a> {
    pub fn is_unconditional(&self) -> bool {
        self.condition == ALWAYS
    }

    pub fn value(&self, signal: Signal) -> Option<&'a str> {
        self.assignments
            .iter()
            .find(|(s, _)| *s == signal)
            .map(|(_, value)| *value)
    }
}

/// Determine the case count N of a state.
///
/// N is the length of the first vector attribute in canonical order, or 1
/// when every attribute is a singleton. Every other vector attribute must
/// agree.
pub fn case_count(state: &str, output: &StateOutput) -> Result<usize, CompileError> {
    let mut vectors = output.present().filter(|(_, cases)| cases.is_vector());

    let Some((_, first)) = vectors.next() else {
        return Ok(1);
    };
    let expected = first.len();

    for (signal, cases) in vectors {
        if cases.len() != expected {
            return Err(CompileError::AttributeLength {
                state: state.to_string(),
                signal,
                expected,
                found: cases.len(),
            });
        }
    }

    Ok(expected)
}

/// Broadcast a state's output and rule into N aligned rows.
pub fn expand<'a>(
    state: &str,
    output: &'a StateOutput,
    rule: Option<&'a TransitionRule>,
) -> Result<Vec<Row<'a>>, CompileError> {
    let n = case_count(state, output)?;

    let conditions: Vec<&'a str> = match rule {
        Some(rule) => rule
            .conditions()
            .broadcast(n)
            .ok_or_else(|| CompileError::ConditionLength {
                state: state.to_string(),
                expected: n,
                found: rule.conditions().len(),
            })?,
        None => vec![ALWAYS; n],
    };

    let mut columns: Vec<(Signal, Vec<&'a str>)> = Vec::new();
    for (signal, cases) in output.present() {
        let column = cases
            .broadcast(n)
            .ok_or_else(|| CompileError::AttributeLength {
                state: state.to_string(),
                signal,
                expected: n,
                found: cases.len(),
            })?;
        columns.push((signal, column));
    }

    let targets: Vec<Option<&'a str>> = match rule {
        Some(rule) => rule
            .targets()
            .broadcast(n)
            .ok_or_else(|| CompileError::TargetLength {
                state: state.to_string(),
                expected: n,
                found: rule.targets().len(),
            })?
            .into_iter()
            .map(Some)
            .collect(),
        None => vec![None; n],
    };

    let rows = conditions
        .into_iter()
        .zip(targets)
        .enumerate()
        .map(|(i, (condition, target))| Row {
            condition,
            assignments: columns
                .iter()
                .map(|(signal, values)| (*signal, values[i]))
                .collect(),
            target,
        })
        .collect();

    Ok(rows)
}
