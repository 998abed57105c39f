//! Diagram rendering through an injected graph collaborator.
//!
//! Rendering is a read-only traversal of the finished machine. It uses the
//! rules and outputs exactly as registered; no broadcasting happens here.

mod dot;

pub use dot::DotGraph;

use crate::core::StateMachine;
use thiserror::Error;
use tracing::trace;

/// Receives nodes and edges from [`StateMachine::render_diagram`].
pub trait DiagramSink {
    fn add_node(&mut self, name: &str, label: &str);

    fn add_edge(&mut self, from: &str, to: &str, label: &str);
}

/// Errors raised while rendering a diagram.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DiagramError {
    #[error("State '{state}': {targets} targets cannot be paired with {conditions} conditions")]
    EdgeCount {
        state: String,
        conditions: usize,
        targets: usize,
    },
}

/// Walk `machine` and feed `sink` one node per state plus its edges.
pub fn render<D: DiagramSink + ?Sized>(
    machine: &StateMachine,
    sink: &mut D,
) -> Result<(), DiagramError> {
    for (name, entry) in machine.states() {
        sink.add_node(name, &format!("{}\n{}", name, entry.output));

        let Some(rule) = &entry.rule else {
            continue;
        };

        let targets = rule.targets();
        let conditions = rule.conditions();
        if targets.len() == 1 {
            if let Some(target) = targets.first() {
                sink.add_edge(name, target, &rule.label());
            }
        } else {
            if targets.len() != conditions.len() {
                return Err(DiagramError::EdgeCount {
                    state: name.to_string(),
                    conditions: conditions.len(),
                    targets: targets.len(),
                });
            }
            for (target, condition) in targets.iter().zip(conditions.iter()) {
                sink.add_edge(name, target, condition);
            }
        }

        if let (Some(otherwise), Some(label)) = (rule.otherwise_target(), rule.inverse_label()) {
            sink.add_edge(name, otherwise, &label);
        }

        trace!(state = name, "rendered state");
    }

    Ok(())
}
