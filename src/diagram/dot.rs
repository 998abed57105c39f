//! Graphviz DOT writer.

use super::DiagramSink;
use std::fmt;

/// Name used for the digraph when none is given.
pub const DEFAULT_GRAPH_NAME: &str = "state_transition_diagram";

/// Collects nodes and edges and prints them as a DOT `digraph`.
///
/// # Example
///
/// ```rust
/// use lucid_fsm::diagram::{DiagramSink, DotGraph};
///
/// let mut graph = DotGraph::default();
/// graph.add_node("START", "START\nstart = 1");
/// graph.add_edge("START", "RUN", "go");
///
/// let dot = graph.to_string();
/// assert!(dot.starts_with("digraph state_transition_diagram {"));
/// assert!(dot.contains("\"START\" -> \"RUN\" [label=\"go\"]"));
/// ```
#[derive(Clone, Debug)]
pub struct DotGraph {
    name: String,
    statements: Vec<String>,
}

impl DotGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            statements: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Default for DotGraph {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_NAME)
    }
}

impl DiagramSink for DotGraph {
    fn add_node(&mut self, name: &str, label: &str) {
        self.statements
            .push(format!("{} [label={}]", quote(name), quote(label)));
    }

    fn add_edge(&mut self, from: &str, to: &str, label: &str) {
        self.statements.push(format!(
            "{} -> {} [label={}]",
            quote(from),
            quote(to),
            quote(label)
        ));
    }
}

impl fmt::Display for DotGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {} {{", self.name)?;
        for statement in &self.statements {
            writeln!(f, "\t{}", statement)?;
        }
        writeln!(f, "}}")
    }
}

/// Quote an ID for DOT, escaping quotes, backslashes and line breaks.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
