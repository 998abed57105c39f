//! The state graph: an insertion-ordered, name-keyed set of states.

use super::output::StateOutput;
use super::rule::TransitionRule;
use crate::compile::{self, CompileError, EmitterConfig};
use crate::diagram::{self, DiagramError, DiagramSink};
use indexmap::IndexMap;
use tracing::debug;

/// One registered state.
#[derive(Clone, Debug, PartialEq)]
pub struct StateEntry {
    pub output: StateOutput,
    /// `None` only for terminal states with no exit.
    pub rule: Option<TransitionRule>,
}

/// A declarative state machine.
///
/// Registration order is emission order. Registering a name a second time
/// replaces the earlier entry in place. Target names are never checked
/// against the registered states here; see [`crate::validate`].
///
/// # Example
///
/// ```rust
/// use lucid_fsm::core::{StateMachine, StateOutput, TransitionRule};
///
/// let mut machine = StateMachine::new();
/// machine.add_state(
///     "START",
///     StateOutput::new().start("1"),
///     Some(TransitionRule::new("button_0", "RUN")),
/// );
/// machine.add_state(
///     "RUN",
///     StateOutput::new().we("1"),
///     Some(TransitionRule::always("START")),
/// );
///
/// let code = machine.compile().unwrap();
/// assert!(code.starts_with("game_state.START:"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateMachine {
    states: IndexMap<String, StateEntry>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state. Re-registering an existing name overwrites it.
    pub fn add_state(
        &mut self,
        name: impl Into<String>,
        output: StateOutput,
        rule: Option<TransitionRule>,
    ) {
        let name = name.into();
        let entry = StateEntry { output, rule };
        if self.states.insert(name.clone(), entry).is_some() {
            debug!(state = %name, "state re-registered, replacing earlier definition");
        }
    }

    pub fn get(&self, name: &str) -> Option<&StateEntry> {
        self.states.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// States in registration order.
    pub fn states(&self) -> impl Iterator<Item = (&str, &StateEntry)> {
        self.states.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// State names in registration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Compile every state with the default emitter settings.
    pub fn compile(&self) -> Result<String, CompileError> {
        self.compile_with(&EmitterConfig::default())
    }

    /// Compile every state, failing on the first shape error.
    pub fn compile_with(&self, config: &EmitterConfig) -> Result<String, CompileError> {
        compile::compile_machine(self, config)
    }

    /// Feed every state's node and edges to `sink`.
    pub fn render_diagram<D: DiagramSink + ?Sized>(&self, sink: &mut D) -> Result<(), DiagramError> {
        diagram::render(self, sink)
    }
}
