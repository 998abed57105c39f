//! Core state machine model.
//!
//! This module contains the declarative description of a machine:
//! - Signals and their canonical order via the `Signal` enumeration
//! - Per-state signal assignments via `StateOutput`
//! - Guards, targets and else branches via `TransitionRule`
//! - The insertion-ordered state graph via `StateMachine`
//!
//! Nothing here validates shapes; that happens when the machine is
//! compiled.

mod cases;
mod machine;
mod output;
mod rule;
mod signal;

pub use cases::{Cases, CASE_SEPARATOR};
pub use machine::{StateEntry, StateMachine};
pub use output::StateOutput;
pub use rule::{TransitionRule, ALWAYS};
pub use signal::{Signal, UnknownSignal};
