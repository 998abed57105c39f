//! Lucid FSM: a declarative state machine compiler
//!
//! A machine is described as named states. Each state drives a set of
//! control signals and carries a transition rule. The compiler turns the
//! description into Lucid `case` bodies, one block per state, and can feed
//! a graph renderer to document it.
//!
//! # Core Concepts
//!
//! - **Signals**: A fixed, canonically ordered set of control outputs
//! - **Cases**: A signal, guard or target may list one value per case; singletons
//!   are broadcast across every case of the state
//! - **Rules**: Guarded dispatch, unconditional `"always"` moves, or a binary branch
//!
//! # Example
//!
//! ```rust
//! use lucid_fsm::core::{StateMachine, StateOutput, TransitionRule};
//!
//! let mut machine = StateMachine::new();
//! machine.add_state(
//!     "SELECT_SIZE",
//!     StateOutput::new()
//!         .we("1")
//!         .rb(["addr_small", "addr_med", "addr_large"])
//!         .rc("tmp"),
//!     Some(TransitionRule::new(["btn_a", "btn_b", "btn_c"], "S1")),
//! );
//!
//! let code = machine.compile().unwrap();
//! assert_eq!(code.matches("if(").count(), 3);
//! assert!(code.contains("  if(btn_b) {\n    we = 1;\n    rb = addr_med;"));
//! ```

pub mod compile;
pub mod core;
pub mod description;
pub mod diagram;
pub mod manifest;
pub mod validate;

// Re-export commonly used types
pub use compile::{CompileError, EmitterConfig};
pub use crate::core::{Signal, StateMachine, StateOutput, TransitionRule};
pub use diagram::{DiagramError, DiagramSink, DotGraph};
