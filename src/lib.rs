//! Transit: a table-driven finite state machine dispatch library
//!
//! Transit models a machine as a fixed, validated transition table (an
//! ordered list of `(state, event) => next-state` records) plus one handler
//! object per state. A small engine advances the machine exactly one
//! transition per call: apply the pending event against the table, then
//! invoke the new current state's handler, whose return value becomes the
//! next pending event. The caller drives the engine, typically once per
//! scheduler tick; the engine never loops or blocks.
//!
//! # Core Concepts
//!
//! - **State handlers**: states *are* their handlers, objects implementing
//!   [`State`] and identified by [`StateId`] indexes
//! - **Transition table**: validated once at construction
//!   ([`TransitionTable::new`]), read-only and shareable afterwards
//! - **Engine step**: [`Machine::step`] performs at most one transition and
//!   one handler invocation
//! - **Journal**: every applied transition is recorded in an immutable
//!   [`TransitionJournal`]
//!
//! # Example
//!
//! ```rust
//! use transit::{Event, Machine, State, StateId, StepResult, Transition, TransitionTable};
//!
//! struct Idle;
//! struct Running;
//!
//! impl State<u32> for Idle {
//!     fn name(&self) -> &str {
//!         "idle"
//!     }
//!
//!     fn step(&mut self, starts: &mut u32) -> Option<Event> {
//!         *starts += 1;
//!         Some(Event(0)) // request a start
//!     }
//! }
//!
//! impl State<u32> for Running {
//!     fn name(&self) -> &str {
//!         "running"
//!     }
//!
//!     fn step(&mut self, _starts: &mut u32) -> Option<Event> {
//!         None // nothing to report, keep running
//!     }
//! }
//!
//! let table = TransitionTable::new(
//!     vec![Transition { from: StateId(0), event: Event(0), to: StateId(1) }],
//!     1,
//! )
//! .unwrap();
//!
//! let handlers: Vec<Box<dyn State<u32>>> = vec![Box::new(Idle), Box::new(Running)];
//! let mut machine = Machine::new("Launcher", &table, handlers, StateId(0)).unwrap();
//!
//! let mut starts = 0;
//!
//! // First step: nothing pending, the idle handler runs and queues Event(0).
//! assert_eq!(machine.step(&mut starts), Ok(StepResult::Idle));
//!
//! // Second step: (idle, Event(0)) matches the table, the machine moves.
//! assert!(matches!(
//!     machine.step(&mut starts),
//!     Ok(StepResult::Transitioned { .. })
//! ));
//! assert_eq!(machine.current(), StateId(1));
//! assert_eq!(starts, 1);
//! ```

pub mod core;
pub mod diagram;
pub mod machine;
pub mod table;

mod diag;
mod macros;

// Re-export commonly used types
pub use crate::core::{
    Event, MachineName, NameError, State, StateId, TransitionJournal, TransitionRecord,
};
pub use crate::machine::{CreateError, Machine, StepError, StepResult};
pub use crate::table::{TableError, Transition, TransitionTable};
