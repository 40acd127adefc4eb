//! State handlers and state identifiers.
//!
//! A machine's states *are* their handlers: the machine holds one handler
//! object per state, and being "in" a state means the engine invokes that
//! handler once per step. Transition tables refer to states by [`StateId`],
//! an index into the machine's handler list.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::event::Event;

/// Index identifying a state within a machine's handler list.
///
/// Transition records and the machine's current-state field both use
/// `StateId`; the id is only meaningful relative to the handler list the
/// machine was created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateId(pub u16);

impl StateId {
    /// The id as a handler-list index.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// Handler executed while the machine is in a given state.
///
/// The engine invokes `step` exactly once per engine cycle, after any pending
/// transition has been applied. The handler's return value becomes the next
/// pending event: `Some(event)` queues a transition for the following cycle,
/// `None` means "nothing happened, invoke me again next cycle".
///
/// Handlers receive a mutable application context (`C`) and may read or
/// mutate it freely. They are also free to block or poll (for input,
/// hardware, timers); the engine itself never blocks.
///
/// Returning an event at or above the table's event count is treated as
/// `None`; with the `debug-log` feature enabled this is reported at error
/// level.
///
/// # Example
///
/// ```rust
/// use transit::{Event, State};
///
/// struct Counter;
///
/// impl State<u32> for Counter {
///     fn name(&self) -> &str {
///         "counter"
///     }
///
///     fn step(&mut self, ticks: &mut u32) -> Option<Event> {
///         *ticks += 1;
///         if *ticks >= 3 { Some(Event(0)) } else { None }
///     }
/// }
/// ```
pub trait State<C> {
    /// The state's name, used for diagnostics and diagram rendering.
    fn name(&self) -> &str;

    /// Run one cycle of this state's logic, returning the next event.
    fn step(&mut self, ctx: &mut C) -> Option<Event>;
}
