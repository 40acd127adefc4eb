//! Event identifiers processed by the dispatch engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for an event recognized by a state machine.
///
/// Events are small numeric tags. Each transition table declares how many
/// events it recognizes (its *event count*), and every event referenced by
/// the table must be below that bound. "No event pending" is modeled as
/// `Option<Event>::None` rather than a sentinel value.
///
/// # Example
///
/// ```rust
/// use transit::Event;
///
/// const EV_NEXT: Event = Event(0);
/// const EV_BACK: Event = Event(1);
///
/// assert_ne!(EV_NEXT, EV_BACK);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event(pub u16);

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
