//! Machine lifecycle and engine errors.

use thiserror::Error;

use crate::core::{Event, NameError, StateId};

/// Errors that can occur when creating a machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CreateError {
    #[error(transparent)]
    Name(#[from] NameError),

    #[error("no state handlers were provided")]
    NoHandlers,

    #[error("initial state {0} has no registered handler")]
    InitialStateOutOfRange(StateId),

    #[error("transition table references state {0} with no registered handler")]
    UnknownState(StateId),
}

/// Errors surfaced by a single engine step.
///
/// Both variants leave the machine recoverable: the current state is
/// unchanged and the caller decides whether to escalate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StepError {
    /// The pending event had no matching record for the current state. The
    /// current state's handler was still invoked and its return value
    /// replaced the pending event.
    #[error("no transition from state {state} on event {event}")]
    UnhandledEvent { state: StateId, event: Event },

    /// The current state has no handler. Unreachable through the public API
    /// (creation validates every state id); kept as a corruption guard.
    #[error("current state {0} has no registered handler")]
    CorruptState(StateId),
}
