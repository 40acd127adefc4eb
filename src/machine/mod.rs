//! The machine instance and its single-step dispatch engine.

pub mod error;

pub use error::{CreateError, StepError};

use chrono::Utc;

use crate::core::{Event, MachineName, State, StateId, TransitionJournal, TransitionRecord};
use crate::diag::{debug_log, error_log};
use crate::table::TransitionTable;

/// Outcome of a successful engine step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// A pending event matched a table record and the machine moved.
    Transitioned {
        from: StateId,
        event: Event,
        to: StateId,
    },

    /// No event was pending; the current state's handler was simply invoked.
    Idle,
}

/// A state machine instance.
///
/// A machine borrows its (already validated) [`TransitionTable`], which is
/// read-only and may be shared between machines, and owns one handler
/// object per state. The machine advances only when the caller invokes
/// [`Machine::step`]; the engine never loops or blocks internally, so a
/// typical embedding calls `step` once per scheduler tick.
///
/// Machines are single-threaded values: nothing is shared between instances,
/// and an instance must not be used from multiple threads without external
/// synchronization.
///
/// # Example
///
/// ```rust
/// use transit::{Event, Machine, State, StateId, StepResult, Transition, TransitionTable};
///
/// struct Idle;
/// struct Running;
///
/// impl State<u32> for Idle {
///     fn name(&self) -> &str { "idle" }
///     fn step(&mut self, starts: &mut u32) -> Option<Event> {
///         *starts += 1;
///         Some(Event(0))
///     }
/// }
///
/// impl State<u32> for Running {
///     fn name(&self) -> &str { "running" }
///     fn step(&mut self, _starts: &mut u32) -> Option<Event> { None }
/// }
///
/// let table = TransitionTable::new(
///     vec![Transition { from: StateId(0), event: Event(0), to: StateId(1) }],
///     1,
/// ).unwrap();
///
/// let handlers: Vec<Box<dyn State<u32>>> = vec![Box::new(Idle), Box::new(Running)];
/// let mut machine = Machine::new("Launcher", &table, handlers, StateId(0)).unwrap();
///
/// let mut starts = 0;
/// assert_eq!(machine.step(&mut starts), Ok(StepResult::Idle));
/// assert!(matches!(
///     machine.step(&mut starts),
///     Ok(StepResult::Transitioned { .. })
/// ));
/// assert_eq!(machine.current(), StateId(1));
/// assert_eq!(starts, 1);
/// ```
pub struct Machine<'t, C> {
    name: MachineName,
    current: StateId,
    pending: Option<Event>,
    table: &'t TransitionTable,
    handlers: Vec<Box<dyn State<C>>>,
    journal: TransitionJournal,
}

impl<'t, C> Machine<'t, C> {
    /// Create a machine as a plain value; the caller decides where it lives.
    ///
    /// `handlers` is indexed by [`StateId`]: handler `i` is the state
    /// `StateId(i)`. Fails if the name is empty, no handlers were given, the
    /// initial state has no handler, or the table references a state id with
    /// no handler. The machine starts with no event pending, so the first
    /// [`Machine::step`] invokes the initial handler without transitioning.
    pub fn new(
        name: &str,
        table: &'t TransitionTable,
        handlers: Vec<Box<dyn State<C>>>,
        initial: StateId,
    ) -> Result<Self, CreateError> {
        let name = MachineName::new(name)?;
        debug_log!("fsm create {}", name);

        if handlers.is_empty() {
            error_log!("fsm {}: no handlers", name);
            return Err(CreateError::NoHandlers);
        }
        if initial.index() >= handlers.len() {
            error_log!("fsm {}: initial state {} out of range", name, initial);
            return Err(CreateError::InitialStateOutOfRange(initial));
        }
        if let Some(id) = table.states().find(|s| s.index() >= handlers.len()) {
            error_log!("fsm {}: table references unknown state {}", name, id);
            return Err(CreateError::UnknownState(id));
        }

        Ok(Self {
            name,
            current: initial,
            pending: None,
            table,
            handlers,
            journal: TransitionJournal::new(),
        })
    }

    /// Create a machine behind a heap handle.
    ///
    /// Same contract as [`Machine::new`]; the box makes the ownership
    /// transfer explicit for callers that want a stable address.
    pub fn new_boxed(
        name: &str,
        table: &'t TransitionTable,
        handlers: Vec<Box<dyn State<C>>>,
        initial: StateId,
    ) -> Result<Box<Self>, CreateError> {
        Self::new(name, table, handlers, initial).map(Box::new)
    }

    /// Advance the machine by exactly one transition-then-invoke cycle.
    ///
    /// 1. If an event is pending, scan the table for `(current, event)`.
    ///    A match moves the machine and clears the pending event; no match
    ///    yields [`StepError::UnhandledEvent`] and leaves the current state
    ///    unchanged.
    /// 2. Invoke the current state's handler with `ctx`; its return value
    ///    becomes the new pending event. The handler runs even when the scan
    ///    found no match, and its return never masks that error.
    ///
    /// An `UnhandledEvent` step leaves the machine fully recoverable: the
    /// caller may keep stepping, treat it as fatal, or repair the context.
    pub fn step(&mut self, ctx: &mut C) -> Result<StepResult, StepError> {
        debug_log!("fsm engine {}", self.name);

        let mut outcome = Ok(StepResult::Idle);
        if let Some(event) = self.pending {
            match self.table.lookup(self.current, event) {
                Some(rule) => {
                    self.journal = self.journal.record(TransitionRecord {
                        from: self.current,
                        to: rule.to,
                        event,
                        timestamp: Utc::now(),
                    });
                    outcome = Ok(StepResult::Transitioned {
                        from: self.current,
                        event,
                        to: rule.to,
                    });
                    self.current = rule.to;
                    self.pending = None;
                }
                None => {
                    error_log!(
                        "fsm {}: no transition from {} on {}",
                        self.name,
                        self.current,
                        event
                    );
                    outcome = Err(StepError::UnhandledEvent {
                        state: self.current,
                        event,
                    });
                }
            }
        }

        let current = self.current;
        let Some(handler) = self.handlers.get_mut(current.index()) else {
            error_log!("fsm {}: current state {} is corrupt", self.name, current);
            return Err(StepError::CorruptState(current));
        };

        self.pending = match handler.step(ctx) {
            Some(event) if event.0 >= self.table.event_count() => {
                error_log!(
                    "fsm {}: handler {} returned out-of-range event {}",
                    self.name,
                    current,
                    event
                );
                None
            }
            next => next,
        };

        outcome
    }

    /// Tear the machine down, consuming it.
    ///
    /// Clears the handler list, pending event, and journal before dropping.
    /// Ownership makes any further use a compile error, so no runtime guard
    /// against reuse is needed.
    pub fn destroy(mut self) {
        debug_log!("fsm destroy {}", self.name);
        self.pending = None;
        self.handlers.clear();
        self.journal = TransitionJournal::new();
    }

    /// Render this machine's table as a Mermaid diagram, labelling states
    /// with their handlers' names. See [`crate::diagram::mermaid`].
    pub fn diagram(&self, event_labels: &[&str]) -> String {
        let state_labels: Vec<&str> = self.handlers.iter().map(|h| h.name()).collect();
        crate::diagram::mermaid(self.table, &state_labels, event_labels)
    }

    pub fn name(&self) -> &MachineName {
        &self.name
    }

    /// The current state's id.
    pub fn current(&self) -> StateId {
        self.current
    }

    /// The current state's handler name.
    pub fn current_name(&self) -> &str {
        self.handlers
            .get(self.current.index())
            .map(|h| h.name())
            .unwrap_or("<corrupt>")
    }

    /// The event queued for the next step, if any.
    pub fn pending(&self) -> Option<Event> {
        self.pending
    }

    /// Number of events the machine recognizes.
    pub fn event_count(&self) -> u16 {
        self.table.event_count()
    }

    /// The journal of every transition applied so far.
    pub fn journal(&self) -> &TransitionJournal {
        &self.journal
    }
}
