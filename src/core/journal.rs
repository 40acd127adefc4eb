//! Transition journal: an immutable record of applied transitions.
//!
//! The journal is diagnostic only: the engine records every transition it
//! applies, and the application can inspect the traversal afterwards. It is
//! not a persistence mechanism.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event::Event;
use super::state::StateId;

/// Record of a single applied transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state the machine was in when the event was dispatched
    pub from: StateId,
    /// The state the machine moved to
    pub to: StateId,
    /// The event that triggered the transition
    pub event: Event,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of applied transitions.
///
/// The journal is immutable: [`TransitionJournal::record`] returns a new
/// journal with the record appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use transit::{Event, StateId, TransitionJournal, TransitionRecord};
///
/// let journal = TransitionJournal::new();
/// let journal = journal.record(TransitionRecord {
///     from: StateId(0),
///     to: StateId(1),
///     event: Event(0),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(journal.len(), 1);
/// assert_eq!(journal.path(), vec![StateId(0), StateId(1)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionJournal {
    records: Vec<TransitionRecord>,
}

impl TransitionJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new journal.
    ///
    /// Pure: the existing journal is not mutated.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All recorded transitions, oldest first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// The sequence of states traversed: the first record's source state
    /// followed by every record's target. Empty for an empty journal.
    pub fn path(&self) -> Vec<StateId> {
        let Some(first) = self.records.first() else {
            return Vec::new();
        };
        let mut path = Vec::with_capacity(self.records.len() + 1);
        path.push(first.from);
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(from: u16, to: u16, event: u16) -> TransitionRecord {
        TransitionRecord {
            from: StateId(from),
            to: StateId(to),
            event: Event(event),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn record_is_pure() {
        let journal = TransitionJournal::new();
        let updated = journal.record(rec(0, 1, 0));

        assert!(journal.is_empty());
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn path_traces_the_traversal() {
        let journal = TransitionJournal::new()
            .record(rec(0, 1, 0))
            .record(rec(1, 2, 1))
            .record(rec(2, 0, 1));

        assert_eq!(
            journal.path(),
            vec![StateId(0), StateId(1), StateId(2), StateId(0)]
        );
    }

    #[test]
    fn empty_journal_has_empty_path() {
        assert!(TransitionJournal::new().path().is_empty());
    }

    #[test]
    fn journal_round_trips_through_json() {
        let journal = TransitionJournal::new().record(rec(0, 1, 0));
        let json = serde_json::to_string(&journal).unwrap();
        let back: TransitionJournal = serde_json::from_str(&json).unwrap();
        assert_eq!(journal, back);
    }
}
