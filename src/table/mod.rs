//! Transition tables and their validation.
//!
//! A [`TransitionTable`] is an ordered list of [`Transition`] records plus
//! the number of events the machine recognizes. Validation happens once, in
//! [`TransitionTable::new`]: a constructed table is well-formed by
//! construction, so the engine never re-checks it. Tables are read-only
//! after construction and may be shared across machines.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Event, StateId};
use crate::diag::{debug_log, error_log};

/// A single transition rule: in state `from`, on `event`, move to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: StateId,
    pub event: Event,
    pub to: StateId,
}

/// Errors detected while validating a transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("record {index}: event {event} is out of bounds (event count {count})")]
    EventOutOfBounds {
        index: usize,
        event: Event,
        count: u16,
    },

    #[error("duplicate transition from {from} on {event}")]
    DuplicateTransition { from: StateId, event: Event },

    #[error("ambiguous transitions from {from} to {to} under different events")]
    AmbiguousTransition { from: StateId, to: StateId },
}

/// Validated, ordered transition table.
///
/// Dispatch is a first-match linear scan over the records. The scan is
/// deliberately un-indexed: tables of the intended size (a few dozen
/// entries) do not benefit from anything fancier.
///
/// # Validation rules
///
/// Checked in order by [`TransitionTable::new`]:
///
/// 1. every record's event is below the event count;
/// 2. no two records share the same `(from, event)` pair, since such a table
///    would be nondeterministic;
/// 3. no two records share the same `(from, to)` pair under different
///    events. Two events from one state converging on the same target must
///    instead be modeled with distinct target states or collapsed into a
///    single record.
///
/// # Example
///
/// ```rust
/// use transit::{Event, StateId, Transition, TransitionTable};
///
/// let table = TransitionTable::new(
///     vec![
///         Transition { from: StateId(0), event: Event(0), to: StateId(1) },
///         Transition { from: StateId(1), event: Event(1), to: StateId(0) },
///     ],
///     2,
/// )
/// .unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert!(table.lookup(StateId(0), Event(0)).is_some());
/// assert!(table.lookup(StateId(0), Event(1)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransitionTable {
    transitions: Vec<Transition>,
    event_count: u16,
}

impl TransitionTable {
    /// Validate and construct a table.
    ///
    /// `event_count` is the number of events the machine recognizes; every
    /// event in `transitions` must be strictly below it.
    pub fn new(transitions: Vec<Transition>, event_count: u16) -> Result<Self, TableError> {
        debug_log!(
            "validating transition table ({} records, {} events)",
            transitions.len(),
            event_count
        );

        for (index, t) in transitions.iter().enumerate() {
            if t.event.0 >= event_count {
                error_log!("record {}: event {} out of bounds", index, t.event);
                return Err(TableError::EventOutOfBounds {
                    index,
                    event: t.event,
                    count: event_count,
                });
            }
        }

        for (i, a) in transitions.iter().enumerate() {
            for b in &transitions[i + 1..] {
                if a.from == b.from && a.event == b.event {
                    error_log!("duplicate transition from {} on {}", a.from, a.event);
                    return Err(TableError::DuplicateTransition {
                        from: a.from,
                        event: a.event,
                    });
                }
            }
        }

        for (i, a) in transitions.iter().enumerate() {
            for b in &transitions[i + 1..] {
                if a.from == b.from && a.to == b.to && a.event != b.event {
                    error_log!("ambiguous transitions from {} to {}", a.from, a.to);
                    return Err(TableError::AmbiguousTransition {
                        from: a.from,
                        to: a.to,
                    });
                }
            }
        }

        Ok(Self {
            transitions,
            event_count,
        })
    }

    /// Find the first record matching `(from, event)`, in table order.
    pub fn lookup(&self, from: StateId, event: Event) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|t| t.from == from && t.event == event)
    }

    /// All records, in table order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Number of events the machine recognizes.
    pub fn event_count(&self) -> u16 {
        self.event_count
    }

    /// Every state id the table references (sources and targets, with
    /// repetition).
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.transitions.iter().flat_map(|t| [t.from, t.to])
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(from: u16, event: u16, to: u16) -> Transition {
        Transition {
            from: StateId(from),
            event: Event(event),
            to: StateId(to),
        }
    }

    #[test]
    fn valid_table_passes() {
        let table = TransitionTable::new(vec![t(0, 0, 1), t(1, 1, 0)], 2).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.event_count(), 2);
    }

    #[test]
    fn empty_table_validates() {
        // A transition-less machine is legitimate: a single state whose
        // handler runs every tick.
        let table = TransitionTable::new(vec![], 2).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.lookup(StateId(0), Event(0)), None);
    }

    #[test]
    fn event_at_count_is_out_of_bounds() {
        let result = TransitionTable::new(vec![t(0, 2, 1)], 2);
        assert_eq!(
            result,
            Err(TableError::EventOutOfBounds {
                index: 0,
                event: Event(2),
                count: 2,
            })
        );
    }

    #[test]
    fn duplicate_from_event_pair_is_rejected() {
        // Same (from, event) with different targets: nondeterministic.
        let result = TransitionTable::new(vec![t(0, 0, 1), t(0, 0, 2)], 2);
        assert_eq!(
            result,
            Err(TableError::DuplicateTransition {
                from: StateId(0),
                event: Event(0),
            })
        );
    }

    #[test]
    fn repeated_identical_record_is_rejected() {
        let result = TransitionTable::new(vec![t(0, 0, 1), t(0, 0, 1)], 2);
        assert!(matches!(
            result,
            Err(TableError::DuplicateTransition { .. })
        ));
    }

    #[test]
    fn same_from_to_under_different_events_is_rejected() {
        let result = TransitionTable::new(vec![t(0, 0, 1), t(0, 1, 1)], 2);
        assert_eq!(
            result,
            Err(TableError::AmbiguousTransition {
                from: StateId(0),
                to: StateId(1),
            })
        );
    }

    #[test]
    fn fan_in_from_different_states_is_allowed() {
        // Two different source states may converge on the same target.
        let table = TransitionTable::new(vec![t(0, 0, 2), t(1, 0, 2)], 1).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn bounds_are_checked_before_duplicates() {
        // Both violations present; the bounds check reports first.
        let result = TransitionTable::new(vec![t(0, 5, 1), t(0, 5, 2)], 2);
        assert!(matches!(result, Err(TableError::EventOutOfBounds { .. })));
    }

    #[test]
    fn duplicates_are_checked_before_ambiguity() {
        let result = TransitionTable::new(
            vec![t(0, 0, 1), t(0, 0, 1), t(2, 0, 3), t(2, 1, 3)],
            2,
        );
        assert!(matches!(
            result,
            Err(TableError::DuplicateTransition { .. })
        ));
    }

    #[test]
    fn lookup_matches_exact_pair_only() {
        let table =
            TransitionTable::new(vec![t(0, 0, 1), t(0, 1, 2), t(1, 0, 0)], 2).unwrap();

        assert_eq!(table.lookup(StateId(0), Event(1)), Some(&t(0, 1, 2)));
        assert_eq!(table.lookup(StateId(1), Event(1)), None);
        assert_eq!(table.lookup(StateId(9), Event(0)), None);
    }

    #[test]
    fn states_yields_sources_and_targets() {
        let table = TransitionTable::new(vec![t(0, 0, 3)], 1).unwrap();
        let states: Vec<StateId> = table.states().collect();
        assert_eq!(states, vec![StateId(0), StateId(3)]);
    }

    #[test]
    fn table_serializes_to_json() {
        let table = TransitionTable::new(vec![t(0, 0, 1)], 1).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["event_count"], 1);
        assert_eq!(json["transitions"][0]["from"], 0);
    }
}
