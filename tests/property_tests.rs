//! Property-based tests for table validation and the dispatch engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use transit::core::name::{MachineName, NameError, MAX_NAME_LEN};
use transit::{
    Event, Machine, State, StateId, StepResult, TableError, Transition, TransitionTable,
};

/// Handler that never reports an event.
struct Inert;

impl State<()> for Inert {
    fn name(&self) -> &str {
        "inert"
    }

    fn step(&mut self, _ctx: &mut ()) -> Option<Event> {
        None
    }
}

/// A well-formed table description: `n_states` states, `n_events` events
/// (with `n_events <= n_states`), and a set of unique `(from, event)` pairs.
///
/// Targets are derived as `(from + event + 1) % n_states`, which guarantees
/// that for a fixed source state, distinct events map to distinct targets,
/// so neither duplicate nor ambiguity rules can trip.
#[derive(Clone, Debug)]
struct TablePlan {
    n_states: u16,
    n_events: u16,
    records: Vec<Transition>,
}

fn arbitrary_table() -> impl Strategy<Value = TablePlan> {
    (3u16..7)
        .prop_flat_map(|n_states| {
            (Just(n_states), 1u16..=n_states.min(4)).prop_flat_map(|(n_states, n_events)| {
                let pairs = prop::collection::hash_set(
                    (0..n_states, 0..n_events),
                    1..=usize::from(n_states * n_events),
                );
                (Just(n_states), Just(n_events), pairs)
            })
        })
        .prop_map(|(n_states, n_events, pairs)| {
            let records = pairs
                .into_iter()
                .map(|(from, event)| Transition {
                    from: StateId(from),
                    event: Event(event),
                    to: StateId((from + event + 1) % n_states),
                })
                .collect();
            TablePlan {
                n_states,
                n_events,
                records,
            }
        })
}

proptest! {
    #[test]
    fn well_formed_tables_validate(plan in arbitrary_table()) {
        let table = TransitionTable::new(plan.records.clone(), plan.n_events);
        prop_assert!(table.is_ok());

        let table = table.unwrap();
        prop_assert_eq!(table.len(), plan.records.len());

        // Every record is found again by lookup.
        for r in &plan.records {
            prop_assert_eq!(table.lookup(r.from, r.event), Some(r));
        }
    }

    #[test]
    fn duplicated_record_is_rejected(plan in arbitrary_table(), seed in any::<prop::sample::Index>()) {
        let mut records = plan.records.clone();
        let dup = records[seed.index(records.len())];
        records.push(dup);

        let result = TransitionTable::new(records, plan.n_events);
        prop_assert_eq!(
            result,
            Err(TableError::DuplicateTransition { from: dup.from, event: dup.event })
        );
    }

    #[test]
    fn out_of_bounds_event_is_rejected(plan in arbitrary_table(), seed in any::<prop::sample::Index>()) {
        let mut records = plan.records.clone();
        let idx = seed.index(records.len());
        records[idx].event = Event(plan.n_events);

        let result = TransitionTable::new(records, plan.n_events);
        prop_assert!(
            matches!(result, Err(TableError::EventOutOfBounds { .. })),
            "expected EventOutOfBounds, got {:?}",
            result
        );
    }

    #[test]
    fn converging_events_from_one_state_are_rejected(
        from in 0u16..4,
        to in 0u16..4,
        e1 in 0u16..4,
        offset in 1u16..4,
    ) {
        let e2 = (e1 + offset) % 4;
        let records = vec![
            Transition { from: StateId(from), event: Event(e1), to: StateId(to) },
            Transition { from: StateId(from), event: Event(e2), to: StateId(to) },
        ];

        let result = TransitionTable::new(records, 4);
        prop_assert_eq!(
            result,
            Err(TableError::AmbiguousTransition { from: StateId(from), to: StateId(to) })
        );
    }

    #[test]
    fn machine_name_never_exceeds_bound(raw in ".*") {
        match MachineName::new(&raw) {
            Ok(name) => {
                prop_assert!(name.as_str().chars().count() <= MAX_NAME_LEN);
                prop_assert_eq!(
                    name.was_truncated(),
                    raw.chars().count() > MAX_NAME_LEN
                );
                // A kept name is always a prefix of the original.
                prop_assert!(raw.starts_with(name.as_str()));
            }
            Err(NameError::Empty) => prop_assert!(raw.is_empty()),
        }
    }

    #[test]
    fn idle_machine_never_moves(plan in arbitrary_table(), steps in 1usize..10) {
        let table = TransitionTable::new(plan.records.clone(), plan.n_events).unwrap();
        let handlers: Vec<Box<dyn State<()>>> = (0..plan.n_states)
            .map(|_| Box::new(Inert) as Box<dyn State<()>>)
            .collect();

        let initial = StateId(0);
        let mut machine = Machine::new("prop", &table, handlers, initial).unwrap();

        for _ in 0..steps {
            prop_assert_eq!(machine.step(&mut ()), Ok(StepResult::Idle));
        }

        prop_assert_eq!(machine.current(), initial);
        prop_assert!(machine.journal().is_empty());
    }

    #[test]
    fn journal_length_matches_transition_count(plan in arbitrary_table(), steps in 1usize..20) {
        // Handlers that always request event 0; the machine wanders wherever
        // the table leads and the journal must mirror every move.
        struct Eager;
        impl State<()> for Eager {
            fn name(&self) -> &str { "eager" }
            fn step(&mut self, _ctx: &mut ()) -> Option<Event> { Some(Event(0)) }
        }

        let table = TransitionTable::new(plan.records.clone(), plan.n_events).unwrap();
        let handlers: Vec<Box<dyn State<()>>> = (0..plan.n_states)
            .map(|_| Box::new(Eager) as Box<dyn State<()>>)
            .collect();

        let mut machine = Machine::new("prop", &table, handlers, StateId(0)).unwrap();

        let mut transitions = 0usize;
        for _ in 0..steps {
            if let Ok(StepResult::Transitioned { .. }) = machine.step(&mut ()) {
                transitions += 1;
            }
        }

        prop_assert_eq!(machine.journal().len(), transitions);
    }
}
