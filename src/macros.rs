//! Macros for declaring state machines with minimal boilerplate.

/// Declare sequentially numbered [`StateId`](crate::StateId) constants,
/// optionally with a count constant.
///
/// # Example
///
/// ```rust
/// use transit::{state_ids, StateId};
///
/// state_ids! { MENU_INIT, MENU_MAIN, MENU_BRIGHTNESS; count: STATE_COUNT }
///
/// assert_eq!(MENU_INIT, StateId(0));
/// assert_eq!(MENU_BRIGHTNESS, StateId(2));
/// assert_eq!(STATE_COUNT, 3);
/// ```
#[macro_export]
macro_rules! state_ids {
    ($vis:vis $($name:ident),+ $(,)?) => {
        $crate::state_ids!(@assign 0u16, $vis, $($name),+);
    };
    ($vis:vis $($name:ident),+ ; count: $count:ident) => {
        $crate::state_ids!(@assign 0u16, $vis, $($name),+);
        $vis const $count: u16 = 0u16 $(+ { let _ = stringify!($name); 1u16 })+;
    };
    (@assign $idx:expr, $vis:vis, $head:ident $(, $tail:ident)*) => {
        $vis const $head: $crate::core::StateId = $crate::core::StateId($idx);
        $crate::state_ids!(@assign $idx + 1u16, $vis, $($tail),*);
    };
    (@assign $idx:expr, $vis:vis $(,)?) => {};
}

/// Declare sequentially numbered [`Event`](crate::Event) constants,
/// optionally with a count constant (the table's event count).
///
/// # Example
///
/// ```rust
/// use transit::{event_ids, Event};
///
/// event_ids! { EV_NEXT, EV_BACK; count: EV_COUNT }
///
/// assert_eq!(EV_NEXT, Event(0));
/// assert_eq!(EV_BACK, Event(1));
/// assert_eq!(EV_COUNT, 2);
/// ```
#[macro_export]
macro_rules! event_ids {
    ($vis:vis $($name:ident),+ $(,)?) => {
        $crate::event_ids!(@assign 0u16, $vis, $($name),+);
    };
    ($vis:vis $($name:ident),+ ; count: $count:ident) => {
        $crate::event_ids!(@assign 0u16, $vis, $($name),+);
        $vis const $count: u16 = 0u16 $(+ { let _ = stringify!($name); 1u16 })+;
    };
    (@assign $idx:expr, $vis:vis, $head:ident $(, $tail:ident)*) => {
        $vis const $head: $crate::core::Event = $crate::core::Event($idx);
        $crate::event_ids!(@assign $idx + 1u16, $vis, $($tail),*);
    };
    (@assign $idx:expr, $vis:vis $(,)?) => {};
}

/// Build and validate a [`TransitionTable`](crate::TransitionTable) from
/// `(state, event) => next-state` rows.
///
/// Expands to `TransitionTable::new(...)`, so the result is a
/// `Result<TransitionTable, TableError>`.
///
/// # Example
///
/// ```rust
/// use transit::{event_ids, state_ids, transition_table};
///
/// state_ids! { IDLE, RUNNING }
/// event_ids! { EV_START, EV_STOP; count: EV_COUNT }
///
/// let table = transition_table! {
///     events: EV_COUNT;
///     (IDLE, EV_START) => RUNNING,
///     (RUNNING, EV_STOP) => IDLE,
/// }
/// .unwrap();
///
/// assert_eq!(table.len(), 2);
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        events: $count:expr;
        $( ($from:expr, $event:expr) => $to:expr ),+ $(,)?
    ) => {
        $crate::table::TransitionTable::new(
            ::std::vec![
                $( $crate::table::Transition {
                    from: $from,
                    event: $event,
                    to: $to,
                } ),+
            ],
            $count,
        )
    };
}
