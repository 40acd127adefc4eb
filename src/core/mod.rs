//! Core state machine types.
//!
//! This module contains the building blocks the engine dispatches over:
//! - State handlers via the [`State`] trait, identified by [`StateId`]
//! - [`Event`] identifiers
//! - Bounded machine names
//! - The immutable [`TransitionJournal`]
//!
//! Everything here is plain data plus one trait; the engine itself lives in
//! [`crate::machine`].

mod event;
mod journal;
pub mod name;
mod state;

pub use event::Event;
pub use journal::{TransitionJournal, TransitionRecord};
pub use name::{MachineName, NameError, MAX_NAME_LEN};
pub use state::{State, StateId};
