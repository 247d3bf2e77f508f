//! `itin-plan` — the itinerary planning kernel.
//!
//! Everything in this crate is a pure, synchronous function over plain data:
//! no I/O, no shared mutable state, no mutation of inputs.  Every operation
//! returns newly allocated output, so repeated and concurrent calls are safe
//! by construction and the host UI needs no locking discipline.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`model`]     | `Itinerary`, `Day`, `Activity`, `ActivityKind`            |
//! | [`sequencer`] | `generate_days` — expand a date range into day records    |
//! | [`schedule`]  | `sort_by_time`, `effective_duration`, `detect_conflicts`  |
//! | [`summary`]   | `compute_stats`, `validate`                               |
//!
//! # Error model (summary)
//!
//! No operation here fails.  Structural problems (missing title, inverted
//! date range, zero days) are surfaced as an accumulated message list by
//! [`summary::validate`]; the sequencer answers an inverted range with an
//! empty day list rather than an error, and it is the caller's job to run
//! `validate` before treating an itinerary as saveable.

pub mod model;
pub mod schedule;
pub mod sequencer;
pub mod summary;


pub use model::{Accommodation, Activity, ActivityKind, Day, Itinerary, Transportation};
pub use schedule::{TimeConflict, detect_conflicts, effective_duration, sort_by_time};
pub use sequencer::generate_days;
pub use summary::{ItineraryStats, Validation, compute_stats, validate};
