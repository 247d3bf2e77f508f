//! `itin-core` — foundational types for the `itinera` planning kernel.
//!
//! This crate is a dependency of every other `itin-*` crate.  It intentionally
//! has no `itin-*` dependencies and minimal external ones (`chrono`, `serde`,
//! and `thiserror`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `DayId`, `ActivityId`, `next_unique_id`                 |
//! | [`time`]      | `TimeOfDay` (exact minute-of-day), `ParseTimeError`     |
//! | [`fmt`]       | Fail-soft display formatting for dates/times/money      |
//! | [`transport`] | `TransportMode` enum and travel-time estimation         |

pub mod fmt;
pub mod ids;
pub mod time;
pub mod transport;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{ActivityId, DayId, next_unique_id};
pub use time::{ParseTimeError, TimeOfDay};
pub use transport::TransportMode;
