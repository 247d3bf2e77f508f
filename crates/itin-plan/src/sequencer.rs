//! Day sequencing: expand a date range into the itinerary's day list.
//!
//! # Regeneration model
//!
//! `generate_days` is a pure function of `(start, end)` plus the previous
//! day list and is re-run on *every* range edit, not only when the day count
//! changes.  Recomputing unconditionally means a shifted range of equal
//! length still re-dates every day; gating on the count would let stale
//! dates persist silently.
//!
//! Per-day content survives regeneration by index: the new day at position
//! `i` carries forward the old day at position `i` (id, notes, activities,
//! transportation, accommodation) with only its date rewritten.  Positions
//! past the old length start empty; positions dropped by a shorter range
//! are discarded together with their activities.

use chrono::{Days, NaiveDate};

use crate::model::Day;

/// Number of days in the inclusive range, negative when inverted.
#[inline]
fn day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Produce the day list spanning `[start, end]` inclusive, carrying forward
/// content from `existing` by index.
///
/// Total by design: an inverted range (`start > end`) yields an empty list
/// rather than an error — [`crate::summary::validate`] is where that range
/// is reported to the user.
///
/// Idempotent: feeding the output back in as `existing` with the same range
/// reproduces it exactly (ids included).
pub fn generate_days(start: NaiveDate, end: NaiveDate, existing: &[Day]) -> Vec<Day> {
    let count = day_count(start, end);
    if count <= 0 {
        return Vec::new();
    }

    (0..count as u64)
        .map(|offset| {
            let date = start + Days::new(offset);
            match existing.get(offset as usize) {
                Some(prev) => Day { date, ..prev.clone() },
                None => Day::empty(date),
            }
        })
        .collect()
}
