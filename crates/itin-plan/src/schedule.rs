//! Within-day activity scheduling: time ordering and conflict detection.
//!
//! # Conflict model
//!
//! Conflicts are detected between *adjacent pairs in time order only*: after
//! filtering to timed activities and sorting, each consecutive pair (A, B)
//! conflicts when A's window runs past B's start.  Three mutually
//! overlapping activities therefore report two conflicts, not three — a
//! deliberate carry-over of the observed behavior, kept so output stays
//! comparable, and called out here rather than silently "fixed".
//!
//! Windows that cross midnight are not modelled; an `end_time` earlier than
//! `start_time` produces a negative effective duration and simply never
//! conflicts with anything after it.

use std::cmp::Ordering;

use crate::model::Activity;

/// When no window and no declared duration are present, assume one hour.
const DEFAULT_DURATION_MIN: i64 = 60;

// ── TimeConflict ──────────────────────────────────────────────────────────────

/// Two activities whose time windows overlap.  Derived transiently; borrows
/// from the input slice and is never stored in the data model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeConflict<'a> {
    /// The earlier activity in time order.
    pub first: &'a Activity,
    /// The activity whose start falls inside `first`'s window.
    pub second: &'a Activity,
    /// Whole minutes by which `first` runs past `second`'s start.
    pub overlap_min: u32,
}

// ── Ordering ──────────────────────────────────────────────────────────────────

/// Order activities by time of day, untimed entries last.
///
/// The sort is stable: untimed activities keep their relative input order
/// among themselves, as do timed activities sharing a slot.  Returns a new
/// sequence of borrows; the input is never reordered.
pub fn sort_by_time(activities: &[Activity]) -> Vec<&Activity> {
    sort_refs(activities.iter().collect())
}

fn sort_refs(mut refs: Vec<&Activity>) -> Vec<&Activity> {
    refs.sort_by(|a, b| match (a.time, b.time) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    refs
}

// ── Durations ─────────────────────────────────────────────────────────────────

/// Resolve an activity's length in minutes.
///
/// An explicit `start_time`/`end_time` window wins; otherwise the declared
/// `duration_min`; otherwise 60.  With both window ends set the result is
/// their signed difference — negative when the end precedes the start, since
/// midnight wraparound is out of scope.
pub fn effective_duration(activity: &Activity) -> i64 {
    match (activity.start_time, activity.end_time) {
        (Some(start), Some(end)) => end - start,
        _ => activity
            .duration_min
            .map_or(DEFAULT_DURATION_MIN, i64::from),
    }
}

// ── Conflict detection ────────────────────────────────────────────────────────

/// Report overlapping time windows among the timed activities of a day.
///
/// Untimed activities are ignored.  Results come out in time order and the
/// input is not mutated.  See the module docs for the adjacent-pair-only
/// scope of the check.
pub fn detect_conflicts(activities: &[Activity]) -> Vec<TimeConflict<'_>> {
    let timed = sort_refs(activities.iter().filter(|a| a.time.is_some()).collect());

    let mut conflicts = Vec::new();
    for pair in timed.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        let (Some(first_start), Some(second_start)) = (first.time, second.time) else {
            continue;
        };

        let first_end = first_start.minutes_from_midnight() as i64 + effective_duration(first);
        let overlap = first_end - second_start.minutes_from_midnight() as i64;
        if overlap > 0 {
            conflicts.push(TimeConflict {
                first,
                second,
                overlap_min: overlap as u32,
            });
        }
    }
    conflicts
}
