//! Itinerary aggregation and structural validation.
//!
//! Both operations are total and read-only.  `compute_stats` folds counts,
//! cost, and declared duration over every day; `validate` accumulates every
//! failure into an ordered message list instead of stopping at the first, so
//! a form can surface the complete set at once.

use serde::Serialize;

use crate::model::Itinerary;

// ── Stats ─────────────────────────────────────────────────────────────────────

/// Summary figures across an entire itinerary.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct ItineraryStats {
    pub total_days: usize,
    pub total_activities: usize,
    /// Sum of activity costs; activities without a cost contribute 0.
    pub total_cost: f64,
    /// Sum of *declared* `duration_min` fields, missing = 0.  Deliberately
    /// not [`crate::schedule::effective_duration`] — aggregation reports
    /// what the user entered, not the conflict-math resolution.
    pub total_duration_min: u64,
}

/// Fold counts, cost, and declared duration over every day and activity.
///
/// An itinerary with no days yields the all-zero default.
pub fn compute_stats(itinerary: &Itinerary) -> ItineraryStats {
    let mut stats = ItineraryStats {
        total_days: itinerary.days.len(),
        ..ItineraryStats::default()
    };

    for day in &itinerary.days {
        stats.total_activities += day.activities.len();
        for activity in &day.activities {
            stats.total_cost += activity.cost.unwrap_or(0.0);
            stats.total_duration_min += u64::from(activity.duration_min.unwrap_or(0));
        }
    }
    stats
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Outcome of [`validate`]: all failures, in check order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Check structural completeness before an itinerary is treated as saveable.
///
/// Never fails and never short-circuits: every violated check contributes
/// one human-readable message, so absence of a required field is reported,
/// not fatal.
pub fn validate(itinerary: &Itinerary) -> Validation {
    let mut errors = Vec::new();

    if itinerary.title.trim().is_empty() {
        errors.push("Title is required".to_owned());
    }
    if itinerary.destination.trim().is_empty() {
        errors.push("Destination is required".to_owned());
    }
    if itinerary.start_date.is_none() {
        errors.push("Start date is required".to_owned());
    }
    if itinerary.end_date.is_none() {
        errors.push("End date is required".to_owned());
    }
    if let (Some(start), Some(end)) = (itinerary.start_date, itinerary.end_date)
        && start > end
    {
        errors.push("Start date must be before end date".to_owned());
    }
    if itinerary.days.is_empty() {
        errors.push("At least one day is required".to_owned());
    }

    Validation {
        is_valid: errors.is_empty(),
        errors,
    }
}
