//! Core itinerary types: `Itinerary`, `Day`, `Activity`, and `ActivityKind`.
//!
//! # Ownership model
//!
//! An `Itinerary` exclusively owns its `Day`s and each `Day` its
//! `Activity`s; nothing in the tree is shared or reference-counted.  The
//! `days` list is intended to contiguously span `[start_date, end_date]` in
//! ascending order, one entry per calendar day — that invariant is
//! (re-)established by [`crate::sequencer::generate_days`] whenever the range
//! changes, not enforced by construction, because a half-filled form must be
//! representable while the user is still typing.
//!
//! # Wire form
//!
//! All types derive `serde` round-trippably: dates as ISO `YYYY-MM-DD`
//! strings, times as `"HH:MM"`, activity kinds lowercase.  Every field a
//! form may leave blank carries `#[serde(default)]` so a partial record
//! still deserializes.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use itin_core::{ActivityId, DayId, TimeOfDay};

/// Free-form transportation details attached to a day (mode, carrier,
/// booking reference, …).  Never consulted by validation.
pub type Transportation = BTreeMap<String, String>;

/// Free-form accommodation details attached to a day.  Never consulted by
/// validation.
pub type Accommodation = BTreeMap<String, String>;

// ── ActivityKind ──────────────────────────────────────────────────────────────

/// Broad category of a scheduled item.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ActivityKind {
    #[default]
    Attraction,
    Restaurant,
    Hotel,
    Transport,
    Entertainment,
    Shopping,
    Nature,
    Nightlife,
    Other,
}

// ── Activity ──────────────────────────────────────────────────────────────────

/// One scheduled item within a day.
///
/// Two distinct duration notions hang off this struct and must not be
/// conflated: [`crate::schedule::effective_duration`] resolves start/end
/// times with a 60-minute fallback for conflict math, while aggregation in
/// [`crate::summary::compute_stats`] sums the raw `duration_min` field with
/// a zero fallback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    #[serde(default)]
    pub kind: ActivityKind,
    pub title: String,
    /// Scheduled slot within the day; untimed activities sort last.
    #[serde(default)]
    pub time: Option<TimeOfDay>,
    /// Declared length in minutes.  `None` is distinct from `Some(0)`.
    #[serde(default)]
    pub duration_min: Option<u32>,
    /// Explicit window, overriding `duration_min` when both ends are set.
    #[serde(default)]
    pub start_time: Option<TimeOfDay>,
    #[serde(default)]
    pub end_time: Option<TimeOfDay>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Activity {
    /// A blank activity of the given kind with a fresh id.
    pub fn new(kind: ActivityKind, title: impl Into<String>) -> Activity {
        Activity {
            id: ActivityId::fresh(),
            kind,
            title: title.into(),
            time: None,
            duration_min: None,
            start_time: None,
            end_time: None,
            location: String::new(),
            cost: None,
            notes: String::new(),
            tags: BTreeSet::new(),
        }
    }
}

// ── Day ───────────────────────────────────────────────────────────────────────

/// One calendar day of a plan.
///
/// Identity is positional (index within `Itinerary::days`) plus the stable
/// `id`; `date` is derived from the itinerary's range by the sequencer and
/// never edited independently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub id: DayId,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub transportation: Option<Transportation>,
    #[serde(default)]
    pub accommodation: Option<Accommodation>,
}

impl Day {
    /// A contentless day with a fresh id, as produced for dates that had no
    /// predecessor during range regeneration.
    pub fn empty(date: NaiveDate) -> Day {
        Day {
            id: DayId::fresh(),
            date,
            notes: String::new(),
            activities: Vec::new(),
            transportation: None,
            accommodation: None,
        }
    }
}

// ── Itinerary ─────────────────────────────────────────────────────────────────

/// A full travel plan: trip metadata plus the ordered day list.
///
/// Dates are optional so the record can hold a form mid-edit;
/// [`crate::summary::validate`] reports their absence instead of this type
/// rejecting it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub title: String,
    pub destination: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub days: Vec<Day>,
}

impl Itinerary {
    /// A fresh plan with no dates and no days.
    pub fn new(title: impl Into<String>, destination: impl Into<String>) -> Itinerary {
        Itinerary {
            title: title.into(),
            destination: destination.into(),
            ..Itinerary::default()
        }
    }
}

impl Default for Itinerary {
    fn default() -> Itinerary {
        Itinerary {
            title: String::new(),
            destination: String::new(),
            start_date: None,
            end_date: None,
            travelers: 1,
            budget: 0.0,
            days: Vec::new(),
        }
    }
}

fn default_travelers() -> u32 {
    1
}
