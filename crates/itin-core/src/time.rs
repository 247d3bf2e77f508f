//! Time-of-day model.
//!
//! # Design
//!
//! A time of day is represented as an integer minute count from midnight,
//! wrapped in `TimeOfDay`.  Using an integer as the canonical unit means all
//! schedule arithmetic (durations, overlaps) is exact and comparisons are
//! O(1); the derived `Ord` is chronological order, which for valid 24-hour
//! times coincides with lexicographic order of the `"HH:MM"` rendering.
//!
//! On the wire a `TimeOfDay` is the `"HH:MM"` string form controls produce,
//! so an exported itinerary round-trips byte-for-byte through JSON.
//!
//! Midnight wraparound is deliberately out of scope: subtracting a later
//! time from an earlier one yields a negative minute count, and callers that
//! care must decide what that means.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// A local wall-clock time of day with minute resolution.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from hour/minute components.  `None` when out of range.
    pub fn new(hour: u16, minute: u16) -> Option<TimeOfDay> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(TimeOfDay(hour * 60 + minute))
    }

    /// Build from a minute-of-day count.  `None` when ≥ 1440.
    pub fn from_minutes(minutes: u16) -> Option<TimeOfDay> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        Some(TimeOfDay(minutes))
    }

    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Minutes elapsed since midnight.
    #[inline]
    pub fn minutes_from_midnight(self) -> u16 {
        self.0
    }

    /// 12-hour clock rendering, e.g. `"9:05 AM"`, `"12:00 AM"` for midnight.
    pub fn to_12h(self) -> String {
        let (hour, minute) = (self.hour(), self.minute());
        let (hour12, suffix) = match hour {
            0 => (12, "AM"),
            1..=11 => (hour, "AM"),
            12 => (12, "PM"),
            _ => (hour - 12, "PM"),
        };
        format!("{hour12}:{minute:02} {suffix}")
    }
}

/// Signed difference in minutes.  Negative when `rhs` is later than `self`.
impl std::ops::Sub for TimeOfDay {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: TimeOfDay) -> i64 {
        self.0 as i64 - rhs.0 as i64
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Failure to interpret a string as a `TimeOfDay`.
#[derive(Debug, Clone, Error)]
#[error("invalid time of day {input:?}: expected \"HH:MM\"")]
pub struct ParseTimeError {
    input: String,
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    /// Accepts `"HH:MM"` and `"HH:MM:SS"` (seconds ignored).  Hours above 23
    /// or minutes above 59 are rejected rather than wrapped.
    fn from_str(s: &str) -> Result<TimeOfDay, ParseTimeError> {
        let err = || ParseTimeError { input: s.to_owned() };

        let mut parts = s.trim().splitn(3, ':');
        let hour: u16 = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(err)?
            .parse()
            .map_err(|_| err())?;
        let minute: u16 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        if let Some(seconds) = parts.next() {
            let _: u16 = seconds.parse().map_err(|_| err())?;
        }

        TimeOfDay::new(hour, minute).ok_or_else(err)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

impl serde::Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<TimeOfDay, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
