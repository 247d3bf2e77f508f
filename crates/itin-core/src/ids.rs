//! Strongly typed identifier wrappers and the process-wide ID generator.
//!
//! Day and activity identifiers only need to be unique within the process
//! lifetime: an itinerary lives in memory for the duration of an editing
//! session and is exported wholesale, so a shared atomic counter is enough.
//! No uniqueness guarantee survives a process restart, and none is needed —
//! activity IDs are only required to be unique within their parent day.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  On the wire they serialize as the
//! bare integer (`#[serde(transparent)]`).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_UNIQUE_ID: AtomicU64 = AtomicU64::new(1);

/// Return an identifier unique within the process lifetime.
///
/// Both [`DayId::fresh`] and [`ActivityId::fresh`] draw from this counter,
/// so a day and an activity never share a raw value either.
#[inline]
pub fn next_unique_id() -> u64 {
    NEXT_UNIQUE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Generate a typed ID wrapper around the shared `u64` counter.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub u64);

        impl $name {
            /// Draw a fresh identifier from the process-wide counter.
            #[inline]
            pub fn fresh() -> $name {
                $name(next_unique_id())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identifier of one calendar day within an itinerary.  Stable across
    /// date-range regeneration for days whose index survives.
    pub struct DayId;
}

typed_id! {
    /// Identifier of a scheduled activity.  Unique within its parent day
    /// (and, by construction, within the process).
    pub struct ActivityId;
}
