//! Transportation mode enum and coarse travel-time estimation.
//!
//! The estimate is a planning heuristic, not a routing result: every mode
//! scales one 30-minute baseline hop by a fixed speed multiplier.  It exists
//! so a host UI can suggest a gap between consecutive activities without any
//! geographic data.

use serde::{Deserialize, Serialize};

/// How a traveller moves between two activities.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum TransportMode {
    /// On foot (default — always available).
    #[default]
    Walking,
    Bike,
    Taxi,
    Metro,
    Bus,
    Car,
    Train,
    Flight,
}

/// Baseline hop length the per-mode multipliers scale, in minutes.
const BASE_TRAVEL_MIN: f64 = 30.0;

impl TransportMode {
    /// Speed multiplier relative to the baseline hop.
    pub fn multiplier(self) -> f64 {
        match self {
            TransportMode::Walking => 2.0,
            TransportMode::Bike    => 1.5,
            TransportMode::Taxi    => 0.5,
            TransportMode::Metro   => 0.7,
            TransportMode::Bus     => 0.8,
            TransportMode::Car     => 0.4,
            TransportMode::Train   => 0.3,
            TransportMode::Flight  => 0.1,
        }
    }

    /// Estimated travel time for one hop, rounded to whole minutes.
    pub fn estimate_travel_min(self) -> u32 {
        (BASE_TRAVEL_MIN * self.multiplier()).round() as u32
    }

    /// Lowercase label matching the wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Walking => "walking",
            TransportMode::Bike    => "bike",
            TransportMode::Taxi    => "taxi",
            TransportMode::Metro   => "metro",
            TransportMode::Bus     => "bus",
            TransportMode::Car     => "car",
            TransportMode::Train   => "train",
            TransportMode::Flight  => "flight",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
