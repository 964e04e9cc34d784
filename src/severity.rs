use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityTier {
    #[default]
    Low,
    Moderate,
    High,
    Extreme,
}

impl SeverityTier {
    /// Share of shelter centers and medical teams activated.
    pub fn shelter_multiplier(self) -> f64 {
        match self {
            SeverityTier::Low => 0.3,
            SeverityTier::Moderate => 0.6,
            SeverityTier::High | SeverityTier::Extreme => 1.0,
        }
    }

    pub fn ambulance_multiplier(self) -> f64 {
        match self {
            SeverityTier::Low => 0.2,
            SeverityTier::Moderate => 0.5,
            SeverityTier::High => 0.8,
            SeverityTier::Extreme => 1.0,
        }
    }

    pub fn drone_multiplier(self) -> f64 {
        match self {
            SeverityTier::Low => 0.2,
            SeverityTier::Moderate => 0.5,
            SeverityTier::High | SeverityTier::Extreme => 0.8,
        }
    }

    /// Normalized weight in [0, 1]; tracks the ambulance activation share.
    pub fn weight(self) -> f64 {
        self.ambulance_multiplier()
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeverityTier::Low => "Low",
            SeverityTier::Moderate => "Moderate",
            SeverityTier::High => "High",
            SeverityTier::Extreme => "Extreme",
        };
        f.write_str(label)
    }
}

/// Maps a magnitude onto its tier. Bands are closed on the lower edge; NaN and
/// negative magnitudes land in `Low`.
pub fn severity_tier(magnitude: f64) -> SeverityTier {
    if magnitude >= 7.0 {
        SeverityTier::Extreme
    } else if magnitude >= 5.5 {
        SeverityTier::High
    } else if magnitude >= 4.0 {
        SeverityTier::Moderate
    } else {
        SeverityTier::Low
    }
}

pub fn classify(magnitude: f64) -> (SeverityTier, f64) {
    let tier = severity_tier(magnitude);
    (tier, tier.weight())
}
