use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::BrevetError;

/// the ACP-sanctioned distance class an event is run under. this is distinct
/// from the measured route length, which may run slightly long.
///
/// serialized as the whole number of kilometers, i.e. `200` or `1300`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub enum NominalDistance {
    Brm200,
    Brm300,
    Brm400,
    Brm600,
    Brm1000,
    Brm1200,
    Brm1300,
}

impl NominalDistance {
    /// every standard class in increasing order of distance.
    pub const ALL: [NominalDistance; 7] = [
        NominalDistance::Brm200,
        NominalDistance::Brm300,
        NominalDistance::Brm400,
        NominalDistance::Brm600,
        NominalDistance::Brm1000,
        NominalDistance::Brm1200,
        NominalDistance::Brm1300,
    ];

    /// nominal distance of this class in kilometers
    pub fn km(&self) -> u32 {
        match self {
            NominalDistance::Brm200 => 200,
            NominalDistance::Brm300 => 300,
            NominalDistance::Brm400 => 400,
            NominalDistance::Brm600 => 600,
            NominalDistance::Brm1000 => 1000,
            NominalDistance::Brm1200 => 1200,
            NominalDistance::Brm1300 => 1300,
        }
    }

    /// maps an actual route distance to the smallest standard class that is at
    /// least as long. routes commonly run a few kilometers over their class, and
    /// rounding up holds riders to the correct time limit rather than a stricter one.
    ///
    /// distances beyond the longest class are clamped to 1300 km.
    pub fn classify(actual_km: f64) -> NominalDistance {
        match NominalDistance::ALL
            .iter()
            .find(|class| actual_km <= class.km() as f64)
        {
            Some(class) => *class,
            None => {
                log::warn!(
                    "route distance {actual_km} km exceeds the longest standard class, using 1300km"
                );
                NominalDistance::Brm1300
            }
        }
    }
}

impl TryFrom<u32> for NominalDistance {
    type Error = BrevetError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        NominalDistance::ALL
            .iter()
            .find(|class| class.km() == value)
            .copied()
            .ok_or_else(|| BrevetError::InvalidNominalDistance(value.to_string()))
    }
}

impl From<NominalDistance> for u32 {
    fn from(value: NominalDistance) -> Self {
        value.km()
    }
}

impl FromStr for NominalDistance {
    type Err = BrevetError;

    /// accepts "200" or "200km"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix("km").unwrap_or(trimmed).trim();
        let km = digits
            .parse::<u32>()
            .map_err(|_| BrevetError::InvalidNominalDistance(s.to_string()))?;
        NominalDistance::try_from(km)
            .map_err(|_| BrevetError::InvalidNominalDistance(s.to_string()))
    }
}

impl std::fmt::Display for NominalDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}km", self.km())
    }
}

/// comma-delimited listing of the standard classes, used in user-facing messages.
pub fn standard_classes_description() -> String {
    NominalDistance::ALL.iter().map(|c| c.km()).join(", ")
}
