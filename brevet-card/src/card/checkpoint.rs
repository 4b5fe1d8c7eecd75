use serde::{Deserialize, Serialize};

/// a named control point along the route.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Checkpoint {
    pub name: String,
    /// distance from the start in kilometers
    #[serde(alias = "distance", alias = "km")]
    pub distance_km: f64,
}

impl Checkpoint {
    pub fn new(name: &str, distance_km: f64) -> Checkpoint {
        Checkpoint {
            name: name.to_string(),
            distance_km,
        }
    }
}
