use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::model::BrevetError;

/// a control whose distance lies within this many kilometers of the route length
/// is the finish control.
pub const FINISH_TOLERANCE_KM: f64 = 1e-4;

/// a control's distance from the start. unless truncation is disabled, partial
/// kilometers are dropped before any calculation so they are never credited to
/// the rider.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ControlInput {
    pub distance_km: f64,
    pub truncate: bool,
}

impl ControlInput {
    /// builds a control input, rejecting negative and non-finite distances
    pub fn new(distance_km: f64, truncate: bool) -> Result<ControlInput, BrevetError> {
        validate_distance(distance_km)?;
        Ok(ControlInput {
            distance_km,
            truncate,
        })
    }

    /// the distance used in calculations, after applying the truncation policy
    pub fn effective_km(&self) -> f64 {
        apply_truncation(self.distance_km, self.truncate)
    }

    pub fn distance(&self) -> Length {
        Length::new::<uom::si::length::kilometer>(self.effective_km())
    }
}

/// true when a control sits at the route's actual total length. the comparison is
/// against the measured route length, never the nominal class distance.
pub fn is_finish_control(control_km: f64, route_length_km: f64) -> bool {
    (control_km - route_length_km).abs() < FINISH_TOLERANCE_KM
}

pub(crate) fn apply_truncation(distance_km: f64, truncate: bool) -> f64 {
    if truncate {
        distance_km.trunc()
    } else {
        distance_km
    }
}

pub(crate) fn validate_distance(distance_km: f64) -> Result<(), BrevetError> {
    if distance_km.is_finite() && distance_km >= 0.0 {
        Ok(())
    } else {
        Err(BrevetError::InvalidDistance(distance_km))
    }
}
