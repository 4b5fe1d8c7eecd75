use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Time, Velocity};

/// one entry of an ordered rate table. a band covers the distance from the
/// previous band's ceiling (or the table's floor) up to its own ceiling, and
/// contributes the time needed to cover that span at its rate.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SpeedBand {
    /// upper distance bound of this band in kilometers
    pub ceiling_km: f64,
    /// speed applied within this band in kilometers per hour
    pub rate_kph: f64,
}

impl SpeedBand {
    pub const fn new(ceiling_km: f64, rate_kph: f64) -> SpeedBand {
        SpeedBand {
            ceiling_km,
            rate_kph,
        }
    }

    pub fn ceiling(&self) -> Length {
        Length::new::<uom::si::length::kilometer>(self.ceiling_km)
    }

    pub fn rate(&self) -> Velocity {
        Velocity::new::<uom::si::velocity::kilometer_per_hour>(self.rate_kph)
    }
}

/// maximum average speeds. covering a span faster than these suggests a shortcut,
/// so they set the earliest time a control may open.
pub const OPENING_BANDS: [SpeedBand; 5] = [
    SpeedBand::new(200.0, 34.0),
    SpeedBand::new(400.0, 32.0),
    SpeedBand::new(600.0, 30.0),
    SpeedBand::new(1000.0, 28.0),
    SpeedBand::new(1300.0, 26.0),
];

/// minimum average speeds beyond the closing lead band.
pub const CLOSING_BANDS: [SpeedBand; 3] = [
    SpeedBand::new(600.0, 15.0),
    SpeedBand::new(1000.0, 11.428),
    SpeedBand::new(1300.0, 13.333),
];

/// the first span of the closing table. instead of a plain rate it grants a fixed
/// grace period plus the time to cover the span at its rate.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ClosingLeadBand {
    pub ceiling_km: f64,
    pub rate_kph: f64,
    pub grace_hours: f64,
}

impl ClosingLeadBand {
    pub fn ceiling(&self) -> Length {
        Length::new::<uom::si::length::kilometer>(self.ceiling_km)
    }

    pub fn rate(&self) -> Velocity {
        Velocity::new::<uom::si::velocity::kilometer_per_hour>(self.rate_kph)
    }

    pub fn grace(&self) -> Time {
        Time::new::<uom::si::time::hour>(self.grace_hours)
    }
}

/// 1 + (distance / 20) hours over the first 60 km.
pub const CLOSING_LEAD_BAND: ClosingLeadBand = ClosingLeadBand {
    ceiling_km: 60.0,
    rate_kph: 20.0,
    grace_hours: 1.0,
};
