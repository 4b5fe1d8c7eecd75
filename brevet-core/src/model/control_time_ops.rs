//! banded opening and closing time calculations for brevet controls.
//!
//! both calculators walk an ordered [`SpeedBand`] table, consuming the part of the
//! control distance that falls within each band and accumulating the time needed to
//! cover it. distances beyond the final ceiling continue at the final band's rate.
use uom::si::f64::{Length, Time};
use uom::ConstZero;

use crate::model::speed_band::{SpeedBand, CLOSING_BANDS, CLOSING_LEAD_BAND, OPENING_BANDS};

/// minimum elapsed time from the start before a control at this distance may open.
/// a control at the start opens immediately.
pub fn opening_time(distance: Length) -> Time {
    walk_bands(distance, Length::ZERO, &OPENING_BANDS, Time::ZERO)
}

/// maximum elapsed time from the start by which a rider must have passed a control
/// at this distance. the start control always closes one hour after the start.
pub fn closing_time(distance: Length) -> Time {
    let lead = &CLOSING_LEAD_BAND;
    if distance <= Length::ZERO {
        return lead.grace();
    }
    let within_lead = min_length(distance, lead.ceiling());
    let elapsed = lead.grace() + within_lead / lead.rate();
    walk_bands(distance, lead.ceiling(), &CLOSING_BANDS, elapsed)
}

/// [`opening_time`] in hours for a distance in kilometers
pub fn opening_hours(distance_km: f64) -> f64 {
    opening_time(km(distance_km)).get::<uom::si::time::hour>()
}

/// [`closing_time`] in hours for a distance in kilometers
pub fn closing_hours(distance_km: f64) -> f64 {
    closing_time(km(distance_km)).get::<uom::si::time::hour>()
}

/// converts an elapsed time into whole minutes, rounding half up.
///
/// minutes are first snapped to [`MINUTE_PRECISION`] so that unit conversion error
/// cannot pull an exact half minute below the rounding boundary.
pub fn to_elapsed_minutes(time: Time) -> u32 {
    let minutes = time.get::<uom::si::time::minute>();
    let snapped = (minutes * MINUTE_PRECISION).round() / MINUTE_PRECISION;
    (snapped + 0.5).floor().max(0.0) as u32
}

/// resolution applied to elapsed minutes before rounding, in steps per minute
pub const MINUTE_PRECISION: f64 = 1e6;

/// accumulates travel time across the bands above `floor` until `distance` is consumed.
fn walk_bands(distance: Length, floor: Length, bands: &[SpeedBand], initial: Time) -> Time {
    let mut elapsed = initial;
    let mut lower = floor;
    for band in bands {
        if distance <= lower {
            return elapsed;
        }
        let upper = band.ceiling();
        let span = min_length(distance, upper) - lower;
        elapsed += span / band.rate();
        lower = upper;
    }
    match bands.last() {
        Some(last) if distance > lower => elapsed + (distance - lower) / last.rate(),
        _ => elapsed,
    }
}

fn min_length(a: Length, b: Length) -> Length {
    if a < b {
        a
    } else {
        b
    }
}

fn km(value: f64) -> Length {
    Length::new::<uom::si::length::kilometer>(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn opening_minutes(distance_km: f64) -> u32 {
        to_elapsed_minutes(opening_time(km(distance_km)))
    }

    fn closing_minutes(distance_km: f64) -> u32 {
        to_elapsed_minutes(closing_time(km(distance_km)))
    }

    #[test]
    fn test_start_control() {
        assert_eq!(opening_hours(0.0), 0.0);
        assert_eq!(closing_hours(0.0), 1.0);
        assert_eq!(closing_hours(-5.0), 1.0);
        assert_eq!(opening_minutes(0.0), 0);
        assert_eq!(closing_minutes(0.0), 60);
    }

    #[test]
    fn test_opening_first_band() {
        // 100 / 34 * 60 = 176.47
        assert_eq!(opening_minutes(100.0), 176);
        // 200 / 34 * 60 = 352.94
        assert_eq!(opening_minutes(200.0), 353);
    }

    #[test]
    fn test_opening_spans_bands() {
        // 200/34 + 3/32 hours
        assert_eq!(opening_minutes(203.0), 359);
        // 200/34 + 200/32 + 200/30 hours
        assert_eq!(opening_minutes(600.0), 1128);
        // 200/34 + 200/32 + 200/30 + 400/28 + 300/26 hours
        assert_eq!(opening_minutes(1300.0), 2677);
    }

    #[test]
    fn test_closing_lead_band() {
        // 1 + 20/20 hours
        assert_eq!(closing_minutes(20.0), 120);
        // 1 + 60/20 hours
        assert_eq!(closing_minutes(60.0), 240);
    }

    #[test]
    fn test_closing_worked_example() {
        // 240 minutes for the first 60 km, 40 km at 15 km/h
        assert_eq!(closing_minutes(100.0), 400);
    }

    #[test]
    fn test_closing_spans_bands() {
        assert_eq!(closing_minutes(200.0), 800);
        assert_eq!(closing_minutes(203.0), 812);
        assert_eq!(closing_minutes(600.0), 2400);
        // 2400 + 400 / 11.428 * 60
        assert_eq!(closing_minutes(1000.0), 4500);
        // 4500.105 + 200 / 13.333 * 60
        assert_eq!(closing_minutes(1200.0), 5400);
    }

    #[test]
    fn test_beyond_1300_uses_final_rate() {
        let at_limit = opening_hours(1300.0);
        let beyond = opening_hours(1326.0);
        assert!((beyond - at_limit - 1.0).abs() < 1e-9);

        let at_limit = closing_hours(1300.0);
        let beyond = closing_hours(1313.333);
        assert!((beyond - at_limit - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounding_half_up() {
        let half = Time::new::<uom::si::time::minute>(7.5);
        assert_eq!(to_elapsed_minutes(half), 8);
        let below = Time::new::<uom::si::time::minute>(7.49);
        assert_eq!(to_elapsed_minutes(below), 7);
    }

    #[test]
    fn test_fractional_half_minutes_round_up() {
        // 427.125 km at 15 km/h is 1708.5 minutes after the 240 minute lead band
        assert_eq!(closing_minutes(487.125), 1949);
        for j in 0..540 {
            let d = 60.0 + j as f64 + 0.125;
            assert_eq!(
                closing_minutes(d),
                240 + 4 * j + 1,
                "closing time at {d} km did not round half up"
            );
        }
    }

    #[test]
    fn test_whole_km_grid_opens_before_close() {
        for d in 0..=1300 {
            let d = d as f64;
            assert!(
                opening_hours(d) <= closing_hours(d),
                "control at {d} km closes before it opens"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_closing_non_decreasing(a in 0.0..1300.0f64, b in 0.0..1300.0f64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(closing_hours(lo) <= closing_hours(hi));
        }

        #[test]
        fn prop_opening_non_decreasing(a in 0.0..1300.0f64, b in 0.0..1300.0f64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(opening_hours(lo) <= opening_hours(hi));
        }

        #[test]
        fn prop_opens_before_close(d in 0.0..=1300.0f64) {
            prop_assert!(opening_hours(d) <= closing_hours(d));
        }
    }
}
