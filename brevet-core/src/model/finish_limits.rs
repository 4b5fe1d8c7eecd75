//! official ACP overall time limits, consulted only for the finish control.
use uom::si::f64::Time;

use crate::model::NominalDistance;

/// maximum elapsed minutes from the start to the finish for an event of this class.
pub fn finish_time_limit(nominal: NominalDistance) -> u32 {
    match nominal {
        NominalDistance::Brm200 => 810,
        NominalDistance::Brm300 => 1200,
        NominalDistance::Brm400 => 1620,
        NominalDistance::Brm600 => 2400,
        NominalDistance::Brm1000 => 4500,
        NominalDistance::Brm1200 => 5400,
        NominalDistance::Brm1300 => 5580,
    }
}

pub fn finish_time(nominal: NominalDistance) -> Time {
    Time::new::<uom::si::time::minute>(finish_time_limit(nominal) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_in_hours() {
        let expected = [13.5, 20.0, 27.0, 40.0, 75.0, 90.0, 93.0];
        for (nominal, hours) in NominalDistance::ALL.iter().zip(expected) {
            let found = finish_time(*nominal).get::<uom::si::time::hour>();
            assert!(
                (found - hours).abs() < 1e-9,
                "{nominal} expected {hours}h, found {found}h"
            );
        }
    }

    #[test]
    fn test_limits_grow_with_class() {
        let limits: Vec<u32> = NominalDistance::ALL
            .iter()
            .map(|n| finish_time_limit(*n))
            .collect();
        assert!(limits.windows(2).all(|w| w[0] < w[1]));
    }
}
