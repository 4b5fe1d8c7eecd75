use serde::{Deserialize, Serialize};

use crate::model::ControlWindow;

/// total allowable ride time for an event, split into hours and minutes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RideDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl RideDuration {
    pub fn from_minutes(total_minutes: u32) -> RideDuration {
        RideDuration {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }

    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl From<&ControlWindow> for RideDuration {
    fn from(finish: &ControlWindow) -> Self {
        RideDuration::from_minutes(finish.close_elapsed_minutes)
    }
}

impl std::fmt::Display for RideDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h{:02}", self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_minutes() {
        let d = RideDuration::from_minutes(5580);
        assert_eq!(d.hours, 93);
        assert_eq!(d.minutes, 0);
        assert_eq!(d.total_minutes(), 5580);
        assert_eq!(d.to_string(), "93h00");
    }

    #[test]
    fn test_display_pads_minutes() {
        assert_eq!(RideDuration::from_minutes(65).to_string(), "1h05");
    }
}
