use chrono::NaiveDateTime;

use super::nominal_distance::standard_classes_description;

#[derive(thiserror::Error, Debug)]
pub enum BrevetError {
    #[error("distance {0} km is invalid, distances must be finite and non-negative")]
    InvalidDistance(f64),
    #[error(
        "'{0}' is not a standard brevet distance, expected one of {classes}",
        classes = standard_classes_description()
    )]
    InvalidNominalDistance(String),
    #[error("failure adding {minutes} minutes to {start} due to bounds error")]
    TimeOverflow { start: NaiveDateTime, minutes: u32 },
    #[error("failure parsing datetime '{0}': {1}")]
    InvalidDateTime(String, String),
}
