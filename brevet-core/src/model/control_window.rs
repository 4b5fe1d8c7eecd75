use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::control_input::{apply_truncation, validate_distance};
use crate::model::control_time_ops::{closing_time, opening_time, to_elapsed_minutes};
use crate::model::finish_limits::finish_time;
use crate::model::{is_finish_control, BrevetError, ControlInput, NominalDistance, RideDuration};
use crate::util::datetime_ops::{
    add_elapsed_minutes, deserialize_naive_datetime, format_control_time,
    serialize_naive_datetime,
};

/// everything needed to compute one control's window. the start time must already
/// be in the event's local time.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ControlWindowQuery {
    #[serde(
        deserialize_with = "deserialize_naive_datetime",
        serialize_with = "serialize_naive_datetime"
    )]
    pub start: NaiveDateTime,
    /// distance of the control from the start in kilometers
    pub control_distance_km: f64,
    /// ACP class the event is run under
    pub nominal_distance: NominalDistance,
    /// measured length of the course. defaults to the nominal class distance.
    pub route_length_km: Option<f64>,
    /// drop partial kilometers before calculating. default: true
    #[serde(default = "default_truncate")]
    pub truncate: bool,
}

/// the interval during which a rider may be validated at a control.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ControlWindow {
    pub open: NaiveDateTime,
    pub close: NaiveDateTime,
    pub open_elapsed_minutes: u32,
    pub close_elapsed_minutes: u32,
    /// true when the closing time came from the overall time limit of the class
    pub is_finish: bool,
}

fn default_truncate() -> bool {
    true
}

impl ControlWindowQuery {
    pub fn new(
        start: NaiveDateTime,
        control_distance_km: f64,
        nominal_distance: NominalDistance,
    ) -> ControlWindowQuery {
        ControlWindowQuery {
            start,
            control_distance_km,
            nominal_distance,
            route_length_km: None,
            truncate: default_truncate(),
        }
    }

    pub fn with_route_length(mut self, route_length_km: f64) -> ControlWindowQuery {
        self.route_length_km = Some(route_length_km);
        self
    }

    pub fn with_truncation(mut self, truncate: bool) -> ControlWindowQuery {
        self.truncate = truncate;
        self
    }

    /// the measured route length, falling back to the nominal class distance
    pub fn route_length_km(&self) -> f64 {
        self.route_length_km
            .unwrap_or(self.nominal_distance.km() as f64)
    }

    /// the same event queried at its finish control
    pub fn finish(&self) -> ControlWindowQuery {
        ControlWindowQuery {
            control_distance_km: self.route_length_km(),
            ..self.clone()
        }
    }

    /// computes the open and close times for this control.
    ///
    /// the opening time always comes from the banded opening calculation. the closing
    /// time comes from the banded closing calculation, except at the finish control,
    /// where the overall time limit of the nominal class applies instead.
    pub fn compute(&self) -> Result<ControlWindow, BrevetError> {
        let control = ControlInput::new(self.control_distance_km, self.truncate)?;
        let route_length_km = self.route_length_km();
        validate_distance(route_length_km)?;
        let route_length_km = apply_truncation(route_length_km, self.truncate);

        let is_finish = is_finish_control(control.effective_km(), route_length_km);
        let open_elapsed_minutes = to_elapsed_minutes(opening_time(control.distance()));
        let close_elapsed_minutes = if is_finish {
            to_elapsed_minutes(finish_time(self.nominal_distance))
        } else {
            to_elapsed_minutes(closing_time(control.distance()))
        };

        let window = ControlWindow {
            open: add_elapsed_minutes(&self.start, open_elapsed_minutes)?,
            close: add_elapsed_minutes(&self.start, close_elapsed_minutes)?,
            open_elapsed_minutes,
            close_elapsed_minutes,
            is_finish,
        };
        log::debug!(
            "control at {} km of {} ({} km route): open {}, close {}{}",
            control.effective_km(),
            self.nominal_distance,
            route_length_km,
            window.open_label(),
            window.close_label(),
            if is_finish { " (finish)" } else { "" }
        );
        Ok(window)
    }

    /// total allowable ride time, taken from the finish control's closing time
    pub fn total_ride_duration(&self) -> Result<RideDuration, BrevetError> {
        let window = self.finish().compute()?;
        Ok(RideDuration::from(&window))
    }
}

impl ControlWindow {
    pub fn open_label(&self) -> String {
        format_control_time(&self.open)
    }

    pub fn close_label(&self) -> String {
        format_control_time(&self.close)
    }
}
