use brevet_core::model::{ControlWindowQuery, NominalDistance, RideDuration};
use brevet_core::util::datetime_ops;
use serde::{Deserialize, Serialize};

use crate::card::{Checkpoint, ControlCardConfig, ControlCardError, OrganizerContact};

/// computed window for one checkpoint, as listed on a control card.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ControlCardRow {
    pub name: String,
    pub distance_km: f64,
    /// opening time, i.e. "Sat 08h56"
    pub open: String,
    /// closing time, i.e. "Sat 12h40"
    pub close: String,
    pub open_elapsed_minutes: u32,
    pub close_elapsed_minutes: u32,
    pub is_finish: bool,
}

/// header information and control windows for one event.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ControlCard {
    pub event_name: String,
    /// event date, i.e. "Jun 06 2026"
    pub date: String,
    pub nominal_distance: NominalDistance,
    pub route_length_km: f64,
    /// allowable time from the start to the close of the finish control
    pub total_ride_time: RideDuration,
    pub organizer: Option<OrganizerContact>,
    pub riders: Vec<String>,
    pub controls: Vec<ControlCardRow>,
}

impl TryFrom<&ControlCardConfig> for ControlCard {
    type Error = ControlCardError;

    fn try_from(config: &ControlCardConfig) -> Result<Self, Self::Error> {
        let nominal_distance = config.nominal_distance()?;
        let route_length_km = config.route_length_km()?;
        let event = ControlWindowQuery::new(config.start, route_length_km, nominal_distance)
            .with_route_length(route_length_km)
            .with_truncation(config.truncate());

        let controls = config
            .all_checkpoints()
            .iter()
            .map(|checkpoint| build_row(&event, checkpoint))
            .collect::<Result<Vec<_>, _>>()?;
        if controls.is_empty() {
            log::info!("event '{}' has no checkpoints", config.event_name);
        }

        Ok(ControlCard {
            event_name: config.event_name.clone(),
            date: datetime_ops::format_card_date(&config.start.date()),
            nominal_distance,
            route_length_km,
            total_ride_time: event.total_ride_duration()?,
            organizer: config.organizer.clone(),
            riders: config.riders.clone(),
            controls,
        })
    }
}

fn build_row(
    event: &ControlWindowQuery,
    checkpoint: &Checkpoint,
) -> Result<ControlCardRow, ControlCardError> {
    let query = ControlWindowQuery {
        control_distance_km: checkpoint.distance_km,
        ..event.clone()
    };
    let window = query.compute().map_err(|e| {
        ControlCardError::InvalidUserInput(format!("checkpoint '{}': {e}", checkpoint.name))
    })?;
    Ok(ControlCardRow {
        name: checkpoint.name.clone(),
        distance_km: checkpoint.distance_km,
        open: window.open_label(),
        close: window.close_label(),
        open_elapsed_minutes: window.open_elapsed_minutes,
        close_elapsed_minutes: window.close_elapsed_minutes,
        is_finish: window.is_finish,
    })
}
