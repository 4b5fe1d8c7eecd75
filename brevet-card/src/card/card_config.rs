use std::path::Path;

use brevet_core::model::NominalDistance;
use brevet_core::util::datetime_ops::{deserialize_naive_datetime, serialize_naive_datetime};
use chrono::NaiveDateTime;
use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::card::{checkpoint_ops, Checkpoint, ControlCardError};

/// describes one event for which a control card is produced.
///
/// scalar fields are listed ahead of tables so the struct serializes to valid TOML.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ControlCardConfig {
    /// event title printed in the card header
    pub event_name: String,
    /// scheduled start in the event's local time, "YYYY-MM-DD HH:MM"
    #[serde(
        deserialize_with = "deserialize_naive_datetime",
        serialize_with = "serialize_naive_datetime"
    )]
    pub start: NaiveDateTime,
    /// ACP class of the event. if omitted, classified from the route length.
    pub nominal_distance: Option<NominalDistance>,
    /// measured length of the course. if omitted, the nominal class distance.
    pub route_length_km: Option<f64>,
    /// drop partial kilometers before calculating. default: true
    pub truncate: Option<bool>,
    /// checkpoints as a JSON array, as embedded in a request parameter. decoded
    /// leniently and appended to `checkpoints`.
    pub checkpoints_json: Option<String>,
    #[serde(default)]
    pub riders: Vec<String>,
    pub organizer: Option<OrganizerContact>,
    #[serde(default)]
    pub checkpoints: Vec<Checkpoint>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrganizerContact {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ControlCardConfig {
    /// reads an event description from a configuration file. the format is
    /// inferred from the file extension.
    pub fn from_file(filepath: &Path) -> Result<ControlCardConfig, ControlCardError> {
        let config = Config::builder()
            .add_source(File::from(filepath))
            .build()
            .map_err(|e| ControlCardError::ReadError {
                path: filepath.to_owned(),
                message: e.to_string(),
            })?;
        config
            .try_deserialize::<ControlCardConfig>()
            .map_err(|e| ControlCardError::ReadError {
                path: filepath.to_owned(),
                message: format!("invalid control card configuration: {e}"),
            })
    }

    /// the event's nominal class, classifying the route length when not given.
    pub fn nominal_distance(&self) -> Result<NominalDistance, ControlCardError> {
        match (self.nominal_distance, self.route_length_km) {
            (Some(nominal), _) => Ok(nominal),
            (None, Some(route_length_km)) => Ok(NominalDistance::classify(route_length_km)),
            (None, None) => Err(ControlCardError::InvalidUserInput(format!(
                "event '{}' must specify 'nominal_distance' or 'route_length_km'",
                self.event_name
            ))),
        }
    }

    pub fn route_length_km(&self) -> Result<f64, ControlCardError> {
        match self.route_length_km {
            Some(route_length_km) => Ok(route_length_km),
            None => Ok(self.nominal_distance()?.km() as f64),
        }
    }

    pub fn truncate(&self) -> bool {
        self.truncate.unwrap_or(true)
    }

    /// all configured checkpoints in route order
    pub fn all_checkpoints(&self) -> Vec<Checkpoint> {
        let mut checkpoints = self.checkpoints.clone();
        if let Some(json) = &self.checkpoints_json {
            checkpoints.extend(checkpoint_ops::decode_checkpoints(json));
        }
        checkpoint_ops::sort_by_distance(checkpoints)
    }

    /// an example configuration used by the `template` operation
    pub fn sample(start: NaiveDateTime) -> ControlCardConfig {
        ControlCardConfig {
            event_name: String::from("Spring 200"),
            start,
            nominal_distance: Some(NominalDistance::Brm200),
            route_length_km: Some(203.0),
            truncate: Some(true),
            checkpoints_json: None,
            riders: vec![String::from("First Rider"), String::from("Second Rider")],
            organizer: Some(OrganizerContact {
                name: String::from("Event Organizer"),
                phone: Some(String::from("555-0100")),
                email: Some(String::from("organizer@example.org")),
            }),
            checkpoints: vec![
                Checkpoint::new("Start", 0.0),
                Checkpoint::new("Bakery", 100.0),
                Checkpoint::new("Finish", 203.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture(filename: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join(filename)
    }

    #[test]
    fn test_read_configuration_file() {
        let config = ControlCardConfig::from_file(&fixture("spring_200.toml"))
            .expect("test invariant failed: fixture should load");
        assert_eq!(config.event_name, "Spring 200");
        assert_eq!(config.nominal_distance().unwrap(), NominalDistance::Brm200);
        assert_eq!(config.route_length_km().unwrap(), 203.0);
        assert!(config.truncate());
        assert_eq!(config.riders.len(), 2);
        let organizer = config.organizer.clone().unwrap();
        assert_eq!(organizer.name, "Audax Example");
        let names: Vec<String> = config
            .all_checkpoints()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Start", "Bakery", "Ridge", "Finish"]);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = ControlCardConfig::from_file(&fixture("does_not_exist.toml"));
        assert!(matches!(result, Err(ControlCardError::ReadError { .. })));
    }

    #[test]
    fn test_nominal_distance_classified_from_route_length() {
        let mut config = ControlCardConfig::sample(chrono::NaiveDateTime::default());
        config.nominal_distance = None;
        config.route_length_km = Some(305.0);
        assert_eq!(config.nominal_distance().unwrap(), NominalDistance::Brm400);
        config.route_length_km = None;
        assert!(matches!(
            config.nominal_distance(),
            Err(ControlCardError::InvalidUserInput(_))
        ));
    }

    #[test]
    fn test_route_length_defaults_to_nominal() {
        let mut config = ControlCardConfig::sample(chrono::NaiveDateTime::default());
        config.route_length_km = None;
        assert_eq!(config.route_length_km().unwrap(), 200.0);
    }

    #[test]
    fn test_malformed_checkpoints_json_is_ignored() {
        let mut config = ControlCardConfig::sample(chrono::NaiveDateTime::default());
        config.checkpoints_json = Some(String::from("[{\"name\": oops}]"));
        assert_eq!(config.all_checkpoints().len(), 3);
    }

    #[test]
    fn test_sample_serializes_to_toml() {
        let start = brevet_core::util::datetime_ops::parse_datetime("2026-06-06 06:00").unwrap();
        let config = ControlCardConfig::sample(start);
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("start = \"2026-06-06 06:00\""));
        let decoded: ControlCardConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(decoded.start, start);
        assert_eq!(decoded.checkpoints, config.checkpoints);
        assert_eq!(decoded.organizer, config.organizer);
    }
}
