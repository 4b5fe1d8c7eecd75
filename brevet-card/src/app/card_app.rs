use std::path::Path;

use brevet_core::model::{ControlWindowQuery, NominalDistance};
use brevet_core::util::datetime_ops;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    card::{ControlCard, ControlCardConfig, ControlCardError},
    util,
};

/// Command line tool for computing ACP brevet control opening and closing times
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct BrevetCardApp {
    #[command(subcommand)]
    pub op: CardOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum CardOperation {
    /// report the nominal class for a measured route distance
    Classify {
        /// measured route distance in kilometers
        #[arg(short, long)]
        distance: f64,
    },
    /// compute the open and close times of a single control
    Window {
        /// event start in local time, "YYYY-MM-DD HH:MM"
        #[arg(short, long, value_parser = parse_start)]
        start: NaiveDateTime,

        /// nominal class of the event, one of 200, 300, 400, 600, 1000, 1200, 1300
        #[arg(short, long)]
        nominal: NominalDistance,

        /// control distance from the start in kilometers
        #[arg(short, long)]
        distance: f64,

        /// measured route length in kilometers. defaults to the nominal distance.
        #[arg(short, long)]
        route_length: Option<f64>,

        /// keep partial kilometers instead of truncating to whole kilometers
        #[arg(long)]
        no_truncate: bool,
    },
    /// compute a full control card from an event configuration file
    Card {
        /// configuration file describing the event and its checkpoints
        #[arg(short, long)]
        configuration_file: String,

        /// location on disk to write output files. if not provided,
        /// use the current working directory.
        #[arg(short, long)]
        output_directory: Option<String>,
    },
    /// write an example event configuration file
    Template {
        #[arg(short, long, default_value_t = String::from("brevet.toml"))]
        output_file: String,
    },
}

impl CardOperation {
    pub fn run(&self) -> Result<(), ControlCardError> {
        match self {
            CardOperation::Classify { distance } => {
                let nominal = NominalDistance::classify(*distance);
                println!("{nominal}");
                Ok(())
            }
            CardOperation::Window {
                start,
                nominal,
                distance,
                route_length,
                no_truncate,
            } => {
                let mut query = ControlWindowQuery::new(*start, *distance, *nominal)
                    .with_truncation(!no_truncate);
                if let Some(route_length_km) = route_length {
                    query = query.with_route_length(*route_length_km);
                }
                let window = query.compute()?;
                let output = json!({
                    "open": window.open_label(),
                    "close": window.close_label(),
                    "window": window,
                });
                let output_str = serde_json::to_string_pretty(&output)
                    .map_err(|e| ControlCardError::SerializationError(e.to_string()))?;
                println!("{output_str}");
                Ok(())
            }
            CardOperation::Card {
                configuration_file,
                output_directory,
            } => {
                let config = ControlCardConfig::from_file(Path::new(configuration_file))?;
                let card = ControlCard::try_from(&config)?;
                let outdir = match output_directory {
                    Some(out) => Path::new(out),
                    None => Path::new(""),
                };
                util::fs::write_control_card(&card, outdir)?;
                log::info!(
                    "wrote control card for '{}' ({} controls, {} total)",
                    card.event_name,
                    card.controls.len(),
                    card.total_ride_time
                );
                Ok(())
            }
            CardOperation::Template { output_file } => {
                let start = datetime_ops::parse_datetime("2026-06-06 06:00")?;
                let sample = ControlCardConfig::sample(start);
                let contents = toml::to_string_pretty(&sample)
                    .map_err(|e| ControlCardError::SerializationError(e.to_string()))?;
                std::fs::write(output_file, contents).map_err(|e| ControlCardError::WriteError {
                    path: Path::new(output_file).to_owned(),
                    message: e.to_string(),
                })
            }
        }
    }
}

/// helper function for start time parsing in clap
fn parse_start(s: &str) -> Result<NaiveDateTime, String> {
    datetime_ops::parse_datetime(s).map_err(|e| e.to_string())
}
