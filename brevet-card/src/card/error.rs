use std::path::PathBuf;

use brevet_core::model::BrevetError;

#[derive(thiserror::Error, Debug)]
pub enum ControlCardError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("failure computing control times: {0}")]
    ControlTime(#[from] BrevetError),
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error("Error writing to csv: {0}")]
    CsvWriteError(String),
    #[error("Serializing control card failed: {0}")]
    SerializationError(String),
}
