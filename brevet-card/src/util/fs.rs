use std::path::Path;

use serde::Serialize;

use crate::card::{ControlCard, ControlCardError};

pub const CONTROL_CARD_CSV: &str = "control_card.csv";
pub const CONTROL_CARD_JSON: &str = "control_card.json";

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), ControlCardError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath).map_err(|e| {
            let msg = format!(
                "error building output directory '{}': {e}",
                dirspath.to_str().unwrap_or_default()
            );
            ControlCardError::InvalidUserInput(msg)
        })
    } else {
        Ok(())
    }
}

/// writes the card's control rows to control_card.csv and the full card to
/// control_card.json in the output directory.
pub fn write_control_card(
    card: &ControlCard,
    output_directory: &Path,
) -> Result<(), ControlCardError> {
    create_dirs(output_directory)?;
    serialize_into_csv(&card.controls, &output_directory.join(CONTROL_CARD_CSV))?;
    serialize_into_json(card, &output_directory.join(CONTROL_CARD_JSON))
}

pub fn serialize_into_csv<I>(iterable: I, filepath: &Path) -> Result<(), ControlCardError>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    let filename = filepath.to_string_lossy();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(filepath)
        .map_err(|e| ControlCardError::WriteError {
            path: filepath.to_owned(),
            message: e.to_string(),
        })?;
    for element in iterable {
        writer.serialize(element).map_err(|e| {
            ControlCardError::CsvWriteError(format!("Failed to write to {filename}: {e}"))
        })?;
    }
    writer
        .flush()
        .map_err(|e| ControlCardError::CsvWriteError(format!("Failed to flush {filename}: {e}")))
}

pub fn serialize_into_json<T>(value: &T, filepath: &Path) -> Result<(), ControlCardError>
where
    T: Serialize,
{
    let contents = serde_json::to_string_pretty(value)
        .map_err(|e| ControlCardError::SerializationError(e.to_string()))?;
    std::fs::write(filepath, contents).map_err(|e| ControlCardError::WriteError {
        path: filepath.to_owned(),
        message: e.to_string(),
    })
}
