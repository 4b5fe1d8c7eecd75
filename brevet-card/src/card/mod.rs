mod card_config;
mod checkpoint;
pub mod checkpoint_ops;
mod control_card;
mod error;

pub use card_config::{ControlCardConfig, OrganizerContact};
pub use checkpoint::Checkpoint;
pub use control_card::{ControlCard, ControlCardRow};
pub use error::ControlCardError;
