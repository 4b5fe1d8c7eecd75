mod brevet_error;
mod control_input;
pub mod control_time_ops;
mod control_window;
pub mod finish_limits;
mod nominal_distance;
mod ride_duration;
pub mod speed_band;

pub use brevet_error::BrevetError;
pub use control_input::{is_finish_control, ControlInput, FINISH_TOLERANCE_KM};
pub use control_window::{ControlWindow, ControlWindowQuery};
pub use nominal_distance::NominalDistance;
pub use ride_duration::RideDuration;
