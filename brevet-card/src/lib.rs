pub mod app;
pub mod card;
pub mod util;
