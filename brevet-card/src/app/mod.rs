mod card_app;

pub use card_app::{BrevetCardApp, CardOperation};
