use brevet_card::{app::BrevetCardApp, card::ControlCardError};
use clap::Parser;

fn main() -> Result<(), ControlCardError> {
    env_logger::init();
    let args = BrevetCardApp::parse();
    args.op.run()
}
