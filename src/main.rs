use clap::Parser;
use log::{info, warn};
use snafu::ErrorCompat;

mod args;
mod reshape;

use crate::args::Args;
use crate::reshape::config::ReshapeConfig;

fn main() {
    env_logger::init();

    let args = Args::parse();
    info!("args: {:?}", args);
    let config = ReshapeConfig::from(&args);

    match reshape::run_reshape(&config) {
        Ok(summary) if config.writes_to_stdout() => {
            // Keep the standard output for the selections only.
            eprintln!("{}", summary);
        }
        Ok(summary) => {
            println!("{}", summary);
        }
        Err(e) => {
            warn!("Error occured {:?}", e);
            eprintln!("An error occured: {}", e);
            for cause in ErrorCompat::iter_chain(&e).skip(1) {
                eprintln!("  caused by: {}", cause);
            }
            std::process::exit(1);
        }
    }
}
