mod cli;
#[cfg(feature = "instrumentation")]
mod instrumentation;

use structopt::StructOpt;

use cli::commands::Command;
use cli::Reversi;

fn main() {
    init_logging();

    Reversi::from_args().execute();

    #[cfg(feature = "instrumentation")]
    instrumentation::print_timing_statistics();
}

#[cfg(not(feature = "instrumentation"))]
fn init_logging() {
    env_logger::init();
}

#[cfg(feature = "instrumentation")]
fn init_logging() {
    if let Err(err) = instrumentation::init_tracing() {
        eprintln!("Failed to install tracing subscriber: {}", err);
    }
}
