//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `logging`: tracing subscriber setup
//! - `progress`: indicatif progress bar
//! - `report`: final summary
//! - `run`: wires the above around `core::context::ExplodeContext`

use anyhow::Result;

pub mod args;
mod exit_status;
mod logging;
mod progress;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    logging::init(args.verbose);
    run::run(args)
}
