//! CLI argument definitions using clap.
//!
//! `pyxplod` has a single mode of operation, so there are no subcommands:
//!
//! ```text
//! pyxplod --input <DIR> --output <DIR> [--method files|dirs] [-j N] [-v] [-q]
//! ```
//!
//! Environment: `PYXPLOD_JOBS` (same as `--jobs`), `PYXPLOD_QUIET` (hide the
//! progress bar), `PYXPLOD_LOG` (log filter, see `cli::logging`).

use std::path::PathBuf;

use clap::Parser;

use crate::core::naming::Layout;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory containing the Python sources to explode
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Directory the exploded tree is written to (created if missing)
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Output layout (overrides config file) [default: files]
    #[arg(short, long, value_enum)]
    pub method: Option<Layout>,

    /// Worker threads, 0 for one per core (overrides config file)
    #[arg(short, long, value_name = "N", env = "PYXPLOD_JOBS")]
    pub jobs: Option<usize>,

    /// Enable debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the progress bar (also set by PYXPLOD_QUIET)
    #[arg(short, long)]
    pub quiet: bool,
}
