//! pyxplod - explode Python modules into one file per definition
//!
//! Every top-level class and function of every module under an input
//! directory is moved into its own file, together with the imports and module
//! variables it needs. The original module is rewritten to import the moved
//! symbols back, so existing importers keep working.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, logging, progress, summary)
//! - `config`: Configuration file loading and parsing
//! - `core`: Explosion engine (parse, analyze, plan, commit)
//! - `error`: Per-file error taxonomy
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
