//! Extraction: the names a definition depends on.
//!
//! `usage` runs on syntax nodes while parsing; `variables` works on the
//! resulting name sets to close a definition over the module variables it
//! needs.

pub mod usage;
pub mod variables;

pub use usage::analyze_name_usage;
pub use variables::{Dependencies, resolve_dependencies};
