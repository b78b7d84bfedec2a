//! Explosion engine.
//!
//! ## Pipeline
//!
//! 1. `parsers::python`: source text to a `SourceUnit` of classified
//!    top-level statements, with name usage precomputed by `extract::usage`
//! 2. `collect::discovery`: imports, definitions and module variables
//! 3. `extract::variables` + `collect::imports`: per-definition dependencies
//! 4. `naming`: collision-free artifact names for the chosen `Layout`
//! 5. `explode`: render artifacts and the remainder into a `FilePlan`
//! 6. `commit`: write a plan all-or-nothing
//!
//! `context` drives the pipeline over every file found by `file_scanner`.

pub mod collect;
pub mod commit;
pub mod context;
pub mod data;
pub mod explode;
pub mod extract;
pub mod file_scanner;
pub mod naming;
pub mod parsers;
