//! Core data types used across all pipeline phases.
//!
//! ## Module Structure
//!
//! - `import`: Import statements and their aliases
//! - `source`: Parsed source files and classified top-level statements

pub mod import;
pub mod source;

pub use import::{ImportAlias, ImportStatement, bound_name};
pub use source::{NameSet, SourceUnit, Statement, StatementKind};
