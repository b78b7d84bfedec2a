//! Collection: what a source file contains at top level.
//!
//! - `discovery`: groups statements into imports, definitions and module variables
//! - `imports`: prunes the import group down to what one artifact uses

pub mod discovery;
pub mod imports;

pub use discovery::{Catalog, Definition, DefinitionKind, ImportRecord, ModuleVariable};
pub use imports::prune_imports;
