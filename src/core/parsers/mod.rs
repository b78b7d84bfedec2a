//! Source parsers.
//!
//! - `python`: Python source parser (uses tree-sitter for the syntax tree)

pub mod python;
