//! Parsed representation of one Python source file.

use std::{collections::HashSet, path::PathBuf};

use super::import::ImportStatement;

/// Identifiers referenced by a syntax subtree. Only used for membership tests.
pub type NameSet = HashSet<String>;

/// A parsed source file: path, original text and top-level statements.
///
/// Built once by the parser and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub source: String,
    pub statements: Vec<Statement>,
}

impl SourceUnit {
    /// File stem used to derive output names (`base` for `pkg/base.py`).
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// File name (`base.py` for `pkg/base.py`).
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// Line terminator of the first line, `"\r\n"` or `"\n"`.
    pub fn line_ending(&self) -> &'static str {
        match self.source.find('\n') {
            Some(i) if self.source[..i].ends_with('\r') => "\r\n",
            _ => "\n",
        }
    }
}

/// A top-level statement with its verbatim text.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Source text of the statement, decorators included.
    pub text: String,
    pub kind: StatementKind,
}

/// Classification of a top-level statement.
///
/// Name sets are computed while parsing, so the rest of the pipeline works on
/// plain data and never needs the syntax tree again.
#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    /// `import a, b.c as d`
    Import(ImportStatement),
    /// `from x import y`, `from . import z`, `from __future__ import annotations`
    ImportFrom(ImportStatement),
    /// `class Name: ...`, possibly decorated.
    ClassDef { name: String, uses: NameSet },
    /// `def name(): ...` or `async def name(): ...`, possibly decorated.
    FunctionDef { name: String, uses: NameSet },
    /// `name = expr` with exactly one plain identifier target.
    Assign { target: String, uses: NameSet },
    /// Anything else; kept verbatim in the remainder.
    Other,
}

impl StatementKind {
    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import(_) | Self::ImportFrom(_))
    }

    pub fn is_definition(&self) -> bool {
        matches!(self, Self::ClassDef { .. } | Self::FunctionDef { .. })
    }
}
