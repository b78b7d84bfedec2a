//! Definition and module-variable discovery.
//!
//! One pass over the top-level statements splits them into the three groups
//! the rest of the pipeline cares about. Records borrow from the `SourceUnit`.

use std::fmt;

use crate::core::data::{ImportStatement, NameSet, SourceUnit, Statement, StatementKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    Class,
    Function,
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => write!(f, "class"),
            Self::Function => write!(f, "function"),
        }
    }
}

/// A top-level class or function eligible for extraction.
#[derive(Debug, Clone, Copy)]
pub struct Definition<'a> {
    pub kind: DefinitionKind,
    pub name: &'a str,
    pub statement: &'a Statement,
    pub uses: &'a NameSet,
}

/// A top-level `name = expr` assignment.
#[derive(Debug, Clone, Copy)]
pub struct ModuleVariable<'a> {
    pub name: &'a str,
    pub statement: &'a Statement,
    /// Names referenced by the assigned value.
    pub uses: &'a NameSet,
}

/// A top-level import statement.
#[derive(Debug, Clone, Copy)]
pub struct ImportRecord<'a> {
    pub statement: &'a Statement,
    pub import: &'a ImportStatement,
}

/// Top-level constructs of one source file, each group in encounter order.
#[derive(Debug, Default)]
pub struct Catalog<'a> {
    pub imports: Vec<ImportRecord<'a>>,
    pub definitions: Vec<Definition<'a>>,
    pub variables: Vec<ModuleVariable<'a>>,
}

impl<'a> Catalog<'a> {
    pub fn discover(unit: &'a SourceUnit) -> Self {
        let mut catalog = Self::default();
        for statement in &unit.statements {
            match &statement.kind {
                StatementKind::Import(import) | StatementKind::ImportFrom(import) => {
                    catalog.imports.push(ImportRecord { statement, import });
                }
                StatementKind::ClassDef { name, uses } => {
                    catalog.definitions.push(Definition {
                        kind: DefinitionKind::Class,
                        name,
                        statement,
                        uses,
                    });
                }
                StatementKind::FunctionDef { name, uses } => {
                    catalog.definitions.push(Definition {
                        kind: DefinitionKind::Function,
                        name,
                        statement,
                        uses,
                    });
                }
                StatementKind::Assign { target, uses } => {
                    catalog.variables.push(ModuleVariable {
                        name: target,
                        statement,
                        uses,
                    });
                }
                StatementKind::Other => {}
            }
        }
        catalog
    }

    pub fn has_definitions(&self) -> bool {
        !self.definitions.is_empty()
    }
}
