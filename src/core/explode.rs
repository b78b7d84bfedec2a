//! Per-file explosion.
//!
//! Turns one parsed source file into a `FilePlan`: every output file it
//! produces, rendered in memory. Nothing touches the output tree here; see
//! `commit` for that.
//!
//! ```text
//! Read -> Parse -> Catalog -> NoDefinitions     -> verbatim copy
//!                          -> ForEachDefinition -> AssembleRemainder
//! ```

use std::path::{Path, PathBuf};

use crate::{
    core::{
        collect::{
            discovery::{Catalog, Definition},
            imports::prune_imports,
        },
        data::SourceUnit,
        extract::variables::resolve_dependencies,
        naming::{FilenameScope, Layout},
        parsers::python::parse_python_file,
    },
    error::ExplodeError,
};

const PACKAGE_INIT: &str = "__init__.py";

/// One output file, fully rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Everything one source file produces.
#[derive(Debug, Clone)]
pub struct FilePlan {
    pub source: PathBuf,
    /// Layout actually applied (dunder files fall back to `Files`).
    pub layout: Layout,
    /// Package directory this plan introduces, for the `Dirs` layout.
    pub package_dir: Option<PathBuf>,
    /// Artifacts in definition order, then the remainder (or the verbatim copy).
    pub files: Vec<PlannedFile>,
    /// Names of the extracted definitions, in encounter order.
    pub extracted: Vec<String>,
}

impl FilePlan {
    /// True when the file had no definitions and was copied unchanged.
    pub fn is_copy(&self) -> bool {
        self.extracted.is_empty()
    }
}

/// Where one source file's outputs go.
#[derive(Debug, Clone)]
pub struct Target<'a> {
    /// Mirror of the source file's directory under the output root.
    pub dir: &'a Path,
    pub layout: Layout,
    /// File names of the other discovered sources in the same directory.
    pub siblings: &'a [String],
}

/// Read, parse and explode one file.
pub fn plan_file(path: &Path, target: &Target) -> Result<FilePlan, ExplodeError> {
    let unit = parse_python_file(path)?;
    Ok(explode_source(&unit, target))
}

/// Explode an already parsed source file.
pub fn explode_source(unit: &SourceUnit, target: &Target) -> FilePlan {
    let layout = target.layout.for_file(unit.file_name());
    let catalog = Catalog::discover(unit);

    let (out_dir, package_dir, remainder_name) = match layout {
        Layout::Files => (target.dir.to_path_buf(), None, unit.file_name()),
        Layout::Dirs => {
            let dir = target.dir.join(unit.stem());
            (dir.clone(), Some(dir), PACKAGE_INIT)
        }
    };
    let remainder_path = out_dir.join(remainder_name);

    if !catalog.has_definitions() {
        tracing::debug!(file = %unit.path.display(), "no definitions, copying verbatim");
        return FilePlan {
            source: unit.path.clone(),
            layout,
            package_dir,
            files: vec![PlannedFile {
                path: remainder_path,
                contents: unit.source.clone(),
            }],
            extracted: Vec::new(),
        };
    }

    let mut scope = match layout {
        Layout::Files => FilenameScope::with_reserved(
            target
                .siblings
                .iter()
                .map(String::as_str)
                .chain([unit.file_name()]),
        ),
        Layout::Dirs => FilenameScope::with_reserved([PACKAGE_INIT]),
    };

    let newline = unit.line_ending();
    let mut files = Vec::with_capacity(catalog.definitions.len() + 1);
    let mut import_backs = Vec::with_capacity(catalog.definitions.len());
    let mut extracted = Vec::with_capacity(catalog.definitions.len());

    for definition in &catalog.definitions {
        let file_name = scope.allocate(&layout.artifact_stem(unit.stem(), definition.name));
        let module = file_name.trim_end_matches(".py");

        tracing::debug!(
            file = %unit.path.display(),
            kind = %definition.kind,
            definition = definition.name,
            artifact = %file_name,
            "extracting definition"
        );

        import_backs.push(format!("from .{} import {}", module, definition.name));
        files.push(PlannedFile {
            path: out_dir.join(&file_name),
            contents: render_artifact(&catalog, definition, newline),
        });
        extracted.push(definition.name.to_string());
    }

    files.push(PlannedFile {
        path: remainder_path,
        contents: render_remainder(unit, &import_backs, newline),
    });

    FilePlan {
        source: unit.path.clone(),
        layout,
        package_dir,
        files,
        extracted,
    }
}

/// Imports, then module variables, then the definition; blank line between.
fn render_artifact(catalog: &Catalog, definition: &Definition, newline: &str) -> String {
    let deps = resolve_dependencies(definition, &catalog.variables);
    let imports = prune_imports(&catalog.imports, &deps.used_names);
    let variables: Vec<&str> = deps
        .variables
        .iter()
        .map(|v| v.statement.text.as_str())
        .collect();

    let blocks = [
        imports.join(newline),
        variables.join(newline),
        definition.statement.text.clone(),
    ];
    join_blocks(&blocks, newline)
}

/// Original imports and import-backs, then every other non-definition
/// statement in original order.
fn render_remainder(unit: &SourceUnit, import_backs: &[String], newline: &str) -> String {
    let head: Vec<&str> = unit
        .statements
        .iter()
        .filter(|s| s.kind.is_import())
        .map(|s| s.text.as_str())
        .chain(import_backs.iter().map(String::as_str))
        .collect();
    let body: Vec<&str> = unit
        .statements
        .iter()
        .filter(|s| !s.kind.is_import() && !s.kind.is_definition())
        .map(|s| s.text.as_str())
        .collect();

    join_blocks(&[head.join(newline), body.join(newline)], newline)
}

/// Blocks are glued with the source file's line ending.
fn join_blocks(blocks: &[String], newline: &str) -> String {
    let mut out = blocks
        .iter()
        .filter(|b| !b.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(&newline.repeat(2));
    out.push_str(newline);
    out
}
