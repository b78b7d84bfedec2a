use std::{fs, path::Path};

use tree_sitter::{Node, Parser};

use crate::{
    core::{
        data::{ImportAlias, ImportStatement, SourceUnit, Statement, StatementKind},
        extract::usage::analyze_name_usage,
    },
    error::ExplodeError,
};

const PYTHON2_STATEMENTS: &[&str] = &["print_statement", "exec_statement"];

/// Read and parse a Python file from disk.
pub fn parse_python_file(path: &Path) -> Result<SourceUnit, ExplodeError> {
    let code = fs::read_to_string(path).map_err(|e| ExplodeError::read(path, e))?;
    parse_python_source(code, path)
}

/// Parse Python source into a `SourceUnit`.
///
/// Every named, non-comment child of the module becomes a top-level
/// `Statement`. Name usage is computed here so the syntax tree can be dropped
/// as soon as this function returns.
///
/// Any `ERROR` or `MISSING` node makes the whole file a parse failure; the
/// error points at the first one in source order. The grammar also accepts
/// Python 2 `print` and `exec` statements, which are rejected the same way.
pub fn parse_python_source(code: String, path: &Path) -> Result<SourceUnit, ExplodeError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| ExplodeError::parse(path, e.to_string()))?;

    let tree = parser
        .parse(&code, None)
        .ok_or_else(|| ExplodeError::parse(path, "parser returned no tree"))?;
    let root = tree.root_node();

    if root.has_error() {
        let message = first_error(root)
            .map(location)
            .unwrap_or_else(|| "invalid syntax".to_string());
        return Err(ExplodeError::parse(path, message));
    }
    if let Some(node) = first_python2_statement(root) {
        let message = format!("{} ({})", location(node), node.kind().replace('_', " "));
        return Err(ExplodeError::parse(path, message));
    }

    let mut cursor = root.walk();
    let statements = root
        .named_children(&mut cursor)
        .filter(|node| node.kind() != "comment")
        .map(|node| Statement {
            text: text(node, &code).to_string(),
            kind: classify(node, &code),
        })
        .collect();

    Ok(SourceUnit {
        path: path.to_path_buf(),
        source: code,
        statements,
    })
}

/// First `ERROR` or `MISSING` node in pre-order.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

/// First `print_statement` or `exec_statement` in pre-order.
fn first_python2_statement(node: Node) -> Option<Node> {
    if PYTHON2_STATEMENTS.contains(&node.kind()) {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();
    children.into_iter().find_map(first_python2_statement)
}

fn location(node: Node) -> String {
    let point = node.start_position();
    format!("line {}, column {}", point.row + 1, point.column + 1)
}

fn classify(node: Node, source: &str) -> StatementKind {
    match node.kind() {
        "import_statement" => StatementKind::Import(ImportStatement::Plain {
            aliases: import_aliases(node, source),
        }),
        "import_from_statement" => {
            let module = node
                .child_by_field_name("module_name")
                .map(|n| text(n, source).to_string())
                .unwrap_or_default();
            let mut cursor = node.walk();
            let wildcard = node
                .children(&mut cursor)
                .any(|child| child.kind() == "wildcard_import");
            StatementKind::ImportFrom(ImportStatement::From {
                module,
                aliases: import_aliases(node, source),
                wildcard,
            })
        }
        "future_import_statement" => StatementKind::ImportFrom(ImportStatement::From {
            module: "__future__".to_string(),
            aliases: import_aliases(node, source),
            wildcard: false,
        }),
        "class_definition" | "function_definition" => definition(node, node, source),
        "decorated_definition" => match node.child_by_field_name("definition") {
            Some(inner) => definition(node, inner, source),
            None => StatementKind::Other,
        },
        "expression_statement" => simple_assignment(node, source).unwrap_or(StatementKind::Other),
        _ => StatementKind::Other,
    }
}

/// `outer` is the statement as written (decorators included), `inner` the
/// bare class or function node carrying the name.
fn definition(outer: Node, inner: Node, source: &str) -> StatementKind {
    let Some(name) = inner.child_by_field_name("name") else {
        return StatementKind::Other;
    };
    let name = text(name, source).to_string();
    let uses = analyze_name_usage(outer, source);
    match inner.kind() {
        "class_definition" => StatementKind::ClassDef { name, uses },
        "function_definition" => StatementKind::FunctionDef { name, uses },
        _ => StatementKind::Other,
    }
}

/// `name = expr` with a single identifier target.
///
/// Annotated (`x: int = 1`), chained (`a = b = 1`) and destructuring
/// assignments are rejected, as are augmented ones (a different node kind).
fn simple_assignment(node: Node, source: &str) -> Option<StatementKind> {
    if node.named_child_count() != 1 {
        return None;
    }
    let assignment = node.named_child(0).filter(|n| n.kind() == "assignment")?;
    if assignment.child_by_field_name("type").is_some() {
        return None;
    }
    let left = assignment
        .child_by_field_name("left")
        .filter(|n| n.kind() == "identifier")?;
    let right = assignment
        .child_by_field_name("right")
        .filter(|n| n.kind() != "assignment")?;

    Some(StatementKind::Assign {
        target: text(left, source).to_string(),
        uses: analyze_name_usage(right, source),
    })
}

/// Aliases held in the `name` fields of an import node.
fn import_aliases(node: Node, source: &str) -> Vec<ImportAlias> {
    let mut cursor = node.walk();
    node.children_by_field_name("name", &mut cursor)
        .map(|child| match child.kind() {
            "aliased_import" => {
                let name = child
                    .child_by_field_name("name")
                    .map(|n| text(n, source))
                    .unwrap_or_default();
                let asname = child
                    .child_by_field_name("alias")
                    .map(|n| text(n, source).to_string());
                ImportAlias::new(name, asname)
            }
            _ => ImportAlias::new(text(child, source), None),
        })
        .collect()
}

fn text<'a>(node: Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or_default()
}
