//! Name usage analysis.
//!
//! Computes the identifiers a syntax subtree refers to. The result only feeds
//! membership tests (which imports and module variables an artifact needs), so
//! over-reporting is harmless while under-reporting would break the artifact.

use tree_sitter::Node;

use crate::core::data::NameSet;

/// Statements whose identifiers are bindings or plain strings, never references.
const OPAQUE_STATEMENTS: &[&str] = &[
    "import_statement",
    "import_from_statement",
    "future_import_statement",
    "global_statement",
    "nonlocal_statement",
];

/// Collect every name referenced by `node`.
///
/// - Bare identifiers are recorded wherever they appear.
/// - For `x.y` only the base `x` is recorded.
/// - Decorators attached to `node` record their head name (`d` for `@d(...)`
///   is covered by the traversal, `m` for `@m.d`) and are traversed in full.
/// - Binding positions are skipped: definition names, parameter names and
///   keyword-argument keywords.
pub fn analyze_name_usage(node: Node, source: &str) -> NameSet {
    let mut names = NameSet::new();

    if node.kind() == "decorated_definition" {
        let mut cursor = node.walk();
        for decorator in node.children(&mut cursor) {
            if decorator.kind() != "decorator" {
                continue;
            }
            let mut decorator_cursor = decorator.walk();
            for expr in decorator.named_children(&mut decorator_cursor) {
                if let Some(head) = decorator_head(expr, source) {
                    names.insert(head.to_string());
                }
                collect_names(expr, source, &mut names);
            }
        }
    }

    collect_names(node, source, &mut names);
    names
}

/// `d` for `@d`, `m` for `@m.d`; anything else is left to the full traversal.
fn decorator_head<'a>(expr: Node, source: &'a str) -> Option<&'a str> {
    match expr.kind() {
        "identifier" => Some(node_text(expr, source)),
        "attribute" => expr
            .child_by_field_name("object")
            .filter(|object| object.kind() == "identifier")
            .map(|object| node_text(object, source)),
        _ => None,
    }
}

fn collect_names(node: Node, source: &str, names: &mut NameSet) {
    if node.kind() == "identifier" {
        names.insert(node_text(node, source).to_string());
        return;
    }
    if OPAQUE_STATEMENTS.contains(&node.kind()) {
        return;
    }

    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return;
    }
    loop {
        let child = cursor.node();
        if !is_binding_position(node, cursor.field_name(), child) {
            collect_names(child, source, names);
        }
        if !cursor.goto_next_sibling() {
            break;
        }
    }
}

/// Whether `child` (reached through `field` of `parent`) binds a name instead
/// of referencing one.
fn is_binding_position(parent: Node, field: Option<&str>, child: Node) -> bool {
    match (parent.kind(), field) {
        // `x.y`: `y` is an attribute name, `x` is still traversed
        ("attribute", Some("attribute")) => true,
        // `f(key=value)`: only `value` is a reference
        ("keyword_argument", Some("name")) => true,
        ("function_definition" | "class_definition", Some("name")) => true,
        ("default_parameter" | "typed_default_parameter", Some("name")) => true,
        ("parameters" | "lambda_parameters" | "typed_parameter", _) => matches!(
            child.kind(),
            "identifier" | "list_splat_pattern" | "dictionary_splat_pattern"
        ),
        _ => false,
    }
}

fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or_default()
}
