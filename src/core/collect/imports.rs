//! Import pruning.
//!
//! Filters the file's top-level imports down to what one artifact uses.

use crate::core::data::{ImportStatement, NameSet, bound_name};

use super::discovery::ImportRecord;

/// Render the imports an artifact needs, in original order.
///
/// Aliases are kept independently, by bound name. A statement that keeps all
/// of its aliases is emitted with its original text; a partially pruned one is
/// re-rendered canonically. Statements left with no aliases are dropped, and
/// wildcard imports are always dropped since they bind no known name.
pub fn prune_imports(imports: &[ImportRecord], used: &NameSet) -> Vec<String> {
    imports
        .iter()
        .filter_map(|record| prune_statement(record, used))
        .collect()
}

fn prune_statement(record: &ImportRecord, used: &NameSet) -> Option<String> {
    let (plain, wildcard) = match record.import {
        ImportStatement::Plain { .. } => (true, false),
        ImportStatement::From { wildcard, .. } => (false, *wildcard),
    };
    if wildcard {
        return None;
    }

    let aliases = record.import.aliases();
    let kept: Vec<_> = aliases
        .iter()
        .filter(|alias| used.contains(bound_name(alias, plain)))
        .cloned()
        .collect();

    if kept.is_empty() {
        return None;
    }
    if kept.len() == aliases.len() {
        return Some(record.statement.text.clone());
    }

    let pruned = match record.import {
        ImportStatement::Plain { .. } => ImportStatement::Plain { aliases: kept },
        ImportStatement::From { module, .. } => ImportStatement::From {
            module: module.clone(),
            aliases: kept,
            wildcard: false,
        },
    };
    Some(pruned.to_string())
}
