//! Module variable inclusion.

use crate::core::{
    collect::discovery::{Definition, ModuleVariable},
    data::NameSet,
};

/// What an artifact needs besides its definition.
#[derive(Debug)]
pub struct Dependencies<'a> {
    /// Selected module variables, in original order.
    pub variables: Vec<ModuleVariable<'a>>,
    /// Names used by the definition and every selected variable.
    pub used_names: NameSet,
}

/// Select the module variables a definition depends on.
///
/// Starts from the names the definition uses and keeps pulling in variables
/// (and the names their values use) until nothing new is selected, so a
/// variable defined in terms of another variable brings both along.
pub fn resolve_dependencies<'a>(
    definition: &Definition<'a>,
    variables: &[ModuleVariable<'a>],
) -> Dependencies<'a> {
    let mut used_names = definition.uses.clone();
    let mut selected = vec![false; variables.len()];

    loop {
        let mut changed = false;
        for (index, variable) in variables.iter().enumerate() {
            if !selected[index] && used_names.contains(variable.name) {
                selected[index] = true;
                used_names.extend(variable.uses.iter().cloned());
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    let variables = variables
        .iter()
        .zip(selected)
        .filter_map(|(variable, keep)| keep.then_some(*variable))
        .collect();

    Dependencies {
        variables,
        used_names,
    }
}
