//! Output layouts and collision-free filename allocation.

use std::{collections::HashSet, fmt};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::utils::{is_dunder_file, to_snake_case};

/// How extracted definitions are laid out next to the rewritten module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `{stem}_{name}.py` siblings of the rewritten module.
    #[default]
    Files,
    /// A `{stem}/` package holding `{name}.py` files and an `__init__.py`.
    Dirs,
}

impl Layout {
    /// Layout actually used for `file_name`. Dunder files (`__init__.py`,
    /// `__main__.py`) are never turned into packages.
    pub fn for_file(self, file_name: &str) -> Self {
        match self {
            Self::Dirs if is_dunder_file(file_name) => Self::Files,
            layout => layout,
        }
    }

    /// Stem of the artifact holding `definition`, before collision handling.
    pub fn artifact_stem(self, source_stem: &str, definition: &str) -> String {
        let snake = to_snake_case(definition);
        match self {
            Self::Files => format!("{}_{}", source_stem, snake),
            Self::Dirs => snake,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Files => write!(f, "files"),
            Self::Dirs => write!(f, "dirs"),
        }
    }
}

/// File names already claimed in one output directory.
///
/// Created fresh for every source file; never shared between files.
#[derive(Debug, Default)]
pub struct FilenameScope {
    taken: HashSet<String>,
}

impl FilenameScope {
    /// A scope where `reserved` file names are already claimed.
    pub fn with_reserved<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: reserved.into_iter().map(Into::into).collect(),
        }
    }

    /// Claim `{stem}.py`, or `{stem}_2.py`, `{stem}_3.py`, ... if taken.
    pub fn allocate(&mut self, stem: &str) -> String {
        let mut candidate = format!("{}.py", stem);
        let mut counter = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{}_{}.py", stem, counter);
            counter += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}
