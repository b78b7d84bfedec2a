//! Import statement types.

use std::fmt;

/// One imported name and the optional local alias it is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAlias {
    /// Imported name: a dotted module path for `import`, a symbol for `from`.
    pub name: String,
    /// `as` alias, if any.
    pub asname: Option<String>,
}

impl ImportAlias {
    pub fn new(name: impl Into<String>, asname: Option<String>) -> Self {
        Self {
            name: name.into(),
            asname,
        }
    }
}

impl fmt::Display for ImportAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.asname {
            Some(asname) => write!(f, "{} as {}", self.name, asname),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A top-level import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportStatement {
    /// `import os, os.path as osp`
    Plain { aliases: Vec<ImportAlias> },
    /// `from ..pkg import a, b as c` or `from pkg import *`
    From {
        /// Module path including leading dots for relative imports.
        module: String,
        aliases: Vec<ImportAlias>,
        wildcard: bool,
    },
}

impl ImportStatement {
    pub fn aliases(&self) -> &[ImportAlias] {
        match self {
            Self::Plain { aliases } | Self::From { aliases, .. } => aliases,
        }
    }

    /// Local names this statement binds, in alias order.
    ///
    /// `import os.path` binds `os`; `from x import y as z` binds `z`.
    /// A wildcard binds nothing that can be known statically.
    pub fn bound_names(&self) -> impl Iterator<Item = &str> {
        let plain = matches!(self, Self::Plain { .. });
        self.aliases()
            .iter()
            .map(move |alias| bound_name(alias, plain))
    }
}

/// Name an alias introduces into the importing module.
pub fn bound_name(alias: &ImportAlias, plain: bool) -> &str {
    match (&alias.asname, plain) {
        (Some(asname), _) => asname.as_str(),
        (None, true) => alias.name.split('.').next().unwrap_or(alias.name.as_str()),
        (None, false) => alias.name.as_str(),
    }
}

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |aliases: &[ImportAlias]| {
            aliases
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self {
            Self::Plain { aliases } => write!(f, "import {}", join(aliases)),
            Self::From {
                module,
                wildcard: true,
                ..
            } => write!(f, "from {} import *", module),
            Self::From {
                module, aliases, ..
            } => write!(f, "from {} import {}", module, join(aliases)),
        }
    }
}
