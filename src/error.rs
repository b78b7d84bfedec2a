//! Per-file error taxonomy.
//!
//! Configuration problems abort the whole run and travel as `anyhow::Error`.
//! Everything in this module is recoverable: it is reported for the file that
//! caused it and the batch moves on to the next file.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure while exploding a single source file.
#[derive(Debug, Error)]
pub enum ExplodeError {
    /// The source file could not be read (missing, permissions, not UTF-8).
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source file is not valid Python.
    #[error("syntax error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// An output file or directory could not be created.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExplodeError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Short label used when summarizing failures.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Read { .. } => "read",
            Self::Parse { .. } => "parse",
            Self::Write { .. } => "write",
        }
    }
}
