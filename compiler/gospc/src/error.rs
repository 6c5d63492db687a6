//! Host-level failures.
//!
//! Lexical, syntactic and type errors never show up here: they are part of
//! the transcript.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot read '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("expr is required")]
    EmptyInput,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("invalid value '{value}' for {flag}")]
    InvalidFlag { flag: &'static str, value: String },

    #[error("unknown error code '{0}'")]
    UnknownErrorCode(String),

    /// Diagnostics were already written; only the exit status is left.
    #[error("{count} error(s) reported")]
    Reported { count: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DriverError {
    pub fn read_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DriverError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Reported { .. } => 1,
            _ => 2,
        }
    }
}
