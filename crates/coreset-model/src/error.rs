use std::fmt;

use thiserror::Error;

/// Failure classes shared by every crate in the workspace.
///
/// Each crate keeps its own error enum; `kind()` on those enums maps them
/// onto this taxonomy so callers can decide how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid or missing configuration (empty field spec, unknown format).
    Config,
    /// Raw input unreadable or malformed.
    Load,
    /// Fewer records than the sampler needs.
    InsufficientData,
    /// Canonical document fails the structural contract.
    Validation,
    /// Output could not be written.
    Io,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Load => "load",
            Self::InsufficientData => "insufficient-data",
            Self::Validation => "validation",
            Self::Io => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("field spec must select at least one field")]
    EmptyFieldSpec,
    #[error("record has no field '{field}'")]
    MissingField { field: String },
}

impl ModelError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Config
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
