use coreset_model::{ErrorKind, ModelError};
use thiserror::Error;

/// Failure to render one record's input or output text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("field '{field}' holds a {found} value, expected text, a number or a list")]
    UnsupportedValue { field: String, found: &'static str },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("record {position}: {source}")]
    Projection {
        position: usize,
        #[source]
        source: ProjectionError,
    },
    #[error("need at least 2 records to draw positive examples, {available} available")]
    InsufficientData { available: usize },
}

impl NormalizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Projection { .. } => ErrorKind::Config,
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
