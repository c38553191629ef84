//! Error types for raw dataset loading.

use std::path::PathBuf;

use coreset_model::ErrorKind;

use crate::format::SourceFormat;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("unknown file type '{0}' (expected json, csv or txt)")]
    UnknownFormat(String),

    #[error("line group size must be at least 1")]
    InvalidGroupSize,

    #[error("line groups only apply to json sources, not {format}")]
    GroupSizeUnsupported { format: SourceFormat },

    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path} at line {line}: {source}")]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} has {lines} lines, which is not a multiple of the group size {group_size}")]
    GroupSizeMismatch {
        path: PathBuf,
        lines: usize,
        group_size: usize,
    },

    #[error("{path}: entry {index} is a JSON {found}, expected an object")]
    NotAnObject {
        path: PathBuf,
        index: usize,
        found: &'static str,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path} has an odd number of lines ({lines}); the last question has no answer")]
    OddLineCount { path: PathBuf, lines: usize },
}

impl IngestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownFormat(_) | Self::InvalidGroupSize | Self::GroupSizeUnsupported { .. } => {
                ErrorKind::Config
            }
            _ => ErrorKind::Load,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
