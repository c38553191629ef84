//! Structural validation of canonical documents.
//!
//! Validation works on untyped JSON so that files written by other tools,
//! or read back from disk, go through the same contract as freshly built
//! documents. Checks run in a fixed order and stop at the first failure.

mod checks;
mod issue;

pub use checks::REQUIRED_KEYS;
pub use issue::Issue;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use coreset_model::{CanonicalDocument, ErrorKind};

/// Message reported for a document that passes every check.
pub const VALID_MESSAGE: &str = "JSON data format is valid.";

/// Pass/fail plus a diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: String,
}

impl ValidationOutcome {
    fn passed() -> Self {
        Self {
            valid: true,
            message: VALID_MESSAGE.to_string(),
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Turn a failed outcome into an error, keeping the diagnostic.
    pub fn into_result(self) -> Result<String, ValidationError> {
        if self.valid {
            Ok(self.message)
        } else {
            Err(ValidationError {
                message: self.message,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("document failed validation: {message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

/// Validate an untyped document against the canonical structure.
pub fn validate_document(document: &Value) -> ValidationOutcome {
    match checks::run_all(document) {
        None => ValidationOutcome::passed(),
        Some(issue) => {
            debug!(
                key = issue.key(),
                index = ?issue.index(),
                "document failed validation"
            );
            ValidationOutcome::failed(issue.message())
        }
    }
}

/// Validate a typed document.
pub fn validate_canonical(document: &CanonicalDocument) -> ValidationOutcome {
    match document.to_value() {
        Ok(value) => validate_document(&value),
        Err(error) => ValidationOutcome::failed(error.to_string()),
    }
}
