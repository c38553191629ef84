use std::path::PathBuf;

use coreset_model::ErrorKind;

use crate::pipeline::DatasetOutcome;

#[derive(Debug)]
pub struct JobResult {
    pub output_dir: PathBuf,
    pub seed: u64,
    pub dry_run: bool,
    pub datasets: Vec<DatasetSummary>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct DatasetSummary {
    /// Output file stem, `Collected_{source}_{category}`.
    pub filename: String,
    pub source: PathBuf,
    pub result: DatasetResult,
}

#[derive(Debug)]
pub enum DatasetResult {
    Converted(DatasetOutcome),
    Failed {
        kind: Option<ErrorKind>,
        message: String,
    },
}

impl DatasetResult {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::Converted(DatasetOutcome::Written { .. } | DatasetOutcome::Checked { .. })
        )
    }
}

/// Result of checking one existing document.
#[derive(Debug)]
pub struct CheckSummary {
    pub path: PathBuf,
    pub valid: bool,
    pub message: String,
}
