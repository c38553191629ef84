//! Dataset conversion pipeline with explicit stages.
//!
//! Each dataset goes through these stages in order:
//! 1. **Ingest**: load raw records from the source path
//! 2. **Normalize**: filter, sample positive examples, project instances
//! 3. **Validate**: check the document against the canonical structure
//! 4. **Output**: write `{output_dir}/{filename}.json`
//!
//! Nothing is written for a dataset that fails any earlier stage.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use coreset_ingest::{IngestError, load};
use coreset_model::{CanonicalDocument, ErrorKind};
use coreset_normalize::{DatasetNormalizer, ExampleSampler, NormalizeError};
use coreset_output::{OutputError, write_document};
use coreset_validate::{ValidationError, validate_canonical};

use crate::job::{DatasetJob, JobFile};
use crate::types::{DatasetResult, DatasetSummary, JobResult};

/// Record counts for one converted dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStats {
    pub records: usize,
    pub examples: usize,
    pub instances: usize,
}

impl DatasetStats {
    fn of(records: usize, document: &CanonicalDocument) -> Self {
        Self {
            records,
            examples: document.positive_examples.len(),
            instances: document.instances.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetOutcome {
    /// Document validated and written.
    Written { path: PathBuf, stats: DatasetStats },
    /// Document validated; nothing written (dry run).
    Checked { stats: DatasetStats },
    /// Document failed validation; nothing written.
    Invalid { message: String, stats: DatasetStats },
}

impl DatasetOutcome {
    pub fn stats(&self) -> DatasetStats {
        match self {
            Self::Written { stats, .. } | Self::Checked { stats } | Self::Invalid { stats, .. } => {
                *stats
            }
        }
    }
}

/// Options that override the job file.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub output_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub dry_run: bool,
}

/// Convert every dataset in the job with one shared sampler.
///
/// A failing dataset is recorded and the remaining datasets still run.
pub fn run_job(job: &JobFile, options: &RunOptions) -> JobResult {
    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| job.output_dir.clone());
    let seed = options.seed.unwrap_or(job.seed);
    let mut sampler = ExampleSampler::seeded(seed);

    let job_span = info_span!(
        "job",
        output_dir = %output_dir.display(),
        seed,
        dataset_count = job.datasets.len()
    );
    let _job_guard = job_span.enter();
    let job_start = Instant::now();

    let mut datasets = Vec::with_capacity(job.datasets.len());
    for dataset in &job.datasets {
        let filename = dataset.identity().filename();
        let result = match convert_dataset(dataset, &output_dir, &mut sampler, options.dry_run) {
            Ok(outcome) => DatasetResult::Converted(outcome),
            Err(error) => {
                let kind = error_kind(&error);
                let message = format!("{error:#}");
                warn!(
                    filename = %filename,
                    kind = kind.map_or("unknown", ErrorKind::as_str),
                    error = %message,
                    "dataset failed"
                );
                DatasetResult::Failed { kind, message }
            }
        };
        datasets.push(DatasetSummary {
            filename,
            source: dataset.path.clone(),
            result,
        });
    }

    let has_errors = datasets.iter().any(|summary| !summary.result.is_success());
    info!(
        converted = datasets
            .iter()
            .filter(|summary| summary.result.is_success())
            .count(),
        failed = datasets
            .iter()
            .filter(|summary| !summary.result.is_success())
            .count(),
        duration_ms = job_start.elapsed().as_millis(),
        "job complete"
    );

    JobResult {
        output_dir,
        seed,
        dry_run: options.dry_run,
        datasets,
        has_errors,
    }
}

/// Run one dataset through ingest, normalize, validate and output.
pub fn convert_dataset(
    job: &DatasetJob,
    output_dir: &Path,
    sampler: &mut ExampleSampler,
    dry_run: bool,
) -> Result<DatasetOutcome> {
    let normalizer = DatasetNormalizer::new(job.identity());
    let dataset_span = info_span!("dataset", filename = %normalizer.filename());
    let _dataset_guard = dataset_span.enter();

    let records = info_span!("ingest", path = %job.path.display()).in_scope(|| -> Result<_> {
        let start = Instant::now();
        let records = load(&job.path, job.file_type, job.line_group_size)
            .with_context(|| format!("load {}", job.path.display()))?;
        info!(
            record_count = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok(records)
    })?;
    let record_count = records.len();

    let document = info_span!("normalize").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let document = normalizer
            .normalize(
                records,
                &job.input,
                &job.output_key,
                job.filter.as_ref(),
                sampler,
            )
            .with_context(|| format!("normalize {}", normalizer.filename()))?;
        info!(
            examples = document.positive_examples.len(),
            instances = document.instances.len(),
            duration_ms = start.elapsed().as_millis(),
            "normalize complete"
        );
        Ok(document)
    })?;
    let stats = DatasetStats::of(record_count, &document);

    let outcome = info_span!("validate").in_scope(|| {
        let start = Instant::now();
        let outcome = validate_canonical(&document);
        info!(
            valid = outcome.valid,
            duration_ms = start.elapsed().as_millis(),
            "validate complete"
        );
        outcome
    });
    if let Err(ValidationError { message }) = outcome.into_result() {
        warn!(message = %message, "document failed validation, not writing");
        return Ok(DatasetOutcome::Invalid { message, stats });
    }

    if dry_run {
        info!("dry run, not writing");
        return Ok(DatasetOutcome::Checked { stats });
    }

    let path = info_span!("output").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let path = write_document(&document, output_dir, normalizer.filename())?;
        info!(
            path = %path.display(),
            duration_ms = start.elapsed().as_millis(),
            "output complete"
        );
        Ok(path)
    })?;
    Ok(DatasetOutcome::Written { path, stats })
}

/// Classify a pipeline error by the library error in its chain.
pub fn error_kind(error: &anyhow::Error) -> Option<ErrorKind> {
    error.chain().find_map(|cause| {
        if let Some(error) = cause.downcast_ref::<IngestError>() {
            Some(error.kind())
        } else if let Some(error) = cause.downcast_ref::<NormalizeError>() {
            Some(error.kind())
        } else {
            cause.downcast_ref::<OutputError>().map(OutputError::kind)
        }
    })
}
