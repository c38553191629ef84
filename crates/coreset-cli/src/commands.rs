use anyhow::{Context, Result};
use tracing::{info, info_span};

use coreset_cli::job::JobFile;
use coreset_cli::pipeline::{RunOptions, run_job};
use coreset_cli::types::{CheckSummary, JobResult};
use coreset_ingest::read_json_value;
use coreset_validate::validate_document;

use crate::cli::{CheckArgs, ConvertArgs};

pub fn run_convert(args: &ConvertArgs) -> Result<JobResult> {
    let job = JobFile::load(&args.job).context("load job")?;
    info!(
        job = %args.job.display(),
        dataset_count = job.datasets.len(),
        "job loaded"
    );
    let options = RunOptions {
        output_dir: args.output_dir.clone(),
        seed: args.seed,
        dry_run: args.dry_run,
    };
    Ok(run_job(&job, &options))
}

/// Validate each file; unreadable files are reported as failures.
pub fn run_check(args: &CheckArgs) -> Vec<CheckSummary> {
    let check_span = info_span!("check", file_count = args.files.len());
    let _guard = check_span.enter();
    args.files
        .iter()
        .map(|path| {
            let (valid, message) = match read_json_value(path) {
                Ok(value) => {
                    let outcome = validate_document(&value);
                    (outcome.valid, outcome.message)
                }
                Err(error) => (false, error.to_string()),
            };
            info!(path = %path.display(), valid, "checked document");
            CheckSummary {
                path: path.clone(),
                valid,
                message,
            }
        })
        .collect()
}
