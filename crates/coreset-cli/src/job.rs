//! Job files describing which datasets to collect.
//!
//! A job file is TOML with optional `output_dir` and `seed` keys followed by
//! one `[[dataset]]` table per source dataset. Relative paths resolve
//! against the directory holding the job file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use coreset_ingest::SourceFormat;
use coreset_model::{DatasetIdentity, DEFAULT_DOMAIN, DEFAULT_LANGUAGE, FieldSpec, RecordFilter};
use coreset_normalize::DEFAULT_SEED;

pub const DEFAULT_OUTPUT_DIR: &str = "Collected";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default, rename = "dataset")]
    pub datasets: Vec<DatasetJob>,
}

/// One source dataset and the rules to convert it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetJob {
    pub source: String,
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub instruction: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_domain")]
    pub domain: String,
    pub path: PathBuf,
    #[serde(default)]
    pub file_type: SourceFormat,
    #[serde(default)]
    pub line_group_size: Option<usize>,
    pub output_key: String,
    #[serde(default)]
    pub filter: Option<RecordFilter>,
    pub input: FieldSpec,
}

impl JobFile {
    /// Read and parse a job file, resolving relative paths against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read job file {}", path.display()))?;
        let job = Self::parse(&text).with_context(|| format!("parse job file {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(job.resolve_paths(base))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    #[must_use]
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        self.output_dir = resolve(base, &self.output_dir);
        for dataset in &mut self.datasets {
            dataset.path = resolve(base, &dataset.path);
        }
        self
    }
}

impl DatasetJob {
    pub fn identity(&self) -> DatasetIdentity {
        let identity = DatasetIdentity::new(&self.source, &self.url, &self.category)
            .with_language(&self.language)
            .with_domain(&self.domain);
        match &self.instruction {
            Some(instruction) => identity.with_instruction(instruction),
            None => identity,
        }
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
