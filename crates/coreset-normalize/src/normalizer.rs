use tracing::{debug, debug_span};

use coreset_model::{
    CanonicalDocument, CanonicalExample, CanonicalInstance, DatasetIdentity, FieldSpec, Metadata,
    RawRecord, RecordFilter,
};

use crate::error::{NormalizeError, Result};
use crate::projection::{format_input, format_output};
use crate::sampling::ExampleSampler;

/// Turns the raw records of one dataset into its canonical document.
#[derive(Debug, Clone)]
pub struct DatasetNormalizer {
    identity: DatasetIdentity,
    filename: String,
    metadata: Metadata,
}

impl DatasetNormalizer {
    pub fn new(identity: DatasetIdentity) -> Self {
        let filename = identity.filename();
        let metadata = identity.metadata();
        Self {
            identity,
            filename,
            metadata,
        }
    }

    pub fn identity(&self) -> &DatasetIdentity {
        &self.identity
    }

    /// Base name of the output file, also the prefix of every instance id.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Build the canonical document.
    ///
    /// The filter runs before sampling. The two drawn records become the
    /// positive examples and never appear as instances; the remaining
    /// records keep their load order and are numbered from zero.
    pub fn normalize(
        &self,
        records: Vec<RawRecord>,
        spec: &FieldSpec,
        output_key: &str,
        filter: Option<&RecordFilter>,
        sampler: &mut ExampleSampler,
    ) -> Result<CanonicalDocument> {
        let span = debug_span!("normalize", filename = %self.filename);
        let _guard = span.enter();

        let total = records.len();
        let pool: Vec<(usize, RawRecord)> = records
            .into_iter()
            .enumerate()
            .filter(|(_, record)| filter.is_none_or(|filter| filter.matches(record)))
            .collect();
        let pool_size = pool.len();

        let (drawn, remaining) = sampler.draw(pool)?;

        let positive_examples = drawn
            .iter()
            .map(|(position, record)| {
                let (input, output) = project(*position, record, spec, output_key)?;
                Ok(CanonicalExample { input, output })
            })
            .collect::<Result<Vec<_>>>()?;

        let instances = remaining
            .iter()
            .enumerate()
            .map(|(index, (position, record))| {
                let (input, output) = project(*position, record, spec, output_key)?;
                Ok(CanonicalInstance::new(
                    format!("{}-{index}", self.filename),
                    input,
                    output,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            pool_size,
            filtered_out = total - pool_size,
            instances = instances.len(),
            example_positions = ?drawn.iter().map(|(position, _)| *position).collect::<Vec<_>>(),
            "normalized dataset"
        );

        Ok(CanonicalDocument {
            metadata: self.metadata.clone(),
            positive_examples,
            instances,
        })
    }
}

fn project(
    position: usize,
    record: &RawRecord,
    spec: &FieldSpec,
    output_key: &str,
) -> Result<(String, String)> {
    let wrap = |source| NormalizeError::Projection { position, source };
    let input = format_input(record, spec).map_err(wrap)?;
    let output = format_output(record, output_key).map_err(wrap)?;
    Ok((input, output))
}
