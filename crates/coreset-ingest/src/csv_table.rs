use std::path::Path;

use csv::ReaderBuilder;

use coreset_model::{RawRecord, RawValue};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Read a CSV file with a header row; each data row becomes one record.
///
/// Cell values are kept as text exactly as written. Rows with a different
/// number of cells than the header are rejected.
pub fn read_csv_records(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| IngestError::csv(path, e))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::csv(path, e))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, e))?;
        records.push(RawRecord::from_pairs(
            headers
                .iter()
                .cloned()
                .zip(record.iter().map(RawValue::text)),
        ));
    }
    Ok(records)
}
