//! Raw dataset loading.
//!
//! Every supported source shape ends up as a flat `Vec<RawRecord>`:
//!
//! - **json**: a JSON array, a single object, JSON-lines, or fixed-size
//!   groups of physical lines (`line_group_size`)
//! - **csv**: header row plus data rows
//! - **txt**: alternating question/answer lines
//!
//! A directory path loads every file with the format's extension, sorted by
//! file name, and concatenates their records.

pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod format;
pub mod json;
pub mod txt;

use std::path::Path;

use tracing::{debug, info};

use coreset_model::RawRecord;

pub use csv_table::read_csv_records;
pub use discovery::list_source_files;
pub use error::{IngestError, Result};
pub use format::SourceFormat;
pub use json::{read_json_file, read_json_groups, read_json_value};
pub use txt::read_txt_pairs;

/// Load all raw records under `path`.
pub fn load(
    path: &Path,
    format: SourceFormat,
    line_group_size: Option<usize>,
) -> Result<Vec<RawRecord>> {
    if !path.exists() {
        return Err(IngestError::PathNotFound {
            path: path.to_path_buf(),
        });
    }
    if line_group_size.is_some() && format != SourceFormat::Json {
        return Err(IngestError::GroupSizeUnsupported { format });
    }

    let files = if path.is_dir() {
        list_source_files(path, format)?
    } else {
        vec![path.to_path_buf()]
    };

    let mut records = Vec::new();
    for file in &files {
        let loaded = load_file(file, format, line_group_size)?;
        debug!(
            path = %file.display(),
            record_count = loaded.len(),
            "loaded source file"
        );
        records.extend(loaded);
    }

    info!(
        path = %path.display(),
        format = %format,
        file_count = files.len(),
        record_count = records.len(),
        "raw records loaded"
    );
    Ok(records)
}

/// Load a single file in the given format.
pub fn load_file(
    path: &Path,
    format: SourceFormat,
    line_group_size: Option<usize>,
) -> Result<Vec<RawRecord>> {
    match (format, line_group_size) {
        (SourceFormat::Json, Some(group_size)) => read_json_groups(path, group_size),
        (SourceFormat::Json, None) => read_json_file(path),
        (SourceFormat::Csv, None) => read_csv_records(path),
        (SourceFormat::Txt, None) => read_txt_pairs(path),
        (format, Some(_)) => Err(IngestError::GroupSizeUnsupported { format }),
    }
}

/// Read a whole source file as UTF-8, dropping a leading byte order mark.
pub(crate) fn read_source_text(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}
