//! Source file discovery for directory inputs.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};
use crate::format::SourceFormat;

/// Lists the files in `dir` whose extension matches `format`.
///
/// Returns files sorted by filename so that record order, and with it
/// instance ids, does not depend on the platform's directory order.
pub fn list_source_files(dir: &Path, format: SourceFormat) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::PathNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(format.extension()))
            .unwrap_or(false);

        if matches {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}
