//! Persistence of canonical documents.
//!
//! Documents are written as UTF-8 JSON with 4-space indentation and
//! non-ASCII characters kept literal, one file per dataset.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;
use tracing::info;

use coreset_model::{CanonicalDocument, ErrorKind};

const INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to serialize document {filename}: {source}")]
    Serialize {
        filename: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OutputError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Io
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// Exact bytes written for a document.
pub fn render_document(document: &CanonicalDocument) -> serde_json::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Path the document for `filename` is written to.
pub fn output_path(output_dir: &Path, filename: &str) -> PathBuf {
    output_dir.join(format!("{filename}.json"))
}

/// Write `document` to `{output_dir}/{filename}.json`, creating the directory.
pub fn write_document(
    document: &CanonicalDocument,
    output_dir: &Path,
    filename: &str,
) -> Result<PathBuf> {
    let bytes = render_document(document).map_err(|source| OutputError::Serialize {
        filename: filename.to_string(),
        source,
    })?;
    fs::create_dir_all(output_dir).map_err(|source| OutputError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = output_path(output_dir, filename);
    fs::write(&path, &bytes).map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;
    info!(
        path = %path.display(),
        instance_count = document.instances.len(),
        bytes = bytes.len(),
        "wrote document"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coreset_model::{CanonicalExample, CanonicalInstance, DatasetIdentity};

    #[test]
    fn non_ascii_is_written_literally() {
        let document = CanonicalDocument {
            metadata: DatasetIdentity::new("Ape210K", "u", "Arithmetic")
                .with_language("Chinese")
                .metadata(),
            positive_examples: vec![CanonicalExample {
                input: "小明有3个苹果".into(),
                output: "3".into(),
            }],
            instances: vec![CanonicalInstance::new(
                "Collected_Ape210K_Arithmetic-0",
                "一加一",
                "2",
            )],
        };
        let text = String::from_utf8(render_document(&document).expect("render")).expect("utf8");
        assert!(text.contains("小明有3个苹果"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\n    \"Contributors\": ["));
    }

    #[test]
    fn output_path_appends_json_extension() {
        assert_eq!(
            output_path(Path::new("Collected"), "Collected_X_Y"),
            Path::new("Collected/Collected_X_Y.json")
        );
    }
}
