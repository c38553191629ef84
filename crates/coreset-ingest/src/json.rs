//! JSON sources: whole documents, JSON-lines, and fixed-size line groups.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use coreset_model::RawRecord;

use crate::error::{IngestError, Result};
use crate::read_source_text;

/// Read a JSON source file.
///
/// The whole file is tried as one JSON document first: an array yields one
/// record per element, an object yields a single record. When the document
/// does not parse, every non-blank line is read as its own JSON value.
pub fn read_json_file(path: &Path) -> Result<Vec<RawRecord>> {
    let text = read_source_text(path)?;
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, value)| into_record(path, index, value))
            .collect(),
        Ok(value) => Ok(vec![into_record(path, 0, value)?]),
        Err(error) => {
            debug!(
                path = %path.display(),
                %error,
                "not a single JSON document, reading as JSON lines"
            );
            read_json_lines(path, &text)
        }
    }
}

fn read_json_lines(path: &Path, text: &str) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value = serde_json::from_str(line).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        records.push(into_record(path, records.len(), value)?);
    }
    Ok(records)
}

/// Read a file where every `group_size` physical lines hold one JSON value.
pub fn read_json_groups(path: &Path, group_size: usize) -> Result<Vec<RawRecord>> {
    if group_size == 0 {
        return Err(IngestError::InvalidGroupSize);
    }
    let text = read_source_text(path)?;
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() % group_size != 0 {
        return Err(IngestError::GroupSizeMismatch {
            path: path.to_path_buf(),
            lines: lines.len(),
            group_size,
        });
    }

    lines
        .chunks(group_size)
        .enumerate()
        .map(|(index, group)| {
            let unit = group.join("\n");
            let value = serde_json::from_str(&unit).map_err(|source| IngestError::Json {
                path: path.to_path_buf(),
                line: index * group_size + 1,
                source,
            })?;
            into_record(path, index, value)
        })
        .collect()
}

/// Read a file holding exactly one JSON document.
pub fn read_json_value(path: &Path) -> Result<Value> {
    let text = read_source_text(path)?;
    serde_json::from_str(&text).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        line: source.line(),
        source,
    })
}

fn into_record(path: &Path, index: usize, value: Value) -> Result<RawRecord> {
    RawRecord::try_from(value).map_err(|other| IngestError::NotAnObject {
        path: path.to_path_buf(),
        index,
        found: json_type_name(&other),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coreset_model::{ErrorKind, RawValue};
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_array_document() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.json", r#"[{"q": "1+1"}, {"q": "2+2"}]"#);
        let records = read_json_file(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("q"), Some(&RawValue::text("2+2")));
    }

    #[test]
    fn falls_back_to_json_lines() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.jsonl", "{\"q\": \"a\"}\n\n{\"q\": \"b\"}\n");
        let records = read_json_file(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn json_lines_error_names_line() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.jsonl", "{\"q\": \"a\"}\n{broken\n");
        let error = read_json_file(&path).unwrap_err();
        assert!(matches!(error, IngestError::Json { line: 2, .. }));
    }

    #[test]
    fn strips_byte_order_mark() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bom.json", "\u{feff}[{\"q\": \"x\"}]");
        assert_eq!(read_json_file(&path).unwrap().len(), 1);
    }

    #[test]
    fn groups_of_lines_form_records() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "grouped.json",
            "{\n  \"id\": \"1\"\n}\n{\n  \"id\": \"2\"\n}\n",
        );
        let records = read_json_groups(&path, 3).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("id"), Some(&RawValue::text("1")));
    }

    #[test]
    fn malformed_group_names_its_first_line() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "grouped.json", "{\"a\":\n1}\n{\"a\":\n}\n");
        let error = read_json_groups(&path, 2).unwrap_err();
        assert!(matches!(error, IngestError::Json { line: 3, .. }));
        assert_eq!(error.kind(), ErrorKind::Load);
    }

    #[test]
    fn group_size_must_divide_line_count() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "grouped.json", "{\n\"id\": 1\n}\n{\n");
        let error = read_json_groups(&path, 3).unwrap_err();
        assert!(matches!(
            error,
            IngestError::GroupSizeMismatch {
                lines: 4,
                group_size: 3,
                ..
            }
        ));
        assert!(matches!(
            read_json_groups(&path, 0).unwrap_err(),
            IngestError::InvalidGroupSize
        ));
    }

    #[test]
    fn non_object_entries_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.json", r#"[{"q": "x"}, 3]"#);
        let error = read_json_file(&path).unwrap_err();
        assert!(matches!(
            error,
            IngestError::NotAnObject {
                index: 1,
                found: "number",
                ..
            }
        ));
    }
}
