//! Tests for the raw loader entry point.

use std::fs;
use std::path::{Path, PathBuf};

use coreset_ingest::{IngestError, SourceFormat, load};
use coreset_model::{ErrorKind, RawValue};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn txt_pairs_lines_into_records() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(dir.path(), "arith.txt", "What is 1+1?\n2\n  What is 2+2?  \n 4\n");
    let records = load(&path, SourceFormat::Txt, None).expect("load txt");
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[1].get("question"),
        Some(&RawValue::text("What is 2+2?"))
    );
    assert_eq!(records[1].get("answer"), Some(&RawValue::text("4")));
}

#[test]
fn txt_with_odd_line_count_fails() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(dir.path(), "arith.txt", "q1\na1\nq2\n");
    let error = load(&path, SourceFormat::Txt, None).unwrap_err();
    assert!(matches!(error, IngestError::OddLineCount { lines: 3, .. }));
    assert_eq!(error.kind(), ErrorKind::Load);
}

#[test]
fn json_directory_concatenates_sorted_files() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "b.json", r#"{"q": "from b"}"#);
    write(dir.path(), "a.json", r#"[{"q": "a1"}, {"q": "a2"}]"#);
    write(dir.path(), "ignored.csv", "q\nnope\n");
    let records = load(dir.path(), SourceFormat::Json, None).expect("load dir");
    let questions: Vec<String> = records
        .iter()
        .map(|record| record.get("q").expect("q").to_string())
        .collect();
    assert_eq!(questions, vec!["a1", "a2", "from b"]);
}

#[test]
fn csv_directory_concatenates_rows() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "part2.csv", "q,a\n3+3,6\n");
    write(dir.path(), "part1.csv", "q,a\n1+1,2\n2+2,4\n");
    let records = load(dir.path(), SourceFormat::Csv, None).expect("load csv dir");
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].get("a"), Some(&RawValue::text("6")));
}

#[test]
fn grouped_json_loads_multiline_records() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        dir.path(),
        "math23k.json",
        "{\"id\": \"1\",\n \"ans\": \"5\"}\n{\"id\": \"2\",\n \"ans\": \"7\"}\n",
    );
    let records = load(&path, SourceFormat::Json, Some(2)).expect("load grouped");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].get("ans"), Some(&RawValue::text("7")));
}

#[test]
fn group_size_is_rejected_for_other_formats() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(dir.path(), "data.csv", "q,a\n1,2\n");
    let error = load(&path, SourceFormat::Csv, Some(2)).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Config);
}

#[test]
fn missing_path_names_the_path() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("nope.json");
    let error = load(&missing, SourceFormat::Json, None).unwrap_err();
    assert!(matches!(error, IngestError::PathNotFound { .. }));
    assert!(error.to_string().contains("nope.json"));
}

#[test]
fn malformed_json_is_load_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(dir.path(), "bad.json", "[{\"q\": 1},\n");
    let error = load(&path, SourceFormat::Json, None).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Load);
}
