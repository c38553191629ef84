//! Integration tests for document persistence.

use coreset_ingest::{SourceFormat, load, read_json_value};
use coreset_model::{
    CanonicalDocument, CanonicalExample, CanonicalInstance, DatasetIdentity, ErrorKind,
};
use coreset_output::{render_document, write_document};

fn document() -> CanonicalDocument {
    let identity = DatasetIdentity::new("X", "https://example.org", "Arithmetic")
        .with_instruction("Add the numbers.");
    let filename = identity.filename();
    CanonicalDocument {
        metadata: identity.metadata(),
        positive_examples: vec![
            CanonicalExample {
                input: "1+1".into(),
                output: "2".into(),
            },
            CanonicalExample {
                input: "2+2".into(),
                output: "4".into(),
            },
        ],
        instances: vec![CanonicalInstance::new(format!("{filename}-0"), "3+3", "6")],
    }
}

#[test]
fn rendered_layout() {
    let text = String::from_utf8(render_document(&document()).expect("render")).expect("utf8");
    insta::assert_snapshot!(text, @r#"
    {
        "Contributors": [
            "CoreInst"
        ],
        "Source": [
            "X"
        ],
        "URL": "https://example.org",
        "Categories": [
            "Arithmetic"
        ],
        "Definition": [
            "Add the numbers."
        ],
        "Input_language": [
            "English"
        ],
        "Output_language": [
            "English"
        ],
        "Instruction_language": [
            "English"
        ],
        "Domains": [
            "Math"
        ],
        "Positive Examples": [
            {
                "input": "1+1",
                "output": "2"
            },
            {
                "input": "2+2",
                "output": "4"
            }
        ],
        "Instances": [
            {
                "id": "Collected_X_Arithmetic-0",
                "input": "3+3",
                "output": [
                    "6"
                ]
            }
        ]
    }
    "#);
}

#[test]
fn written_file_reloads_with_same_instance_ids() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output_dir = temp.path().join("Collected");
    let document = document();

    let path = write_document(&document, &output_dir, "Collected_X_Arithmetic").expect("write");
    assert_eq!(path, output_dir.join("Collected_X_Arithmetic.json"));

    let bytes = std::fs::read(&path).expect("read back");
    assert_eq!(bytes, render_document(&document).expect("render"));

    let value = read_json_value(&path).expect("json");
    let reloaded: CanonicalDocument = serde_json::from_value(value).expect("canonical");
    assert_eq!(reloaded, document);

    let records = load(&path, SourceFormat::Json, None).expect("load");
    assert_eq!(records.len(), 1);
    let ids: Vec<String> = records[0]
        .get("Instances")
        .and_then(|value| value.as_list())
        .expect("instances")
        .iter()
        .filter_map(|instance| match instance {
            coreset_model::RawValue::Nested(map) => map.get("id").map(ToString::to_string),
            _ => None,
        })
        .collect();
    let expected: Vec<String> = document.instance_ids().map(str::to_string).collect();
    assert_eq!(ids, expected);
}

#[test]
fn unwritable_directory_is_an_io_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let blocker = temp.path().join("not-a-dir");
    std::fs::write(&blocker, "x").expect("write blocker");

    let error = write_document(&document(), &blocker, "Collected_X_Arithmetic")
        .expect_err("directory is a file");
    assert_eq!(error.kind(), ErrorKind::Io);
}
