use coreset_model::{FieldSpec, ModelError, RawRecord, RawValue};

use crate::error::ProjectionError;

/// Render the canonical input text of a record.
///
/// A single selected field is rendered as-is, without its prefix. With
/// several fields, each contributes lines in spec order:
///
/// - scalar: `"{prefix}: {value}"`, or the bare value without a prefix
/// - list: a `"{prefix}:"` header line (when prefixed), then one line per item
/// - null, or a null list item: nothing
///
/// Nested objects cannot be flattened into lines and are rejected.
pub fn format_input(record: &RawRecord, spec: &FieldSpec) -> Result<String, ProjectionError> {
    match spec.selectors() {
        [] => Err(ModelError::EmptyFieldSpec.into()),
        [single] => Ok(record.require(&single.field)?.to_string()),
        selectors => {
            let mut lines = Vec::new();
            for selector in selectors {
                let value = record.require(&selector.field)?;
                match value {
                    RawValue::Null => {}
                    RawValue::List(items) => {
                        if let Some(label) = selector.label() {
                            lines.push(format!("{label}:"));
                        }
                        for item in items {
                            if matches!(item, RawValue::Null) {
                                continue;
                            }
                            if !item.is_scalar() {
                                return Err(ProjectionError::UnsupportedValue {
                                    field: selector.field.clone(),
                                    found: item.type_name(),
                                });
                            }
                            lines.push(item.to_string());
                        }
                    }
                    RawValue::Nested(_) => {
                        return Err(ProjectionError::UnsupportedValue {
                            field: selector.field.clone(),
                            found: value.type_name(),
                        });
                    }
                    scalar => match selector.label() {
                        Some(label) => lines.push(format!("{label}: {scalar}")),
                        None => lines.push(scalar.to_string()),
                    },
                }
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Render the canonical output text of a record.
///
/// Lists are joined with newlines; every other value is rendered directly.
pub fn format_output(record: &RawRecord, output_key: &str) -> Result<String, ProjectionError> {
    let value = record.require(output_key)?;
    Ok(match value {
        RawValue::List(items) => items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use coreset_model::FieldSelector;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        RawRecord::try_from(value).expect("object")
    }

    #[test]
    fn single_field_ignores_prefix() {
        let spec = FieldSpec::new(vec![FieldSelector::with_prefix("q", "Question")]).unwrap();
        let input = format_input(&record(json!({"q": "1+1"})), &spec).unwrap();
        assert_eq!(input, "1+1");
    }

    #[test]
    fn single_field_renders_numbers_and_lists() {
        let spec = FieldSpec::single("v");
        assert_eq!(format_input(&record(json!({"v": 12})), &spec).unwrap(), "12");
        assert_eq!(
            format_input(&record(json!({"v": ["a", "b"]})), &spec).unwrap(),
            r#"["a","b"]"#
        );
    }

    #[test]
    fn multiple_fields_use_prefixes_and_list_lines() {
        let spec = FieldSpec::from_pairs([
            ("question", Some("Question")),
            ("options", Some("Options")),
            ("hint", None),
        ])
        .unwrap();
        let input = format_input(
            &record(json!({
                "question": "Pick the even number.",
                "options": ["A. 3", "B. 4"],
                "hint": "Think."
            })),
            &spec,
        )
        .unwrap();
        assert_eq!(
            input,
            "Question: Pick the even number.\nOptions:\nA. 3\nB. 4\nThink."
        );
    }

    #[test]
    fn unprefixed_list_has_no_header_and_null_is_skipped() {
        let spec = FieldSpec::from_pairs([("a", None), ("b", Some("")), ("c", Some("C"))]).unwrap();
        let input = format_input(
            &record(json!({"a": ["x", "y"], "b": "z", "c": null})),
            &spec,
        )
        .unwrap();
        assert_eq!(input, "x\ny\nz");
    }

    #[test]
    fn null_list_items_are_skipped() {
        let spec = FieldSpec::from_pairs([("a", Some("A")), ("b", None)]).unwrap();
        let input = format_input(&record(json!({"a": ["x", null, "y"], "b": "z"})), &spec).unwrap();
        assert_eq!(input, "A:\nx\ny\nz");
    }

    #[test]
    fn nested_list_items_are_rejected() {
        let spec = FieldSpec::from_pairs([("a", None), ("b", None)]).unwrap();
        let error = format_input(&record(json!({"a": ["x", [1]], "b": "z"})), &spec).unwrap_err();
        assert_eq!(
            error,
            ProjectionError::UnsupportedValue {
                field: "a".to_string(),
                found: "list"
            }
        );
    }

    #[test]
    fn nested_values_are_rejected_in_multi_field_mode() {
        let spec = FieldSpec::from_pairs([("a", None), ("b", None)]).unwrap();
        let error = format_input(&record(json!({"a": "x", "b": {"k": 1}})), &spec).unwrap_err();
        assert_eq!(
            error,
            ProjectionError::UnsupportedValue {
                field: "b".to_string(),
                found: "object"
            }
        );
    }

    #[test]
    fn missing_input_field_is_reported() {
        let spec = FieldSpec::single("q");
        let error = format_input(&record(json!({"other": 1})), &spec).unwrap_err();
        assert_eq!(
            error,
            ProjectionError::Model(ModelError::MissingField {
                field: "q".to_string()
            })
        );
    }

    #[test]
    fn list_output_joins_with_newline() {
        let output = format_output(&record(json!({"a": ["a", "b"]})), "a").unwrap();
        assert_eq!(output, "a\nb");
        let numbers = format_output(&record(json!({"a": [10, 2.5]})), "a").unwrap();
        assert_eq!(numbers, "10\n2.5");
    }

    #[test]
    fn scalar_output_is_rendered_directly() {
        assert_eq!(format_output(&record(json!({"a": 42})), "a").unwrap(), "42");
        assert_eq!(format_output(&record(json!({"a": "x"})), "a").unwrap(), "x");
    }
}
