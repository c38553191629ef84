//! Positive example and instance checks.

use serde_json::{Map, Value};

use crate::issue::Issue;

const EXPECTED_EXAMPLES: usize = 2;

/// Every example is `{input: string, output: string}` and there are exactly two.
pub fn check_examples(map: &Map<String, Value>) -> Option<Issue> {
    let Some(examples) = map.get("Positive Examples").and_then(Value::as_array) else {
        return Some(Issue::NotAList {
            key: "Positive Examples",
        });
    };
    if let Some(index) = examples.iter().position(|example| !is_example(example)) {
        return Some(Issue::MalformedExample { index });
    }
    if examples.len() != EXPECTED_EXAMPLES {
        return Some(Issue::ExampleCount {
            found: examples.len(),
        });
    }
    None
}

/// Every instance is `{id: string, input: string, output: [string]}`.
pub fn check_instances(map: &Map<String, Value>) -> Option<Issue> {
    let Some(instances) = map.get("Instances").and_then(Value::as_array) else {
        return Some(Issue::NotAList { key: "Instances" });
    };
    instances
        .iter()
        .position(|instance| !is_instance(instance))
        .map(|index| Issue::MalformedInstance { index })
}

fn is_example(value: &Value) -> bool {
    let Some(entry) = value.as_object() else {
        return false;
    };
    has_string(entry, "input") && has_string(entry, "output")
}

fn is_instance(value: &Value) -> bool {
    let Some(entry) = value.as_object() else {
        return false;
    };
    let single_output = match entry.get("output").and_then(Value::as_array) {
        Some(output) => output.len() == 1 && output[0].is_string(),
        None => false,
    };
    has_string(entry, "id") && has_string(entry, "input") && single_output
}

fn has_string(entry: &Map<String, Value>, key: &str) -> bool {
    entry.get(key).is_some_and(Value::is_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn malformed_example_is_reported_before_count() {
        let document = map(json!({"Positive Examples": [{"input": "a", "output": 1}]}));
        assert_eq!(
            check_examples(&document),
            Some(Issue::MalformedExample { index: 0 })
        );
    }

    #[test]
    fn three_examples_fail_the_count() {
        let example = json!({"input": "a", "output": "b"});
        let document = map(json!({"Positive Examples": [example, example, example]}));
        assert_eq!(
            check_examples(&document),
            Some(Issue::ExampleCount { found: 3 })
        );
    }

    #[test]
    fn non_list_examples_fail() {
        let document = map(json!({"Positive Examples": {"input": "a"}}));
        assert_eq!(
            check_examples(&document),
            Some(Issue::NotAList {
                key: "Positive Examples"
            })
        );
    }

    #[test]
    fn instance_output_must_hold_one_string() {
        let good = json!({"id": "X-0", "input": "q", "output": ["a"]});
        let two = json!({"id": "X-1", "input": "q", "output": ["a", "b"]});
        let bare = json!({"id": "X-2", "input": "q", "output": "a"});
        assert_eq!(check_instances(&map(json!({"Instances": [good]}))), None);
        assert_eq!(
            check_instances(&map(json!({"Instances": [good, two]}))),
            Some(Issue::MalformedInstance { index: 1 })
        );
        assert_eq!(
            check_instances(&map(json!({"Instances": [bare]}))),
            Some(Issue::MalformedInstance { index: 0 })
        );
    }

    #[test]
    fn empty_instances_pass() {
        assert_eq!(check_instances(&map(json!({"Instances": []}))), None);
    }
}
