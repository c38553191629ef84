//! Metadata shape checks.

use serde_json::{Map, Value};

use crate::issue::Issue;

const STRING_LIST_KEYS: [&str; 5] = [
    "Definition",
    "Input_language",
    "Output_language",
    "Instruction_language",
    "Domains",
];

/// Check the metadata keys hold lists, strings and lists of strings.
pub fn check(map: &Map<String, Value>) -> Option<Issue> {
    if !is_list(map, "Source") {
        return Some(Issue::NotAList { key: "Source" });
    }
    if !map.get("URL").is_some_and(Value::is_string) {
        return Some(Issue::NotAString { key: "URL" });
    }
    if let Some(key) = ["Contributors", "Categories"]
        .into_iter()
        .find(|key| !is_list(map, key))
    {
        return Some(Issue::NotAList { key });
    }
    STRING_LIST_KEYS
        .into_iter()
        .find(|key| !is_string_list(map, key))
        .map(|key| Issue::NotAStringList { key })
}

fn is_list(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).is_some_and(Value::is_array)
}

fn is_string_list(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key)
        .and_then(Value::as_array)
        .is_some_and(|items| items.iter().all(Value::is_string))
}
