//! Validation check modules.
//!
//! Each module performs one group of checks; the first issue found wins.

mod content;
mod metadata;

use serde_json::Value;

use crate::issue::Issue;

/// Top-level keys every canonical document must carry, in output order.
pub const REQUIRED_KEYS: [&str; 11] = [
    "Contributors",
    "Source",
    "URL",
    "Categories",
    "Definition",
    "Input_language",
    "Output_language",
    "Instruction_language",
    "Domains",
    "Positive Examples",
    "Instances",
];

/// Run all checks in order, stopping at the first issue.
pub fn run_all(document: &Value) -> Option<Issue> {
    let Some(map) = document.as_object() else {
        return Some(Issue::RootNotObject);
    };

    // 1. Presence of every required key
    if let Some(key) = REQUIRED_KEYS.into_iter().find(|key| !map.contains_key(*key)) {
        return Some(Issue::MissingKey { key });
    }

    // 2. Metadata shapes
    if let Some(issue) = metadata::check(map) {
        return Some(issue);
    }

    // 3. Positive examples, then instances
    content::check_examples(map).or_else(|| content::check_instances(map))
}
