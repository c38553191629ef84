//! Validation issue types.

/// First structural problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// The document is not a JSON object
    RootNotObject,
    /// A required top-level key is absent
    MissingKey { key: &'static str },
    /// A key that must hold a list holds something else
    NotAList { key: &'static str },
    /// A key that must hold a string holds something else
    NotAString { key: &'static str },
    /// A key that must hold a list of strings holds something else
    NotAStringList { key: &'static str },
    /// A positive example is not `{input: string, output: string}`
    MalformedExample { index: usize },
    /// The positive example list does not have exactly two entries
    ExampleCount { found: usize },
    /// An instance is not `{id: string, input: string, output: [string]}`
    MalformedInstance { index: usize },
}

impl Issue {
    /// Position of the offending entry, for entry-level issues.
    pub fn index(&self) -> Option<usize> {
        match self {
            Issue::MalformedExample { index } | Issue::MalformedInstance { index } => Some(*index),
            _ => None,
        }
    }

    /// Top-level key the issue refers to.
    pub fn key(&self) -> &'static str {
        match self {
            Issue::RootNotObject => "",
            Issue::MissingKey { key }
            | Issue::NotAList { key }
            | Issue::NotAString { key }
            | Issue::NotAStringList { key } => *key,
            Issue::MalformedExample { .. } | Issue::ExampleCount { .. } => "Positive Examples",
            Issue::MalformedInstance { .. } => "Instances",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::RootNotObject => "Document root should be an object.".to_string(),
            Issue::MissingKey { key } => format!("Key '{key}' is missing in the JSON data."),
            Issue::NotAList { key } => format!("Key '{key}' should be a list."),
            Issue::NotAString { key } => format!("Key '{key}' should be a string."),
            Issue::NotAStringList { key } => format!("Key '{key}' should be a list of strings."),
            Issue::MalformedExample { .. } => "Each 'Positive Examples' entry should be a \
                dictionary with 'input' and 'output' keys, and both keys should be strings."
                .to_string(),
            Issue::ExampleCount { .. } => {
                "The 'Positive Examples' list should contain exactly two elements.".to_string()
            }
            Issue::MalformedInstance { .. } => "Each 'Instances' entry should be a dictionary \
                with 'id', 'input', and 'output' keys. 'id', 'input', and 'output' should have \
                specific data types and formats."
                .to_string(),
        }
    }
}
