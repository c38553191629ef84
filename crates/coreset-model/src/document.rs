//! The canonical instruction dataset document.
//!
//! Key names and their order are the compatibility surface of the output
//! file, so every field carries an explicit serde rename.

use serde::{Deserialize, Serialize};

/// Contributor recorded on every collected dataset.
pub const CONTRIBUTOR: &str = "CoreInst";

pub const DEFAULT_LANGUAGE: &str = "English";

pub const DEFAULT_DOMAIN: &str = "Math";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

/// Where a dataset comes from and how it is categorized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetIdentity {
    pub source: String,
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub instruction: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_domain")]
    pub domain: String,
}

impl DatasetIdentity {
    pub fn new(
        source: impl Into<String>,
        url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            url: url.into(),
            category: category.into(),
            instruction: None,
            language: default_language(),
            domain: default_domain(),
        }
    }

    #[must_use]
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Base file name shared by the output file and instance ids.
    pub fn filename(&self) -> String {
        format!("Collected_{}_{}", self.source, self.category)
    }

    pub fn metadata(&self) -> Metadata {
        Metadata {
            contributors: vec![CONTRIBUTOR.to_string()],
            source: vec![self.source.clone()],
            url: self.url.clone(),
            categories: vec![self.category.clone()],
            definition: self.instruction.iter().cloned().collect(),
            input_language: vec![self.language.clone()],
            output_language: vec![self.language.clone()],
            instruction_language: vec![self.language.clone()],
            domains: vec![self.domain.clone()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "Contributors")]
    pub contributors: Vec<String>,
    #[serde(rename = "Source")]
    pub source: Vec<String>,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Categories")]
    pub categories: Vec<String>,
    #[serde(rename = "Definition")]
    pub definition: Vec<String>,
    #[serde(rename = "Input_language")]
    pub input_language: Vec<String>,
    #[serde(rename = "Output_language")]
    pub output_language: Vec<String>,
    #[serde(rename = "Instruction_language")]
    pub instruction_language: Vec<String>,
    #[serde(rename = "Domains")]
    pub domains: Vec<String>,
}

/// A worked example shown ahead of the instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalExample {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalInstance {
    pub id: String,
    pub input: String,
    /// Always exactly one element.
    pub output: Vec<String>,
}

impl CanonicalInstance {
    pub fn new(id: impl Into<String>, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            input: input.into(),
            output: vec![output.into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalDocument {
    #[serde(flatten)]
    pub metadata: Metadata,
    #[serde(rename = "Positive Examples")]
    pub positive_examples: Vec<CanonicalExample>,
    #[serde(rename = "Instances")]
    pub instances: Vec<CanonicalInstance>,
}

impl CanonicalDocument {
    /// Untyped view of the document, as the validator and readers see it.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn instance_ids(&self) -> impl Iterator<Item = &str> {
        self.instances.iter().map(|instance| instance.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_defaults_and_filename() {
        let identity = DatasetIdentity::new("DRAW-1K", "https://example.org", "Algebra");
        assert_eq!(identity.filename(), "Collected_DRAW-1K_Algebra");
        let metadata = identity.metadata();
        assert!(metadata.definition.is_empty());
        assert_eq!(metadata.input_language, vec!["English"]);
        assert_eq!(metadata.domains, vec!["Math"]);
        assert_eq!(metadata.contributors, vec![CONTRIBUTOR]);
    }

    #[test]
    fn instruction_becomes_definition() {
        let metadata = DatasetIdentity::new("S", "u", "C")
            .with_instruction("Solve it.")
            .with_language("Chinese")
            .metadata();
        assert_eq!(metadata.definition, vec!["Solve it."]);
        assert_eq!(metadata.instruction_language, vec!["Chinese"]);
    }

    #[test]
    fn document_keys_follow_canonical_order() {
        let document = CanonicalDocument {
            metadata: DatasetIdentity::new("S", "u", "C").metadata(),
            positive_examples: vec![],
            instances: vec![CanonicalInstance::new("X-0", "in", "out")],
        };
        let json = serde_json::to_string(&document).expect("serialize");
        let keys = [
            "\"Contributors\"",
            "\"Source\"",
            "\"URL\"",
            "\"Categories\"",
            "\"Definition\"",
            "\"Input_language\"",
            "\"Output_language\"",
            "\"Instruction_language\"",
            "\"Domains\"",
            "\"Positive Examples\"",
            "\"Instances\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| json.find(key).expect("key present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
