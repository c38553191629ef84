use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::raw::{RawRecord, RawValue};

/// One raw field that contributes to the canonical input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSelector {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl FieldSelector {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            prefix: None,
        }
    }

    pub fn with_prefix(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            prefix: Some(prefix.into()),
        }
    }

    /// The label to put in front of the value; an empty label counts as none.
    pub fn label(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|prefix| !prefix.is_empty())
    }
}

/// Ordered, non-empty selection of raw fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldSelector>", into = "Vec<FieldSelector>")]
pub struct FieldSpec(Vec<FieldSelector>);

impl FieldSpec {
    pub fn new(selectors: Vec<FieldSelector>) -> Result<Self> {
        if selectors.is_empty() {
            return Err(ModelError::EmptyFieldSpec);
        }
        Ok(Self(selectors))
    }

    /// Spec selecting a single field without a prefix.
    pub fn single(field: impl Into<String>) -> Self {
        Self(vec![FieldSelector::new(field)])
    }

    /// Build from `(field, prefix)` pairs in order.
    pub fn from_pairs<I, F>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (F, Option<F>)>,
        F: Into<String>,
    {
        let selectors = pairs
            .into_iter()
            .map(|(field, prefix)| FieldSelector {
                field: field.into(),
                prefix: prefix.map(Into::into),
            })
            .collect();
        Self::new(selectors)
    }

    pub fn selectors(&self) -> &[FieldSelector] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<FieldSelector>> for FieldSpec {
    type Error = ModelError;

    fn try_from(selectors: Vec<FieldSelector>) -> Result<Self> {
        Self::new(selectors)
    }
}

impl From<FieldSpec> for Vec<FieldSelector> {
    fn from(spec: FieldSpec) -> Self {
        spec.0
    }
}

/// Keeps only records whose `key` field equals `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordFilter {
    pub key: String,
    pub value: RawValue,
}

impl RecordFilter {
    pub fn new(key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn matches(&self, record: &RawRecord) -> bool {
        record.get(&self.key) == Some(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spec_is_rejected() {
        assert_eq!(FieldSpec::new(Vec::new()), Err(ModelError::EmptyFieldSpec));
        let parsed: std::result::Result<FieldSpec, _> = serde_json::from_str("[]");
        assert!(parsed.is_err());
    }

    #[test]
    fn empty_prefix_counts_as_none() {
        assert_eq!(FieldSelector::with_prefix("q", "").label(), None);
        assert_eq!(FieldSelector::with_prefix("q", "Q").label(), Some("Q"));
    }

    #[test]
    fn filter_drops_records_without_key() {
        let filter = RecordFilter::new("split", "train");
        assert!(filter.matches(&RawRecord::from_pairs([("split", "train")])));
        assert!(!filter.matches(&RawRecord::from_pairs([("split", "test")])));
        assert!(!filter.matches(&RawRecord::from_pairs([("other", "train")])));
    }
}
