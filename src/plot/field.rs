//! Column references

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{as_mapping, as_str, get_truthy, require};
use super::vocabulary::{AggregationType, Vocabulary};
use crate::{ChatplotError, Result};

/// A reference to a data column, optionally reduced by an aggregation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Field {
    column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    aggregation: Option<AggregationType>,
}

impl Field {
    /// Create a field for a column
    ///
    /// Fails with `MissingRequiredField` if the column name is empty.
    pub fn new(column: impl Into<String>, aggregation: Option<AggregationType>) -> Result<Self> {
        let column = column.into();
        if column.is_empty() {
            return Err(ChatplotError::MissingRequiredField {
                field: "column".to_string(),
            });
        }
        Ok(Self {
            column,
            aggregation,
        })
    }

    /// Build a field from a `{"column": ..., "aggregation": ...}` mapping
    ///
    /// A falsy `aggregation` means no aggregation; anything else is resolved
    /// case-insensitively against `AggregationType`.
    pub fn from_json(value: &Value) -> Result<Self> {
        let mapping = as_mapping(value, "field")?;
        let column = as_str(require(mapping, "column")?, "column")?;

        let aggregation = get_truthy(mapping, "aggregation")
            .map(|agg| as_str(agg, "aggregation").and_then(AggregationType::parse))
            .transpose()?;

        Self::new(column, aggregation)
    }

    /// Column name
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Aggregation applied to the column, if any
    pub fn aggregation(&self) -> Option<AggregationType> {
        self.aggregation
    }
}

impl TryFrom<Value> for Field {
    type Error = ChatplotError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(&value)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.aggregation {
            Some(agg) => write!(f, "{}({})", agg, self.column),
            None => write!(f, "{}", self.column),
        }
    }
}
