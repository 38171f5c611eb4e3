/*!
# chatplot - Chart Configurations from Language-Model Output

A typed intermediate representation for chart specifications that a language
model produces from a natural-language request, plus the parser that turns the
model's raw JSON into that representation.

## Example

```rust
use chatplot::{AggregationType, ChartType, PlotConfig};
use serde_json::json;

let raw = json!({
    "chart_type": "bar",
    "x": {"column": "region"},
    "y": {"column": "revenue", "aggregation": "sum"},
    "filters": ["year >= 2020", "(status != 'cancelled')"],
    "sort_criteria": "value",
    "sort_order": "desc"
});

let config = PlotConfig::from_json(&raw).unwrap();
assert_eq!(config.chart_type(), ChartType::Bar);
assert_eq!(config.y().aggregation(), Some(AggregationType::Sum));
assert_eq!(config.filters()[0].to_string(), "`year` >= 2020");
assert_eq!(config.required_columns(), vec!["revenue", "region"]);
```

## Architecture

- **LLM output** → decoded into a `serde_json::Value`
- **Parsing** → [`parser`] builds a [`PlotConfig`] (and its [`Field`]s and
  [`Filter`]s) or fails fast with a [`ChatplotError`]
- **Classification** → callers wrap the outcome in an [`LlmResponse`]
- **Prompting** → [`reader`] describes a dataset as markdown for the prompt

## Core Components

- [`plot`] - Vocabularies, fields, filters and the plot configuration
- [`parser`] - Construction and validation from untyped JSON
- [`response`] - Response classification envelope
- [`reader`] - Dataset loading and description (feature `describe`)
*/

pub mod parser;
pub mod plot;
pub mod response;

#[cfg(feature = "describe")]
pub mod reader;

// Re-export key types for convenience
pub use plot::{
    AggregationType, ChartType, ComparisonOp, Field, Filter, PlotConfig, SortOrder,
    SortingCriteria, Vocabulary,
};
pub use response::{LlmResponse, ResponseType};

#[cfg(feature = "describe")]
pub use polars::prelude::DataFrame;

/// Main library error type
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChatplotError {
    #[error("Missing required field: '{field}'")]
    MissingRequiredField { field: String },

    #[error("Invalid {vocabulary} value '{value}', expected one of: {}", .expected.join(", "))]
    InvalidValue {
        vocabulary: &'static str,
        value: String,
        expected: Vec<&'static str>,
    },

    #[error("Invalid type for '{field}': expected {expected}, got {found}")]
    InvalidType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Unsupported operator or failed to parse filter: {0}")]
    UnparsableFilter(String),

    #[error("Unknown description strategy: {0}")]
    UnknownStrategy(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type Result<T> = std::result::Result<T, ChatplotError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_end_to_end_success_response() {
        // Model output as it arrives over the wire
        let raw = r#"{
            "chart_type": "line",
            "x": {"column": "date"},
            "y": {"column": "sales", "aggregation": "SUM"},
            "hue": {"column": "region"},
            "filters": "region != 'Other'",
            "ylabel": "Total sales"
        }"#;

        let config = parser::parse_config_str(raw).unwrap();
        let response = LlmResponse::success(config);

        assert!(response.is_success());
        let config = response.usable_config().unwrap();
        assert_eq!(config.chart_type(), ChartType::Line);
        assert_eq!(config.hue().map(Field::column), Some("region"));
        assert_eq!(config.filters().len(), 1);
        assert_eq!(config.filters()[0].to_string(), "`region` != 'Other'");
        assert_eq!(config.ylabel(), Some("Total sales"));
        assert_eq!(config.required_columns(), vec!["sales", "date"]);
    }

    #[test]
    fn test_end_to_end_failure_is_typed() {
        let raw = json!({
            "chart_type": "bar",
            "y": {"column": "sales"},
            "filters": ["year > 2020", "region is north"]
        });

        let err = PlotConfig::from_json(&raw).unwrap_err();
        assert_eq!(
            err,
            ChatplotError::UnparsableFilter("region is north".to_string())
        );

        // The orchestration layer records the failure without a config
        let response = LlmResponse::without_config(ResponseType::FailedToRender);
        assert!(response.usable_config().is_none());
    }

    #[test]
    fn test_error_messages() {
        let err = ChartType::parse("pyramid").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid chart type value 'pyramid', expected one of: pie, scatter, line, bar, area, horizontal-bar"
        );

        let err = ChatplotError::MissingRequiredField {
            field: "chart_type".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required field: 'chart_type'");
    }
}
