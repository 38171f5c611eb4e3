//! Config builder - converts decoded model output into a typed PlotConfig
//!
//! Takes the untyped JSON mapping returned by a language model and builds a
//! validated PlotConfig, resolving every enum-backed key against its
//! vocabulary and parsing each filter expression.

use serde_json::Value;

use crate::plot::types::{
    as_mapping, as_str, get_truthy, normalize_to_sequence, optional_number, optional_string,
    require, Mapping,
};
use crate::plot::{ChartType, Field, Filter, PlotConfig, SortOrder, SortingCriteria, Vocabulary};
use crate::Result;

// ============================================================================
// Basic Type Parsers
// ============================================================================

/// Parse an optional field: a truthy value must be a field mapping
fn parse_optional_field(mapping: &Mapping, key: &str) -> Result<Option<Field>> {
    get_truthy(mapping, key).map(Field::from_json).transpose()
}

/// Parse an optional vocabulary value: truthy strings are looked up
fn parse_optional_vocabulary<V: Vocabulary>(mapping: &Mapping, key: &str) -> Result<Option<V>> {
    get_truthy(mapping, key)
        .map(|value| as_str(value, key).and_then(V::parse))
        .transpose()
}

/// Parse the `filters` key: one expression or a list of them, fail-fast
fn parse_filters(mapping: &Mapping) -> Result<Vec<Filter>> {
    normalize_to_sequence(mapping.get("filters"), "filters")?
        .iter()
        .map(|text| Filter::from_text(text))
        .collect()
}

// ============================================================================
// Config Building
// ============================================================================

/// Build a PlotConfig from a decoded JSON mapping
///
/// `chart_type` and `y` must be present. `x`, `hue`, `sort_criteria` and
/// `sort_order` are only read when truthy. Axis bounds and labels are passed
/// through as given. The first error aborts the whole build.
pub fn build_plot_config(json_data: &Value) -> Result<PlotConfig> {
    let mapping = as_mapping(json_data, "config")?;

    let chart_type_value = require(mapping, "chart_type")?;
    let y_value = require(mapping, "y")?;

    let chart_type = ChartType::parse(as_str(chart_type_value, "chart_type")?)?;
    let filters = parse_filters(mapping)?;
    let x = parse_optional_field(mapping, "x")?;
    let y = Field::from_json(y_value)?;
    let hue = parse_optional_field(mapping, "hue")?;

    let config = PlotConfig {
        chart_type,
        x,
        y,
        filters,
        hue,
        xmin: optional_number(mapping, "xmin")?,
        xmax: optional_number(mapping, "xmax")?,
        ymin: optional_number(mapping, "ymin")?,
        ymax: optional_number(mapping, "ymax")?,
        xlabel: optional_string(mapping, "xlabel")?,
        ylabel: optional_string(mapping, "ylabel")?,
        sort_criteria: parse_optional_vocabulary::<SortingCriteria>(mapping, "sort_criteria")?,
        sort_order: parse_optional_vocabulary::<SortOrder>(mapping, "sort_order")?,
    };

    tracing::debug!(
        chart_type = %config.chart_type,
        filters = config.filters.len(),
        has_x = config.x.is_some(),
        has_hue = config.hue.is_some(),
        "built plot config"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::{AggregationType, ComparisonOp};
    use crate::ChatplotError;
    use serde_json::json;

    #[test]
    fn test_minimal_config() {
        let config = build_plot_config(&json!({
            "chart_type": "bar",
            "y": {"column": "sales"}
        }))
        .unwrap();

        assert_eq!(config.chart_type(), ChartType::Bar);
        assert_eq!(config.y().column(), "sales");
        assert!(config.filters().is_empty());
        assert!(config.x().is_none());
        assert!(config.hue().is_none());
        assert!(config.xmin().is_none());
        assert!(config.xlabel().is_none());
        assert!(config.sort_criteria().is_none());
        assert!(config.sort_order().is_none());
    }

    #[test]
    fn test_full_config() {
        let config = build_plot_config(&json!({
            "chart_type": "scatter",
            "x": {"column": "height", "aggregation": ""},
            "y": {"column": "weight", "aggregation": "avg"},
            "hue": {"column": "species"},
            "filters": ["height > 100", "species != 'Unknown'"],
            "xmin": 100,
            "xmax": 220.5,
            "ymin": -1,
            "ymax": 150,
            "xlabel": "Height (cm)",
            "ylabel": "Weight (kg)",
            "sort_criteria": "name",
            "sort_order": "asc"
        }))
        .unwrap();

        assert_eq!(config.chart_type(), ChartType::Scatter);
        assert_eq!(config.x().unwrap().column(), "height");
        assert_eq!(config.x().unwrap().aggregation(), None);
        assert_eq!(config.y().aggregation(), Some(AggregationType::Avg));
        assert_eq!(config.hue().unwrap().column(), "species");

        let filters = config.filters();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].op(), ComparisonOp::Gt);
        assert_eq!(filters[1].to_string(), "`species` != 'Unknown'");

        assert_eq!(config.xmin(), Some(100.0));
        assert_eq!(config.xmax(), Some(220.5));
        assert_eq!(config.ymin(), Some(-1.0));
        assert_eq!(config.ymax(), Some(150.0));
        assert_eq!(config.xlabel(), Some("Height (cm)"));
        assert_eq!(config.ylabel(), Some("Weight (kg)"));
        assert_eq!(config.sort_criteria(), Some(SortingCriteria::Name));
        assert_eq!(config.sort_order(), Some(SortOrder::Asc));
    }

    #[test]
    fn test_missing_chart_type() {
        let err = build_plot_config(&json!({"y": {"column": "sales"}})).unwrap_err();
        assert_eq!(
            err,
            ChatplotError::MissingRequiredField {
                field: "chart_type".to_string()
            }
        );
    }

    #[test]
    fn test_missing_y() {
        let err = build_plot_config(&json!({"chart_type": "bar"})).unwrap_err();
        assert_eq!(
            err,
            ChatplotError::MissingRequiredField {
                field: "y".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_enum_values() {
        let base = json!({"chart_type": "bar", "y": {"column": "sales"}});

        let cases = [
            ("chart_type", json!("pyramid"), "chart type"),
            ("sort_criteria", json!("size"), "sort criteria"),
            ("sort_order", json!("up"), "sort order"),
            ("x", json!({"column": "a", "aggregation": "median"}), "aggregation"),
        ];

        for (key, value, expected_vocabulary) in cases {
            let mut input = base.clone();
            input[key] = value;
            let err = build_plot_config(&input).unwrap_err();
            assert!(
                matches!(err, ChatplotError::InvalidValue { vocabulary, .. } if vocabulary == expected_vocabulary),
                "unexpected error for {}: {:?}",
                key,
                err
            );
        }
    }

    #[test]
    fn test_single_string_filter_matches_list() {
        let single = build_plot_config(&json!({
            "chart_type": "bar",
            "y": {"column": "sales"},
            "filters": "a > 1"
        }))
        .unwrap();
        let list = build_plot_config(&json!({
            "chart_type": "bar",
            "y": {"column": "sales"},
            "filters": ["a > 1"]
        }))
        .unwrap();

        assert_eq!(single.filters().len(), 1);
        assert_eq!(single.filters(), list.filters());
    }

    #[test]
    fn test_empty_filters() {
        for filters in [json!(""), json!(null), json!([])] {
            let config = build_plot_config(&json!({
                "chart_type": "bar",
                "y": {"column": "sales"},
                "filters": filters
            }))
            .unwrap();
            assert!(config.filters().is_empty());
        }
    }

    #[test]
    fn test_filter_order_preserved() {
        let config = build_plot_config(&json!({
            "chart_type": "line",
            "y": {"column": "sales"},
            "filters": ["c < 3", "a > 1", "b == 2"]
        }))
        .unwrap();

        let rendered: Vec<String> = config.filters().iter().map(|f| f.to_string()).collect();
        assert_eq!(rendered, vec!["`c` < 3", "`a` > 1", "`b` == 2"]);
    }

    #[test]
    fn test_first_bad_filter_aborts() {
        let err = build_plot_config(&json!({
            "chart_type": "bar",
            "y": {"column": "sales"},
            "filters": ["a > 1", "broken", "also broken"]
        }))
        .unwrap_err();
        assert_eq!(err, ChatplotError::UnparsableFilter("broken".to_string()));
    }

    #[test]
    fn test_falsy_optional_keys_are_absent() {
        let config = build_plot_config(&json!({
            "chart_type": "bar",
            "x": {},
            "y": {"column": "sales"},
            "hue": null,
            "sort_criteria": "",
            "sort_order": null
        }))
        .unwrap();

        assert!(config.x().is_none());
        assert!(config.hue().is_none());
        assert!(config.sort_criteria().is_none());
        assert!(config.sort_order().is_none());
    }

    #[test]
    fn test_labels_passed_through_verbatim() {
        let config = build_plot_config(&json!({
            "chart_type": "bar",
            "y": {"column": "sales"},
            "xlabel": "",
            "ylabel": "  Sales ($)  "
        }))
        .unwrap();

        assert_eq!(config.xlabel(), Some(""));
        assert_eq!(config.ylabel(), Some("  Sales ($)  "));
    }

    #[test]
    fn test_wrong_types() {
        let err = build_plot_config(&json!(["bar"])).unwrap_err();
        assert!(matches!(err, ChatplotError::InvalidType { found: "array", .. }));

        let err = build_plot_config(&json!({"chart_type": 3, "y": {"column": "a"}})).unwrap_err();
        assert!(matches!(err, ChatplotError::InvalidType { ref field, .. } if field == "chart_type"));

        let err = build_plot_config(&json!({"chart_type": "bar", "y": "sales"})).unwrap_err();
        assert!(matches!(err, ChatplotError::InvalidType { expected: "object", .. }));

        let err = build_plot_config(&json!({
            "chart_type": "bar",
            "y": {"column": "a"},
            "xmin": "zero"
        }))
        .unwrap_err();
        assert!(matches!(err, ChatplotError::InvalidType { ref field, .. } if field == "xmin"));
    }
}
