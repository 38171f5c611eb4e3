//! Closed vocabularies for chart configurations
//!
//! Every enum here is backed by a fixed set of string literals. Lookup is
//! explicit and total: an unknown string yields `ChatplotError::InvalidValue`
//! carrying the vocabulary name and its valid set.

use serde::{Deserialize, Serialize};

use crate::{ChatplotError, Result};

/// A closed set of string-backed values
///
/// Implementors list their variants once in `VARIANTS`; `as_str` gives the
/// literal for each. The default `parse` is an exact match against those
/// literals.
pub trait Vocabulary: Copy + Sized + 'static {
    /// Human-readable vocabulary name used in error messages
    const NAME: &'static str;

    /// All variants, in declaration order
    const VARIANTS: &'static [Self];

    /// The literal string for this variant
    fn as_str(&self) -> &'static str;

    /// All valid literals, in declaration order
    fn literals() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|v| v.as_str()).collect()
    }

    /// Resolve a literal into a variant
    fn parse(value: &str) -> Result<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.as_str() == value)
            .ok_or_else(|| invalid_value::<Self>(value))
    }
}

/// Build the error for a string outside of a vocabulary
pub fn invalid_value<V: Vocabulary>(value: &str) -> ChatplotError {
    ChatplotError::InvalidValue {
        vocabulary: V::NAME,
        value: value.to_string(),
        expected: V::literals(),
    }
}

/// Implements `Display` and `FromStr` in terms of `Vocabulary`
macro_rules! vocabulary_impls {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", $crate::plot::vocabulary::Vocabulary::as_str(self))
                }
            }

            impl std::str::FromStr for $ty {
                type Err = $crate::ChatplotError;

                fn from_str(s: &str) -> $crate::Result<Self> {
                    <$ty as $crate::plot::vocabulary::Vocabulary>::parse(s)
                }
            }
        )+
    };
}

pub(crate) use vocabulary_impls;

// =============================================================================
// Chart Type
// =============================================================================

/// Kind of chart to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartType {
    Pie,
    Scatter,
    Line,
    Bar,
    Area,
    HorizontalBar,
}

impl Vocabulary for ChartType {
    const NAME: &'static str = "chart type";
    const VARIANTS: &'static [Self] = &[
        Self::Pie,
        Self::Scatter,
        Self::Line,
        Self::Bar,
        Self::Area,
        Self::HorizontalBar,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Scatter => "scatter",
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Area => "area",
            Self::HorizontalBar => "horizontal-bar",
        }
    }
}

// =============================================================================
// Aggregation Type
// =============================================================================

/// Reduction applied to a column before plotting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationType {
    Sum,
    Avg,
    Min,
    Max,
    Count,
    DistinctCount,
}

impl Vocabulary for AggregationType {
    const NAME: &'static str = "aggregation";
    const VARIANTS: &'static [Self] = &[
        Self::Sum,
        Self::Avg,
        Self::Min,
        Self::Max,
        Self::Count,
        Self::DistinctCount,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Count => "COUNT",
            Self::DistinctCount => "DISTINCT_COUNT",
        }
    }

    /// Aggregations are matched case-insensitively
    fn parse(value: &str) -> Result<Self> {
        let upper = value.to_uppercase();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.as_str() == upper)
            .ok_or_else(|| invalid_value::<Self>(value))
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// What to sort the plotted categories by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortingCriteria {
    Name,
    Value,
}

impl Vocabulary for SortingCriteria {
    const NAME: &'static str = "sort criteria";
    const VARIANTS: &'static [Self] = &[Self::Name, Self::Value];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Value => "value",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Vocabulary for SortOrder {
    const NAME: &'static str = "sort order";
    const VARIANTS: &'static [Self] = &[Self::Asc, Self::Desc];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

vocabulary_impls!(ChartType, AggregationType, SortingCriteria, SortOrder);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_type_literals() {
        assert_eq!(ChartType::parse("pie").unwrap(), ChartType::Pie);
        assert_eq!(
            ChartType::parse("horizontal-bar").unwrap(),
            ChartType::HorizontalBar
        );
        assert_eq!(ChartType::HorizontalBar.to_string(), "horizontal-bar");
    }

    #[test]
    fn test_chart_type_is_case_sensitive() {
        assert!(ChartType::parse("Bar").is_err());
        assert!(ChartType::parse("horizontal_bar").is_err());
    }

    #[test]
    fn test_unknown_chart_type() {
        let err = ChartType::parse("pyramid").unwrap_err();
        match err {
            ChatplotError::InvalidValue {
                vocabulary,
                value,
                expected,
            } => {
                assert_eq!(vocabulary, "chart type");
                assert_eq!(value, "pyramid");
                assert_eq!(expected.len(), 6);
                assert!(expected.contains(&"horizontal-bar"));
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_aggregation_case_insensitive() {
        assert_eq!(AggregationType::parse("sum").unwrap(), AggregationType::Sum);
        assert_eq!(AggregationType::parse("Avg").unwrap(), AggregationType::Avg);
        assert_eq!(
            AggregationType::parse("distinct_count").unwrap(),
            AggregationType::DistinctCount
        );
    }

    #[test]
    fn test_unknown_aggregation_reports_original_text() {
        let err = AggregationType::parse("median").unwrap_err();
        assert!(matches!(
            err,
            ChatplotError::InvalidValue { ref value, .. } if value == "median"
        ));
    }

    #[test]
    fn test_sorting_vocabularies() {
        assert_eq!(
            "value".parse::<SortingCriteria>().unwrap(),
            SortingCriteria::Value
        );
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("DESC".parse::<SortOrder>().is_err());
        assert!("size".parse::<SortingCriteria>().is_err());
    }

    #[test]
    fn test_serde_uses_literals() {
        assert_eq!(
            serde_json::to_value(ChartType::HorizontalBar).unwrap(),
            serde_json::json!("horizontal-bar")
        );
        assert_eq!(
            serde_json::to_value(AggregationType::DistinctCount).unwrap(),
            serde_json::json!("DISTINCT_COUNT")
        );
        let order: SortOrder = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(order, SortOrder::Asc);
    }

    #[test]
    fn test_every_variant_round_trips_through_its_literal() {
        for chart in ChartType::VARIANTS {
            assert_eq!(ChartType::parse(chart.as_str()).unwrap(), *chart);
        }
        for agg in AggregationType::VARIANTS {
            assert_eq!(AggregationType::parse(agg.as_str()).unwrap(), *agg);
        }
    }
}
