//! Main PlotConfig struct
//!
//! # Structure
//!
//! ```text
//! PlotConfig
//! ├─ chart_type: ChartType              (required)
//! ├─ x: Option<Field>
//! ├─ y: Field                           (required)
//! ├─ filters: Vec<Filter>               (parse order, possibly empty)
//! ├─ hue: Option<Field>
//! ├─ xmin, xmax, ymin, ymax: Option<f64>
//! ├─ xlabel, ylabel: Option<String>
//! ├─ sort_criteria: Option<SortingCriteria>
//! └─ sort_order: Option<SortOrder>
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::Field;
use super::filter::Filter;
use super::vocabulary::{ChartType, SortOrder, SortingCriteria};
use crate::{parser, ChatplotError, Result};

/// Complete, validated chart specification
///
/// Only obtainable through `from_json` (or deserialization, which goes
/// through the same checks), so `chart_type` and `y` are always present and
/// every enum-backed field belongs to its vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct PlotConfig {
    pub(crate) chart_type: ChartType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) x: Option<Field>,
    pub(crate) y: Field,
    pub(crate) filters: Vec<Filter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hue: Option<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) xmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) xmax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) ymin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) ymax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) xlabel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) ylabel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sort_criteria: Option<SortingCriteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sort_order: Option<SortOrder>,
}

impl PlotConfig {
    /// Build a config from decoded model output
    ///
    /// Fails fast on the first problem; see `parser::build_plot_config`.
    pub fn from_json(json_data: &Value) -> Result<Self> {
        parser::build_plot_config(json_data)
    }

    /// Serialize back into the input mapping shape
    pub fn to_json(&self) -> Result<Value> {
        serde_json::to_value(self)
            .map_err(|e| ChatplotError::InternalError(format!("Failed to serialize config: {}", e)))
    }

    /// Columns the chart needs: `y` first, then `x` when present
    pub fn required_columns(&self) -> Vec<&str> {
        let mut columns = vec![self.y.column()];
        if let Some(x) = &self.x {
            columns.push(x.column());
        }
        columns
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn x(&self) -> Option<&Field> {
        self.x.as_ref()
    }

    pub fn y(&self) -> &Field {
        &self.y
    }

    /// Filters in the order they were given
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn hue(&self) -> Option<&Field> {
        self.hue.as_ref()
    }

    pub fn xmin(&self) -> Option<f64> {
        self.xmin
    }

    pub fn xmax(&self) -> Option<f64> {
        self.xmax
    }

    pub fn ymin(&self) -> Option<f64> {
        self.ymin
    }

    pub fn ymax(&self) -> Option<f64> {
        self.ymax
    }

    pub fn xlabel(&self) -> Option<&str> {
        self.xlabel.as_deref()
    }

    pub fn ylabel(&self) -> Option<&str> {
        self.ylabel.as_deref()
    }

    pub fn sort_criteria(&self) -> Option<SortingCriteria> {
        self.sort_criteria
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }
}

impl TryFrom<Value> for PlotConfig {
    type Error = ChatplotError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(&value)
    }
}

impl std::str::FromStr for PlotConfig {
    type Err = ChatplotError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_config_str(s)
    }
}
