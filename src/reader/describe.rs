//! Dataset descriptions for prompt construction
//!
//! Produces a short markdown block describing a DataFrame, either as a
//! deterministic sample of its rows or as its column types.

use polars::prelude::{AnyValue, DataType};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::markdown::{render_table, Align};
use crate::plot::vocabulary::{vocabulary_impls, Vocabulary};
use crate::{ChatplotError, DataFrame, Result};

/// Rows sampled by the `head` strategy unless configured otherwise
pub const DEFAULT_NUM_ROWS: usize = 5;

/// Seed for row sampling, fixed so descriptions are reproducible
pub const DEFAULT_SEED: u64 = 0;

// =============================================================================
// Configuration
// =============================================================================

/// How a dataset is described
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionStrategy {
    /// A sample of rows
    #[default]
    Head,
    /// Column names and types
    Dtypes,
}

impl Vocabulary for DescriptionStrategy {
    const NAME: &'static str = "description strategy";
    const VARIANTS: &'static [Self] = &[Self::Head, Self::Dtypes];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Dtypes => "dtypes",
        }
    }

    fn parse(value: &str) -> Result<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.as_str() == value)
            .ok_or_else(|| ChatplotError::UnknownStrategy(value.to_string()))
    }
}

vocabulary_impls!(DescriptionStrategy);

/// Settings for `describe`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionOptions {
    pub strategy: DescriptionStrategy,
    /// Rows to sample for the `head` strategy
    pub num_rows: usize,
    /// Sampling seed for the `head` strategy
    pub seed: u64,
}

impl Default for DescriptionOptions {
    fn default() -> Self {
        Self {
            strategy: DescriptionStrategy::Head,
            num_rows: DEFAULT_NUM_ROWS,
            seed: DEFAULT_SEED,
        }
    }
}

// =============================================================================
// Descriptions
// =============================================================================

/// Describe a dataset with a named strategy (`"head"` or `"dtypes"`)
pub fn description(df: &DataFrame, strategy: &str, num_rows: usize) -> Result<String> {
    let options = DescriptionOptions {
        strategy: DescriptionStrategy::parse(strategy)?,
        num_rows,
        ..DescriptionOptions::default()
    };
    describe(df, &options)
}

/// Describe a dataset according to `options`
pub fn describe(df: &DataFrame, options: &DescriptionOptions) -> Result<String> {
    tracing::debug!(
        strategy = %options.strategy,
        num_rows = options.num_rows,
        height = df.height(),
        "describing dataset"
    );

    match options.strategy {
        DescriptionStrategy::Head => description_by_head(df, options.num_rows, options.seed),
        DescriptionStrategy::Dtypes => Ok(description_by_dtypes(df)),
    }
}

/// A seeded sample of rows, rendered as a markdown table
///
/// Samples without replacement; asking for more rows than the dataset has
/// yields every row. The first column holds the original row index.
pub fn description_by_head(df: &DataFrame, num_rows: usize, seed: u64) -> Result<String> {
    let columns = df.get_columns();

    let mut headers = vec![String::new()];
    let mut aligns = vec![Align::Right];
    for column in columns {
        headers.push(column.name().to_string());
        aligns.push(if is_numeric(column.dtype()) {
            Align::Right
        } else {
            Align::Left
        });
    }

    let mut rows = Vec::new();
    for idx in sample_rows(df.height(), num_rows, seed) {
        let mut row = vec![idx.to_string()];
        for column in columns {
            let value = column.get(idx).map_err(|e| {
                ChatplotError::DataError(format!(
                    "Failed to read row {} of column '{}': {}",
                    idx,
                    column.name(),
                    e
                ))
            })?;
            row.push(cell_text(value));
        }
        rows.push(row);
    }

    let table = render_table(&headers, &aligns, &rows);
    Ok(format!(
        "\nThis is the result of `print(df.head())`:\n\n{}\n",
        table
    ))
}

/// Column names and types, rendered as a markdown table
pub fn description_by_dtypes(df: &DataFrame) -> String {
    let headers = vec!["column".to_string(), "dtype".to_string()];
    let aligns = [Align::Left, Align::Left];
    let rows: Vec<Vec<String>> = df
        .get_columns()
        .iter()
        .map(|column| vec![column.name().to_string(), column.dtype().to_string()])
        .collect();

    let table = render_table(&headers, &aligns, &rows);
    format!("\nThis is the result of `print(df.dtypes)`:\n\n{}\n", table)
}

// =============================================================================
// Helpers
// =============================================================================

/// Row indices drawn without replacement, in draw order
fn sample_rows(height: usize, num_rows: usize, seed: u64) -> Vec<usize> {
    let amount = num_rows.min(height);
    let mut rng = StdRng::seed_from_u64(seed);
    rand::seq::index::sample(&mut rng, height, amount).into_vec()
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

fn cell_text(value: AnyValue) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}
