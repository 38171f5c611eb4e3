//! Dataset access for prompt construction
//!
//! The reader module loads tabular data into Polars DataFrames and describes
//! them as markdown text that can be placed into a model prompt.
//!
//! # Example
//!
//! ```rust,ignore
//! use chatplot::reader::{description, load_csv};
//!
//! let df = load_csv("sales.csv")?;
//! let text = description(&df, "head", 5)?;
//! ```

use std::path::Path;

use polars::prelude::*;

use crate::{ChatplotError, DataFrame, Result};

pub mod describe;
mod markdown;

pub use describe::{
    describe, description, description_by_dtypes, description_by_head, DescriptionOptions,
    DescriptionStrategy, DEFAULT_NUM_ROWS, DEFAULT_SEED,
};

/// Load a CSV file with a header row into a DataFrame
pub fn load_csv(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| {
            ChatplotError::DataError(format!("Failed to read CSV '{}': {}", path.display(), e))
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded csv"
    );

    Ok(df)
}
