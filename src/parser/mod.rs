/*!
Config Parser Module

Turns raw language-model output into a validated [`PlotConfig`].

## Architecture

1. **Decoding**: raw model text is decoded as JSON with `serde_json`.

2. **Building**: the decoded mapping is walked key by key, resolving
   vocabularies, fields and filter expressions into a typed `PlotConfig`.

3. **Validation**: happens during building. The first violation aborts the
   build, so callers never see a partially populated config.

## Example Usage

```rust
# use chatplot::parser::parse_config_str;
# use chatplot::ChartType;
# fn main() -> Result<(), Box<dyn std::error::Error>> {
let raw = r#"{
    "chart_type": "pie",
    "y": {"column": "share", "aggregation": "sum"},
    "hue": {"column": "segment"}
}"#;

let config = parse_config_str(raw)?;
assert_eq!(config.chart_type(), ChartType::Pie);
assert_eq!(config.required_columns(), vec!["share"]);
# Ok(())
# }
```
*/

use serde_json::Value;

use crate::plot::PlotConfig;
use crate::{ChatplotError, Result};

pub mod builder;

pub use builder::build_plot_config;

/// Main entry point for decoded model output
pub fn parse_config(json_data: &Value) -> Result<PlotConfig> {
    build_plot_config(json_data)
}

/// Decode raw model text as JSON, then build the config
pub fn parse_config_str(raw: &str) -> Result<PlotConfig> {
    let json_data: Value = serde_json::from_str(raw)
        .map_err(|e| ChatplotError::ParseError(format!("Invalid JSON in model output: {}", e)))?;

    build_plot_config(&json_data)
}
