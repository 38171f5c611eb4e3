//! Plot types for chatplot chart configurations
//!
//! This module contains all the types that represent a validated chart
//! configuration: the closed vocabularies, column fields, filter predicates and
//! the main PlotConfig struct.
//!
//! # Architecture
//!
//! The module is organized into submodules:
//!
//! - `vocabulary` - Closed string-backed enums and the `Vocabulary` lookup trait
//! - `types` - JSON value helpers shared by the constructors
//! - `field` - Column references with optional aggregation
//! - `filter` - Comparison predicates parsed from free text
//! - `main` - Main PlotConfig struct

pub mod field;
pub mod filter;
pub mod main;
pub mod types;
pub mod vocabulary;

// Re-export all types for convenience
pub use field::*;
pub use filter::*;
pub use main::*;
pub use types::*;
pub use vocabulary::*;
