/*!
chatplot Command Line Interface

Validates chart configurations produced by a language model, parses single
filter expressions, and describes datasets for prompting.
*/

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use chatplot::{parser, Filter, PlotConfig, VERSION};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "CHATPLOT_LOG";

#[derive(Parser)]
#[command(name = "chatplot")]
#[command(about = "Validate chart configurations produced by language models")]
#[command(version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse and validate a chart configuration
    Parse {
        /// The JSON configuration (reads stdin when omitted and no --file is given)
        config: Option<String>,

        /// Read the configuration from a file
        #[arg(long, conflicts_with = "config")]
        file: Option<PathBuf>,

        /// Output format (json, debug, pretty)
        #[arg(long, default_value = "pretty")]
        format: String,
    },

    /// Parse a single filter expression
    Filter {
        /// The filter expression, e.g. "year >= 2020"
        expression: String,
    },

    /// Describe a CSV dataset for prompting
    #[cfg(feature = "describe")]
    Describe {
        /// Path to a CSV file with a header row
        file: PathBuf,

        /// Description strategy (head, dtypes)
        #[arg(long, default_value = "head")]
        strategy: String,

        /// Number of rows to sample for the head strategy
        #[arg(long, default_value_t = chatplot::reader::DEFAULT_NUM_ROWS)]
        rows: usize,

        /// Sampling seed for the head strategy
        #[arg(long, default_value_t = chatplot::reader::DEFAULT_SEED)]
        seed: u64,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_config_source(config: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(config) = config {
        return Ok(config);
    }
    if let Some(file) = file {
        return std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read {}", file.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read configuration from stdin")?;
    Ok(buffer)
}

fn print_pretty(config: &PlotConfig) {
    println!("Chart type: {}", config.chart_type());
    if let Some(x) = config.x() {
        println!("  x: {}", x);
    }
    println!("  y: {}", config.y());
    if let Some(hue) = config.hue() {
        println!("  hue: {}", hue);
    }
    for (i, filter) in config.filters().iter().enumerate() {
        println!("  filter #{}: {}", i + 1, filter);
    }
    for (name, bound) in [
        ("xmin", config.xmin()),
        ("xmax", config.xmax()),
        ("ymin", config.ymin()),
        ("ymax", config.ymax()),
    ] {
        if let Some(bound) = bound {
            println!("  {}: {}", name, bound);
        }
    }
    if let Some(label) = config.xlabel() {
        println!("  xlabel: {}", label);
    }
    if let Some(label) = config.ylabel() {
        println!("  ylabel: {}", label);
    }
    if let Some(criteria) = config.sort_criteria() {
        let order = config
            .sort_order()
            .map(|o| o.to_string())
            .unwrap_or_else(|| "unspecified".to_string());
        println!("  sort: by {} ({})", criteria, order);
    }
    println!("  Required columns: {}", config.required_columns().join(", "));
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            config,
            file,
            format,
        } => {
            let raw = read_config_source(config, file)?;
            let config = parser::parse_config_str(&raw)?;

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&config.to_json()?)?),
                "debug" => println!("{:#?}", config),
                "pretty" => print_pretty(&config),
                other => anyhow::bail!("Unknown output format: {}", other),
            }
        }

        Commands::Filter { expression } => {
            let filter = Filter::from_text(&expression)?;
            println!("lhs: {}", filter.lhs());
            println!("op:  {}", filter.op());
            println!("rhs: {}", filter.rhs());
            println!("{}", filter);
        }

        #[cfg(feature = "describe")]
        Commands::Describe {
            file,
            strategy,
            rows,
            seed,
        } => {
            use chatplot::reader::{describe, load_csv, DescriptionOptions, DescriptionStrategy};
            use chatplot::Vocabulary;

            let df = load_csv(&file)?;
            let options = DescriptionOptions {
                strategy: DescriptionStrategy::parse(&strategy)?,
                num_rows: rows,
                seed,
            };
            print!("{}", describe(&df, &options)?);
        }
    }

    Ok(())
}
