//! CLI argument parsing for the algorithm demonstrations

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "algorithms")]
#[command(version)]
#[command(about = "Binary search, descriptive statistics, regression and Big-O tables", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Load settings from a TOML file
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Binary search for an item in sorted values
    Search {
        /// Item to find
        #[arg(short, long, allow_negative_numbers = true)]
        item: String,

        /// Sorted values to search (numbers, or words compared lexicographically)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Mean, median and quartiles of a sample
    Stats {
        /// Sample values
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Least-squares linear regression
    Regress {
        /// Comma-separated x values
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        x: Vec<f64>,

        /// Comma-separated y values
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        y: Vec<f64>,

        /// Points to sample along the fitted line (overrides config)
        #[arg(long = "points", value_name = "N")]
        points: Option<usize>,
    },

    /// Big-O growth model table
    BigO {
        /// First input size (overrides config)
        #[arg(long = "start")]
        start: Option<f64>,

        /// Last input size (overrides config)
        #[arg(long = "end")]
        end: Option<f64>,

        /// Number of samples (overrides config)
        #[arg(long = "points", value_name = "N")]
        points: Option<usize>,
    },
}
