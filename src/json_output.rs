//! JSON output format for algorithm reports
//!
//! `--format json` wraps whichever report was produced in a versioned
//! envelope so downstream tools can detect the schema.

use crate::complexity::ComplexityTable;
use crate::regression::LinearFit;
use crate::search::SearchResult;
use crate::stats::{Quartiles, Summary};
use serde::{Deserialize, Serialize};

/// Binary search outcome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonSearch {
    /// Item searched for, as given on the command line
    pub item: String,
    /// Index of the item (null when absent)
    pub index: Option<usize>,
    pub found: bool,
    /// Bound-narrowing steps taken
    pub steps: u32,
    /// ceil(log2(len))
    pub max_steps: u32,
    /// Element comparisons performed
    pub comparisons: u32,
}

impl JsonSearch {
    pub fn new(item: impl Into<String>, result: &SearchResult) -> Self {
        Self {
            item: item.into(),
            index: result.index,
            found: result.is_found(),
            steps: result.steps,
            max_steps: result.max_steps,
            comparisons: result.comparisons,
        }
    }
}

/// Quartiles of a sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonQuartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub inter_quartile_range: f64,
}

impl From<&Quartiles> for JsonQuartiles {
    fn from(q: &Quartiles) -> Self {
        Self {
            q1: q.q1,
            q2: q.q2,
            q3: q.q3,
            inter_quartile_range: q.inter_quartile_range,
        }
    }
}

/// Descriptive statistics summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Bottom half of the sorted sample
    pub median_low: Vec<f64>,
    /// Top half of the sorted sample
    pub median_high: Vec<f64>,
    /// Absent for samples too small to split
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quartiles: Option<JsonQuartiles>,
}

impl From<&Summary> for JsonStats {
    fn from(summary: &Summary) -> Self {
        Self {
            count: summary.count,
            mean: summary.mean,
            median: summary.median.median,
            median_low: summary.median.lower.clone(),
            median_high: summary.median.upper.clone(),
            quartiles: summary.quartiles.as_ref().map(JsonQuartiles::from),
        }
    }
}

/// A sampled point on the regression line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct JsonPoint {
    pub x: f64,
    pub y: f64,
}

/// Least-squares regression result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRegression {
    pub slope: f64,
    pub y_intercept: f64,
    /// Closed-form cross-check of the fit
    pub check: JsonLine,
    /// Sampled points of the fitted line
    pub line: Vec<JsonPoint>,
}

/// Slope and intercept pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct JsonLine {
    pub slope: f64,
    pub y_intercept: f64,
}

impl From<&LinearFit> for JsonLine {
    fn from(fit: &LinearFit) -> Self {
        Self {
            slope: fit.slope,
            y_intercept: fit.y_intercept,
        }
    }
}

impl JsonRegression {
    pub fn new(fit: &LinearFit, check: &LinearFit, line: &[(f64, f64)]) -> Self {
        Self {
            slope: fit.slope,
            y_intercept: fit.y_intercept,
            check: JsonLine::from(check),
            line: line.iter().map(|&(x, y)| JsonPoint { x, y }).collect(),
        }
    }
}

/// Big-O growth table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonComplexity {
    /// Model labels, one per value column
    pub models: Vec<String>,
    pub rows: Vec<JsonComplexityRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonComplexityRow {
    pub n: f64,
    pub values: Vec<f64>,
}

impl From<&ComplexityTable> for JsonComplexity {
    fn from(table: &ComplexityTable) -> Self {
        Self {
            models: table.models().iter().map(|m| m.label().to_string()).collect(),
            rows: table
                .rows
                .iter()
                .map(|row| JsonComplexityRow {
                    n: row.n,
                    values: row.values.to_vec(),
                })
                .collect(),
        }
    }
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<JsonSearch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<JsonStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regression: Option<JsonRegression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<JsonComplexity>,
}

impl JsonOutput {
    /// Create an empty envelope
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "algorithms-json-v1".to_string(),
            search: None,
            stats: None,
            regression: None,
            complexity: None,
        }
    }

    pub fn with_search(mut self, search: JsonSearch) -> Self {
        self.search = Some(search);
        self
    }

    pub fn with_stats(mut self, stats: JsonStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_regression(mut self, regression: JsonRegression) -> Self {
        self.regression = Some(regression);
        self
    }

    pub fn with_complexity(mut self, complexity: JsonComplexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}
