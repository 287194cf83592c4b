//! Big-O growth models evaluated over a range of input sizes
//!
//! Produces the table behind the classic "common performance models" chart:
//! `O(n)`, `O(log n)`, `O(n log n)`, `O(n^2)` and `O(n!)` sampled on an
//! evenly spaced grid. Rendering the chart is left to whatever consumes
//! the table (CSV and JSON output are provided by the CLI).

use crate::config::ComplexityConfig;
use crate::error::Result;
use std::fmt;

/// Common algorithmic growth models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexityModel {
    Linear,
    Logarithmic,
    Linearithmic,
    Quadratic,
    Factorial,
}

impl ComplexityModel {
    /// All models in chart order
    pub const ALL: [ComplexityModel; 5] = [
        ComplexityModel::Linear,
        ComplexityModel::Logarithmic,
        ComplexityModel::Linearithmic,
        ComplexityModel::Quadratic,
        ComplexityModel::Factorial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComplexityModel::Linear => "O(n)",
            ComplexityModel::Logarithmic => "O(log n)",
            ComplexityModel::Linearithmic => "O(n log n)",
            ComplexityModel::Quadratic => "O(n^2)",
            ComplexityModel::Factorial => "O(n!)",
        }
    }

    /// Evaluate the model at `n`
    ///
    /// Logarithms are natural. The factorial of a real `n` is `Γ(n + 1)`.
    pub fn evaluate(&self, n: f64) -> f64 {
        match self {
            ComplexityModel::Linear => n,
            ComplexityModel::Logarithmic => n.ln(),
            ComplexityModel::Linearithmic => n * n.ln(),
            ComplexityModel::Quadratic => n * n,
            ComplexityModel::Factorial => gamma(n + 1.0),
        }
    }
}

impl fmt::Display for ComplexityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Natural log of the gamma function (Lanczos approximation, g = 7, n = 9)
pub fn ln_gamma(x: f64) -> f64 {
    #[allow(clippy::excessive_precision)]
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    if x < 0.5 {
        // reflection formula
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let sum = COEFFICIENTS[1..]
        .iter()
        .enumerate()
        .fold(COEFFICIENTS[0], |acc, (i, &c)| acc + c / (x + i as f64 + 1.0));

    let t = x + G + 0.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// Gamma function `Γ(x)` for positive `x`
pub fn gamma(x: f64) -> f64 {
    ln_gamma(x).exp()
}

/// `points` evenly spaced values from `start` to `end` inclusive
///
/// # Examples
/// ```
/// use algorithms::complexity::linspace;
///
/// assert_eq!(linspace(2.0, 6.0, 3), vec![2.0, 4.0, 6.0]);
/// assert_eq!(linspace(1.0, 5.0, 1), vec![1.0]);
/// ```
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            let mut values: Vec<f64> = (0..points).map(|i| start + i as f64 * step).collect();
            // pin the endpoint against accumulated rounding
            if let Some(last) = values.last_mut() {
                *last = end;
            }
            values
        }
    }
}

/// One sampled input size and every model's value there
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityRow {
    pub n: f64,
    /// Values in [`ComplexityModel::ALL`] order
    pub values: [f64; 5],
}

/// Growth models evaluated over a grid of input sizes
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityTable {
    pub rows: Vec<ComplexityRow>,
}

impl ComplexityTable {
    /// Evaluate every model over the configured grid
    pub fn generate(config: &ComplexityConfig) -> Result<Self> {
        config.validate()?;

        let rows: Vec<ComplexityRow> = linspace(config.start, config.end, config.points)
            .into_iter()
            .map(|n| ComplexityRow {
                n,
                values: ComplexityModel::ALL.map(|model| model.evaluate(n)),
            })
            .collect();

        tracing::debug!(
            rows = rows.len(),
            start = config.start,
            end = config.end,
            "generated complexity table"
        );
        Ok(Self { rows })
    }

    pub fn models(&self) -> &'static [ComplexityModel] {
        &ComplexityModel::ALL
    }

    /// Values of a single model down the table
    pub fn series(&self, model: ComplexityModel) -> Vec<f64> {
        let column = ComplexityModel::ALL
            .iter()
            .position(|candidate| *candidate == model);
        match column {
            Some(column) => self.rows.iter().map(|row| row.values[column]).collect(),
            None => Vec::new(),
        }
    }
}
