//! Configuration for the demonstrations
//!
//! Settings can be loaded from a TOML file:
//!
//! ```toml
//! regression_points = 100
//!
//! [complexity]
//! start = 0.001
//! end = 4.0
//! points = 1000
//! ```

use crate::error::AlgorithmError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Grid used to evaluate the Big-O growth models
///
/// # Example
/// ```
/// use algorithms::config::ComplexityConfig;
///
/// let config = ComplexityConfig::default();
/// assert_eq!(config.points, 1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityConfig {
    /// First input size; must be positive since `log n` is undefined at 0
    pub start: f64,

    /// Last input size, inclusive
    pub end: f64,

    /// Number of evenly spaced samples between `start` and `end`
    pub points: usize,
}

impl Default for ComplexityConfig {
    fn default() -> Self {
        Self {
            start: 0.001,
            end: 4.0,
            points: 1000,
        }
    }
}

impl ComplexityConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), AlgorithmError> {
        if !(self.start.is_finite() && self.start > 0.0) {
            return Err(AlgorithmError::InvalidConfig(format!(
                "complexity.start must be positive, got {}",
                self.start
            )));
        }

        if !(self.end.is_finite() && self.end > self.start) {
            return Err(AlgorithmError::InvalidConfig(format!(
                "complexity.end must be greater than start ({}), got {}",
                self.start, self.end
            )));
        }

        if self.points < 2 {
            return Err(AlgorithmError::InvalidConfig(format!(
                "complexity.points must be >= 2, got {}",
                self.points
            )));
        }

        Ok(())
    }
}

/// Root configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub complexity: ComplexityConfig,

    /// Points sampled along a fitted regression line
    pub regression_points: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            complexity: ComplexityConfig::default(),
            regression_points: 100,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use algorithms::config::Config;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::from_file("algorithms.toml")?;
    /// println!("{} complexity samples", config.complexity.points);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AlgorithmError> {
        self.complexity.validate()?;

        if self.regression_points == 0 {
            return Err(AlgorithmError::InvalidConfig(
                "regression_points must be >= 1, got 0".to_string(),
            ));
        }

        Ok(())
    }
}
