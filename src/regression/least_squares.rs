// Least-squares fit of a straight line through paired samples

use super::moments::Moments;
use crate::complexity::linspace;
use crate::error::{AlgorithmError, Result};
use crate::format;
use std::fmt;

/// Fitted regression line `y = slope * x + y_intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub y_intercept: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.y_intercept
    }
}

impl fmt::Display for LinearFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y = {:.2}X + {:.2}", self.slope, self.y_intercept)
    }
}

/// Least-squares linear regression over `x` and `y`
///
/// # Example
/// ```
/// use algorithms::regression::LeastSquares;
///
/// let ls = LeastSquares::new(vec![0.0, 1.0, 2.0], vec![2.0, 4.0, 6.0]);
/// let fit = ls.fit().unwrap();
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// assert!((fit.y_intercept - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquares {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LeastSquares {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    fn moments(&self) -> Result<Moments> {
        Moments::from_pairs(&self.x, &self.y)
    }

    /// Slope `r * sigma_y / sigma_x`, zero when either axis is constant
    pub fn slope(&self) -> Result<f64> {
        Ok(Self::slope_from(&self.moments()?))
    }

    fn slope_from(m: &Moments) -> f64 {
        let (sigma_x, sigma_y) = (m.sigma_x(), m.sigma_y());
        if sigma_x == 0.0 || sigma_y == 0.0 {
            return 0.0;
        }
        match m.pearson_r() {
            Some(r) => r * sigma_y / sigma_x,
            None => 0.0,
        }
    }

    /// Value where the regression line crosses the y-axis: `ȳ - slope * x̄`
    pub fn y_intercept(&self) -> Result<f64> {
        Ok(self.fit()?.y_intercept)
    }

    pub fn fit(&self) -> Result<LinearFit> {
        let m = self.moments()?;
        let slope = Self::slope_from(&m);
        let fit = LinearFit {
            slope,
            y_intercept: m.mean_y - slope * m.mean_x,
        };
        tracing::debug!(slope = fit.slope, y_intercept = fit.y_intercept, n = m.n, "least squares fit");
        Ok(fit)
    }

    /// Closed-form estimate `Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²`
    ///
    /// Computed without the correlation coefficient so it can be compared
    /// against [`LeastSquares::fit`].
    pub fn check_values(&self) -> Result<LinearFit> {
        let m = self.moments()?;
        let slope = if m.sxx == 0.0 || m.syy == 0.0 {
            0.0
        } else {
            m.sxy / m.sxx
        };
        Ok(LinearFit {
            slope,
            y_intercept: m.mean_y - slope * m.mean_x,
        })
    }

    /// Sample `points` evenly spaced points of the fitted line over `[min(x), max(x)]`
    pub fn regression_line(&self, points: usize) -> Result<Vec<(f64, f64)>> {
        if points == 0 {
            return Err(AlgorithmError::InvalidConfig(
                "regression line needs at least one point".to_string(),
            ));
        }
        let fit = self.fit()?;
        let low = self.x.iter().copied().fold(f64::INFINITY, f64::min);
        let high = self.x.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(linspace(low, high, points)
            .into_iter()
            .map(|x| (x, fit.predict(x)))
            .collect())
    }
}

impl fmt::Display for LeastSquares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LeastSquares(x={}, y={})",
            format::list(&self.x),
            format::list(&self.y)
        )
    }
}
