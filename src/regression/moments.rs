// Centered sums for paired samples
//
// Both the correlation-based fit and the closed-form check are built from
// the same handful of sums, so they are computed once here.

use crate::error::{AlgorithmError, Result};

/// First and second moments of paired `(x, y)` samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    /// Number of pairs
    pub n: usize,
    pub mean_x: f64,
    pub mean_y: f64,
    /// Σ(x - x̄)²
    pub sxx: f64,
    /// Σ(y - ȳ)²
    pub syy: f64,
    /// Σ(x - x̄)(y - ȳ)
    pub sxy: f64,
}

impl Moments {
    /// Compute moments, rejecting empty or mismatched axes
    pub fn from_pairs(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(AlgorithmError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        let mean_x = crate::stats::mean(x).map_err(|_| AlgorithmError::EmptySample {
            operation: "least squares",
        })?;
        let mean_y = crate::stats::mean(y).map_err(|_| AlgorithmError::EmptySample {
            operation: "least squares",
        })?;

        let (sxx, syy, sxy) = x.iter().zip(y).fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), (xi, yi)| {
            let dx = xi - mean_x;
            let dy = yi - mean_y;
            (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
        });

        Ok(Self {
            n: x.len(),
            mean_x,
            mean_y,
            sxx,
            syy,
            sxy,
        })
    }

    /// Population standard deviation of x
    pub fn sigma_x(&self) -> f64 {
        (self.sxx / self.n as f64).sqrt()
    }

    /// Population standard deviation of y
    pub fn sigma_y(&self) -> f64 {
        (self.syy / self.n as f64).sqrt()
    }

    /// Pearson correlation coefficient, `None` when either axis is constant
    pub fn pearson_r(&self) -> Option<f64> {
        let denominator = (self.sxx * self.syy).sqrt();
        if denominator == 0.0 {
            None
        } else {
            Some(self.sxy / denominator)
        }
    }
}
