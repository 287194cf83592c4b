// Least-squares linear regression
//
// Fits y = slope * x + y_intercept to paired samples. The slope comes from
// the Pearson correlation scaled by the ratio of standard deviations:
//
//   slope = r * sigma_y / sigma_x
//
// with population standard deviations. A closed-form covariance estimate
// (check_values) is kept alongside as an independent cross-check.
//
// Drawing the fitted line is left to the caller; regression_line() only
// samples the points a plotter would need.

mod least_squares;
mod moments;

pub use least_squares::{LeastSquares, LinearFit};
pub use moments::Moments;

#[cfg(test)]
mod tests;
