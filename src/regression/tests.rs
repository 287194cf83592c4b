// Scenario tests for least-squares regression
//
// Each case fits a small data set with a known line and checks both the
// correlation-based fit and the closed-form cross-check.

use super::*;
use crate::error::AlgorithmError;

const TOLERANCE: f64 = 1e-12;

fn arange(n: i32) -> Vec<f64> {
    (0..n).map(f64::from).collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Constant y has no slope
#[test]
fn test_slope_zero() {
    let ls = LeastSquares::new(arange(3), vec![1.0; 3]);
    assert_eq!(ls.slope().unwrap(), 0.0);
}

/// y = 2x + 2
#[test]
fn test_slope_positive() {
    let ls = LeastSquares::new(arange(3), vec![2.0, 4.0, 6.0]);
    assert_close(ls.slope().unwrap(), 2.0);
    assert_close(ls.y_intercept().unwrap(), 2.0);
}

/// y = -2x - 2
#[test]
fn test_slope_negative() {
    let ls = LeastSquares::new(arange(3), vec![-2.0, -4.0, -6.0]);
    assert_close(ls.slope().unwrap(), -2.0);
    assert_close(ls.y_intercept().unwrap(), -2.0);
}

/// y = x passes through the origin
#[test]
fn test_y_intercept_zero() {
    let ls = LeastSquares::new(arange(3), arange(3));
    assert_close(ls.y_intercept().unwrap(), 0.0);
}

/// Constant x is degenerate; the fit collapses to the mean of y
#[test]
fn test_constant_x() {
    let ls = LeastSquares::new(vec![3.0; 4], vec![1.0, 2.0, 3.0, 4.0]);
    let fit = ls.fit().unwrap();
    assert_eq!(fit.slope, 0.0);
    assert_close(fit.y_intercept, 2.5);
}

/// Noisy data: both estimators agree
#[test]
fn test_check_values_agrees_with_fit() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = vec![1.3, 2.1, 3.4, 3.9, 5.2, 5.8];
    let ls = LeastSquares::new(x, y);

    let fit = ls.fit().unwrap();
    let check = ls.check_values().unwrap();
    assert!((fit.slope - check.slope).abs() < 1e-9);
    assert!((fit.y_intercept - check.y_intercept).abs() < 1e-9);
}

#[test]
fn test_display() {
    let ls = LeastSquares::new(arange(6), (10..16).map(f64::from).collect());
    assert_eq!(
        ls.to_string(),
        "LeastSquares(x=[0, 1, 2, 3, 4, 5], y=[10, 11, 12, 13, 14, 15])"
    );
}

#[test]
fn test_fit_label() {
    let fit = LinearFit {
        slope: 2.0,
        y_intercept: -0.5,
    };
    assert_eq!(fit.to_string(), "Y = 2.00X + -0.50");
    assert_eq!(fit.predict(1.0), 1.5);
}

#[test]
fn test_regression_line_spans_x() {
    let ls = LeastSquares::new(arange(5), arange(5));
    let line = ls.regression_line(100).unwrap();
    assert_eq!(line.len(), 100);
    assert_close(line[0].0, 0.0);
    assert_close(line[99].0, 4.0);
    for (x, y) in line {
        assert_close(x, y);
    }
}

#[test]
fn test_regression_line_zero_points() {
    let ls = LeastSquares::new(arange(5), arange(5));
    assert!(matches!(
        ls.regression_line(0),
        Err(AlgorithmError::InvalidConfig(_))
    ));
}

#[test]
fn test_length_mismatch() {
    let ls = LeastSquares::new(arange(3), arange(4));
    assert_eq!(
        ls.fit(),
        Err(AlgorithmError::LengthMismatch { x: 3, y: 4 })
    );
}

#[test]
fn test_empty_axes() {
    let ls = LeastSquares::new(Vec::new(), Vec::new());
    assert!(matches!(ls.fit(), Err(AlgorithmError::EmptySample { .. })));
}
