//! Error types shared by the search, statistics and regression engines

use thiserror::Error;

/// Errors that can occur while running an algorithm
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    #[error("The argument \"{argument}\" must be defined for this method.")]
    UndefinedInput { argument: &'static str },

    #[error("Element at index {index} is not comparable: {detail}")]
    Comparison { index: usize, detail: String },

    #[error("Cannot compute {operation} of an empty sample")]
    EmptySample { operation: &'static str },

    #[error("Insufficient data for {operation}: need at least {required} samples, got {actual}")]
    InsufficientData {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("Length mismatch: x has {x} values, y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for algorithm operations
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl AlgorithmError {
    /// Build an `UndefinedInput` error and report it on the diagnostic channel
    pub fn undefined(argument: &'static str) -> Self {
        let err = AlgorithmError::UndefinedInput { argument };
        tracing::error!("{}", err);
        err
    }
}

/// Unwrap an optional input, reporting it as undefined when absent or empty
pub fn require<'a, T>(values: Option<&'a [T]>, argument: &'static str) -> Result<&'a [T]> {
    match values {
        Some(values) if !values.is_empty() => Ok(values),
        _ => Err(AlgorithmError::undefined(argument)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_input_message() {
        let err = AlgorithmError::UndefinedInput { argument: "values" };
        assert_eq!(
            err.to_string(),
            "The argument \"values\" must be defined for this method."
        );
    }

    #[test]
    fn test_insufficient_data_message() {
        let err = AlgorithmError::InsufficientData {
            operation: "quartiles",
            required: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data for quartiles: need at least 2 samples, got 1"
        );
    }

    #[test]
    fn test_require_rejects_missing_and_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(
            require::<i32>(None, "values"),
            Err(AlgorithmError::UndefinedInput { argument: "values" })
        );
        assert_eq!(
            require(Some(&empty[..]), "values"),
            Err(AlgorithmError::UndefinedInput { argument: "values" })
        );
        assert_eq!(require(Some(&[1, 2][..]), "values"), Ok(&[1, 2][..]));
    }
}
