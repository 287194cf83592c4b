//! Descriptive statistics: mean, median with half splits, and quartiles
//!
//! Every function takes the sample by reference and sorts a private copy,
//! so callers' data is never reordered. Quartiles are computed by taking
//! the median of each half of the sample rather than by interpolation.

use crate::error::{AlgorithmError, Result};
use crate::format;
use std::fmt;

/// Median of a sample together with the halves on either side of it
#[derive(Debug, Clone, PartialEq)]
pub struct MedianSplit {
    pub median: f64,
    /// Sorted values below the median (bottom 50%)
    pub lower: Vec<f64>,
    /// Sorted values above the median (top 50%)
    pub upper: Vec<f64>,
}

/// Quartiles of a sample and the spread between the outer two
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// 25%: median of the lower half
    pub q1: f64,
    /// 50%: median of the full sample
    pub q2: f64,
    /// 75%: median of the upper half
    pub q3: f64,
    /// `q3 - q1`
    pub inter_quartile_range: f64,
}

/// NaN has no place in an ordering, so reject it before sorting
fn ensure_comparable(sample: &[f64]) -> Result<()> {
    match sample.iter().position(|x| x.is_nan()) {
        Some(index) => Err(AlgorithmError::Comparison {
            index,
            detail: "NaN cannot be ordered".to_string(),
        }),
        None => Ok(()),
    }
}

/// Arithmetic mean: `sum / count`
///
/// # Examples
/// ```
/// use algorithms::stats::mean;
///
/// assert_eq!(mean(&[2.0, 0.0, 1.0]).unwrap(), 1.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(AlgorithmError::EmptySample { operation: "mean" });
    }
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Median of `sample`, plus the lower and upper halves
///
/// Even lengths average the two central values and split into two halves
/// of `len / 2`. Odd lengths take the central value and exclude it from
/// both halves. A single value is its own median with empty halves.
///
/// # Examples
/// ```
/// use algorithms::stats::median;
///
/// let split = median(&[2.0, 0.0, 1.0, 4.0, 3.0]).unwrap();
/// assert_eq!(split.median, 2.0);
/// assert_eq!(split.lower, vec![0.0, 1.0]);
/// assert_eq!(split.upper, vec![3.0, 4.0]);
/// ```
pub fn median(sample: &[f64]) -> Result<MedianSplit> {
    if sample.is_empty() {
        return Err(AlgorithmError::EmptySample {
            operation: "median",
        });
    }
    ensure_comparable(sample)?;

    if let [only] = sample {
        return Ok(MedianSplit {
            median: *only,
            lower: Vec::new(),
            upper: Vec::new(),
        });
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    tracing::trace!(?sorted, "sorted sample for median");

    let length = sorted.len();
    let middle = length / 2;
    let split = if length % 2 == 0 {
        MedianSplit {
            median: (sorted[middle - 1] + sorted[middle]) / 2.0,
            lower: sorted[..middle].to_vec(),
            upper: sorted[middle..].to_vec(),
        }
    } else {
        MedianSplit {
            median: sorted[middle],
            lower: sorted[..middle].to_vec(),
            upper: sorted[middle + 1..].to_vec(),
        }
    };

    Ok(split)
}

/// Quartiles by recursive median
///
/// `q2` is the median of the sample, `q1` and `q3` the medians of its
/// lower and upper halves. An empty sample is rejected as such; a single
/// value is too few to give both halves a median.
///
/// # Examples
/// ```
/// use algorithms::stats::quartiles;
///
/// let data: Vec<f64> = (0..7).map(f64::from).collect();
/// let q = quartiles(&data).unwrap();
/// assert_eq!((q.q1, q.q2, q.q3), (1.0, 3.0, 5.0));
/// assert_eq!(q.inter_quartile_range, 4.0);
/// ```
pub fn quartiles(sample: &[f64]) -> Result<Quartiles> {
    if sample.is_empty() {
        return Err(AlgorithmError::EmptySample {
            operation: "quartiles",
        });
    }
    if sample.len() < 2 {
        ensure_comparable(sample)?;
        return Err(AlgorithmError::InsufficientData {
            operation: "quartiles",
            required: 2,
            actual: sample.len(),
        });
    }

    let MedianSplit {
        median: q2,
        lower,
        upper,
    } = median(sample)?;
    let q1 = median(&lower)?.median;
    let q3 = median(&upper)?.median;

    Ok(Quartiles {
        q1,
        q2,
        q3,
        inter_quartile_range: q3 - q1,
    })
}

/// Full descriptive summary of a sample
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: MedianSplit,
    /// `None` when the sample is too small to split into quartiles
    pub quartiles: Option<Quartiles>,
}

/// General statistical properties of an optional data set
///
/// Unset data is undefined input. Data that is set but empty reaches the
/// free functions and is reported as an empty sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct General {
    data: Option<Vec<f64>>,
}

impl General {
    pub fn new(data: Option<Vec<f64>>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> Option<&[f64]> {
        self.data.as_deref()
    }

    fn defined_data(&self) -> Result<&[f64]> {
        self.data().ok_or_else(|| AlgorithmError::undefined("data"))
    }

    pub fn mean(&self) -> Result<f64> {
        mean(self.defined_data()?)
    }

    pub fn median(&self) -> Result<MedianSplit> {
        median(self.defined_data()?)
    }

    pub fn quartiles(&self) -> Result<Quartiles> {
        quartiles(self.defined_data()?)
    }

    /// Compute every statistic at once
    pub fn describe(&self) -> Result<Summary> {
        let data = self.defined_data()?;
        let quartiles = match quartiles(data) {
            Ok(q) => Some(q),
            Err(AlgorithmError::InsufficientData { .. }) => None,
            Err(e) => return Err(e),
        };

        Ok(Summary {
            count: data.len(),
            mean: mean(data)?,
            median: median(data)?,
            quartiles,
        })
    }
}

impl From<Vec<f64>> for General {
    fn from(data: Vec<f64>) -> Self {
        Self::new(Some(data))
    }
}

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "General(data=")?;
        format::write_optional_list(f, self.data())?;
        write!(f, ")")
    }
}
