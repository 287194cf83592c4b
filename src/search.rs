//! Binary search over sorted, randomly indexable sequences
//!
//! The engine narrows `low`/`high` bounds around the median index
//! `(low + high) / 2` until the item is found or the bounds cross. Bounds
//! live in a per-call cursor, so a single `BinarySearch` can be searched
//! from several threads at once.
//!
//! The input must already be sorted ascending. This is not validated.

use crate::error::{AlgorithmError, Result};
use crate::format;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

/// Theoretical worst-case number of steps for a sequence of `len` items
///
/// Computes `ceil(log2(len))` with integer arithmetic. An empty sequence
/// has no defined bound and is reported as undefined input.
///
/// # Examples
/// ```
/// use algorithms::search::max_steps;
///
/// assert_eq!(max_steps(8).unwrap(), 3);
/// assert_eq!(max_steps(100).unwrap(), 7);
/// assert!(max_steps(0).is_err());
/// ```
pub fn max_steps(len: usize) -> Result<u32> {
    if len == 0 {
        return Err(AlgorithmError::undefined("values"));
    }
    Ok(usize::BITS - (len - 1).leading_zeros())
}

/// Search state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Bounds still admit candidates
    Searching,
    /// Item located at the given index
    Found(usize),
    /// Bounds crossed without a match
    NotFound,
}

/// Outcome of a single binary search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Index of the item, `None` when it is absent
    pub index: Option<usize>,
    /// Bound-narrowing steps taken before termination
    pub steps: u32,
    /// `ceil(log2(len))`
    pub max_steps: u32,
    /// Element comparisons performed, including the final hit
    pub comparisons: u32,
}

impl SearchResult {
    /// Terminal state this result represents
    pub fn state(&self) -> SearchState {
        match self.index {
            Some(index) => SearchState::Found(index),
            None => SearchState::NotFound,
        }
    }

    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }
}

/// Per-invocation search bounds
#[derive(Debug, Clone, Copy)]
struct Cursor {
    low: usize,
    high: usize,
    steps: u32,
    comparisons: u32,
}

impl Cursor {
    fn new(len: usize) -> Self {
        Self {
            low: 0,
            high: len,
            steps: 0,
            comparisons: 0,
        }
    }

    fn median(&self) -> usize {
        (self.low + self.high) / 2
    }

    /// Probe the median element and narrow the bounds
    fn advance<T: PartialOrd + Debug>(&mut self, values: &[T], item: &T) -> Result<SearchState> {
        if self.low > self.high {
            return Ok(SearchState::NotFound);
        }

        let median = self.median();
        // `high` starts at `len`, so the median can land one past the end
        let Some(candidate) = values.get(median) else {
            return Ok(SearchState::NotFound);
        };

        self.comparisons += 1;
        tracing::trace!(
            low = self.low,
            high = self.high,
            median,
            "probing {:?}",
            candidate
        );

        match candidate.partial_cmp(item) {
            Some(Ordering::Equal) => Ok(SearchState::Found(median)),
            Some(Ordering::Greater) => {
                self.steps += 1;
                match median.checked_sub(1) {
                    Some(high) => {
                        self.high = high;
                        Ok(SearchState::Searching)
                    }
                    None => Ok(SearchState::NotFound),
                }
            }
            Some(Ordering::Less) => {
                self.steps += 1;
                self.low = median + 1;
                Ok(SearchState::Searching)
            }
            None => Err(AlgorithmError::Comparison {
                index: median,
                detail: format!("{:?} cannot be ordered against {:?}", candidate, item),
            }),
        }
    }
}

/// Locate `item` in the sorted slice `values`
///
/// Terminates in `O(log n)` probes whether or not the item is present.
/// An empty slice is reported as undefined input.
///
/// # Examples
/// ```
/// use algorithms::search::binary_search;
///
/// let values: Vec<i32> = (5..50).step_by(5).collect();
/// let result = binary_search(&values, &15).unwrap();
/// assert_eq!(result.index, Some(2));
/// assert_eq!(result.steps, 2);
///
/// let missing = binary_search(&values, &17).unwrap();
/// assert_eq!(missing.index, None);
/// ```
pub fn binary_search<T: PartialOrd + Debug>(values: &[T], item: &T) -> Result<SearchResult> {
    let max_steps = max_steps(values.len())?;
    let mut cursor = Cursor::new(values.len());

    let mut state = SearchState::Searching;
    while state == SearchState::Searching {
        state = cursor.advance(values, item)?;
    }

    tracing::debug!(
        ?state,
        steps = cursor.steps,
        max_steps,
        "binary search finished for {:?}",
        item
    );

    Ok(SearchResult {
        index: match state {
            SearchState::Found(index) => Some(index),
            _ => None,
        },
        steps: cursor.steps,
        max_steps,
        comparisons: cursor.comparisons,
    })
}

/// Binary search request with optional item and values
///
/// Either field may be left unset; operations that need it report
/// undefined input instead of panicking.
#[derive(Debug, Clone)]
pub struct BinarySearch<T> {
    item: Option<T>,
    values: Option<Vec<T>>,
}

impl<T> Default for BinarySearch<T> {
    fn default() -> Self {
        Self {
            item: None,
            values: None,
        }
    }
}

impl<T: PartialOrd + Debug> BinarySearch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item to look for
    pub fn with_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    /// Set the sorted values to search; lazy iterators must be collected first
    pub fn with_values(mut self, values: impl Into<Vec<T>>) -> Self {
        self.values = Some(values.into());
        self
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn values(&self) -> Option<&[T]> {
        self.values.as_deref()
    }

    /// Step bound for the configured values
    pub fn max_steps(&self) -> Result<u32> {
        let values = self.values.as_deref().ok_or_else(|| AlgorithmError::undefined("values"))?;
        max_steps(values.len())
    }

    /// Initial median index and the value stored there
    pub fn median(&self) -> Result<(usize, &T)> {
        let values = crate::error::require(self.values(), "values")?;
        let index = Cursor::new(values.len()).median();
        // the initial median of a non-empty slice is always in range
        let value = values.get(index).ok_or_else(|| AlgorithmError::undefined("values"))?;
        Ok((index, value))
    }

    /// Run the search
    pub fn search(&self) -> Result<SearchResult> {
        let values = crate::error::require(self.values(), "values")?;
        let item = self.item.as_ref().ok_or_else(|| AlgorithmError::undefined("item"))?;
        binary_search(values, item)
    }
}

impl<T: Display> Display for BinarySearch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinarySearch(item=")?;
        format::write_optional(f, self.item.as_ref())?;
        write!(f, ", values=")?;
        format::write_optional_list(f, self.values.as_deref())?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_steps() {
        assert_eq!(max_steps(1).unwrap(), 0);
        assert_eq!(max_steps(2).unwrap(), 1);
        assert_eq!(max_steps(8).unwrap(), 3);
        assert_eq!(max_steps(9).unwrap(), 4);
        assert_eq!(max_steps(100).unwrap(), 7);
    }

    #[test]
    fn test_max_steps_empty_is_undefined() {
        assert_eq!(
            max_steps(0),
            Err(AlgorithmError::UndefinedInput { argument: "values" })
        );
    }

    #[test]
    fn test_max_steps_for_chars() {
        let search = BinarySearch::new().with_values("abcdefge".chars().collect::<Vec<_>>());
        assert_eq!(search.max_steps().unwrap(), 3);
    }

    #[test]
    fn test_max_steps_without_values() {
        let search: BinarySearch<i32> = BinarySearch::new();
        assert!(search.max_steps().is_err());
    }

    #[test]
    fn test_find_incremental() {
        let values: Vec<i32> = (0..10).collect();
        let result = binary_search(&values, &4).unwrap();
        assert_eq!(result.index, Some(4));
        assert_eq!(result.steps, 3);
        assert_eq!(result.comparisons, 4);
        assert_eq!(result.max_steps, 4);
    }

    #[test]
    fn test_find_step_count() {
        let values: Vec<i32> = (5..50).step_by(5).collect();
        let result = binary_search(&values, &15).unwrap();
        assert_eq!(result.index, Some(2));
        assert_eq!(result.steps, 2);
        assert_eq!(result.comparisons, 3);
        assert_eq!(result.state(), SearchState::Found(2));
    }

    #[test]
    fn test_find_char() {
        let values: Vec<char> = "abcdefg".chars().collect();
        let result = binary_search(&values, &'c').unwrap();
        assert_eq!(result.index, Some(2));
    }

    #[test]
    fn test_find_str() {
        let values = ["apple", "banana", "cherry", "date"];
        let result = binary_search(&values, &"date").unwrap();
        assert_eq!(result.index, Some(3));
    }

    #[test]
    fn test_find_float() {
        let values = [1.1, 2.2, 3.3];
        assert_eq!(binary_search(&values, &3.3).unwrap().index, Some(2));
    }

    #[test]
    fn test_single_element() {
        let result = binary_search(&[42], &42).unwrap();
        assert_eq!(result.index, Some(0));
        assert_eq!(result.steps, 0);
        assert_eq!(result.max_steps, 0);
    }

    #[test]
    fn test_not_found_terminates() {
        let values = [1, 3, 5, 7, 9];
        for item in [0, 2, 4, 6, 8, 10] {
            let result = binary_search(&values, &item).unwrap();
            assert_eq!(result.index, None, "item {}", item);
            assert_eq!(result.state(), SearchState::NotFound);
        }
    }

    #[test]
    fn test_not_found_past_end() {
        // median lands on index len once low reaches the end
        let result = binary_search(&[1, 2, 3], &4).unwrap();
        assert!(!result.is_found());
    }

    #[test]
    fn test_empty_values_is_undefined() {
        let empty: [i32; 0] = [];
        assert!(matches!(
            binary_search(&empty, &1),
            Err(AlgorithmError::UndefinedInput { argument: "values" })
        ));
    }

    #[test]
    fn test_nan_is_comparison_error() {
        let values = [1.0, f64::NAN, 3.0];
        assert!(matches!(
            binary_search(&values, &2.0),
            Err(AlgorithmError::Comparison { index: 1, .. })
        ));
    }

    #[test]
    fn test_builder_search() {
        let search = BinarySearch::new().with_item(4).with_values((0..10).collect::<Vec<_>>());
        assert_eq!(search.search().unwrap().index, Some(4));
    }

    #[test]
    fn test_builder_missing_values() {
        let search = BinarySearch::new().with_item(4);
        assert_eq!(
            search.search(),
            Err(AlgorithmError::UndefinedInput { argument: "values" })
        );
    }

    #[test]
    fn test_builder_missing_item() {
        let search = BinarySearch::new().with_values(vec![1, 2, 3]);
        assert_eq!(
            search.search(),
            Err(AlgorithmError::UndefinedInput { argument: "item" })
        );
    }

    #[test]
    fn test_median_even_and_odd() {
        let even = BinarySearch::<i32>::new().with_values((0..10).collect::<Vec<_>>());
        assert_eq!(even.median().unwrap(), (5, &5));

        let odd = BinarySearch::<i32>::new().with_values((0..11).collect::<Vec<_>>());
        assert_eq!(odd.median().unwrap(), (5, &5));
    }

    #[test]
    fn test_median_without_values() {
        let search: BinarySearch<i32> = BinarySearch::new();
        assert!(search.median().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            BinarySearch::<i32>::new().to_string(),
            "BinarySearch(item=None, values=None)"
        );
        assert_eq!(
            BinarySearch::new().with_item(5).with_values(vec![1, 2, 3, 4, 5]).to_string(),
            "BinarySearch(item=5, values=[1, 2, 3, 4, 5])"
        );
        assert_eq!(
            BinarySearch::new()
                .with_item(3.3)
                .with_values(vec![1.1, 2.2, 3.3])
                .to_string(),
            "BinarySearch(item=3.3, values=[1.1, 2.2, 3.3])"
        );
    }
}
