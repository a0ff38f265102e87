use serde::{Deserialize, Serialize};

use crate::descriptive;

/// Descriptive statistics summarizing a series in a single record.
///
/// Bundles the reductions from [`descriptive`] so that a series of trace
/// values (frame durations, counter samples, ...) can be reported at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of values in the dataset.
    pub count: usize,
    /// Sum of all values.
    pub sum: f64,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean of the dataset.
    pub mean: f64,
    /// The nearest-rank median (50th percentile).
    pub median: f64,
    /// The sample variance (divisor `n - 1`). NaN for a single value.
    pub variance: f64,
    /// The sample standard deviation. NaN for a single value.
    pub std_dev: f64,
}

impl Summary {
    /// Computes a summary from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Some(Summary)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use perfjank_stats::summary::Summary;
    ///
    /// let summary = Summary::new([16.0, 17.0, 16.0, 50.0, 16.0]).unwrap();
    /// assert_eq!(summary.count, 5);
    /// assert_eq!(summary.min, 16.0);
    /// assert_eq!(summary.max, 50.0);
    /// assert_eq!(summary.median, 16.0);
    /// assert_eq!(summary.mean, 23.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::compute(&values)
    }

    /// Computes a summary from values already sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        Self::compute(sorted_values)
    }

    fn compute(sorted_values: &[f64]) -> Option<Self> {
        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let values = || sorted_values.iter().copied();
        let median = sorted_values[(sorted_values.len() - 1) / 2];
        let variance = descriptive::variance(values());

        Some(Self {
            count: sorted_values.len(),
            sum: descriptive::sum(values()),
            min,
            max,
            mean: descriptive::mean(values()),
            median,
            variance,
            std_dev: variance.sqrt(),
        })
    }

    /// Returns `max - min`.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}
