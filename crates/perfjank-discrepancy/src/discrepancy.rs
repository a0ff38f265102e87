//! Discrepancy of one-dimensional sample sets.
//!
//! The discrepancy of a point set in `[0, 1]` is the largest difference, over
//! all sub-intervals, between the fraction of points falling inside the
//! interval and the interval's length. Evenly spread points have low
//! discrepancy; clustered points and gaps have high discrepancy. The best
//! possible value for `n` points is `1/n`, reached by `(i + 0.5) / n`.
//!
//! See <https://en.wikipedia.org/wiki/Low-discrepancy_sequence> and
//! <https://mathworld.wolfram.com/Discrepancy.html>.

/// Interval endpoints together with the number of samples below each one.
#[derive(Debug, Default)]
struct LocationSet {
    locations: Vec<f64>,
    /// Number of samples strictly less than each location.
    count_less: Vec<usize>,
    /// Number of samples less than or equal to each location.
    count_less_equal: Vec<usize>,
}

impl LocationSet {
    /// Uses `location_count` equally spaced points spanning `[0, 1]`.
    #[expect(clippy::cast_precision_loss)]
    fn equally_spaced(sorted_samples: &[f64], location_count: usize) -> Self {
        let last = location_count.saturating_sub(1).max(1) as f64;
        let locations = (0..location_count).map(|i| i as f64 / last).collect();
        Self::count(sorted_samples, locations)
    }

    /// Uses the samples themselves, padded with `0.0` and `1.0` when the
    /// samples do not already reach the interval's ends.
    fn from_samples(sorted_samples: &[f64]) -> Self {
        let mut locations = Vec::with_capacity(sorted_samples.len() + 2);
        if sorted_samples.first().is_some_and(|&s| s > 0.0) {
            locations.push(0.0);
        }
        locations.extend_from_slice(sorted_samples);
        if sorted_samples.last().is_some_and(|&s| s < 1.0) {
            locations.push(1.0);
        }
        Self::count(sorted_samples, locations)
    }

    /// Counts samples below every location in a single forward sweep.
    ///
    /// Both `sorted_samples` and `locations` must be ascending.
    fn count(sorted_samples: &[f64], locations: Vec<f64>) -> Self {
        let mut count_less = Vec::with_capacity(locations.len());
        let mut count_less_equal = Vec::with_capacity(locations.len());

        let mut below = 0;
        let mut at_or_below = 0;
        for &location in &locations {
            while below < sorted_samples.len() && sorted_samples[below] < location {
                below += 1;
            }
            at_or_below = usize::max(at_or_below, below);
            while at_or_below < sorted_samples.len() && sorted_samples[at_or_below] <= location {
                at_or_below += 1;
            }
            count_less.push(below);
            count_less_equal.push(at_or_below);
        }

        Self {
            locations,
            count_less,
            count_less_equal,
        }
    }

    /// Largest local discrepancy over every closed and open interval whose
    /// endpoints are a pair of locations.
    #[expect(clippy::cast_precision_loss)]
    fn max_local_discrepancy(&self, sample_count: usize) -> f64 {
        let inv_sample_count = 1.0 / sample_count as f64;
        let mut max_local_discrepancy = 0.0_f64;

        for i in 0..self.locations.len() {
            for j in (i + 1)..self.locations.len() {
                let length = self.locations[j] - self.locations[i];

                let count_closed = self.count_less_equal[j] - self.count_less[i];
                let local_closed = (count_closed as f64 * inv_sample_count - length).abs();

                // Zero-length open intervals (repeated locations) hold nothing
                let count_open = self.count_less[j].saturating_sub(self.count_less_equal[i]);
                let local_open = (count_open as f64 * inv_sample_count - length).abs();

                max_local_discrepancy = max_local_discrepancy.max(local_closed).max(local_open);
            }
        }

        max_local_discrepancy
    }
}

/// Computes the discrepancy of a set of samples from `[0, 1]`.
///
/// `sorted_samples` must be sorted in ascending order, as produced by
/// [`normalize_samples`](crate::normalization::normalize_samples). The
/// discrepancy of an empty set is defined to be `0.0`.
///
/// Intervals are formed between every pair of *locations*. With
/// `location_count = None` the locations are the samples themselves, plus `0.0`
/// and `1.0` when the samples do not already reach the ends. With
/// `Some(count)` they are `count` equally spaced points over `[0, 1]`, which
/// bounds the quadratic pair scan at `count²` regardless of the number of
/// samples, at the cost of precision. Fewer than two locations form no
/// interval, so the result is then `0.0`.
///
/// # Panics
///
/// In debug builds, panics if `sorted_samples` is not sorted ascending. A
/// NaN sample is never considered sorted.
///
/// # Examples
///
/// ```
/// use perfjank_discrepancy::discrepancy::discrepancy;
///
/// // Evenly spread samples reach the lower bound 1/n
/// let even = discrepancy(&[0.1, 0.3, 0.5, 0.7, 0.9], None);
/// assert!((even - 0.2).abs() < 1e-12);
///
/// // A gap between 0.2 and 0.8 is much worse
/// let gap = discrepancy(&[0.1, 0.15, 0.2, 0.8, 0.9], None);
/// assert!(gap > 0.5);
///
/// assert_eq!(discrepancy(&[], None), 0.0);
/// ```
#[must_use]
pub fn discrepancy(sorted_samples: &[f64], location_count: Option<usize>) -> f64 {
    debug_assert!(
        sorted_samples.is_sorted_by(|a, b| a <= b),
        "samples must be sorted in ascending order"
    );

    if sorted_samples.is_empty() {
        return 0.0;
    }

    let location_set = match location_count {
        Some(count) => LocationSet::equally_spaced(sorted_samples, count),
        None => LocationSet::from_samples(sorted_samples),
    };
    location_set.max_local_discrepancy(sorted_samples.len())
}
