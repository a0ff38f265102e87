//! Descriptive reductions over numeric sequences.
//!
//! Every reduction accepts any `IntoIterator<Item = f64>`. To reduce a
//! sequence of records, project each record to a number with
//! [`Iterator::map`] at the call site:
//!
//! ```
//! use perfjank_stats::descriptive;
//!
//! struct Slice {
//!     duration: f64,
//! }
//!
//! let slices = [Slice { duration: 2.0 }, Slice { duration: 4.0 }];
//! let mean = descriptive::mean(slices.iter().map(|s| s.duration));
//! assert_eq!(mean, 3.0);
//! ```
//!
//! # Degenerate input
//!
//! Reductions that are undefined for an empty (or single-element) dataset are
//! not guarded: [`mean`] of nothing is NaN, [`variance`] and [`stddev`] of
//! fewer than two values are NaN, and [`max`]/[`min`] of nothing are `-∞`/`+∞`.
//! Callers that need a different answer must check the length themselves.

use crate::range::ValueRange;

/// Errors reported by descriptive statistics.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// A percentile was requested outside of `[0, 1]`.
    #[display("percent must be in [0, 1], got {percent}")]
    InvalidPercent { percent: f64 },
}

/// Returns `numerator / denominator`, or `0.0` if the denominator is zero.
///
/// # Examples
///
/// ```
/// use perfjank_stats::descriptive::divide_if_possible_or_zero;
///
/// assert_eq!(divide_if_possible_or_zero(5.0, 0.0), 0.0);
/// assert_eq!(divide_if_possible_or_zero(6.0, 3.0), 2.0);
/// ```
#[must_use]
pub fn divide_if_possible_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

/// Sum of all values. The sum of nothing is `0.0`.
#[must_use]
pub fn sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

/// Arithmetic mean. NaN for an empty dataset.
///
/// # Examples
///
/// ```
/// use perfjank_stats::descriptive::mean;
///
/// assert_eq!(mean([1.0, 2.0, 3.0, 4.0]), 2.5);
/// assert!(mean([]).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    sum / count as f64
}

/// Weighted mean over `(weight, value)` pairs.
///
/// Returns `None` if the weights sum to exactly zero, in which case the mean
/// is undefined. This is distinct from a mean of `0.0`.
///
/// # Examples
///
/// ```
/// use perfjank_stats::descriptive::weighted_mean;
///
/// assert_eq!(weighted_mean([(1.0, 10.0), (3.0, 20.0)]), Some(17.5));
/// assert_eq!(weighted_mean([(0.0, 10.0)]), None);
/// ```
#[must_use]
pub fn weighted_mean<I>(pairs: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (numerator, denominator) = pairs
        .into_iter()
        .fold((0.0, 0.0), |(num, den), (weight, value)| {
            (num + weight * value, den + weight)
        });
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// Weighted mean of arbitrary items, with separate weight and value projections.
///
/// See [`weighted_mean`] for the meaning of the result.
///
/// # Examples
///
/// ```
/// use perfjank_stats::descriptive::weighted_mean_by;
///
/// // (duration, frame count)
/// let frames = [(16.0, 3.0), (33.0, 1.0)];
/// let mean = weighted_mean_by(&frames, |f| f.1, |f| f.0).unwrap();
/// assert_eq!(mean, 20.25);
/// ```
#[must_use]
pub fn weighted_mean_by<I, W, V>(items: I, mut weight: W, mut value: V) -> Option<f64>
where
    I: IntoIterator,
    W: FnMut(&I::Item) -> f64,
    V: FnMut(&I::Item) -> f64,
{
    weighted_mean(
        items
            .into_iter()
            .map(|item| (weight(&item), value(&item))),
    )
}

/// Sample variance with Bessel's correction (divisor `n - 1`).
///
/// NaN when fewer than two values are given.
///
/// # Examples
///
/// ```
/// use perfjank_stats::descriptive::variance;
///
/// assert_eq!(variance([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 32.0 / 7.0);
/// assert!(variance([1.0]).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn variance<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let values = values.into_iter().collect::<Vec<_>>();
    if values.is_empty() {
        // no mean to deviate from
        return f64::NAN;
    }
    let mean = mean(values.iter().copied());
    let sum_of_squared_distances = sum(values.iter().map(|v| (v - mean).powi(2)));
    sum_of_squared_distances / (values.len() - 1) as f64
}

/// Sample standard deviation, the square root of [`variance`].
#[must_use]
pub fn stddev<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    variance(values).sqrt()
}

/// Largest value, or `-∞` for an empty dataset.
#[must_use]
pub fn max<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(f64::NEG_INFINITY, f64::max)
}

/// Smallest value, or `+∞` for an empty dataset.
#[must_use]
pub fn min<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(f64::INFINITY, f64::min)
}

/// Accumulates all values into a [`ValueRange`].
#[must_use]
pub fn range<I>(values: I) -> ValueRange
where
    I: IntoIterator<Item = f64>,
{
    ValueRange::from_values(values)
}

/// Nearest-rank percentile of unsorted values.
///
/// `percent` is a fraction in `[0, 1]`. The values are copied and sorted
/// numerically, and the element at index `floor((n - 1) * percent)` is
/// returned. No interpolation is performed. An empty dataset yields NaN.
/// NaN values are ordered by [`f64::total_cmp`]: a positive NaN sorts above
/// every number and a negative NaN below.
///
/// # Errors
///
/// Returns [`StatsError::InvalidPercent`] if `percent` is outside `[0, 1]` or NaN.
///
/// # Examples
///
/// ```
/// use perfjank_stats::descriptive::percentile;
///
/// let values = [5.0, 1.0, 4.0, 2.0, 3.0];
/// assert_eq!(percentile(values, 0.0).unwrap(), 1.0);
/// assert_eq!(percentile(values, 0.5).unwrap(), 3.0);
/// assert_eq!(percentile(values, 1.0).unwrap(), 5.0);
/// assert!(percentile(values, 1.5).is_err());
/// ```
pub fn percentile<I>(values: I, percent: f64) -> Result<f64, StatsError>
where
    I: IntoIterator<Item = f64>,
{
    check_percent(percent)?;
    let mut sorted = values.into_iter().collect::<Vec<_>>();
    sorted.sort_by(f64::total_cmp);
    Ok(nearest_rank(&sorted, percent))
}

/// Like [`percentile`], but for values that are already sorted ascending.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
pub fn percentile_of_sorted(sorted_values: &[f64], percent: f64) -> Result<f64, StatsError> {
    check_percent(percent)?;
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
    Ok(nearest_rank(sorted_values, percent))
}

fn check_percent(percent: f64) -> Result<(), StatsError> {
    if (0.0..=1.0).contains(&percent) {
        Ok(())
    } else {
        Err(StatsError::InvalidPercent { percent })
    }
}

#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
fn nearest_rank(sorted_values: &[f64], percent: f64) -> f64 {
    let Some(last) = sorted_values.len().checked_sub(1) else {
        return f64::NAN;
    };
    let idx = (last as f64 * percent).floor() as usize;
    sorted_values[idx.min(last)]
}

/// Clamps `value` into `[low, high]` as `min(max(value, low), high)`.
///
/// Unlike [`f64::clamp`], this never panics: if `low > high` the result is `high`.
///
/// # Examples
///
/// ```
/// use perfjank_stats::descriptive::clamp;
///
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
/// ```
#[must_use]
pub fn clamp(value: f64, low: f64, high: f64) -> f64 {
    f64::min(f64::max(value, low), high)
}

/// Clamps `value` into the unit interval `[0, 1]`.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_sum_and_mean_of_empty() {
        assert_eq!(sum([]), 0.0);
        assert!(!mean([]).is_finite());
    }

    #[test]
    fn test_sum_with_projection() {
        let pairs = [(1, 2.0), (2, 3.5)];
        assert_eq!(sum(pairs.iter().map(|p| p.1)), 5.5);
    }

    #[test]
    fn test_weighted_mean_zero_weight_is_undefined() {
        assert_eq!(weighted_mean([(0.0, 1.0), (0.0, 100.0)]), None);
        assert_eq!(weighted_mean(std::iter::empty()), None);
        // Zero mean is a valid answer, not the sentinel
        assert_eq!(weighted_mean([(1.0, -1.0), (1.0, 1.0)]), Some(0.0));
    }

    #[test]
    fn test_weighted_mean_by_defaults_to_identity_value() {
        let values = [1.0, 2.0, 3.0];
        let mean = weighted_mean_by(values, |_| 1.0, |v| *v).unwrap();
        assert!((mean - 2.0).abs() < EPS);
    }

    #[test]
    fn test_variance_single_value_is_nan() {
        assert!(variance([3.0]).is_nan());
        assert!(variance([]).is_nan());
        assert!(stddev([]).is_nan());
    }

    #[test]
    fn test_variance_shift_invariant() {
        let values = [1.0, 4.0, 9.0, 16.0, 25.0];
        let shifted = values.map(|v| v + 1000.0);
        assert!((variance(values) - variance(shifted)).abs() < 1e-6);
    }

    #[test]
    fn test_variance_scales_quadratically() {
        let values = [1.0, 4.0, 9.0, 16.0, 25.0];
        let k = 3.0;
        let scaled = values.map(|v| v * k);
        assert!((variance(scaled) - k * k * variance(values)).abs() < 1e-6);
    }

    #[test]
    fn test_stddev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((stddev(values) - (32.0_f64 / 7.0).sqrt()).abs() < EPS);
    }

    #[test]
    fn test_min_max_of_empty_are_infinite() {
        assert_eq!(max([]), f64::NEG_INFINITY);
        assert_eq!(min([]), f64::INFINITY);
        assert_eq!(max([-2.0, 7.0, 3.0]), 7.0);
        assert_eq!(min([-2.0, 7.0, 3.0]), -2.0);
    }

    #[test]
    fn test_range() {
        let range = range([3.0, -1.0, 2.0]);
        assert_eq!(range.min(), Some(-1.0));
        assert_eq!(range.max(), Some(3.0));
        assert!(super::range([]).is_empty());
    }

    #[test]
    fn test_percentile_bounds_match_min_max() {
        let values = [12.0, 3.0, 7.5, -4.0, 100.0, 0.0];
        assert_eq!(percentile(values, 0.0).unwrap(), min(values));
        assert_eq!(percentile(values, 1.0).unwrap(), max(values));
    }

    #[test]
    fn test_percentile_sorts_numerically() {
        // Lexicographic order would put 10 before 9
        let values = [9.0, 10.0, 100.0, 2.0];
        assert_eq!(percentile(values, 0.34).unwrap(), 9.0);
        assert_eq!(percentile(values, 0.67).unwrap(), 10.0);
    }

    #[test]
    fn test_percentile_nearest_rank() {
        let values = [1.0, 2.0, 3.0, 4.0];
        // floor(3 * 0.5) = 1
        assert_eq!(percentile(values, 0.5).unwrap(), 2.0);
        // floor(3 * 0.99) = 2
        assert_eq!(percentile(values, 0.99).unwrap(), 3.0);
    }

    #[test]
    fn test_percentile_rejects_out_of_range() {
        assert_eq!(
            percentile([1.0], -0.1),
            Err(StatsError::InvalidPercent { percent: -0.1 })
        );
        assert!(percentile([1.0], 1.01).is_err());
        assert!(percentile([1.0], f64::NAN).is_err());
        assert!(percentile_of_sorted(&[1.0], 2.0).is_err());
    }

    #[test]
    fn test_percentile_error_message() {
        let err = percentile([1.0], 2.0).unwrap_err();
        assert_eq!(err.to_string(), "percent must be in [0, 1], got 2");
    }

    #[test]
    fn test_percentile_tolerates_nan_values() {
        // Positive NaN sorts after every number, negative NaN before
        let values = [3.0, f64::NAN, 1.0];
        assert_eq!(percentile(values, 0.0).unwrap(), 1.0);
        assert!(percentile(values, 1.0).unwrap().is_nan());

        let values = [3.0, -f64::NAN, 1.0];
        assert!(percentile(values, 0.0).unwrap().is_nan());
        assert_eq!(percentile(values, 1.0).unwrap(), 3.0);
    }

    #[test]
    fn test_percentile_of_empty_is_nan() {
        assert!(percentile([], 0.5).unwrap().is_nan());
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_percentile_of_sorted_rejects_unsorted() {
        let _ = percentile_of_sorted(&[3.0, 1.0], 0.5);
    }

    #[test]
    fn test_clamp_and_divide() {
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp_unit(0.3), 0.3);
        assert_eq!(clamp_unit(f64::NEG_INFINITY), 0.0);
        assert_eq!(divide_if_possible_or_zero(5.0, 0.0), 0.0);
        assert_eq!(divide_if_possible_or_zero(5.0, 2.0), 2.5);
    }
}
