//! Discrepancy-based jank metrics for timestamp and duration series.
//!
//! These metrics quantify the largest area of jank observed in a series.
//! They differ from metrics based on the longest interval: the series
//! `A = [0, 1, 2, 3, 5, 6]` and `B = [0, 1, 2, 3, 5, 7]` share the same
//! longest interval of 2, but `B` scores higher than `A`.
//!
//! # Absolute and relative jank
//!
//! - **Relative** jank follows the classical definition of discrepancy: the
//!   largest area of jank relative to the duration of the whole series. The
//!   best case for `n` samples is `1/n`, so raw values are rescaled to report
//!   `0.0` for perfectly even spacing. The result lies in `[0, 1]`.
//! - **Absolute** jank also measures the largest area of jank, but in the
//!   units of the input. Appending further well-spaced timestamps leaves it
//!   (almost) unchanged. Its range is `[0, ∞)`.
//!
//! The series `C = [0, 2, 3, 4]` and `D = [0, 2, 3, 4, 5]` have the same
//! absolute jank, but `D` has lower relative jank than `C`.

use perfjank_stats::descriptive;
use serde::{Deserialize, Serialize};

use crate::{discrepancy::discrepancy, normalization::normalize_samples};

/// Options controlling how a jank score is computed.
///
/// Missing fields deserialize to their defaults.
///
/// # Examples
///
/// ```
/// use perfjank_discrepancy::jank::JankOptions;
///
/// let options = JankOptions::default();
/// assert!(options.absolute);
/// assert_eq!(options.location_count, None);
///
/// let options = JankOptions::relative().with_location_count(100);
/// assert!(!options.absolute);
/// assert_eq!(options.location_count, Some(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JankOptions {
    /// Report absolute jank (input units) instead of relative jank (`[0, 1]`).
    pub absolute: bool,
    /// Evaluate intervals on this many equally spaced locations instead of on
    /// the samples themselves. Bounds the quadratic cost for long series.
    pub location_count: Option<usize>,
}

impl Default for JankOptions {
    fn default() -> Self {
        Self::absolute()
    }
}

impl JankOptions {
    /// Absolute jank, evaluated on the samples themselves.
    #[must_use]
    pub const fn absolute() -> Self {
        Self {
            absolute: true,
            location_count: None,
        }
    }

    /// Relative jank, evaluated on the samples themselves.
    #[must_use]
    pub const fn relative() -> Self {
        Self {
            absolute: false,
            location_count: None,
        }
    }

    /// Evaluates intervals on `location_count` equally spaced locations.
    #[must_use]
    pub const fn with_location_count(self, location_count: usize) -> Self {
        Self {
            location_count: Some(location_count),
            ..self
        }
    }
}

/// Jank score of a series of timestamps.
///
/// The timestamps need not be sorted. An empty series scores `0.0`.
///
/// # Panics
///
/// In debug builds, panics if any timestamp is NaN. Timestamps must be real
/// numbers; with a NaN present the release-build score is meaningless.
///
/// # Examples
///
/// ```
/// use perfjank_discrepancy::jank::{JankOptions, timestamps_discrepancy};
///
/// let even = timestamps_discrepancy(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], JankOptions::relative());
/// let janky = timestamps_discrepancy(&[0.0, 1.0, 2.0, 3.0, 5.0, 6.0], JankOptions::relative());
/// assert!(even.abs() < 1e-9);
/// assert!(janky > even);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn timestamps_discrepancy(timestamps: &[f64], options: JankOptions) -> f64 {
    if timestamps.is_empty() {
        return 0.0;
    }

    let normalized = normalize_samples(timestamps);
    let d = discrepancy(&normalized.samples, options.location_count);

    if options.absolute {
        d / normalized.scale
    } else {
        let inv_sample_count = 1.0 / normalized.samples.len() as f64;
        descriptive::clamp_unit((d - inv_sample_count) / (1.0 - inv_sample_count))
    }
}

/// Jank score of several parallel timestamp series: the worst score among them.
///
/// With no series at all the score is `0.0`. Every series is scored with
/// the caller's `options`, both `absolute` and `location_count`, rather
/// than with [`JankOptions::default`]. A relative multi-series score is
/// therefore the worst relative score among the series.
///
/// # Panics
///
/// In debug builds, panics if any timestamp of any series is NaN.
///
/// # Examples
///
/// ```
/// use perfjank_discrepancy::jank::{
///     JankOptions, multi_timestamps_discrepancy, timestamps_discrepancy,
/// };
///
/// let smooth = vec![0.0, 10.0, 20.0, 30.0];
/// let janky = vec![0.0, 10.0, 40.0, 50.0];
/// let options = JankOptions::default();
///
/// let worst = multi_timestamps_discrepancy([&smooth, &janky], options);
/// assert_eq!(worst, timestamps_discrepancy(&janky, options));
/// ```
#[must_use]
pub fn multi_timestamps_discrepancy<I, S>(series: I, options: JankOptions) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<[f64]>,
{
    series
        .into_iter()
        .map(|timestamps| timestamps_discrepancy(timestamps.as_ref(), options))
        .fold(0.0, f64::max)
}

/// Jank score of a series of interval durations.
///
/// The durations are turned into monotonically increasing timestamps
/// (`0, d0, d0 + d1, ...`) and scored with [`timestamps_discrepancy`]. In
/// order to minimize jank, each duration should be equally long. An empty
/// series scores `0.0`.
///
/// # Panics
///
/// In debug builds, panics if any duration is NaN.
///
/// # Examples
///
/// ```
/// use perfjank_discrepancy::jank::{JankOptions, durations_discrepancy, timestamps_discrepancy};
///
/// let options = JankOptions::default();
/// assert_eq!(
///     durations_discrepancy(&[1.0, 1.0, 1.0, 1.0], options),
///     timestamps_discrepancy(&[0.0, 1.0, 2.0, 3.0, 4.0], options),
/// );
/// ```
#[must_use]
pub fn durations_discrepancy(durations: &[f64], options: JankOptions) -> f64 {
    if durations.is_empty() {
        return 0.0;
    }

    let timestamps = cumulative_timestamps(durations);
    timestamps_discrepancy(&timestamps, options)
}

fn cumulative_timestamps(durations: &[f64]) -> Vec<f64> {
    let mut timestamps = Vec::with_capacity(durations.len() + 1);
    timestamps.push(0.0);
    let mut now = 0.0;
    for duration in durations {
        now += duration;
        timestamps.push(now);
    }
    timestamps
}
