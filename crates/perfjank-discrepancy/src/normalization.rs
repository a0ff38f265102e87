use serde::{Deserialize, Serialize};

/// A sample set mapped onto the unit interval.
///
/// Produced by [`normalize_samples`]. `samples` is sorted ascending and lies
/// strictly inside `(0, 1)`; `scale` is the factor the input values were
/// multiplied by, so a length `d` in normalized space corresponds to
/// `d / scale` in the input units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSamples {
    /// Normalized samples, sorted ascending.
    pub samples: Vec<f64>,
    /// Scale factor applied to the input values. Always positive.
    pub scale: f64,
}

/// Sorts a copy of `samples` and maps it linearly onto `[0.5/n, (n-0.5)/n]`.
///
/// For `n` samples the smallest lands on `0.5/n` and the largest on
/// `(n-0.5)/n`. The evenly spaced set `i/(n-1)` has twice the discrepancy of
/// the set `(i+0.5)/n`; since trace samples come from an unbounded domain, the
/// two should not be distinguished, so the extremes are kept off the
/// interval's endpoints.
///
/// If every sample is equal, each one is mapped to `0.5` and the scale is
/// `1.0`. An empty input yields an empty set with scale `1.0`. The input is
/// never modified.
///
/// # Examples
///
/// ```
/// use perfjank_discrepancy::normalization::normalize_samples;
///
/// let normalized = normalize_samples(&[10.0, 0.0, 5.0]);
/// assert_eq!(normalized.samples[0], 0.5 / 3.0);
/// assert!((normalized.samples[1] - 0.5).abs() < 1e-12);
/// assert!((normalized.samples[2] - 2.5 / 3.0).abs() < 1e-12);
///
/// let constant = normalize_samples(&[5.0, 5.0, 5.0]);
/// assert_eq!(constant.samples, [0.5, 0.5, 0.5]);
/// assert_eq!(constant.scale, 1.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn normalize_samples(samples: &[f64]) -> NormalizedSamples {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let (Some(&low), Some(&high)) = (sorted.first(), sorted.last()) else {
        return NormalizedSamples {
            samples: sorted,
            scale: 1.0,
        };
    };

    if high - low == 0.0 {
        tracing::trace!(
            count = sorted.len(),
            value = low,
            "constant sample set, collapsing to 0.5"
        );
        sorted.fill(0.5);
        return NormalizedSamples {
            samples: sorted,
            scale: 1.0,
        };
    }

    let n = sorted.len() as f64;
    let new_low = 0.5 / n;
    let new_high = (n - 0.5) / n;
    let scale = (new_high - new_low) / (high - low);
    for sample in &mut sorted {
        *sample = (*sample - low) * scale + new_low;
    }

    NormalizedSamples {
        samples: sorted,
        scale,
    }
}
