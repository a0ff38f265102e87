//! Uniform sampling from arbitrarily long streams.
//!
//! A *reservoir* is a caller-owned `Vec<T>` holding at most `num_samples`
//! elements of a stream. The caller also tracks the stream length, the number
//! of elements seen so far. After `stream_length` elements have gone through
//! [`uniformly_sample_stream`], every one of them has the same probability
//! `min(1, num_samples / stream_length)` of being in the reservoir. The order
//! of the samples is not preserved.
//!
//! [`merge_sampled_streams`] combines two reservoirs sampled independently
//! from two streams into a reservoir that is uniform over both streams.
//!
//! # Example
//!
//! ```
//! use perfjank_sampling::reservoir::uniformly_sample_stream;
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg32;
//!
//! let mut rng = Pcg32::seed_from_u64(42);
//! let mut reservoir = vec![];
//! for (i, event) in (0..1000).enumerate() {
//!     uniformly_sample_stream(&mut reservoir, i + 1, event, 10, &mut rng);
//! }
//! assert_eq!(reservoir.len(), 10);
//! ```

use rand::Rng;

/// Offers the newest element of a stream to a reservoir (Algorithm R).
///
/// Call this once for every element obtained from the stream, always with the
/// same `reservoir` and `num_samples`. `stream_length` is the 1-based index of
/// `new_element` within the stream, i.e. the stream length including it.
///
/// - While `stream_length <= num_samples`, the element is always kept: it is
///   written to slot `stream_length - 1`, appending when the reservoir is not
///   that long yet.
/// - Afterwards it is kept with probability `num_samples / stream_length`, in
///   which case it replaces a uniformly chosen slot.
///
/// With `num_samples == 0` nothing is ever kept.
///
/// # Panics
///
/// Panics if `stream_length` is zero, or if the stream has outgrown
/// `num_samples` while the reservoir holds fewer than `num_samples` elements.
#[expect(clippy::cast_precision_loss)]
pub fn uniformly_sample_stream<T, R>(
    reservoir: &mut Vec<T>,
    stream_length: usize,
    new_element: T,
    num_samples: usize,
    rng: &mut R,
) where
    R: Rng + ?Sized,
{
    assert!(stream_length > 0, "stream_length is 1-based and must be positive");

    if stream_length <= num_samples {
        if let Some(slot) = reservoir.get_mut(stream_length - 1) {
            *slot = new_element;
        } else {
            reservoir.push(new_element);
        }
        return;
    }

    let prob_to_keep = num_samples as f64 / stream_length as f64;
    if num_samples == 0 || rng.random::<f64>() > prob_to_keep {
        return;
    }

    assert!(
        reservoir.len() >= num_samples,
        "reservoir holds {} elements but the stream has outgrown {num_samples} samples",
        reservoir.len()
    );
    let index = rng.random_range(0..num_samples);
    reservoir[index] = new_element;
}

/// Merges reservoir `b` into reservoir `a` so that `a` becomes a uniform sample
/// of both streams.
///
/// `reservoir_a` was sampled from a stream of `stream_length_a` elements and
/// `reservoir_b` from a stream of `stream_length_b` elements, both with the
/// same `num_samples`. Afterwards, `reservoir_a` samples the concatenated
/// stream, and every element of either stream has the same probability of
/// being in it. `reservoir_b` is left untouched.
///
/// - If stream B never filled its reservoir, every element of B was kept with
///   certainty, so they are offered to A one by one as if A's stream had
///   continued.
/// - Symmetrically, if stream A never filled its reservoir, A's elements are
///   offered to a copy of B, which then replaces A's contents.
/// - Otherwise both reservoirs are full. Each slot `i` independently takes
///   `b[i]` with probability `P = len_b / (len_a + len_b)` and keeps `a[i]`
///   otherwise. An element of A was sampled with probability
///   `num_samples / len_a` and survives with probability `1 - P`, so it ends up
///   in the result with probability `num_samples / (len_a + len_b)`. The same
///   holds for elements of B.
///
/// # Example
///
/// ```
/// use perfjank_sampling::reservoir::{merge_sampled_streams, uniformly_sample_stream};
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
///
/// let mut rng = Pcg32::seed_from_u64(7);
/// let (mut a, mut b) = (vec![], vec![]);
/// for i in 0..100 {
///     uniformly_sample_stream(&mut a, i + 1, i, 8, &mut rng);
///     uniformly_sample_stream(&mut b, i + 1, 100 + i, 8, &mut rng);
/// }
///
/// merge_sampled_streams(&mut a, 100, &b, 100, 8, &mut rng);
/// assert_eq!(a.len(), 8);
/// ```
///
/// # Panics
///
/// Panics under the same conditions as [`uniformly_sample_stream`].
#[expect(clippy::cast_precision_loss)]
pub fn merge_sampled_streams<T, R>(
    reservoir_a: &mut Vec<T>,
    stream_length_a: usize,
    reservoir_b: &[T],
    stream_length_b: usize,
    num_samples: usize,
    rng: &mut R,
) where
    T: Clone,
    R: Rng + ?Sized,
{
    if stream_length_b < num_samples {
        tracing::trace!(
            stream_length_a,
            stream_length_b,
            num_samples,
            "replaying unfilled reservoir B into A"
        );
        let count = usize::min(stream_length_b, reservoir_b.len());
        for (i, element) in reservoir_b[..count].iter().enumerate() {
            uniformly_sample_stream(
                reservoir_a,
                stream_length_a + i + 1,
                element.clone(),
                num_samples,
                rng,
            );
        }
        return;
    }

    if stream_length_a < num_samples {
        tracing::trace!(
            stream_length_a,
            stream_length_b,
            num_samples,
            "replaying unfilled reservoir A into a copy of B"
        );
        let count = usize::min(stream_length_a, reservoir_a.len());
        let mut merged = reservoir_b.to_vec();
        for (i, element) in reservoir_a[..count].iter().enumerate() {
            uniformly_sample_stream(
                &mut merged,
                stream_length_b + i + 1,
                element.clone(),
                num_samples,
                rng,
            );
        }
        // Overwrite A's leading slots, keeping anything beyond the merged length
        let tail = reservoir_a.split_off(usize::min(merged.len(), reservoir_a.len()));
        *reservoir_a = merged;
        reservoir_a.extend(tail);
        return;
    }

    tracing::trace!(
        stream_length_a,
        stream_length_b,
        num_samples,
        "swapping slots between full reservoirs"
    );
    let prob_of_swapping = stream_length_b as f64 / (stream_length_a + stream_length_b) as f64;
    for (slot_a, element_b) in reservoir_a.iter_mut().zip(reservoir_b).take(num_samples) {
        if rng.random::<f64>() < prob_of_swapping {
            *slot_a = element_b.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn sample_stream(
        range: std::ops::Range<usize>,
        num_samples: usize,
        rng: &mut Pcg32,
    ) -> Vec<usize> {
        let mut reservoir = vec![];
        for (i, element) in range.enumerate() {
            uniformly_sample_stream(&mut reservoir, i + 1, element, num_samples, rng);
        }
        reservoir
    }

    #[test]
    fn test_keeps_everything_until_full() {
        let mut rng = Pcg32::seed_from_u64(1);
        let reservoir = sample_stream(0..5, 10, &mut rng);
        assert_eq!(reservoir, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_length_never_exceeds_num_samples() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut reservoir = vec![];
        for i in 1..=500 {
            uniformly_sample_stream(&mut reservoir, i, i, 16, &mut rng);
            assert_eq!(reservoir.len(), usize::min(i, 16));
        }
    }

    #[test]
    fn test_overwrites_prepopulated_slot() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut reservoir = vec![-1, -1, -1];
        uniformly_sample_stream(&mut reservoir, 2, 7, 3, &mut rng);
        assert_eq!(reservoir, [-1, 7, -1]);
    }

    #[test]
    fn test_replacement_comes_from_stream() {
        let mut rng = Pcg32::seed_from_u64(4);
        let reservoir = sample_stream(0..1000, 8, &mut rng);
        assert_eq!(reservoir.len(), 8);
        assert!(reservoir.iter().all(|&e| e < 1000));
        // Overwhelmingly likely that something past the first 8 got in
        assert!(reservoir.iter().any(|&e| e >= 8));
    }

    #[test]
    fn test_zero_num_samples_keeps_nothing() {
        let mut rng = Pcg32::seed_from_u64(5);
        let reservoir = sample_stream(0..100, 0, &mut rng);
        assert!(reservoir.is_empty());
    }

    #[test]
    #[should_panic(expected = "stream_length is 1-based")]
    fn test_zero_stream_length_panics() {
        let mut rng = Pcg32::seed_from_u64(6);
        uniformly_sample_stream(&mut vec![], 0, 1, 4, &mut rng);
    }

    #[test]
    fn test_merge_leaves_b_untouched() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut a = sample_stream(0..50, 5, &mut rng);
        let b = sample_stream(50..100, 5, &mut rng);
        let b_before = b.clone();
        merge_sampled_streams(&mut a, 50, &b, 50, 5, &mut rng);
        assert_eq!(b, b_before);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn test_merge_unfilled_b_appends_into_unfilled_a() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut a = vec![1, 2];
        let b = vec![3, 4, 5];
        merge_sampled_streams(&mut a, 2, &b, 3, 10, &mut rng);
        assert_eq!(a, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_merge_unfilled_b_into_full_a() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut a = sample_stream(0..100, 4, &mut rng);
        let b = vec![1000, 1001];
        merge_sampled_streams(&mut a, 100, &b, 2, 4, &mut rng);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_merge_unfilled_a_into_full_b() {
        let mut rng = Pcg32::seed_from_u64(10);
        let mut a = vec![1000, 1001];
        let b = sample_stream(0..100, 4, &mut rng);
        merge_sampled_streams(&mut a, 2, &b, 100, 4, &mut rng);
        assert_eq!(a.len(), 4);
        assert!(a.iter().all(|e| *e >= 1000 || b.contains(e)));
    }

    #[test]
    fn test_merge_full_reservoirs_only_mixes_slots() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut a = vec![0, 1, 2, 3];
        let b = vec![10, 11, 12, 13];
        merge_sampled_streams(&mut a, 4, &b, 4, 4, &mut rng);
        assert_eq!(a.len(), 4);
        // Slot i holds either a[i] or b[i]
        for (i, &e) in a.iter().enumerate() {
            assert!(e == i || e == 10 + i, "slot {i} holds {e}");
        }
    }

    #[test]
    fn test_merge_with_empty_b_is_noop() {
        let mut rng = Pcg32::seed_from_u64(12);
        let mut a = vec![1, 2, 3];
        merge_sampled_streams(&mut a, 3, &[], 0, 3, &mut rng);
        assert_eq!(a, [1, 2, 3]);
    }
}
