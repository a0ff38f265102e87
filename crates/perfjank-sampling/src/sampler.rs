use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    MergeError,
    reservoir::{merge_sampled_streams, uniformly_sample_stream},
};

/// A reservoir that tracks its own stream length and random source.
///
/// Wraps [`uniformly_sample_stream`] and [`merge_sampled_streams`] for callers
/// that consume a stream element by element.
///
/// # Example
///
/// ```
/// use perfjank_sampling::sampler::StreamSampler;
///
/// let mut sampler = StreamSampler::with_seed(4, 42);
/// sampler.extend(0..100);
///
/// assert_eq!(sampler.stream_length(), 100);
/// assert_eq!(sampler.samples().len(), 4);
/// assert_eq!(sampler.retention_probability(), 0.04);
/// ```
#[derive(Debug, Clone)]
pub struct StreamSampler<T, R = Pcg32> {
    num_samples: usize,
    stream_length: usize,
    samples: Vec<T>,
    rng: R,
}

impl<T> StreamSampler<T> {
    /// Creates an empty sampler keeping at most `num_samples` elements.
    ///
    /// The generator is seeded from the thread-local RNG. For reproducible
    /// sampling, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new(num_samples: usize) -> Self {
        Self::with_seed(num_samples, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic sampling.
    #[must_use]
    pub fn with_seed(num_samples: usize, seed: u64) -> Self {
        Self::with_rng(num_samples, Pcg32::seed_from_u64(seed))
    }
}

impl<T, R> StreamSampler<T, R>
where
    R: Rng,
{
    /// Creates an empty sampler drawing randomness from `rng`.
    #[must_use]
    pub fn with_rng(num_samples: usize, rng: R) -> Self {
        Self {
            num_samples,
            stream_length: 0,
            samples: Vec::with_capacity(num_samples),
            rng,
        }
    }

    /// Offers the next element of the stream.
    pub fn push(&mut self, element: T) {
        self.stream_length += 1;
        uniformly_sample_stream(
            &mut self.samples,
            self.stream_length,
            element,
            self.num_samples,
            &mut self.rng,
        );
    }

    /// Folds the samples of another stream into this one.
    ///
    /// Afterwards this sampler represents the concatenation of both streams.
    /// `other` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::CapacityMismatch`] if `other` keeps a different
    /// number of samples. This sampler is unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use perfjank_sampling::sampler::StreamSampler;
    ///
    /// let mut a = StreamSampler::with_seed(8, 1);
    /// let mut b = StreamSampler::with_seed(8, 2);
    /// a.extend(0..500);
    /// b.extend(500..1000);
    ///
    /// a.merge(&b)?;
    /// assert_eq!(a.stream_length(), 1000);
    /// assert_eq!(a.samples().len(), 8);
    /// # Ok::<(), perfjank_sampling::MergeError>(())
    /// ```
    pub fn merge<R2>(&mut self, other: &StreamSampler<T, R2>) -> Result<(), MergeError>
    where
        T: Clone,
    {
        if other.num_samples != self.num_samples {
            return Err(MergeError::CapacityMismatch {
                expected: self.num_samples,
                found: other.num_samples,
            });
        }

        merge_sampled_streams(
            &mut self.samples,
            self.stream_length,
            &other.samples,
            other.stream_length,
            self.num_samples,
            &mut self.rng,
        );
        self.stream_length += other.stream_length;
        Ok(())
    }
}

impl<T, R> StreamSampler<T, R> {
    /// The current samples, in no particular order.
    #[must_use]
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }

    /// Number of elements offered so far, including merged streams.
    #[must_use]
    pub fn stream_length(&self) -> usize {
        self.stream_length
    }

    /// Maximum number of elements kept.
    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns `true` once the stream has filled every slot.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.num_samples
    }

    /// Probability that any given element of the stream is among the samples.
    ///
    /// This is `min(1, num_samples / stream_length)`, or `0.0` before the
    /// first element.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn retention_probability(&self) -> f64 {
        if self.stream_length == 0 {
            return 0.0;
        }
        f64::min(1.0, self.num_samples as f64 / self.stream_length as f64)
    }
}

impl<T, R> Extend<T> for StreamSampler<T, R>
where
    R: Rng,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in iter {
            self.push(element);
        }
    }
}
