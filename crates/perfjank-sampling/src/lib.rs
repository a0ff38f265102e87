//! Uniform reservoir sampling over unbounded event streams.
//!
//! Traces can hold far more events than are worth keeping. This crate keeps a
//! fixed-size, uniformly random subset of a stream whose length is not known
//! in advance, and combines subsets taken from separate streams.
//!
//! # Modules
//!
//! - [`reservoir`]: Free functions over a caller-owned `Vec<T>` reservoir
//! - [`sampler`]: [`StreamSampler`](sampler::StreamSampler), which owns the
//!   reservoir, the stream length and the random source
//!
//! # Examples
//!
//! ```
//! use perfjank_sampling::sampler::StreamSampler;
//!
//! let mut sampler = StreamSampler::with_seed(16, 7);
//! for event_id in 0..10_000 {
//!     sampler.push(event_id);
//! }
//! assert_eq!(sampler.len(), 16);
//! ```

pub mod reservoir;
pub mod sampler;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MergeError {
    #[display("cannot merge a sampler keeping {found} samples into one keeping {expected}")]
    CapacityMismatch { expected: usize, found: usize },
}
