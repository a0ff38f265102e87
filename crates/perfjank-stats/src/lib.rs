//! Descriptive statistics for numeric sequences extracted from performance traces.
//!
//! This crate provides:
//!
//! - **Descriptive statistics**: sum, mean, weighted mean, variance, standard deviation,
//!   min, max, nearest-rank percentile, clamping and safe division
//! - **Range accumulation**: a running min/max over values
//! - **Summaries**: all of the above bundled in one serializable record
//!
//! # Modules
//!
//! - [`descriptive`]: Pure reductions over `IntoIterator<Item = f64>`
//! - [`range`]: The [`ValueRange`](range::ValueRange) min/max accumulator
//! - [`summary`]: The [`Summary`](summary::Summary) record
//!
//! # Examples
//!
//! ## Reducing a series
//!
//! ```
//! use perfjank_stats::descriptive;
//!
//! let frame_times = [16.6, 16.7, 16.6, 33.3, 16.7];
//! assert_eq!(descriptive::max(frame_times), 33.3);
//! assert_eq!(descriptive::percentile(frame_times, 0.5).unwrap(), 16.7);
//! ```
//!
//! ## Summarizing a series
//!
//! ```
//! use perfjank_stats::summary::Summary;
//!
//! let summary = Summary::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(summary.mean, 3.0);
//! assert_eq!(summary.median, 3.0);
//! ```

pub use self::descriptive::StatsError;

pub mod descriptive;
pub mod range;
pub mod summary;
