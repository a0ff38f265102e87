//! Discrepancy-based jank metrics for performance-trace series.
//!
//! Jank is irregularity in timing. This crate measures it with the
//! *discrepancy* of a point set: how far the points are from being evenly
//! spread over an interval.
//!
//! The pipeline is:
//!
//! 1. **Normalize** ([`normalization::normalize_samples`]): map raw timestamps
//!    onto a sorted set inside `(0, 1)` and remember the scale factor
//! 2. **Measure** ([`discrepancy::discrepancy`]): compute the largest deviation
//!    between sample density and interval length
//! 3. **Score** ([`jank`]): turn the discrepancy into an absolute jank (input
//!    units) or a relative jank (`[0, 1]`, zero for even spacing)
//!
//! # Examples
//!
//! ```
//! use perfjank_discrepancy::jank::{JankOptions, durations_discrepancy};
//!
//! // Frame durations in milliseconds
//! let smooth = [16.7, 16.7, 16.7, 16.7, 16.7];
//! let janky = [16.7, 16.7, 50.0, 16.7, 16.7];
//!
//! let options = JankOptions::relative();
//! assert!(durations_discrepancy(&janky, options) > durations_discrepancy(&smooth, options));
//! ```

pub mod discrepancy;
pub mod jank;
pub mod normalization;
