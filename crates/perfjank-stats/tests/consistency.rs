//! Consistency between the reductions, the range accumulator and summaries.

use perfjank_stats::{descriptive, range::ValueRange, summary::Summary};

/// Frame durations (ms) of a short trace with two hitches.
const FRAME_TIMES: [f64; 12] = [
    16.6, 16.7, 16.7, 16.6, 50.0, 16.7, 16.6, 16.7, 33.3, 16.7, 16.6, 16.7,
];

#[test]
fn summary_agrees_with_reductions() {
    let summary = Summary::new(FRAME_TIMES).unwrap();
    assert_eq!(summary.count, FRAME_TIMES.len());
    assert_eq!(summary.min, descriptive::min(FRAME_TIMES));
    assert_eq!(summary.max, descriptive::max(FRAME_TIMES));
    assert_eq!(summary.median, descriptive::percentile(FRAME_TIMES, 0.5).unwrap());
    assert!((summary.mean - descriptive::mean(FRAME_TIMES)).abs() < 1e-12);
    assert!((summary.std_dev - descriptive::stddev(FRAME_TIMES)).abs() < 1e-12);
}

#[test]
fn sorted_and_unsorted_summaries_match() {
    let mut sorted = FRAME_TIMES;
    sorted.sort_by(f64::total_cmp);
    assert_eq!(Summary::from_sorted(&sorted), Summary::new(FRAME_TIMES));
}

#[test]
fn range_matches_min_and_max() {
    let range = descriptive::range(FRAME_TIMES);
    assert_eq!(range.min(), Some(descriptive::min(FRAME_TIMES)));
    assert_eq!(range.max(), Some(descriptive::max(FRAME_TIMES)));
    assert!((range.duration() - Summary::new(FRAME_TIMES).unwrap().spread()).abs() < 1e-12);
}

#[test]
fn ranges_merge_like_concatenation() {
    let (head, tail) = FRAME_TIMES.split_at(5);
    let mut merged = ValueRange::from_values(head.iter().copied());
    merged.add_range(&ValueRange::from_values(tail.iter().copied()));
    assert_eq!(merged, descriptive::range(FRAME_TIMES));
}

#[test]
fn percentiles_are_monotonic() {
    let mut previous = f64::NEG_INFINITY;
    for step in 0..=20 {
        let p = descriptive::percentile(FRAME_TIMES, f64::from(step) / 20.0).unwrap();
        assert!(p >= previous, "p{} = {p} < {previous}", step * 5);
        previous = p;
    }
}

#[test]
fn weighted_mean_with_unit_weights_is_mean() {
    let weighted = descriptive::weighted_mean_by(FRAME_TIMES, |_| 1.0, |&v| v).unwrap();
    assert!((weighted - descriptive::mean(FRAME_TIMES)).abs() < 1e-12);
}
