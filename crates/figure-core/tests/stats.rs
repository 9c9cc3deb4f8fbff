// File: crates/figure-core/tests/stats.rs
// Purpose: Summary statistics over latency samples.

use figure_core::stats::percentile;
use figure_core::Summary;

#[test]
fn percentiles_interpolate_between_ranks() {
    let sorted: Vec<f64> = (0..=100).map(|v| v as f64).collect();
    assert_eq!(percentile(&sorted, 99.0), 99.0);
    assert!((percentile(&sorted, 99.5) - 99.5).abs() < 1e-12);
    assert_eq!(percentile(&sorted, 0.0), 0.0);
    assert_eq!(percentile(&sorted, 100.0), 100.0);

    let small = [10.0, 20.0];
    assert_eq!(percentile(&small, 50.0), 15.0);
}

#[test]
fn summary_of_unsorted_samples() {
    let s = Summary::from_samples(&[5.0, 1.0, 4.0, 2.0, 3.0]).expect("non-empty");
    assert_eq!(s.count, 5);
    assert_eq!(s.mean, 3.0);
    assert_eq!(s.p50, 3.0);
    assert_eq!(s.min, 1.0);
    assert_eq!(s.max, 5.0);
    assert!((s.p99 - 4.96).abs() < 1e-12);
    assert!(s.p99_9 <= s.max && s.p99_9 >= s.p99_5 && s.p99_5 >= s.p99);
}

#[test]
fn summary_skips_non_finite_and_empty() {
    assert!(Summary::from_samples(&[]).is_none());
    assert!(Summary::from_samples(&[f64::NAN]).is_none());
    let s = Summary::from_samples(&[f64::NAN, 7.0]).unwrap();
    assert_eq!(s.count, 1);
    assert_eq!(s.p99_9, 7.0);
}

#[test]
fn percentile_of_empty_is_nan() {
    assert!(percentile(&[], 50.0).is_nan());
}
