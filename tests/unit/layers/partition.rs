use super::*;
use crate::foundation::math::MAX_FADE_HEIGHT;
use crate::layers::plan::{layer_count, plan_band_counts};

#[test]
fn fine_then_coarse_steps() {
    let heights = partition_heights(120.0, 15);
    assert_eq!(heights.len(), 20);
    for (i, h) in heights.iter().take(15).enumerate() {
        assert_eq!(*h, 120.0 - 2.0 * (i as f64 + 1.0));
    }
    assert_eq!(&heights[15..], &[86.0, 77.0, 61.0, 36.0, 0.0]);
}

#[test]
fn last_step_may_overshoot() {
    let heights = partition_heights(70.0, 9);
    assert_eq!(heights.len(), 13);
    assert_eq!(heights[8], 52.0);
    assert_eq!(heights.last().copied(), Some(-2.0));
}

#[test]
fn sequence_is_non_increasing_and_matches_layer_count() {
    for h in [0.0, 1.0, 3.0, 7.5, 33.0, 70.0, 99.0, 100.0, 120.0, 240.0, 1000.0] {
        let fine = plan_band_counts(h).fine_count;
        let heights = partition_heights(h, fine);
        assert_eq!(heights.len(), layer_count(h), "height {h}");
        assert!(heights.windows(2).all(|w| w[0] >= w[1]), "height {h}");
        if let Some(last) = heights.last() {
            assert!(*last <= 0.0);
            assert!(heights[..heights.len() - 1].iter().all(|v| *v > 0.0));
        }
    }
}

#[test]
fn empty_for_degenerate_heights() {
    assert!(partition_heights(0.0, 0).is_empty());
    assert!(partition_heights(-5.0, 3).is_empty());
    assert!(partition_heights(f64::NAN, 15).is_empty());
    assert!(partition_heights(f64::NEG_INFINITY, 15).is_empty());
}

#[test]
fn infinite_height_walks_the_capped_region() {
    let capped = partition_heights(MAX_FADE_HEIGHT, 15);
    assert!(!capped.is_empty());
    assert_eq!(partition_heights(f64::INFINITY, 15), capped);
    assert_eq!(partition_heights(2.0 * MAX_FADE_HEIGHT, 15).len(), capped.len());
}
