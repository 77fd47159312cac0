use super::*;

#[test]
fn tall_regions_pin_fine_count() {
    for h in [100.0, 100.5, 120.0, 240.0, 10_000.0] {
        assert_eq!(plan_band_counts(h).fine_count, MAX_FINE_BANDS, "height {h}");
    }
}

#[test]
fn short_regions_follow_quarter_rule() {
    assert_eq!(plan_band_counts(70.0).fine_count, 9);
    assert_eq!(plan_band_counts(99.9).fine_count, 12);
    assert_eq!(plan_band_counts(8.0).fine_count, 1);
    assert_eq!(plan_band_counts(3.9).fine_count, 0);
    assert_eq!(plan_band_counts(0.0).fine_count, 0);
    assert_eq!(plan_band_counts(-20.0).fine_count, 0);
    assert_eq!(plan_band_counts(f64::NAN).fine_count, 0);

    for h in 0..100 {
        let h = f64::from(h);
        let expected = ((h / 4.0).floor() / 2.0).ceil().max(0.0) as u32;
        assert_eq!(plan_band_counts(h).fine_count, expected, "height {h}");
    }
}

#[test]
fn band_steps_switch_from_fine_to_squares() {
    assert_eq!(band_step(1, 3), 2.0);
    assert_eq!(band_step(3, 3), 2.0);
    assert_eq!(band_step(4, 3), 4.0);
    assert_eq!(band_step(5, 3), 9.0);
    assert_eq!(band_step(6, 3), 16.0);
    assert_eq!(band_step(1, 0), 4.0);
}

#[test]
fn layer_count_walks_until_exhausted() {
    // 15 fine bands (30px) then 4 + 9 + 16 + 25 + 36 = 90.
    assert_eq!(layer_count(120.0), 20);
    // 9 fine bands (18px) then 4 + 9 + 16 + 25 overshoots 52 by 2.
    assert_eq!(layer_count(70.0), 13);
    assert_eq!(layer_count(3.0), 1);
    assert_eq!(layer_count(0.0), 0);
    assert_eq!(layer_count(-1.0), 0);
}

#[test]
fn layer_count_matches_partition_length() {
    for h in [0.0, 1.0, 7.5, 33.0, 99.9, 100.0, 480.0, 1e5] {
        let fine = plan_band_counts(h).fine_count;
        assert_eq!(layer_count(h), partition_heights(h, fine).len(), "height {h}");
    }
    assert_eq!(layer_count(f64::INFINITY), layer_count(crate::MAX_FADE_HEIGHT));
}
