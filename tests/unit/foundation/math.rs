use super::*;

#[test]
fn quadrature_sum_matches_pythagoras() {
    assert_eq!(quadrature_sum(&[3.0, 4.0]), 5.0);
    assert_eq!(quadrature_sum(&[]), 0.0);
}

#[test]
fn sanitize_clamps_garbage_to_zero_and_caps_height() {
    assert_eq!(non_negative(-3.0), 0.0);
    assert_eq!(non_negative(f64::NAN), 0.0);
    assert_eq!(non_negative(12.5), 12.5);
    assert_eq!(sanitize_fade_height(1e12), MAX_FADE_HEIGHT);
    assert_eq!(sanitize_fade_height(f64::NEG_INFINITY), 0.0);
}

#[test]
fn infinite_fade_height_lands_on_the_cap() {
    assert_eq!(sanitize_fade_height(f64::INFINITY), MAX_FADE_HEIGHT);
    assert_eq!(sanitize_fade_height(f64::NAN), 0.0);
}

#[test]
fn mul_div255_edges() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(0, 255), 0);
    assert_eq!(mul_div255(128, 255), 128);
    assert_eq!(unit_to_u8(0.5), 128);
    assert_eq!(unit_to_u8(2.0), 255);
}
