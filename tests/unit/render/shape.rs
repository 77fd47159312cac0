use super::*;
use kurbo::Shape;

#[test]
fn radii_that_fit_are_left_alone() {
    let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
    let radii = RoundedRectRadii::new(12.0, 12.0, 0.0, 0.0);
    assert_eq!(fit_radii(rect, radii), radii);
}

#[test]
fn short_band_scales_radii_like_css() {
    // 2px tall band: the left side holds only 2px of the 12px radius.
    let rect = Rect::new(0.0, 0.0, 100.0, 2.0);
    let fitted = fit_radii(rect, RoundedRectRadii::new(12.0, 12.0, 0.0, 0.0));
    assert!((fitted.top_left - 2.0).abs() < 1e-12);
    assert!((fitted.top_right - 2.0).abs() < 1e-12);
    assert_eq!((fitted.bottom_left, fitted.bottom_right), (0.0, 0.0));
}

#[test]
fn narrow_band_scales_by_tightest_side() {
    let rect = Rect::new(0.0, 0.0, 10.0, 50.0);
    let fitted = fit_radii(rect, RoundedRectRadii::new(0.0, 0.0, 8.0, 12.0));
    assert!((fitted.bottom_right - 4.0).abs() < 1e-12);
    assert!((fitted.bottom_left - 6.0).abs() < 1e-12);
}

#[test]
fn negative_and_nan_radii_are_dropped() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    let fitted = fit_radii(rect, RoundedRectRadii::new(-3.0, f64::NAN, 2.0, 0.0));
    assert_eq!(fitted, RoundedRectRadii::new(0.0, 0.0, 2.0, 0.0));
}

#[test]
fn square_band_path_covers_the_rect() {
    let rect = Rect::new(5.0, 10.0, 45.0, 30.0);
    let path = band_path(rect, RoundedRectRadii::new(0.0, 0.0, 0.0, 0.0));
    assert!((path.area().abs() - rect.area()).abs() < 1e-9);
    assert!(path.contains(Point::new(5.5, 10.5)));
}

#[test]
fn rounded_band_path_cuts_only_anchored_corners() {
    let rect = Rect::new(0.0, 0.0, 40.0, 20.0);
    let path = band_path(rect, RoundedRectRadii::new(8.0, 8.0, 0.0, 0.0));

    assert!(!path.contains(Point::new(0.5, 0.5)));
    assert!(!path.contains(Point::new(39.5, 0.5)));
    assert!(path.contains(Point::new(20.0, 0.5)));
    assert!(path.contains(Point::new(0.5, 19.5)));
    assert!(path.contains(Point::new(39.5, 19.5)));

    let cut = 2.0 * (64.0 - std::f64::consts::PI * 16.0);
    assert!((path.area().abs() - (800.0 - cut)).abs() < 0.05);
}
