use std::f64::consts::{FRAC_PI_2, PI};

use crate::foundation::core::{BezPath, Point, Rect, RoundedRectRadii, Vec2};

const ARC_TOLERANCE: f64 = 0.1;

/// Shrink `radii` the way CSS resolves overlapping border radii.
///
/// When the two radii on any side add up to more than that side's length,
/// every radius is scaled by the same factor so the tightest side just fits.
pub fn fit_radii(rect: Rect, radii: RoundedRectRadii) -> RoundedRectRadii {
    let clean = |r: f64| if r.is_finite() && r > 0.0 { r } else { 0.0 };
    let radii = RoundedRectRadii::new(
        clean(radii.top_left),
        clean(radii.top_right),
        clean(radii.bottom_right),
        clean(radii.bottom_left),
    );
    let (w, h) = (rect.width().abs(), rect.height().abs());
    let sides = [
        (w, radii.top_left + radii.top_right),
        (w, radii.bottom_left + radii.bottom_right),
        (h, radii.top_left + radii.bottom_left),
        (h, radii.top_right + radii.bottom_right),
    ];
    let scale = sides
        .iter()
        .filter(|(_, sum)| *sum > 0.0)
        .map(|(len, sum)| len / sum)
        .fold(1.0_f64, f64::min);
    if scale >= 1.0 {
        return radii;
    }
    RoundedRectRadii::new(
        radii.top_left * scale,
        radii.top_right * scale,
        radii.bottom_right * scale,
        radii.bottom_left * scale,
    )
}

/// Closed outline of a band: `rect` with the (fitted) corner radii.
pub fn band_path(rect: Rect, radii: RoundedRectRadii) -> BezPath {
    let rect = rect.abs();
    let r = fit_radii(rect, radii);
    let mut path = BezPath::new();

    path.move_to((rect.x0 + r.top_left, rect.y0));
    path.line_to((rect.x1 - r.top_right, rect.y0));
    corner(&mut path, (rect.x1 - r.top_right, rect.y0 + r.top_right), r.top_right, -FRAC_PI_2);
    path.line_to((rect.x1, rect.y1 - r.bottom_right));
    corner(&mut path, (rect.x1 - r.bottom_right, rect.y1 - r.bottom_right), r.bottom_right, 0.0);
    path.line_to((rect.x0 + r.bottom_left, rect.y1));
    corner(&mut path, (rect.x0 + r.bottom_left, rect.y1 - r.bottom_left), r.bottom_left, FRAC_PI_2);
    path.line_to((rect.x0, rect.y0 + r.top_left));
    corner(&mut path, (rect.x0 + r.top_left, rect.y0 + r.top_left), r.top_left, PI);
    path.close_path();
    path
}

fn corner(path: &mut BezPath, center: (f64, f64), radius: f64, start_angle: f64) {
    if radius <= 0.0 {
        return;
    }
    let arc = kurbo::Arc {
        center: Point::new(center.0, center.1),
        radii: Vec2::new(radius, radius),
        start_angle,
        sweep_angle: FRAC_PI_2,
        x_rotation: 0.0,
    };
    path.extend(arc.append_iter(ARC_TOLERANCE));
}

#[cfg(test)]
#[path = "../../tests/unit/render/shape.rs"]
mod tests;
