/// Upper bound applied to fade heights before the partition walk.
///
/// Coarse steps grow quadratically, so this keeps the walk to a few hundred
/// iterations even for absurd inputs.
pub const MAX_FADE_HEIGHT: f64 = 1_000_000.0;

/// Treat negative and non-finite extents as zero.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// [`non_negative`] plus the [`MAX_FADE_HEIGHT`] cap. `+inf` lands on the cap.
pub(crate) fn sanitize_fade_height(v: f64) -> f64 {
    if v == f64::INFINITY {
        return MAX_FADE_HEIGHT;
    }
    non_negative(v).min(MAX_FADE_HEIGHT)
}

/// Composite radius of stacked independent Gaussian blurs: `sqrt(sum(sigma^2))`.
pub fn quadrature_sum(radii: &[f64]) -> f64 {
    radii.iter().map(|s| s * s).sum::<f64>().sqrt()
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

pub(crate) fn unit_to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
