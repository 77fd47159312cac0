use crate::foundation::math::sanitize_fade_height;

/// Fraction of the fade region each band covers, measured from the content edge.
///
/// `p = clamp((fade_height - max(0, h)) / fade_height, 0, 1)`; all zeros for
/// an empty fade region.
pub fn compute_coverage(fade_height: f64, heights: &[f64]) -> Vec<f64> {
    let total = sanitize_fade_height(fade_height);
    heights
        .iter()
        .map(|&h| {
            if total <= 0.0 {
                return 0.0;
            }
            let covered = total - h.max(0.0);
            (covered / total).clamp(0.0, 1.0)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layers/coverage.rs"]
mod tests;
