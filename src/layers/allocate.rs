use crate::foundation::math::non_negative;

/// Split `total_blur` across bands in proportion to their coverage.
///
/// Stacked Gaussian blurs compose as `sqrt(sum(sigma^2))`, so each radius is
/// `p_i * total_blur / sqrt(sum(p^2))`. The quadrature sum of the result is
/// `total_blur` whenever any coverage is non-zero; otherwise every radius is 0.
pub fn allocate_blur(total_blur: f64, coverage: &[f64]) -> Vec<f64> {
    let total_blur = non_negative(total_blur);
    let sum_sq: f64 = coverage.iter().map(|p| p * p).sum();
    let scale = if sum_sq > 0.0 {
        total_blur / sum_sq.sqrt()
    } else {
        0.0
    };
    coverage.iter().map(|p| scale * p).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layers/allocate.rs"]
mod tests;
