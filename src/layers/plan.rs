use crate::{foundation::math::sanitize_fade_height, layers::partition::partition_heights};

/// Height consumed by each band of the fine regime.
pub const FINE_STEP: f64 = 2.0;

/// Fine band count used once the fade region is at least [`FINE_REGIME_LIMIT`] tall.
pub const MAX_FINE_BANDS: u32 = 15;

/// Fade height from which the fine band count stops growing.
pub const FINE_REGIME_LIMIT: f64 = 100.0;

/// How the fade region is split between the two step regimes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct BandCountPlan {
    /// Number of leading bands that use [`FINE_STEP`].
    pub fine_count: u32,
}

/// Decide how many fine bands a fade region of `fade_height` gets.
///
/// Below [`FINE_REGIME_LIMIT`] the fine regime covers roughly a quarter of the
/// region in 2px steps; above it the count is pinned at [`MAX_FINE_BANDS`].
pub fn plan_band_counts(fade_height: f64) -> BandCountPlan {
    let h = sanitize_fade_height(fade_height);
    let fine_count = if h >= FINE_REGIME_LIMIT {
        MAX_FINE_BANDS
    } else {
        let fine_target = (h / 4.0).floor();
        (fine_target / 2.0).ceil().max(0.0) as u32
    };
    BandCountPlan { fine_count }
}

/// Number of bands the partition walk emits for `fade_height`.
pub fn layer_count(fade_height: f64) -> usize {
    let h = sanitize_fade_height(fade_height);
    partition_heights(h, plan_band_counts(h).fine_count).len()
}

/// Height consumed by band `index` (1-based).
///
/// Fine bands take [`FINE_STEP`]; the k-th coarse band takes `(k + 1)^2`.
pub fn band_step(index: u32, fine_count: u32) -> f64 {
    if index <= fine_count {
        FINE_STEP
    } else {
        let k = f64::from(index - fine_count);
        (k + 1.0) * (k + 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/plan.rs"]
mod tests;
