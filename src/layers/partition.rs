use crate::{foundation::math::sanitize_fade_height, layers::plan::band_step};

/// Remaining uncovered height after each successive band.
///
/// The walk starts at `fade_height`, subtracts [`band_step`] per band and
/// stops on the first step that leaves the counter `<= 0`. The final entry
/// may be negative: coarse steps are not trimmed to the exact remainder.
pub fn partition_heights(fade_height: f64, fine_count: u32) -> Vec<f64> {
    let mut remaining = sanitize_fade_height(fade_height);
    let mut heights = Vec::new();
    let mut index = 0u32;
    while remaining > 0.0 {
        index += 1;
        remaining -= band_step(index, fine_count);
        heights.push(remaining);
    }
    heights
}

#[cfg(test)]
#[path = "../../tests/unit/layers/partition.rs"]
mod tests;
