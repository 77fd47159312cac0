use crate::{
    foundation::error::{FineBlurError, FineBlurResult},
    render::frame::{FrameRGBA, PixelBounds},
};

/// Largest kernel half-width the preview blur will use.
pub const MAX_KERNEL_RADIUS: u32 = 256;

/// Blur radii below this are treated as no blur at all.
pub const MIN_SIGMA: f64 = 0.05;

/// Kernel half-width for `sigma`: three standard deviations.
pub fn kernel_radius(sigma: f64) -> u32 {
    if !sigma.is_finite() || sigma < MIN_SIGMA {
        return 0;
    }
    ((3.0 * sigma).ceil() as u32).clamp(1, MAX_KERNEL_RADIUS)
}

/// Gaussian blur of the pixels under `region`, as a band's backdrop filter sees them.
///
/// Returns `region.width() * region.height()` premultiplied pixels, row-major.
/// Taps reach up to [`kernel_radius`] pixels past the region into the rest of
/// the frame, so a band's edge blends with what lies beyond it; only the frame
/// border clamps to its outermost pixel.
pub fn blur_region(
    frame: &FrameRGBA,
    region: PixelBounds,
    sigma: f64,
) -> FineBlurResult<Vec<u8>> {
    let canvas = frame.canvas();
    if !region.fits(canvas) {
        return Err(FineBlurError::render(format!(
            "blur region {region:?} outside {}x{} frame",
            canvas.width, canvas.height
        )));
    }
    if frame.data.len() != canvas.width as usize * canvas.height as usize * 4 {
        return Err(FineBlurError::render("frame buffer does not match its dimensions"));
    }

    let radius = kernel_radius(sigma);
    if radius == 0 {
        let mut out = Vec::with_capacity(region_len(region));
        for y in region.y0..region.y1 {
            for x in region.x0..region.x1 {
                out.extend_from_slice(&frame.pixel(x, y));
            }
        }
        return Ok(out);
    }

    let weights = gaussian_weights(radius, sigma);
    let reach = i64::from(radius);
    // Rows the vertical pass reads: the region padded by the kernel, inside the frame.
    let win_y0 = region.y0.saturating_sub(radius);
    let win_y1 = region.y1.saturating_add(radius).min(canvas.height);
    let last_x = i64::from(canvas.width) - 1;

    // Horizontal pass over the padded rows, region columns only.
    let cols = region.width() as usize;
    let mut rows = Vec::with_capacity((win_y1 - win_y0) as usize * cols);
    for y in win_y0..win_y1 {
        for x in region.x0..region.x1 {
            rows.push(convolve(&weights, |k| {
                let sx = (i64::from(x) + k as i64 - reach).clamp(0, last_x);
                frame.pixel(sx as u32, y)
            }));
        }
    }

    // Vertical pass back down to the region rows.
    let top = i64::from(win_y0);
    let bottom = i64::from(win_y1) - 1;
    let mut out = Vec::with_capacity(region_len(region));
    for y in region.y0..region.y1 {
        for col in 0..cols {
            let px = convolve(&weights, |k| {
                let sy = (i64::from(y) + k as i64 - reach).clamp(top, bottom);
                rows[(sy - top) as usize * cols + col]
            });
            out.extend_from_slice(&px);
        }
    }
    Ok(out)
}

fn region_len(region: PixelBounds) -> usize {
    region.width() as usize * region.height() as usize * 4
}

/// Normalized taps `-radius..=radius`.
fn gaussian_weights(radius: u32, sigma: f64) -> Vec<f32> {
    let r = radius as i32;
    let denom = 2.0 * sigma * sigma;
    let raw: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = f64::from(i);
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = raw.iter().sum();
    raw.into_iter().map(|w| (w / sum) as f32).collect()
}

fn convolve(weights: &[f32], tap: impl Fn(usize) -> [u8; 4]) -> [u8; 4] {
    let mut acc = [0f32; 4];
    for (k, &w) in weights.iter().enumerate() {
        for (a, c) in acc.iter_mut().zip(tap(k)) {
            *a += w * f32::from(c);
        }
    }
    acc.map(|v| v.round().clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
