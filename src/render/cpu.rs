use std::sync::Arc;

use crate::{
    foundation::{
        core::{Affine, BezPath, Canvas, Rect},
        error::{FineBlurError, FineBlurResult},
    },
    layers::assemble::{Band, BandSet, EdgeGradient, Tint},
    render::{
        BandBackend, BandLayout,
        blur::{blur_region, kernel_radius},
        composite::{mix, over},
        frame::{FrameRGBA, PixelBounds},
        shape::band_path,
    },
    style::config::Edge,
};

/// Reference rasterizer: applies each band as a backdrop blur plus tint.
///
/// Every band blurs whatever is already in the frame under its outline, so
/// overlapping bands compound the same way stacked `backdrop-filter`s do.
/// Band outlines and the tint gradient are rasterized with `vello_cpu`.
pub struct CpuBackend {
    frame: FrameRGBA,
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for CpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuBackend")
            .field("width", &self.frame.width)
            .field("height", &self.frame.height)
            .finish_non_exhaustive()
    }
}

impl CpuBackend {
    /// Render on top of `backdrop`.
    pub fn new(backdrop: FrameRGBA) -> Self {
        Self {
            frame: backdrop,
            ctx: None,
        }
    }

    /// Current frame contents.
    pub fn frame(&self) -> &FrameRGBA {
        &self.frame
    }

    /// Consume the backend and return the frame.
    pub fn into_frame(self) -> FrameRGBA {
        self.frame
    }

    /// Fill `path` into a pixmap the size of `bounds`, with `bounds.x0/y0` at its origin.
    fn rasterize(
        &mut self,
        bounds: PixelBounds,
        path: &BezPath,
        paint: Paint,
    ) -> FineBlurResult<vello_cpu::Pixmap> {
        let (width, height) = pixmap_size(bounds.width(), bounds.height())?;
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        match paint {
            Paint::Solid => {
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
            }
            Paint::Image(image) => ctx.set_paint(image),
        }
        let origin = Affine::translate((-f64::from(bounds.x0), -f64::from(bounds.y0)));
        let local = origin * path.clone();
        let mut cpu_path = vello_cpu::kurbo::BezPath::new();
        for &el in local.elements() {
            cpu_path.push(el);
        }
        ctx.fill_path(&cpu_path);
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);
        Ok(pixmap)
    }

    fn blur_band(
        &mut self,
        bounds: PixelBounds,
        path: &BezPath,
        sigma: f64,
    ) -> FineBlurResult<()> {
        if kernel_radius(sigma) == 0 {
            return Ok(());
        }
        let blurred = blur_region(&self.frame, bounds, sigma)?;
        let mask = self.rasterize(bounds, path, Paint::Solid)?;
        let coverage = mask.data_as_u8_slice();

        let cols = bounds.width() as usize;
        for (row, y) in (bounds.y0..bounds.y1).enumerate() {
            for (col, x) in (bounds.x0..bounds.x1).enumerate() {
                let i = (row * cols + col) * 4;
                let cov = coverage[i + 3];
                if cov == 0 {
                    continue;
                }
                let b = [blurred[i], blurred[i + 1], blurred[i + 2], blurred[i + 3]];
                let px = mix(self.frame.pixel(x, y), b, f64::from(cov) / 255.0);
                self.frame.set_pixel(x, y, px);
            }
        }
        Ok(())
    }

    fn tint_band(
        &mut self,
        bounds: PixelBounds,
        path: &BezPath,
        layout: &BandLayout,
        tint: Tint,
    ) -> FineBlurResult<()> {
        let Tint::Gradient(gradient) = tint else {
            return Ok(());
        };
        if gradient.color.to_rgba8_premul().a == 0 || layout.rect.height() <= 0.0 {
            return Ok(());
        }

        let image = gradient_image(gradient, bounds, layout)?;
        let painted = self.rasterize(bounds, path, Paint::Image(image))?;
        let src = painted.data_as_u8_slice();

        let cols = bounds.width() as usize;
        for (row, y) in (bounds.y0..bounds.y1).enumerate() {
            for (col, x) in (bounds.x0..bounds.x1).enumerate() {
                let i = (row * cols + col) * 4;
                let s = [src[i], src[i + 1], src[i + 2], src[i + 3]];
                let px = over(self.frame.pixel(x, y), s, 1.0);
                self.frame.set_pixel(x, y, px);
            }
        }
        Ok(())
    }
}

enum Paint {
    Solid,
    Image(vello_cpu::Image),
}

impl BandBackend for CpuBackend {
    fn begin_edge(&mut self, set: &BandSet, _region: Rect) -> FineBlurResult<()> {
        let expected = self.frame.width as usize * self.frame.height as usize * 4;
        if self.frame.data.len() != expected {
            return Err(FineBlurError::render(format!(
                "frame buffer has {} bytes, expected {expected}",
                self.frame.data.len()
            )));
        }
        pixmap_size(self.frame.width, self.frame.height)?;
        tracing::debug!(edge = ?set.edge, bands = set.len(), "cpu preview edge");
        Ok(())
    }

    fn draw_band(&mut self, band: &Band, layout: &BandLayout) -> FineBlurResult<()> {
        let canvas = Canvas::new(self.frame.width, self.frame.height);
        let Some(bounds) = PixelBounds::of(layout.rect, canvas) else {
            return Ok(());
        };
        let path = band_path(layout.rect, layout.radii);
        self.blur_band(bounds, &path, band.blur_radius)?;
        self.tint_band(bounds, &path, layout, band.tint)
    }

    fn end_edge(&mut self, _edge: Edge) -> FineBlurResult<()> {
        Ok(())
    }
}

fn pixmap_size(width: u32, height: u32) -> FineBlurResult<(u16, u16)> {
    let w: u16 = width
        .try_into()
        .map_err(|_| FineBlurError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| FineBlurError::render("pixmap height exceeds u16"))?;
    Ok((w, h))
}

/// Premultiplied image of the edge color fading out across the band, one row per pixel row.
fn gradient_image(
    gradient: EdgeGradient,
    bounds: PixelBounds,
    layout: &BandLayout,
) -> FineBlurResult<vello_cpu::Image> {
    let (width, height) = pixmap_size(bounds.width(), bounds.height())?;
    let color = gradient.color.to_rgba8_premul().to_array();
    let extent = layout.rect.height();

    let mut pixels = Vec::with_capacity(usize::from(width) * usize::from(height));
    for y in bounds.y0..bounds.y1 {
        let cy = f64::from(y) + 0.5;
        let dist = match layout.edge {
            Edge::Top => cy - layout.rect.y0,
            Edge::Bottom => layout.rect.y1 - cy,
        };
        let row = over([0, 0, 0, 0], color, gradient.falloff(dist / extent));
        let px = vello_cpu::peniko::color::PremulRgba8::from_u8_array(row);
        pixels.extend(std::iter::repeat_n(px, usize::from(width)));
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, width, height, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
