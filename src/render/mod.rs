//! Renderer boundary: turns band sets into drawable geometry for a backend.

pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod cpu;
pub(crate) mod css;
pub(crate) mod frame;
pub(crate) mod shape;

use crate::{
    foundation::{
        core::{Canvas, Rect, RoundedRectRadii},
        error::FineBlurResult,
        math::non_negative,
    },
    layers::assemble::{Band, BandSet, ProgressiveBlur},
    style::config::Edge,
};

/// Presentation parameters owned by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    /// Region the bands are laid out in.
    pub viewport: Canvas,
    /// Radius of the two corners on each band's anchored edge.
    pub corner_radius: f64,
}

impl RenderStyle {
    /// Build a style, clamping the corner radius to `>= 0`.
    pub fn new(viewport: Canvas, corner_radius: f64) -> Self {
        Self {
            viewport,
            corner_radius: non_negative(corner_radius),
        }
    }
}

/// Where one band lands inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandLayout {
    /// Edge the band is anchored to.
    pub edge: Edge,
    /// Band rectangle, full viewport width.
    pub rect: Rect,
    /// Corner rounding; only the anchored corners are non-zero.
    pub radii: RoundedRectRadii,
    /// Stacking position within the edge, 0 for the first band painted.
    pub stack_index: usize,
}

/// A surface the bands can be drawn onto.
pub trait BandBackend {
    /// Called once per active edge before its bands, with the fade region.
    fn begin_edge(&mut self, set: &BandSet, region: Rect) -> FineBlurResult<()>;

    /// Draw one band. Bands arrive edge-first; later bands stack on top.
    fn draw_band(&mut self, band: &Band, layout: &BandLayout) -> FineBlurResult<()>;

    /// Called after the last band of an edge.
    fn end_edge(&mut self, edge: Edge) -> FineBlurResult<()>;
}

/// Rectangle of a region `extent` pixels deep anchored at `edge`.
pub fn anchored_rect(edge: Edge, extent: f64, viewport: Canvas) -> Rect {
    let full = viewport.rect();
    let extent = non_negative(extent).min(full.height());
    match edge {
        Edge::Top => Rect::new(full.x0, full.y0, full.x1, full.y0 + extent),
        Edge::Bottom => Rect::new(full.x0, full.y1 - extent, full.x1, full.y1),
    }
}

/// Radii rounding only the two corners on `edge`.
pub fn anchored_radii(edge: Edge, radius: f64) -> RoundedRectRadii {
    let r = non_negative(radius);
    match edge {
        Edge::Top => RoundedRectRadii::new(r, r, 0.0, 0.0),
        Edge::Bottom => RoundedRectRadii::new(0.0, 0.0, r, r),
    }
}

/// Lay out one band.
pub fn band_layout(
    edge: Edge,
    band: &Band,
    stack_index: usize,
    style: &RenderStyle,
) -> BandLayout {
    BandLayout {
        edge,
        rect: anchored_rect(edge, band.remaining_height, style.viewport),
        radii: anchored_radii(edge, style.corner_radius),
        stack_index,
    }
}

/// Drive `backend` through every active edge of `blur`, top first.
pub fn paint_bands<B: BandBackend + ?Sized>(
    backend: &mut B,
    blur: &ProgressiveBlur,
    style: &RenderStyle,
) -> FineBlurResult<()> {
    for set in blur.band_sets() {
        let region = anchored_rect(set.edge, set.fade_height, style.viewport);
        backend.begin_edge(set, region)?;
        for (stack_index, band) in set.iter().enumerate() {
            let layout = band_layout(set.edge, band, stack_index, style);
            tracing::trace!(
                edge = ?set.edge,
                index = band.index,
                height = band.remaining_height,
                blur = band.blur_radius,
                "paint band"
            );
            backend.draw_band(band, &layout)?;
        }
        backend.end_edge(set.edge)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/mod.rs"]
mod tests;
