use std::fmt::Write as _;

use crate::{
    foundation::{core::Rect, error::FineBlurResult},
    layers::assemble::{Band, BandSet, ProgressiveBlur},
    render::{BandBackend, BandLayout, RenderStyle, paint_bands},
    style::config::Edge,
};

/// Emits one CSS rule per band, in stacking order.
///
/// Class names are `{prefix}-{edge}` for the fade container and
/// `{prefix}-{edge}-layer-{index}` for each band.
#[derive(Clone, Debug)]
pub struct CssBackend {
    prefix: String,
    out: String,
}

impl Default for CssBackend {
    fn default() -> Self {
        Self::new("fineblur")
    }
}

impl CssBackend {
    /// Backend using `prefix` for every class name.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            out: String::new(),
        }
    }

    /// The stylesheet written so far.
    pub fn finish(self) -> String {
        self.out
    }

    fn rule(&mut self, selector: &str, decls: &[(&str, String)]) {
        // Writing into a String cannot fail.
        let _ = writeln!(self.out, ".{selector} {{");
        for (prop, value) in decls {
            let _ = writeln!(self.out, "  {prop}: {value};");
        }
        let _ = writeln!(self.out, "}}");
    }
}

impl BandBackend for CssBackend {
    fn begin_edge(&mut self, set: &BandSet, _region: Rect) -> FineBlurResult<()> {
        let anchor = set.edge.css_anchor();
        let selector = format!("{}-{anchor}", self.prefix);
        self.rule(
            &selector,
            &[
                ("position", "absolute".to_owned()),
                (anchor, "0".to_owned()),
                ("left", "0".to_owned()),
                ("width", "100%".to_owned()),
                ("height", px(set.fade_height)),
                ("pointer-events", "none".to_owned()),
            ],
        );
        Ok(())
    }

    fn draw_band(&mut self, band: &Band, layout: &BandLayout) -> FineBlurResult<()> {
        let anchor = layout.edge.css_anchor();
        let selector = format!("{}-{anchor}-layer-{}", self.prefix, band.index);
        let (left_corner, right_corner) = match layout.edge {
            Edge::Top => (layout.radii.top_left, layout.radii.top_right),
            Edge::Bottom => (layout.radii.bottom_left, layout.radii.bottom_right),
        };
        let left_prop = format!("border-{anchor}-left-radius");
        let right_prop = format!("border-{anchor}-right-radius");
        self.rule(
            &selector,
            &[
                ("position", "absolute".to_owned()),
                ("left", "0".to_owned()),
                (anchor, "0".to_owned()),
                ("width", "100%".to_owned()),
                ("height", px(band.remaining_height)),
                ("z-index", (layout.stack_index + 1).to_string()),
                ("background", band.tint.to_css()),
                ("backdrop-filter", format!("blur({})", px(band.blur_radius))),
                (left_prop.as_str(), px(left_corner)),
                (right_prop.as_str(), px(right_corner)),
            ],
        );
        Ok(())
    }

    fn end_edge(&mut self, _edge: Edge) -> FineBlurResult<()> {
        self.out.push('\n');
        Ok(())
    }
}

/// Render a whole stylesheet with the default class prefix.
pub fn render_css(blur: &ProgressiveBlur, style: &RenderStyle) -> FineBlurResult<String> {
    let mut backend = CssBackend::default();
    paint_bands(&mut backend, blur, style)?;
    Ok(backend.finish())
}

/// Pixel length rounded to thousandths, without trailing zeros.
fn px(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0 + 0.0;
    format!("{rounded}px")
}

#[cfg(test)]
#[path = "../../tests/unit/render/css.rs"]
mod tests;
