//! Fineblur generates the layer stack behind a "progressive blur": a set of
//! overlapping, edge-anchored bands whose blurs compound into a smooth ramp.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: `fade_height -> BandCountPlan` (how many 2px fine bands)
//! 2. **Partition**: remaining height after each band (fine steps, then `(k+1)^2`)
//! 3. **Coverage**: share of the fade region each band covers
//! 4. **Allocate**: per-band blur radii whose quadrature sum equals the requested blur
//! 5. **Assemble**: `BandSet`s per edge, edge-first, with only band 1 tinted
//! 6. **Render** (optional): drive a [`BandBackend`] such as [`CssBackend`] or [`CpuBackend`]
//!
//! Band generation is pure and infallible: bad inputs are clamped, and an
//! empty fade region produces an empty band set.
//!
//! ```
//! use fineblur::{FadeConfig, Side, generate};
//!
//! let blur = generate(&FadeConfig::new(24.0, 120.0, "rgba(255,255,255,0.85)", Side::Both));
//! let top = blur.top.as_ref().unwrap();
//! assert_eq!(top.len(), 20);
//! assert!((top.effective_blur() - 24.0).abs() < 1e-9);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layers;
mod render;
mod style;

pub use foundation::core::{BezPath, Canvas, Rect, Rgba8Premul, RoundedRectRadii};
pub use foundation::error::{FineBlurError, FineBlurResult};
pub use foundation::math::{MAX_FADE_HEIGHT, quadrature_sum};
pub use layers::allocate::allocate_blur;
pub use layers::assemble::{
    Band, BandSet, EdgeGradient, LayerProfile, ProgressiveBlur, Tint, build_band_set, generate,
};
pub use layers::coverage::compute_coverage;
pub use layers::partition::partition_heights;
pub use layers::plan::{
    BandCountPlan, FINE_REGIME_LIMIT, FINE_STEP, MAX_FINE_BANDS, band_step, layer_count,
    plan_band_counts,
};
pub use render::blur::{MAX_KERNEL_RADIUS, MIN_SIGMA, blur_region, kernel_radius};
pub use render::cpu::CpuBackend;
pub use render::css::{CssBackend, render_css};
pub use render::frame::{FrameRGBA, PixelBounds};
pub use render::shape::{band_path, fit_radii};
pub use render::{
    BandBackend, BandLayout, RenderStyle, anchored_radii, anchored_rect, band_layout, paint_bands,
};
pub use style::color::{Color, parse_color};
pub use style::config::{BlurSettings, Edge, FadeConfig, Preset, SWATCHES, Side};
