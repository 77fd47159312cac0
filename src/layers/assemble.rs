use serde::Serialize;

use crate::{
    foundation::math::{quadrature_sum, sanitize_fade_height},
    layers::{
        allocate::allocate_blur,
        coverage::compute_coverage,
        partition::partition_heights,
        plan::{BandCountPlan, plan_band_counts},
    },
    style::{
        color::Color,
        config::{Edge, FadeConfig},
    },
};

/// Gradient from the edge color at the anchored edge to transparent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EdgeGradient {
    /// Edge the opaque end of the gradient sits on.
    pub edge: Edge,
    /// Color at the anchored edge.
    pub color: Color,
}

impl EdgeGradient {
    /// CSS `background` value for this gradient.
    pub fn to_css(self) -> String {
        format!(
            "linear-gradient({}deg, {}, transparent)",
            self.edge.gradient_angle_deg(),
            self.color.to_css()
        )
    }

    /// Alpha multiplier at normalized distance `t` from the anchored edge.
    pub fn falloff(self, t: f64) -> f64 {
        1.0 - t.clamp(0.0, 1.0)
    }
}

/// Paint carried by a band on top of its blur.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tint {
    /// Band only contributes blur.
    Transparent,
    /// Edge color fading out toward the far side of the band.
    Gradient(EdgeGradient),
}

impl Tint {
    /// CSS `background` value for this tint.
    pub fn to_css(self) -> String {
        match self {
            Self::Transparent => "rgba(0, 0, 0, 0)".to_owned(),
            Self::Gradient(g) => g.to_css(),
        }
    }
}

/// One blurred strip anchored at a content edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Band {
    /// 1-based position in computation order (1 is the tallest band).
    pub index: u32,
    /// Extent from the anchored edge, in pixels.
    pub remaining_height: f64,
    /// Gaussian blur radius applied to the backdrop under this band.
    pub blur_radius: f64,
    /// Paint over the blurred backdrop.
    pub tint: Tint,
}

/// Bands for one edge, in delivery order.
///
/// The first band has the smallest height and sits nearest the anchored
/// edge; band 1 (tallest, tinted) comes last so it stacks on top.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BandSet {
    /// Edge the bands hang from.
    pub edge: Edge,
    /// Height of the containing fade region.
    pub fade_height: f64,
    /// Bands, edge-first.
    pub bands: Vec<Band>,
}

impl BandSet {
    /// Number of bands.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// True when the fade region produced no bands.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Bands in delivery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Band> {
        self.bands.iter()
    }

    /// Composite blur of the stacked bands, `sqrt(sum(sigma^2))`.
    pub fn effective_blur(&self) -> f64 {
        let radii: Vec<f64> = self.bands.iter().map(|b| b.blur_radius).collect();
        quadrature_sum(&radii)
    }
}

impl<'a> IntoIterator for &'a BandSet {
    type Item = &'a Band;
    type IntoIter = std::slice::Iter<'a, Band>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Edge-independent geometry and blur per band, in computation order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LayerProfile {
    /// Fine/coarse split.
    pub plan: BandCountPlan,
    /// Remaining height after each band (the last may be negative).
    pub heights: Vec<f64>,
    /// Coverage fraction per band.
    pub coverage: Vec<f64>,
    /// Blur radius per band.
    pub blur: Vec<f64>,
}

impl LayerProfile {
    /// Run planner, partitioner, coverage and blur allocation.
    #[tracing::instrument]
    pub fn compute(total_blur: f64, fade_height: f64) -> Self {
        let fade_height = sanitize_fade_height(fade_height);
        let plan = plan_band_counts(fade_height);
        let heights = partition_heights(fade_height, plan.fine_count);
        let coverage = compute_coverage(fade_height, &heights);
        let blur = allocate_blur(total_blur, &coverage);
        tracing::debug!(
            fine_count = plan.fine_count,
            layers = heights.len(),
            "computed layer profile"
        );
        Self {
            plan,
            heights,
            coverage,
            blur,
        }
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// True when there are no bands.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Assemble the bands for `edge`, reversed into delivery order.
    pub fn band_set(&self, edge: Edge, fade_height: f64, color: Color) -> BandSet {
        let mut bands: Vec<Band> = self
            .heights
            .iter()
            .zip(&self.blur)
            .enumerate()
            .map(|(i, (&h, &blur_radius))| {
                let index = i as u32 + 1;
                let tint = if index == 1 {
                    Tint::Gradient(EdgeGradient { edge, color })
                } else {
                    Tint::Transparent
                };
                Band {
                    index,
                    remaining_height: h.max(0.0),
                    blur_radius,
                    tint,
                }
            })
            .collect();
        bands.reverse();

        BandSet {
            edge,
            fade_height: sanitize_fade_height(fade_height),
            bands,
        }
    }
}

/// Band sets for every active edge of one config.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgressiveBlur {
    /// Sanitized input.
    pub config: FadeConfig,
    /// Bands hanging from the top edge, if active.
    pub top: Option<BandSet>,
    /// Bands rising from the bottom edge, if active.
    pub bottom: Option<BandSet>,
}

impl ProgressiveBlur {
    /// Band set for `edge`, if that edge is active.
    pub fn band_set(&self, edge: Edge) -> Option<&BandSet> {
        match edge {
            Edge::Top => self.top.as_ref(),
            Edge::Bottom => self.bottom.as_ref(),
        }
    }

    /// Active band sets, top first.
    pub fn band_sets(&self) -> impl Iterator<Item = &BandSet> {
        self.top.iter().chain(self.bottom.iter())
    }
}

/// Build the bands for a single edge, regardless of `config.side`.
pub fn build_band_set(config: &FadeConfig, edge: Edge) -> BandSet {
    let config = config.sanitized();
    LayerProfile::compute(config.total_blur, config.fade_height).band_set(
        edge,
        config.fade_height,
        config.edge_color,
    )
}

/// Build every band set `config.side` asks for.
///
/// The layer profile is computed once; each edge gets its own owned copy.
#[tracing::instrument]
pub fn generate(config: &FadeConfig) -> ProgressiveBlur {
    let config = config.sanitized();
    let profile = LayerProfile::compute(config.total_blur, config.fade_height);
    let set_for = |edge: Edge| {
        config
            .side
            .includes(edge)
            .then(|| profile.band_set(edge, config.fade_height, config.edge_color))
    };

    ProgressiveBlur {
        top: set_for(Edge::Top),
        bottom: set_for(Edge::Bottom),
        config,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/assemble.rs"]
mod tests;
