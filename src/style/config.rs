use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    foundation::{
        error::{FineBlurError, FineBlurResult},
        math::{non_negative, sanitize_fade_height},
    },
    style::color::{Color, parse_color},
};

/// One content edge a band set is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Upper edge; bands hang down from `y = 0`.
    Top,
    /// Lower edge; bands grow up from the bottom of the viewport.
    Bottom,
}

impl Edge {
    /// CSS `linear-gradient` angle running from this edge toward the far side.
    pub fn gradient_angle_deg(self) -> u32 {
        match self {
            Self::Top => 180,
            Self::Bottom => 0,
        }
    }

    /// CSS property anchoring a band to this edge.
    pub fn css_anchor(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Which edge(s) of the content receive a progressive blur.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Top edge only.
    Top,
    /// Bottom edge only.
    Bottom,
    /// Both edges, with mirrored band sets.
    #[default]
    Both,
}

impl Side {
    /// Edges covered by this side selection, top first.
    pub fn edges(self) -> &'static [Edge] {
        match self {
            Self::Top => &[Edge::Top],
            Self::Bottom => &[Edge::Bottom],
            Self::Both => &[Edge::Top, Edge::Bottom],
        }
    }

    /// Whether `edge` is part of this selection.
    pub fn includes(self, edge: Edge) -> bool {
        self.edges().contains(&edge)
    }
}

/// Input to band generation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Requested composite blur radius in pixels.
    #[serde(alias = "blur")]
    pub total_blur: f64,
    /// Height of the fade region in pixels.
    #[serde(alias = "height")]
    pub fade_height: f64,
    /// Tint applied by the band nearest the content edge.
    #[serde(alias = "color")]
    pub edge_color: Color,
    /// Active edge(s).
    #[serde(alias = "position")]
    pub side: Side,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            total_blur: 5.0,
            fade_height: 70.0,
            edge_color: Color::rgba(255, 255, 255, 0.85),
            side: Side::Both,
        }
    }
}

impl FadeConfig {
    /// Build a config, parsing `color` with the lenient color parser.
    pub fn new(total_blur: f64, fade_height: f64, color: &str, side: Side) -> Self {
        Self {
            total_blur,
            fade_height,
            edge_color: parse_color(color),
            side,
        }
        .sanitized()
    }

    /// Copy with negative, NaN and infinite blur clamped to zero.
    ///
    /// The fade height is capped at [`crate::MAX_FADE_HEIGHT`] (`+inf` lands
    /// on the cap); taller regions produce the same bands as the cap itself.
    pub fn sanitized(self) -> Self {
        Self {
            total_blur: non_negative(self.total_blur),
            fade_height: sanitize_fade_height(self.fade_height),
            ..self
        }
    }
}

/// Full caller-side configuration: the fade plus presentation details.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlurSettings {
    /// Band generation input.
    #[serde(flatten)]
    pub fade: FadeConfig,
    /// Radius for the two corners on the anchored edge of each band.
    #[serde(default, alias = "border")]
    pub corner_radius: f64,
}

impl BlurSettings {
    /// Parse settings from a JSON document.
    pub fn from_json_str(s: &str) -> FineBlurResult<Self> {
        let settings: Self =
            serde_json::from_str(s).map_err(|e| FineBlurError::serde(e.to_string()))?;
        Ok(settings.sanitized())
    }

    /// Read and parse a JSON settings file.
    pub fn from_path(path: &Path) -> FineBlurResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            FineBlurError::config(format!("read settings '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    /// Copy with every numeric field clamped to a usable range.
    pub fn sanitized(self) -> Self {
        Self {
            fade: self.fade.sanitized(),
            corner_radius: non_negative(self.corner_radius),
        }
    }
}

/// Ready-made settings from the demo page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// White tint, strong blur on both edges.
    WhiteBoth,
    /// Untinted blur along the top.
    ClearTop,
    /// Faint light tint along the bottom.
    LightBottom,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Preset; 3] = [Self::WhiteBoth, Self::ClearTop, Self::LightBottom];

    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::WhiteBoth => "white-both",
            Self::ClearTop => "clear-top",
            Self::LightBottom => "light-bottom",
        }
    }

    /// The fade this preset stands for.
    pub fn fade_config(self) -> FadeConfig {
        match self {
            Self::WhiteBoth => FadeConfig::new(24.0, 120.0, "rgba(255,255,255,0.85)", Side::Both),
            Self::ClearTop => FadeConfig::new(32.0, 140.0, "#ffffff00", Side::Top),
            Self::LightBottom => {
                FadeConfig::new(16.0, 100.0, "rgba(255,255,255,0.15)", Side::Bottom)
            }
        }
    }
}

/// Edge colors offered as quick picks next to the free-form color input.
pub const SWATCHES: [&str; 5] = [
    "rgba(255,255,255,0.85)",
    "rgba(0,0,0,0.35)",
    "#ffffff00",
    "#ff6b6bb3",
    "#4f46e5cc",
];

#[cfg(test)]
#[path = "../../tests/unit/style/config.rs"]
mod tests;
