use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::{core::Rgba8Premul, math::unit_to_u8};

/// Straight-alpha sRGB color with 8-bit channels and a unit alpha.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Color {
    /// Color used whenever a color string cannot be parsed.
    pub const FALLBACK: Self = Self::rgba(255, 255, 255, 0.85);

    /// Alpha assigned to `#RRGGBB` strings.
    pub const DEFAULT_HEX_ALPHA: f64 = 0.85;

    /// Construct a color from its channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// CSS functional notation, e.g. `rgba(255, 255, 255, 0.85)`.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Premultiplied 8-bit form for rasterization. Alpha is clamped to `[0, 1]`.
    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, unit_to_u8(self.a))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_color(s))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            RgbaObj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "one")]
                a: f64,
            },
        }

        fn one() -> f64 {
            1.0
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(s) => parse_color(&s),
            Repr::RgbaObj { r, g, b, a } => Color::rgba(r, g, b, a),
        })
    }
}

/// Parse `#RRGGBB`, `#RRGGBBAA` or `rgba(r, g, b, a)`.
///
/// Never fails: anything unrecognized yields [`Color::FALLBACK`].
pub fn parse_color(s: &str) -> Color {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix('#') {
        parse_hex(hex)
    } else if let Some(args) = strip_prefix_ignore_case(s, "rgba(") {
        args.strip_suffix(')').and_then(parse_rgba_args)
    } else {
        None
    };
    parsed.unwrap_or(Color::FALLBACK)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}

fn parse_hex(hex: &str) -> Option<Color> {
    fn hex_byte(pair: &str) -> Option<u8> {
        u8::from_str_radix(pair, 16).ok()
    }

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => Some(Color::rgba(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            Color::DEFAULT_HEX_ALPHA,
        )),
        8 => Some(Color::rgba(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            f64::from(hex_byte(&hex[6..8])?) / 255.0,
        )),
        _ => None,
    }
}

fn parse_rgba_args(args: &str) -> Option<Color> {
    let mut parts = args.split(',').map(|p| p.trim().parse::<f64>().ok());
    let r = parts.next()??;
    let g = parts.next()??;
    let b = parts.next()??;
    let a = parts.next()??;
    if parts.next().is_some() || !a.is_finite() {
        return None;
    }

    fn channel(v: f64) -> Option<u8> {
        v.is_finite().then(|| v.round().clamp(0.0, 255.0) as u8)
    }

    Some(Color::rgba(channel(r)?, channel(g)?, channel(b)?, a))
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
