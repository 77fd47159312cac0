use crate::foundation::{
    core::{Canvas, Rect, Rgba8Premul},
    error::{FineBlurError, FineBlurResult},
};

/// Owned RGBA8 pixel buffer, premultiplied alpha, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Fully transparent frame.
    pub fn new(canvas: Canvas) -> Self {
        Self::filled(canvas, Rgba8Premul::transparent())
    }

    /// Frame filled with one color.
    pub fn filled(canvas: Canvas, color: Rgba8Premul) -> Self {
        let px = canvas.width as usize * canvas.height as usize;
        Self {
            width: canvas.width,
            height: canvas.height,
            data: color.to_array().repeat(px),
        }
    }

    /// Wrap an existing premultiplied buffer.
    pub fn from_premul(canvas: Canvas, data: Vec<u8>) -> FineBlurResult<Self> {
        let expected = byte_len(canvas)?;
        if data.len() != expected {
            return Err(FineBlurError::render(format!(
                "frame buffer has {} bytes, expected {expected}",
                data.len()
            )));
        }
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data,
        })
    }

    /// Opaque checkerboard with thin rules, so blur is easy to see.
    pub fn test_pattern(canvas: Canvas) -> Self {
        const CELL: u32 = 16;
        let light = Rgba8Premul::from_straight_rgba(236, 238, 244, 255);
        let dark = Rgba8Premul::from_straight_rgba(38, 42, 56, 255);
        let accent = Rgba8Premul::from_straight_rgba(79, 70, 229, 255);

        let mut frame = Self::new(canvas);
        for y in 0..canvas.height {
            for x in 0..canvas.width {
                let color = if y % CELL == CELL / 2 {
                    accent
                } else if ((x / CELL) + (y / CELL)) % 2 == 0 {
                    light
                } else {
                    dark
                };
                frame.set_pixel(x, y, color.to_array());
            }
        }
        frame
    }

    /// Import a straight-alpha image.
    pub fn from_image(img: &image::RgbaImage) -> Self {
        let data = img
            .pixels()
            .flat_map(|p| {
                let [r, g, b, a] = p.0;
                Rgba8Premul::from_straight_rgba(r, g, b, a).to_array()
            })
            .collect();
        Self {
            width: img.width(),
            height: img.height(),
            data,
        }
    }

    /// Export as a straight-alpha image.
    pub fn to_image(&self) -> FineBlurResult<image::RgbaImage> {
        let data = self
            .data
            .chunks_exact(4)
            .flat_map(|px| unpremultiply([px[0], px[1], px[2], px[3]]))
            .collect();
        image::RgbaImage::from_raw(self.width, self.height, data)
            .ok_or_else(|| FineBlurError::render("frame buffer does not match its dimensions"))
    }

    /// Frame dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Premultiplied pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Bytes of rows `y0..y1`, full width. The range is clipped to the frame.
    pub fn rows(&self, y0: u32, y1: u32) -> &[u8] {
        let stride = self.width as usize * 4;
        let y1 = y1.min(self.height) as usize;
        let y0 = (y0 as usize).min(y1);
        &self.data[y0 * stride..y1 * stride]
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

/// Half-open pixel rectangle inside a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBounds {
    /// First column.
    pub x0: u32,
    /// First row.
    pub y0: u32,
    /// One past the last column.
    pub x1: u32,
    /// One past the last row.
    pub y1: u32,
}

impl PixelBounds {
    /// Every pixel `rect` touches, clipped to `canvas`. `None` when nothing is left.
    pub fn of(rect: Rect, canvas: Canvas) -> Option<Self> {
        let clip = |v: f64, max: u32| v.clamp(0.0, f64::from(max)) as u32;
        let bounds = Self {
            x0: clip(rect.x0.floor(), canvas.width),
            y0: clip(rect.y0.floor(), canvas.height),
            x1: clip(rect.x1.ceil(), canvas.width),
            y1: clip(rect.y1.ceil(), canvas.height),
        };
        (bounds.x0 < bounds.x1 && bounds.y0 < bounds.y1).then_some(bounds)
    }

    /// Columns covered.
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Rows covered.
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// True when the bounds lie inside `canvas`.
    pub fn fits(&self, canvas: Canvas) -> bool {
        self.x0 < self.x1
            && self.y0 < self.y1
            && self.x1 <= canvas.width
            && self.y1 <= canvas.height
    }
}

fn byte_len(canvas: Canvas) -> FineBlurResult<usize> {
    (canvas.width as usize)
        .checked_mul(canvas.height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| FineBlurError::render("frame buffer size overflow"))
}

fn unpremultiply(px: [u8; 4]) -> [u8; 4] {
    let a = px[3];
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let un = |c: u8| ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8;
    [un(px[0]), un(px[1]), un(px[2]), a]
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
