//! Glyph sources for the icon's centre mark
//!
//! An icon is lettered either with an outline TrueType face rasterized by
//! `rusttype`, or, when that face cannot be loaded, with a tiny built-in 5x7
//! bitmap face. Both expose the same measuring and drawing operations so the
//! renderer never needs to know which one it got.

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, PositionedGlyph, Scale};
use std::path::Path;

/// Ink bounding box of a piece of text, relative to its layout origin
/// (the top-left corner of the line, on the ascender).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    fn union(self, other: BBox) -> BBox {
        BBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A face ready to measure and draw text at one fixed size
#[derive(Debug)]
pub enum Typeface {
    /// Outline face with the scale already resolved from the em size
    Outline {
        font: Font<'static>,
        scale: Scale,
        ascent: f32,
    },
    /// Built-in 5x7 bitmap face; it has a single size
    Bitmap,
}

impl Typeface {
    /// Load the outline face at `path` sized to `px` pixels per em.
    /// Any failure silently falls back to the bitmap face.
    pub fn load(path: &Path, px: u32) -> Typeface {
        Self::try_load(path, px).unwrap_or(Typeface::Bitmap)
    }

    /// Load the outline face at `path` sized to `px` pixels per em
    pub fn try_load(path: &Path, px: u32) -> Result<Typeface> {
        if px == 0 {
            anyhow::bail!("Font size must be at least one pixel");
        }

        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read font file {}", path.display()))?;
        let font = Font::try_from_vec(data)
            .with_context(|| format!("Failed to parse font file {}", path.display()))?;

        // rusttype scales by line height (ascent - descent); convert from em size
        let units_per_em = font.units_per_em();
        if units_per_em == 0 {
            anyhow::bail!("Font {} reports zero units per em", path.display());
        }
        let unscaled = font.v_metrics_unscaled();
        let height = px as f32 * (unscaled.ascent - unscaled.descent) / units_per_em as f32;
        let scale = Scale::uniform(height);
        let ascent = font.v_metrics(scale).ascent;

        Ok(Typeface::Outline {
            font,
            scale,
            ascent,
        })
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Typeface::Bitmap)
    }

    /// Measure the ink of `text` laid out with its origin at (0, 0).
    /// Returns `None` when no character leaves any ink.
    pub fn text_bbox(&self, text: &str) -> Option<BBox> {
        match self {
            Typeface::Outline { .. } => self
                .layout(text, 0, 0)
                .iter()
                .filter_map(|glyph| glyph.pixel_bounding_box())
                .map(|rect| BBox {
                    left: rect.min.x,
                    top: rect.min.y,
                    right: rect.max.x,
                    bottom: rect.max.y,
                })
                .reduce(BBox::union),
            Typeface::Bitmap => bitmap_pixels(text, 0, 0)
                .map(|(x, y)| BBox {
                    left: x,
                    top: y,
                    right: x + 1,
                    bottom: y + 1,
                })
                .reduce(BBox::union),
        }
    }

    /// Draw `text` with its layout origin at (`x`, `y`), blending each
    /// channel toward `color` by glyph coverage. Pixels off the image are
    /// clipped.
    pub fn draw_text(&self, img: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        match self {
            Typeface::Outline { .. } => {
                for glyph in self.layout(text, x, y) {
                    if let Some(rect) = glyph.pixel_bounding_box() {
                        glyph.draw(|gx, gy, coverage| {
                            let mask = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                            blend_pixel(
                                img,
                                rect.min.x + gx as i32,
                                rect.min.y + gy as i32,
                                color,
                                mask,
                            );
                        });
                    }
                }
            }
            Typeface::Bitmap => {
                for (px, py) in bitmap_pixels(text, x, y) {
                    blend_pixel(img, px, py, color, 255);
                }
            }
        }
    }

    fn layout(&self, text: &str, x: i32, y: i32) -> Vec<PositionedGlyph<'_>> {
        match self {
            Typeface::Outline {
                font,
                scale,
                ascent,
            } => font
                .layout(text, *scale, point(x as f32, y as f32 + ascent))
                .collect(),
            Typeface::Bitmap => Vec::new(),
        }
    }
}

const BITMAP_WIDTH: i32 = 5;
const BITMAP_ADVANCE: i32 = BITMAP_WIDTH + 1;

/// Rows of a 5x7 glyph; the low five bits of each row are pixels, bit 4 leftmost
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    match ch {
        '$' => Some([
            0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100,
        ]),
        _ => None,
    }
}

/// Inked pixels of `text` in the bitmap face with its origin at (`x`, `y`);
/// unknown characters leave no ink but still advance the pen
fn bitmap_pixels(text: &str, x: i32, y: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
    text.chars().enumerate().flat_map(move |(i, ch)| {
        let cell_x = x + i as i32 * BITMAP_ADVANCE;
        let rows = glyph5x7(ch).unwrap_or([0; 7]);
        (0..7).flat_map(move |ry| {
            (0..BITMAP_WIDTH)
                .filter(move |rx| rows[ry] & (1u8 << (BITMAP_WIDTH - 1 - rx)) != 0)
                .map(move |rx| (cell_x + rx, y + ry as i32))
        })
    })
}

/// Move every channel of the pixel at (`x`, `y`) toward `color` by `mask`/255
fn blend_pixel(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, mask: u8) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 || mask == 0 {
        return;
    }

    let pixel = img.get_pixel_mut(x as u32, y as u32);
    for channel in 0..4 {
        pixel[channel] = blend_channel(pixel[channel], color[channel], mask);
    }
}

// Rounded fixed-point lerp, exact at mask 0 and 255
fn blend_channel(dst: u8, src: u8, mask: u8) -> u8 {
    let tmp = (src as i32 - dst as i32) * mask as i32 + 128;
    (dst as i32 + (((tmp >> 8) + tmp) >> 8)) as u8
}
