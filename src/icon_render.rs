//! Icon artwork: a radially shaded purple disc with a white dollar sign
//!
//! Rendering is a pure function of the icon size and the font that happens to
//! be available, so two renders with the same inputs are byte-identical.

use crate::typeface::Typeface;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Bold sans-serif face used for the dollar sign when it is installed
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Colour of the outermost ring
pub const GRADIENT_INNER: [u8; 3] = [102, 126, 234];
/// Colour the rings approach towards the centre
pub const GRADIENT_OUTER: [u8; 3] = [118, 75, 162];

const GLYPH: &str = "$";
const GLYPH_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Render a `size`x`size` icon, lettered with [`DEFAULT_FONT_PATH`] if possible
pub fn render(size: u32) -> RgbaImage {
    render_with_font(size, Path::new(DEFAULT_FONT_PATH))
}

/// Render a `size`x`size` icon, lettered with the TrueType face at `font_path`
/// or with the built-in face when that one can't be loaded
pub fn render_with_font(size: u32, font_path: &Path) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    draw_gradient_disc(&mut img);

    let typeface = Typeface::load(font_path, font_size(size));
    draw_centered_glyph(&mut img, &typeface);

    img
}

/// Centre of the disc on both axes
pub fn disc_center(size: u32) -> u32 {
    size / 2
}

/// Radius of the outermost ring; 90% of the icon's width, halved
pub fn disc_radius(size: u32) -> u32 {
    ((size as f64 * 0.9) as u32) / 2
}

/// Pixels per em for the dollar sign
pub fn font_size(size: u32) -> u32 {
    (size as f64 * 0.55) as u32
}

/// Colour of ring `i` (1..=radius). Ring `radius` is exactly [`GRADIENT_INNER`];
/// smaller rings move linearly towards [`GRADIENT_OUTER`] without reaching it.
pub fn ring_color(i: u32, radius: u32) -> Rgba<u8> {
    let ratio = i as f64 / radius as f64;
    let channel = |inner: u8, outer: u8| {
        (inner as f64 + (outer as f64 - inner as f64) * (1.0 - ratio)) as u8
    };

    Rgba([
        channel(GRADIENT_INNER[0], GRADIENT_OUTER[0]),
        channel(GRADIENT_INNER[1], GRADIENT_OUTER[1]),
        channel(GRADIENT_INNER[2], GRADIENT_OUTER[2]),
        255,
    ])
}

/// Paint the shaded disc by stacking opaque discs from the largest ring inwards
pub fn draw_gradient_disc(img: &mut RgbaImage) {
    let size = img.width().min(img.height());
    let center = disc_center(size);
    let radius = disc_radius(size);

    for i in (1..=radius).rev() {
        fill_disc(img, center, i, ring_color(i, radius));
    }
}

/// Fill the disc inscribed in the inclusive box `[center - r, center + r]`
fn fill_disc(img: &mut RgbaImage, center: u32, r: u32, color: Rgba<u8>) {
    let (c, r) = (center as i64, r as i64);
    // (dx² + dy²) ≤ (r + ½)², scaled by 4 to stay in integers
    let limit = (2 * r + 1) * (2 * r + 1);

    let y_range = (c - r).max(0)..=(c + r).min(img.height() as i64 - 1);
    for y in y_range {
        let x_range = (c - r).max(0)..=(c + r).min(img.width() as i64 - 1);
        for x in x_range {
            let (dx, dy) = (x - c, y - c);
            if 4 * (dx * dx + dy * dy) <= limit {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Letter the icon with the dollar sign, centred on its ink and nudged up by
/// 5% of the icon size to sit optically in the middle
fn draw_centered_glyph(img: &mut RgbaImage, typeface: &Typeface) {
    let Some(bbox) = typeface.text_bbox(GLYPH) else {
        return;
    };

    let size = img.width() as i32;
    let lift = (img.width() as f64 * 0.05) as i32;
    let x = (size - bbox.width()).div_euclid(2);
    let y = (size - bbox.height()).div_euclid(2) - lift;

    typeface.draw_text(img, x, y, GLYPH, GLYPH_COLOR);
}
