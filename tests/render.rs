use image::Rgba;
use std::path::Path;
use tracker_icons::icon_render::{
    disc_center, disc_radius, draw_gradient_disc, font_size, render, render_with_font,
    ring_color, DEFAULT_FONT_PATH, GRADIENT_INNER, GRADIENT_OUTER,
};
use tracker_icons::typeface::Typeface;

const MISSING_FONT: &str = "/nonexistent/fonts/NoSuchFont-Bold.ttf";

fn fallback_render(size: u32) -> image::RgbaImage {
    render_with_font(size, Path::new(MISSING_FONT))
}

#[test]
fn test_render_dimensions_match_size() {
    for size in [1, 2, 3, 16, 17, 48, 64, 128] {
        let icon = render(size);
        assert_eq!(icon.dimensions(), (size, size), "render({size})");

        let icon = fallback_render(size);
        assert_eq!(icon.dimensions(), (size, size), "fallback render({size})");
    }
}

#[test]
fn test_geometry_constants() {
    assert_eq!((disc_center(16), disc_radius(16)), (8, 7));
    assert_eq!((disc_center(48), disc_radius(48)), (24, 21));
    assert_eq!((disc_center(128), disc_radius(128)), (64, 57));
    assert_eq!(disc_radius(1), 0);

    assert_eq!(font_size(16), 8);
    assert_eq!(font_size(48), 26);
    assert_eq!(font_size(128), 70);
}

#[test]
fn test_alpha_inside_and_outside_disc() {
    for size in [16, 48, 128] {
        let icon = render(size);
        let c = disc_center(size);
        let r = disc_radius(size);

        // Centre and the four cardinal points of the outermost ring are opaque
        for (x, y) in [(c, c), (c - r, c), (c + r, c), (c, c - r), (c, c + r)] {
            assert_eq!(icon.get_pixel(x, y)[3], 255, "size {size} at ({x}, {y})");
        }

        // Just past the ring on the near edges, and the image edges
        for (x, y) in [(c - r - 1, c), (c, c - r - 1), (0, c), (c, 0), (0, 0)] {
            assert_eq!(icon.get_pixel(x, y)[3], 0, "size {size} at ({x}, {y})");
        }
    }

    // 128px leaves room on the far edges too
    let icon = render(128);
    assert_eq!(icon.get_pixel(127, 64)[3], 0);
    assert_eq!(icon.get_pixel(64, 127)[3], 0);
    assert_eq!(icon.get_pixel(122, 64)[3], 0);
}

#[test]
fn test_ring_colors() {
    // The outermost ring is exactly the inner colour stop
    for radius in [7, 21, 57] {
        let [r, g, b] = GRADIENT_INNER;
        assert_eq!(ring_color(radius, radius), Rgba([r, g, b, 255]));
    }

    // The centre ring approaches the outer stop but stops short of it
    assert_eq!(ring_color(1, 7), Rgba([115, 82, 172, 255]));
    assert_eq!(ring_color(1, 21), Rgba([117, 77, 165, 255]));
    assert_eq!(ring_color(1, 57), Rgba([117, 75, 163, 255]));

    let [r, g, b] = GRADIENT_OUTER;
    assert_ne!(ring_color(1, 57), Rgba([r, g, b, 255]));
    assert_eq!(ring_color(1, 1), Rgba([102, 126, 234, 255]));
}

#[test]
fn test_disc_pixels_follow_rings() {
    let mut img = image::RgbaImage::new(128, 128);
    draw_gradient_disc(&mut img);

    assert_eq!(*img.get_pixel(7, 64), ring_color(57, 57));
    assert_eq!(*img.get_pixel(64, 121), ring_color(57, 57));
    assert_eq!(*img.get_pixel(64, 64), ring_color(1, 57));
    assert_eq!(*img.get_pixel(74, 64), ring_color(10, 57));
    assert_eq!(*img.get_pixel(6, 64), Rgba([0, 0, 0, 0]));
}

#[test]
fn test_tiny_sizes_draw_no_disc() {
    let icon = fallback_render(1);
    assert_eq!(icon.dimensions(), (1, 1));

    let mut img = image::RgbaImage::new(2, 2);
    draw_gradient_disc(&mut img);
    assert!(img.pixels().all(|p| p[3] == 0));
}

#[test]
fn test_render_is_deterministic() {
    for size in [16, 48, 128] {
        assert_eq!(render(size).into_raw(), render(size).into_raw());
        assert_eq!(
            fallback_render(size).into_raw(),
            fallback_render(size).into_raw()
        );
    }
}

#[test]
fn test_fallback_glyph_is_white_and_centred() {
    let icon = fallback_render(128);

    // 5x7 glyph at ((128 - 5) / 2, (128 - 7) / 2 - 6) = (61, 54)
    let white = Rgba([255, 255, 255, 255]);
    assert_eq!(*icon.get_pixel(63, 54), white);
    assert_eq!(*icon.get_pixel(62, 57), white);
    assert_eq!(*icon.get_pixel(64, 57), white);
    assert_eq!(*icon.get_pixel(63, 60), white);

    // Gaps in the glyph keep the disc colour
    assert_eq!(*icon.get_pixel(61, 54), ring_color(10, 57));

    // The glyph sits above the centre pixel
    assert_eq!(*icon.get_pixel(64, 64), ring_color(1, 57));
}

#[test]
fn test_fallback_small_icon() {
    let icon = fallback_render(16);
    // 5x7 glyph at (5, 4), no lift at this size
    assert_eq!(*icon.get_pixel(7, 4), Rgba([255, 255, 255, 255]));
    assert_eq!(*icon.get_pixel(8, 8), ring_color(1, 7));
}

#[test]
fn test_default_font_letters_the_icon() {
    let icon = render(128);
    let c = disc_center(128);
    let r = disc_radius(128);

    // Whichever face is used, some pixel inside the disc is pure white
    let has_white = (c - r / 2..c + r / 2)
        .flat_map(|y| (c - r / 2..c + r / 2).map(move |x| (x, y)))
        .any(|(x, y)| *icon.get_pixel(x, y) == Rgba([255, 255, 255, 255]));
    assert!(has_white);
}

#[test]
fn test_outline_glyph_lands_at_bbox_offset() {
    let font = Path::new(DEFAULT_FONT_PATH);
    if !font.exists() {
        eprintln!("skipping: {DEFAULT_FONT_PATH} is not installed");
        return;
    }

    let size = 128;
    let face = Typeface::load(font, font_size(size));
    assert!(!face.is_fallback());
    let bbox = face.text_bbox("$").expect("'$' should leave ink");

    // Layout origin is centred on the ink size and lifted by 5% of the icon
    let origin_x = (size as i32 - bbox.width()).div_euclid(2);
    let origin_y = (size as i32 - bbox.height()).div_euclid(2) - 6;
    let expected = (
        origin_x + bbox.left,
        origin_y + bbox.top,
        origin_x + bbox.right,
        origin_y + bbox.bottom,
    );

    let icon = render_with_font(size, font);
    let mut disc = image::RgbaImage::new(size, size);
    draw_gradient_disc(&mut disc);

    let inked: Vec<(i32, i32)> = icon
        .enumerate_pixels()
        .filter(|&(x, y, p)| p != disc.get_pixel(x, y))
        .map(|(x, y, _)| (x as i32, y as i32))
        .collect();
    assert!(!inked.is_empty());

    let left = inked.iter().map(|p| p.0).min().unwrap();
    let top = inked.iter().map(|p| p.1).min().unwrap();
    let right = inked.iter().map(|p| p.0).max().unwrap() + 1;
    let bottom = inked.iter().map(|p| p.1).max().unwrap() + 1;

    // Every inked pixel lies in the measured box, and the box is (nearly) filled
    assert!(
        left >= expected.0 && top >= expected.1,
        "ink starts at ({left}, {top}), box {expected:?}"
    );
    assert!(
        right <= expected.2 && bottom <= expected.3,
        "ink ends at ({right}, {bottom}), box {expected:?}"
    );
    assert!(left - expected.0 <= 1 && top - expected.1 <= 1);
    assert!(expected.2 - right <= 1 && expected.3 - bottom <= 1);

    // DejaVu Sans Bold puts the 70px '$' at roughly x 50..87, y 37..99
    assert!((48..=52).contains(&left), "left {left}");
    assert!((35..=39).contains(&top), "top {top}");
    assert!((86..=90).contains(&right), "right {right}");
    assert!((98..=102).contains(&bottom), "bottom {bottom}");
}
