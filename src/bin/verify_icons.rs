use anyhow::{Context, Result};
use image::io::Reader as ImageReader;
use std::path::PathBuf;
use tracker_icons::icon_gen::ICON_SET;

fn main() -> Result<()> {
    let dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "assets".to_string()));

    println!("Checking icons in: {}", dir.display());

    let mut problems = 0;
    for (size, filename) in ICON_SET {
        let path = dir.join(filename);
        let img = ImageReader::open(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?
            .decode()
            .with_context(|| format!("Failed to decode {}", path.display()))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        println!("\n{filename}: {width}x{height}");

        let center = rgba_img.get_pixel(width / 2, height / 2);
        println!(
            "  Center RGBA: [{}, {}, {}, {}]",
            center[0], center[1], center[2], center[3]
        );

        let corner = rgba_img.get_pixel(0, 0);
        println!(
            "  Corner RGBA: [{}, {}, {}, {}]",
            corner[0], corner[1], corner[2], corner[3]
        );

        if width == size && height == size && corner[3] == 0 {
            println!("✓ {filename} looks right");
        } else {
            println!("⚠ {filename} expected {size}x{size} with a transparent corner");
            problems += 1;
        }
    }

    if problems > 0 {
        anyhow::bail!("{problems} icon(s) failed verification");
    }

    Ok(())
}
