use crate::icon_render::render_with_font;
use crate::manifest_json::{write_manifest_json, ManifestFragment, MANIFEST_FILE_NAME};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Icons the browser extension ships, as (pixel size, file name)
pub const ICON_SET: [(u32, &str); 3] = [(16, "icon16.png"), (48, "icon48.png"), (128, "icon128.png")];

// Define Args struct for library compilation
#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub font: PathBuf,
    pub manifest: bool,
    pub manifest_prefix: String,
}

/// Render every icon in [`ICON_SET`] into `args.output`.
///
/// The output directory must already exist; the first failed write aborts
/// the run and leaves whatever was written before it.
pub fn generate_icons(args: Args) -> Result<()> {
    for (size, filename) in ICON_SET {
        let icon = render_with_font(size, &args.font);
        save_png(&icon, &args.output.join(filename))?;
        println!("Created {filename}");
    }

    if args.manifest {
        let fragment = ManifestFragment::for_icons(&args.manifest_prefix, &ICON_SET);
        write_manifest_json(&args.output, &fragment)?;
        println!("Created {MANIFEST_FILE_NAME}");
    }

    println!("All icons created successfully!");
    Ok(())
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    let mut out_file = BufWriter::new(file);
    write_png(image.as_raw(), &mut out_file, image.width())
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;

    Ok(())
}

// Encode square RGBA data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
