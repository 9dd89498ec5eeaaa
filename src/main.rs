use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracker_icons::{icon_gen, icon_render::DEFAULT_FONT_PATH};

#[derive(Debug, Parser)]
#[clap(
    name = "tracker-icons",
    about = "Generate the portfolio tracker's browser-extension icons"
)]
struct Cli {
    /// Output directory. It must already exist.
    #[clap(short, long, value_name = "DIR", default_value = "assets")]
    output: PathBuf,

    /// Bold TrueType font for the dollar sign. A built-in face is used when it can't be loaded.
    #[clap(long, value_name = "FILE", default_value = DEFAULT_FONT_PATH)]
    font: PathBuf,

    /// Also write icons.json with the manifest `icons` and `action` entries
    #[clap(long)]
    manifest: bool,

    /// Directory prefix for the paths listed in icons.json
    #[clap(long, value_name = "PREFIX", default_value = "assets")]
    manifest_prefix: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    icon_gen::generate_icons(icon_gen::Args {
        output: cli.output,
        font: cli.font,
        manifest: cli.manifest,
        manifest_prefix: cli.manifest_prefix,
    })
}
