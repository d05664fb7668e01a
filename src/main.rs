use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use sheetpack::cli::CliArgs;
use sheetpack::layout::{Extent, plan};
use sheetpack::sheet::{parse_color, render, save_sheet};
use sheetpack::sprite::load_images;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    let border_color = parse_color(&args.border_color)?;

    let sources = load_images(&args.input_images)?;
    info!("Loaded {} images", sources.len());

    let extents: Vec<Extent> = sources.iter().map(|s| s.extent()).collect();
    let layout = plan(&extents, args.width, args.border_width)
        .context("failed to lay out sprite sheet")?;
    info!(
        "Packed {} images into {} rows ({}x{})",
        layout.image_count(),
        layout.rows.len(),
        layout.width,
        layout.height
    );

    let images: Vec<_> = sources.into_iter().map(|s| s.image).collect();
    let sheet = render(&layout, &images, border_color);

    save_sheet(&sheet, &args.output_image)?;
    info!("Wrote output image to: {}", args.output_image.display());

    Ok(())
}
