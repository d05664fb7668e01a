use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error(
        "Image is wider than the sheet allows once bordered ({width} + 2 * {border} > {max_width})"
    )]
    OversizedImage {
        width: u32,
        border: u32,
        max_width: u32,
    },

    #[error("Sheet would be {height} pixels tall, more than an image can hold ({max})", max = u32::MAX)]
    SheetTooTall { height: u64 },

    #[error("Unrecognized border color '{0}' (expected a named color or hex like '#rrggbb')")]
    UnknownColor(String),
}
