use std::path::Path;

use anyhow::Result;
use image::ImageReader;
use log::info;

use super::SourceImage;
use crate::error::SheetError;

/// Decode every input path into RGBA, in the order given.
///
/// Loading is sequential and fails on the first unreadable or undecodable
/// file, before any layout work happens.
pub fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<SourceImage>> {
    info!("Loading {} images...", paths.len());

    paths
        .iter()
        .map(|path| load_single_image(path.as_ref()))
        .collect()
}

fn load_single_image(path: &Path) -> Result<SourceImage> {
    let image = ImageReader::open(path)
        .map_err(|e| SheetError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SheetError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    Ok(SourceImage {
        path: path.to_path_buf(),
        image,
    })
}
