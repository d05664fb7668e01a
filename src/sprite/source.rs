use std::path::PathBuf;

use image::RgbaImage;

use crate::layout::Extent;

/// A decoded input image awaiting placement
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Original file path
    pub path: PathBuf,
    /// Decoded RGBA pixel data
    pub image: RgbaImage,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Footprint handed to the planner
    pub fn extent(&self) -> Extent {
        Extent::new(self.width(), self.height())
    }
}
