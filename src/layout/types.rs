/// Pixel footprint of one input image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Planner-assigned top-left coordinate for one image within the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub extent: Extent,
}

/// A horizontal band of images sharing the same top y-coordinate.
///
/// Placements keep input order; the row is as tall as its tallest member.
#[derive(Debug, Clone)]
pub struct Row {
    pub placements: Vec<Placement>,
    pub height: u32,
}

/// The computed sheet geometry: rows of placements plus final dimensions.
///
/// Built once by [`plan`](super::plan) and never mutated. `width` is the
/// shrink-to-fit width of the widest row actually produced, not the
/// configured maximum.
#[derive(Debug, Clone)]
pub struct SheetLayout {
    pub rows: Vec<Row>,
    pub width: u32,
    pub height: u32,
    pub border: u32,
}

impl SheetLayout {
    /// All placements in planner order (rows top-to-bottom, images
    /// left-to-right), matching the order of the input images.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.rows.iter().flat_map(|row| row.placements.iter())
    }

    /// Total number of placed images
    pub fn image_count(&self) -> usize {
        self.rows.iter().map(|row| row.placements.len()).sum()
    }
}
