use crate::error::SheetError;

use super::{Extent, Placement, Row, SheetLayout};

/// Compute sheet geometry for the given image extents.
///
/// Images are placed left-to-right in input order; when appending the next
/// image would push the current row past `max_width` (borders included), the
/// row is closed and a new one started. The returned layout's `width` is the
/// width of the widest row actually produced, so the sheet shrinks to fit.
///
/// Fails with [`SheetError::OversizedImage`] if any single image cannot fit
/// in a row of its own. Validation runs before any placement work, so no
/// partial layout is ever produced.
///
/// An empty input yields a degenerate `border x border` sheet.
pub fn plan(extents: &[Extent], max_width: u32, border: u32) -> Result<SheetLayout, SheetError> {
    // Widened to u64: `2 * border` must not wrap for CLI-supplied borders
    for extent in extents {
        if u64::from(extent.width) + 2 * u64::from(border) > u64::from(max_width) {
            return Err(SheetError::OversizedImage {
                width: extent.width,
                border,
                max_width,
            });
        }
    }

    let rows = wrap_into_rows(extents, max_width, border);

    let width = rows
        .iter()
        .map(|row| row_width(row, border))
        .max()
        .unwrap_or(border);

    // Row heights are individually u32 but a tall stack can exceed u32 in
    // total, so the sum stays in u64 until it is known to fit.
    let height_px = rows
        .iter()
        .map(|row| u64::from(row_height(row)))
        .sum::<u64>()
        + u64::from(border) * (rows.len() as u64 + 1);
    let height = u32::try_from(height_px)
        .map_err(|_e| SheetError::SheetTooTall { height: height_px })?;

    Ok(SheetLayout {
        rows: place_rows(&rows, border),
        width,
        height,
        border,
    })
}

/// Greedy row wrapping: each image joins the current row if the row still
/// fits within `max_width` afterwards (ties at exactly `max_width` are
/// accepted), otherwise it opens a new row.
fn wrap_into_rows(extents: &[Extent], max_width: u32, border: u32) -> Vec<Vec<Extent>> {
    let mut rows: Vec<Vec<Extent>> = Vec::new();
    let mut current: Vec<Extent> = Vec::new();
    // Running width of `current` including both edge borders. Kept in u64
    // so the fit test cannot wrap near u32::MAX.
    let mut current_width = u64::from(border);

    for &extent in extents {
        let appended = current_width + u64::from(extent.width) + u64::from(border);
        if !current.is_empty() && appended > u64::from(max_width) {
            rows.push(std::mem::take(&mut current));
            current_width = u64::from(border);
        }

        current_width += u64::from(extent.width) + u64::from(border);
        current.push(extent);
    }

    if !current.is_empty() {
        rows.push(current);
    }

    rows
}

/// Assign coordinates by walking rows top-to-bottom and images
/// left-to-right, accumulating offsets.
fn place_rows(rows: &[Vec<Extent>], border: u32) -> Vec<Row> {
    let mut placed = Vec::with_capacity(rows.len());
    let mut y = border;

    for row in rows {
        let height = row_height(row);
        let mut placements = Vec::with_capacity(row.len());
        let mut x = border;

        for &extent in row {
            placements.push(Placement { x, y, extent });
            x += extent.width + border;
        }

        placed.push(Row { placements, height });
        y += height + border;
    }

    placed
}

fn row_width(row: &[Extent], border: u32) -> u32 {
    let images: u32 = row.iter().map(|e| e.width).sum();
    images + border * (row.len() as u32 + 1)
}

fn row_height(row: &[Extent]) -> u32 {
    row.iter().map(|e| e.height).max().unwrap_or(0)
}
