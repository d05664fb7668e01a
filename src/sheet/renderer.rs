use std::path::Path;

use image::{Rgba, RgbaImage, imageops};
use log::debug;

use crate::error::SheetError;
use crate::layout::{Placement, SheetLayout};

/// Compose the final sheet from a layout and the decoded images.
///
/// Images must be supplied in the same order the planner received their
/// extents, with matching dimensions; that is a caller precondition, not a
/// runtime error path. The output surface starts fully transparent, each
/// image is pasted exactly once at its planned coordinate, and a frame of
/// `border` thickness is drawn in the gutter around it.
pub fn render(layout: &SheetLayout, images: &[RgbaImage], border_color: Rgba<u8>) -> RgbaImage {
    debug_assert_eq!(images.len(), layout.image_count());

    let mut sheet = RgbaImage::new(layout.width, layout.height);

    for (placement, img) in layout.placements().zip(images) {
        debug_assert_eq!(img.width(), placement.extent.width);
        debug_assert_eq!(img.height(), placement.extent.height);

        imageops::overlay(
            &mut sheet,
            img,
            i64::from(placement.x),
            i64::from(placement.y),
        );
        draw_frame(&mut sheet, placement, layout.border, border_color);
    }

    sheet
}

/// Fill the four gutter bands around a placed image. The bands never touch
/// the image's own pixels; neighboring frames overlap each other in shared
/// gutters, which is harmless since every frame is the same color.
fn draw_frame(sheet: &mut RgbaImage, placement: &Placement, border: u32, color: Rgba<u8>) {
    if border == 0 {
        return;
    }

    let Placement { x, y, extent } = *placement;
    let (w, h) = (extent.width, extent.height);

    // Top and bottom bands span the corners
    fill_rect(sheet, x - border, y - border, w + 2 * border, border, color);
    fill_rect(sheet, x - border, y + h, w + 2 * border, border, color);
    fill_rect(sheet, x - border, y, border, h, color);
    fill_rect(sheet, x + w, y, border, h, color);
}

fn fill_rect(sheet: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    for py in y..y + h {
        for px in x..x + w {
            sheet.put_pixel(px, py, color);
        }
    }
}

/// Write the composed sheet to disk, format inferred from the extension
pub fn save_sheet(sheet: &RgbaImage, path: &Path) -> Result<(), SheetError> {
    debug!("Saving {}x{} sheet", sheet.width(), sheet.height());

    sheet.save(path).map_err(|e| SheetError::ImageSave {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Extent, plan};

    const GREEN: Rgba<u8> = Rgba([0, 128, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn solid(w: u32, h: u32, color: Rgba<u8>) -> RgbaImage {
        let mut img = RgbaImage::new(w, h);
        for pixel in img.pixels_mut() {
            *pixel = color;
        }
        img
    }

    #[test]
    fn test_images_land_at_planned_coordinates() {
        let red = Rgba([255, 0, 0, 255]);
        let blue = Rgba([0, 0, 255, 255]);
        let images = vec![solid(4, 4, red), solid(4, 4, blue)];
        let extents = [Extent::new(4, 4), Extent::new(4, 4)];

        let layout = plan(&extents, 20, 2).unwrap();
        let sheet = render(&layout, &images, GREEN);

        // 2+4+2+4+2 = 14 wide, 2+4+2 = 8 tall
        assert_eq!(sheet.dimensions(), (14, 8));
        assert_eq!(*sheet.get_pixel(2, 2), red);
        assert_eq!(*sheet.get_pixel(5, 5), red);
        assert_eq!(*sheet.get_pixel(8, 2), blue);
        assert_eq!(*sheet.get_pixel(11, 5), blue);
    }

    #[test]
    fn test_frame_fills_gutter_but_not_image() {
        let red = Rgba([255, 0, 0, 255]);
        let images = vec![solid(4, 4, red)];
        let layout = plan(&[Extent::new(4, 4)], 20, 2).unwrap();
        let sheet = render(&layout, &images, GREEN);

        assert_eq!(sheet.dimensions(), (8, 8));
        // Corners and edge bands are frame
        assert_eq!(*sheet.get_pixel(0, 0), GREEN);
        assert_eq!(*sheet.get_pixel(7, 7), GREEN);
        assert_eq!(*sheet.get_pixel(1, 4), GREEN);
        assert_eq!(*sheet.get_pixel(4, 6), GREEN);
        // Image pixels untouched by the frame
        for py in 2..6 {
            for px in 2..6 {
                assert_eq!(*sheet.get_pixel(px, py), red);
            }
        }
    }

    #[test]
    fn test_shared_gutter_between_neighbors() {
        let images = vec![solid(4, 4, Rgba([255, 0, 0, 255])), solid(4, 4, Rgba([0, 0, 255, 255]))];
        let layout = plan(&[Extent::new(4, 4), Extent::new(4, 4)], 20, 2).unwrap();
        let sheet = render(&layout, &images, GREEN);

        // The two-pixel gutter between the images (x = 6, 7) is frame
        assert_eq!(*sheet.get_pixel(6, 3), GREEN);
        assert_eq!(*sheet.get_pixel(7, 3), GREEN);
    }

    #[test]
    fn test_background_stays_transparent() {
        // Second row is narrower than the first; the area right of it has
        // no image and no gutter, so it keeps the transparent background.
        let images = vec![
            solid(8, 2, Rgba([255, 0, 0, 255])),
            solid(8, 2, Rgba([255, 0, 0, 255])),
            solid(2, 2, Rgba([0, 0, 255, 255])),
        ];
        let extents = [Extent::new(8, 2), Extent::new(8, 2), Extent::new(2, 2)];
        let layout = plan(&extents, 19, 1).unwrap();
        let sheet = render(&layout, &images, GREEN);

        // Height: 1 + 2 + 1 + 2 + 1
        assert_eq!(sheet.dimensions(), (19, 7));
        // Row 2 and its frame only reach x=3; further right is bare
        assert_eq!(*sheet.get_pixel(10, 6), CLEAR);
        assert_eq!(*sheet.get_pixel(18, 6), CLEAR);
    }

    #[test]
    fn test_zero_border_draws_no_frame() {
        let red = Rgba([255, 0, 0, 255]);
        let images = vec![solid(3, 3, red), solid(3, 3, red)];
        let layout = plan(&[Extent::new(3, 3), Extent::new(3, 3)], 10, 0).unwrap();
        let sheet = render(&layout, &images, GREEN);

        assert_eq!(sheet.dimensions(), (6, 3));
        for pixel in sheet.pixels() {
            assert_eq!(*pixel, red);
        }
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        // Per-process dir name so concurrent test runs don't collide
        let dir = std::env::temp_dir()
            .join(format!("sheetpack_renderer_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sheet.png");

        let images = vec![solid(4, 4, Rgba([255, 0, 0, 255]))];
        let layout = plan(&[Extent::new(4, 4)], 20, 2).unwrap();
        let sheet = render(&layout, &images, GREEN);

        save_sheet(&sheet, &path).unwrap();
        let reloaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(reloaded.dimensions(), sheet.dimensions());
        assert_eq!(*reloaded.get_pixel(0, 0), GREEN);
        assert_eq!(*reloaded.get_pixel(3, 3), Rgba([255, 0, 0, 255]));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_to_bad_path_is_an_error() {
        let layout = plan(&[], 10, 1).unwrap();
        let sheet = render(&layout, &[], GREEN);

        let err = save_sheet(&sheet, Path::new("/nonexistent/dir/sheet.png")).unwrap_err();
        assert!(matches!(err, SheetError::ImageSave { .. }));
    }

    #[test]
    fn test_empty_layout_renders_blank_sheet() {
        let layout = plan(&[], 100, 3).unwrap();
        let sheet = render(&layout, &[], GREEN);

        assert_eq!(sheet.dimensions(), (3, 3));
        for pixel in sheet.pixels() {
            assert_eq!(*pixel, CLEAR);
        }
    }
}
