use image::{Rgba, RgbaImage};

/// Backdrop painted over the whole canvas; fully opaque despite the RGBA format.
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Fill for the five bars of the letterform.
const LETTER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Pixel measurements of the letterform, derived from the canvas edge
/// length. The bounding box runs from `margin` (left and top edge alike)
/// to `right`/`bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphGeometry {
    pub margin: i32,
    pub stroke: i32,
    pub right: i32,
    pub bottom: i32,
    pub mid_x: i32,
    pub mid_y: i32,
}

impl GlyphGeometry {
    /// Derives the measurements for a square canvas of edge length `size`.
    /// Integer floor division throughout; below roughly 10 px the bars clip
    /// or vanish, but the geometry itself is always well-defined.
    pub fn for_size(size: u32) -> Self {
        let size = size as i32;
        let margin = (size / 8).max(2);
        let stroke = (size / 5).max(4);
        let right = size - margin;
        let bottom = size - margin;
        GlyphGeometry {
            margin,
            stroke,
            right,
            bottom,
            mid_x: margin + (right - margin) / 2,
            mid_y: margin + (bottom - margin) / 2,
        }
    }
}

/// Draws the block-letter G at the given edge length.
///
/// The canvas starts fully transparent and is then painted over with an
/// opaque black square, so the delivered background is always solid. The
/// letterform is five white bars drawn in a fixed order; later bars
/// overwrite earlier ones where they overlap, with no blending.
pub fn rasterize(size: u32) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    fill_rect(&mut canvas, 0, 0, size as i32, size as i32, BACKGROUND);

    let g = GlyphGeometry::for_size(size);

    // Top bar, full width of the box.
    fill_rect(&mut canvas, g.margin, g.margin, g.right, g.margin + g.stroke, LETTER);
    // Left bar, full height.
    fill_rect(&mut canvas, g.margin, g.margin, g.margin + g.stroke, g.bottom, LETTER);
    // Bottom bar, full width.
    fill_rect(&mut canvas, g.margin, g.bottom - g.stroke, g.right, g.bottom, LETTER);
    // Middle bar, from the center out to the right edge.
    fill_rect(&mut canvas, g.mid_x, g.mid_y, g.right, g.mid_y + g.stroke, LETTER);
    // Right bar, lower half only.
    fill_rect(&mut canvas, g.right - g.stroke, g.mid_y, g.right, g.bottom, LETTER);

    canvas
}

/// Fills the half-open pixel box `[x0, x1) x [y0, y1)`, clipped to the
/// canvas. Color and alpha are overwritten outright; inverted boxes fill
/// nothing.
fn fill_rect(canvas: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    let width = canvas.width() as i32;
    let height = canvas.height() as i32;
    for y in y0.max(0)..y1.min(height) {
        for x in x0.max(0)..x1.min(width) {
            canvas.put_pixel(x as u32, y as u32, color);
        }
    }
}
