//! Procedural rendering of the canview application icon
//!
//! The icon is a row of five circular "bus node" dots on a horizontal
//! centerline: a larger center node in its own color, the adjacent pair in
//! a second color, the outer pair in a third. The 16x16 frame used in the
//! ICO bundle is drawn separately because the node row does not read at
//! that size.

use image::{Rgba, RgbaImage};

use crate::palette;

/// Output resolutions for the PNG icon set, largest first.
pub const PNG_SIZES: [u32; 6] = [512, 256, 128, 64, 48, 32];

/// Number of node circles along the centerline.
const NODE_COUNT: u32 = 5;

/// Render the icon at the given square size.
///
/// Layout scales with the size: an eighth of the canvas is padding on each
/// side and the nodes are spaced evenly across the remaining width.
pub fn render_icon(size: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(size, size, palette::BACKGROUND);

    let padding = size / 8;
    let content = size - 2 * padding;
    let spacing = content / (NODE_COUNT + 1);
    let radius = (size / 32).max(2);
    let center_y = size / 2;

    for i in 0..NODE_COUNT {
        let x = padding + spacing * (i + 1);
        let (color, r) = match i {
            2 => (palette::NODE_CENTER, radius * 3 / 2),
            1 | 3 => (palette::NODE_INNER, radius),
            _ => (palette::NODE_OUTER, radius),
        };
        fill_circle(&mut image, x, center_y, r, color);
    }

    image
}

/// Render the 16x16 frame for the ICO bundle: a single small center dot.
pub fn render_tiny_icon() -> RgbaImage {
    let mut image = RgbaImage::from_pixel(16, 16, palette::BACKGROUND);
    fill_circle(&mut image, 8, 8, 2, palette::NODE_CENTER);
    image
}

/// Fill a circle centered on pixel `(cx, cy)`, clipped to the image bounds.
fn fill_circle(image: &mut RgbaImage, cx: u32, cy: u32, radius: u32, color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    let x0 = cx.saturating_sub(radius);
    let y0 = cy.saturating_sub(radius);
    let x1 = (cx + radius + 1).min(width);
    let y1 = (cy + radius + 1).min(height);
    let r2 = (radius * radius) as i64;

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as i64 - cx as i64;
            let dy = y as i64 - cy as i64;
            if dx * dx + dy * dy <= r2 {
                image.put_pixel(x, y, color);
            }
        }
    }
}
