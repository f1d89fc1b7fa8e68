use crate::error::IconError;
use crate::models::PixelRect;
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Allocates a square canvas filled with opaque black.
pub fn blank_canvas(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, BLACK)
}

/// Fills `rect` (both corners included), clipped to the canvas.
pub fn fill_rect(image: &mut RgbaImage, rect: PixelRect, color: Rgba<u8>) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }
    let x1 = rect.x1.min(image.width() - 1);
    let y1 = rect.y1.min(image.height() - 1);
    for y in rect.y0..=y1 {
        for x in rect.x0..=x1 {
            image.put_pixel(x, y, color);
        }
    }
}

/// Fills the disc inscribed in the box `[c - radius, c + radius]` on both axes.
///
/// A pixel is painted when its centre lies within `radius + 0.5` of the centre
/// pixel's centre, which keeps the outermost row and column of the box lit.
pub fn fill_circle(image: &mut RgbaImage, cx: u32, cy: u32, radius: u32, color: Rgba<u8>) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }
    // Compare doubled distances to stay in integers: 4 * d^2 <= (2r + 1)^2
    let limit = (2 * u64::from(radius) + 1).pow(2);
    let x_end = cx.saturating_add(radius).min(image.width() - 1);
    let y_end = cy.saturating_add(radius).min(image.height() - 1);

    for y in cy.saturating_sub(radius)..=y_end {
        for x in cx.saturating_sub(radius)..=x_end {
            let dx = u64::from(x.abs_diff(cx));
            let dy = u64::from(y.abs_diff(cy));
            if 4 * (dx * dx + dy * dy) <= limit {
                image.put_pixel(x, y, color);
            }
        }
    }
}

/// Encodes `image` as PNG at `path`, replacing any existing file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Image {
            path: path.to_path_buf(),
            source,
        })
}
