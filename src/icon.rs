use crate::error::IconError;
use crate::models::{GlyphLayout, ICON_SIZES};
use crate::utils::{BLACK, WHITE, blank_canvas, fill_circle, fill_rect, save_png};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// File name the driver uses for an icon of `size` pixels.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

/// Draws the white "U" mark with its accent dot on an opaque black square.
pub fn create_icon(size: u32) -> Result<RgbaImage, IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }

    let layout = GlyphLayout::for_size(size);
    log::debug!(
        "layout for {size}px (stroke width {}): {layout:?}",
        layout.stroke_width
    );

    let mut image = blank_canvas(size);
    fill_rect(&mut image, layout.left_bar(), WHITE);
    fill_rect(&mut image, layout.right_bar(), WHITE);
    fill_rect(&mut image, layout.base_bar(), WHITE);
    // Carve the notch back out of the three bars.
    fill_rect(&mut image, layout.cutout(), BLACK);
    fill_circle(
        &mut image,
        layout.dot_x,
        layout.dot_y,
        layout.dot_radius,
        WHITE,
    );

    Ok(image)
}

/// Renders every size in [`ICON_SIZES`] and writes it into `out_dir`.
///
/// Existing files are overwritten. The first failure stops the run and is
/// returned; icons already written stay on disk.
pub fn generate_icons(out_dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    let mut written = Vec::with_capacity(ICON_SIZES.len());

    for size in ICON_SIZES {
        let image = create_icon(size)?;
        let file_name = icon_file_name(size);
        let path = out_dir.join(&file_name);

        save_png(&image, &path)?;
        log::info!("wrote {}x{} icon to {}", size, size, path.display());
        println!("Generated {file_name}");

        written.push(path);
    }

    Ok(written)
}
