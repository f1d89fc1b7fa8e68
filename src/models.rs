/// Edge length of the reference design every coordinate is expressed in.
pub const REFERENCE_SIZE: f64 = 128.0;

/// Sizes written by the driver, in order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

// Reference coordinates on the 128x128 design.
const LEFT_X: f64 = 30.0;
const RIGHT_X: f64 = 98.0;
const TOP_Y: f64 = 30.0;
const BOTTOM_Y: f64 = 75.0;
const INNER_LEFT: f64 = 46.0;
const INNER_RIGHT: f64 = 82.0;
const BASE_BOTTOM: f64 = 98.0;
const INNER_BOTTOM: f64 = 85.0;
const DOT_X: f64 = 64.0;
const DOT_Y: f64 = 110.0;
const DOT_RADIUS: f64 = 5.0;
const STROKE_WIDTH: f64 = 16.0;

/// An axis-aligned rectangle in pixel space, inclusive of both corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelRect {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[cfg(test)]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }
}

/// Coordinates of the "U" glyph scaled to one concrete icon size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphLayout {
    pub left_x: u32,
    pub right_x: u32,
    pub top_y: u32,
    pub bottom_y: u32,
    pub inner_left: u32,
    pub inner_right: u32,
    pub base_bottom: u32,
    pub inner_bottom: u32,
    pub dot_x: u32,
    pub dot_y: u32,
    pub dot_radius: u32,
    /// Nominal stroke width. Not used by any of the painted shapes.
    pub stroke_width: u32,
}

impl GlyphLayout {
    /// Scales the reference design to `size` pixels, truncating toward zero.
    pub fn for_size(size: u32) -> Self {
        let scale = f64::from(size) / REFERENCE_SIZE;
        let at = |reference: f64| (reference * scale) as u32;

        Self {
            left_x: at(LEFT_X),
            right_x: at(RIGHT_X),
            top_y: at(TOP_Y),
            bottom_y: at(BOTTOM_Y),
            inner_left: at(INNER_LEFT),
            inner_right: at(INNER_RIGHT),
            base_bottom: at(BASE_BOTTOM),
            inner_bottom: at(INNER_BOTTOM),
            dot_x: at(DOT_X),
            dot_y: at(DOT_Y),
            dot_radius: at(DOT_RADIUS).max(1),
            stroke_width: at(STROKE_WIDTH).max(1),
        }
    }

    pub fn left_bar(&self) -> PixelRect {
        PixelRect::new(self.left_x, self.top_y, self.inner_left, self.bottom_y)
    }

    pub fn right_bar(&self) -> PixelRect {
        PixelRect::new(self.inner_right, self.top_y, self.right_x, self.bottom_y)
    }

    pub fn base_bar(&self) -> PixelRect {
        PixelRect::new(self.left_x, self.bottom_y, self.right_x, self.base_bottom)
    }

    /// The notch repainted with the background color to open the top of the "U".
    pub fn cutout(&self) -> PixelRect {
        PixelRect::new(self.inner_left, self.top_y, self.inner_right, self.inner_bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_size_keeps_reference_coordinates() {
        let layout = GlyphLayout::for_size(128);
        assert_eq!(
            layout,
            GlyphLayout {
                left_x: 30,
                right_x: 98,
                top_y: 30,
                bottom_y: 75,
                inner_left: 46,
                inner_right: 82,
                base_bottom: 98,
                inner_bottom: 85,
                dot_x: 64,
                dot_y: 110,
                dot_radius: 5,
                stroke_width: 16,
            }
        );
    }

    #[test]
    fn smallest_icon_truncates() {
        // scale = 0.125
        let layout = GlyphLayout::for_size(16);
        assert_eq!((layout.left_x, layout.right_x), (3, 12));
        assert_eq!((layout.top_y, layout.bottom_y), (3, 9));
        assert_eq!((layout.inner_left, layout.inner_right), (5, 10));
        assert_eq!((layout.base_bottom, layout.inner_bottom), (12, 10));
        assert_eq!((layout.dot_x, layout.dot_y), (8, 13));
        assert_eq!(layout.dot_radius, 1);
        assert_eq!(layout.stroke_width, 2);
    }

    #[test]
    fn medium_icon_truncates_dot_radius() {
        // scale = 0.375; 5 * 0.375 = 1.875 truncates to 1, not 2
        let layout = GlyphLayout::for_size(48);
        assert_eq!((layout.left_x, layout.right_x), (11, 36));
        assert_eq!((layout.top_y, layout.bottom_y), (11, 28));
        assert_eq!((layout.inner_left, layout.inner_right), (17, 30));
        assert_eq!((layout.base_bottom, layout.inner_bottom), (36, 31));
        assert_eq!((layout.dot_x, layout.dot_y), (24, 41));
        assert_eq!(layout.dot_radius, 1);
        assert_eq!(layout.stroke_width, 6);
    }

    #[test]
    fn tiny_sizes_clamp_stroke_dimensions() {
        for size in 1..16 {
            let layout = GlyphLayout::for_size(size);
            assert!(layout.dot_radius >= 1, "size {size}");
            assert!(layout.stroke_width >= 1, "size {size}");
        }
    }

    #[test]
    fn coordinates_stay_inside_canvas() {
        for size in 1..=512 {
            let l = GlyphLayout::for_size(size);
            for c in [
                l.left_x,
                l.right_x,
                l.top_y,
                l.bottom_y,
                l.inner_left,
                l.inner_right,
                l.base_bottom,
                l.inner_bottom,
                l.dot_x,
                l.dot_y,
            ] {
                assert!(c < size, "size {size}: {c}");
            }
        }
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let rect = PixelRect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(4, 5));
        assert!(!rect.contains(5, 5));
        assert!(!rect.contains(1, 4));
    }
}
