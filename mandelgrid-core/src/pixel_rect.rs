use serde::{Deserialize, Serialize};

/// Rectangle in pixel space (always u32 coordinates).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Area in pixels.
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Check if a point is inside the rectangle.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &PixelRect) -> PixelRect {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = (self.x + self.width).max(other.x + other.width);
        let y1 = (self.y + self.height).max(other.y + other.height);
        PixelRect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

/// Accumulates the minimal bounding box of pixels touched during one
/// budgeted advance, for differential redraw.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirtyBounds {
    bounds: Option<(u32, u32, u32, u32)>,
}

impl DirtyBounds {
    pub fn mark(&mut self, col: u32, row: u32) {
        self.bounds = Some(match self.bounds {
            None => (col, row, col, row),
            Some((min_col, min_row, max_col, max_row)) => (
                min_col.min(col),
                min_row.min(row),
                max_col.max(col),
                max_row.max(row),
            ),
        });
    }

    /// The accumulated rectangle, or None when nothing was marked.
    pub fn rect(&self) -> Option<PixelRect> {
        self.bounds.map(|(min_col, min_row, max_col, max_row)| {
            PixelRect::new(
                min_col,
                min_row,
                max_col - min_col + 1,
                max_row - min_row + 1,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_area() {
        let rect = PixelRect::new(0, 0, 1920, 1080);
        assert_eq!(rect.area(), 1920 * 1080);
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(10, 20, 100, 50);

        assert!(rect.contains(50, 40));
        assert!(rect.contains(10, 20)); // Top-left corner
        assert!(rect.contains(109, 69)); // Bottom-right corner
        assert!(!rect.contains(110, 70)); // Just outside
        assert!(!rect.contains(9, 20)); // Just left
        assert!(!rect.contains(50, 19)); // Just above
    }

    #[test]
    fn test_pixel_rect_union() {
        let a = PixelRect::new(0, 0, 10, 10);
        let b = PixelRect::new(20, 5, 10, 10);
        assert_eq!(a.union(&b), PixelRect::new(0, 0, 30, 15));
    }

    #[test]
    fn test_pixel_rect_serialization_roundtrip() {
        let original = PixelRect::new(100, 200, 640, 480);

        let json = serde_json::to_string(&original).unwrap();
        let restored: PixelRect = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn dirty_bounds_empty_yields_none() {
        let bounds = DirtyBounds::default();
        assert_eq!(bounds.rect(), None);
    }

    #[test]
    fn dirty_bounds_single_pixel() {
        let mut bounds = DirtyBounds::default();
        bounds.mark(7, 3);
        assert_eq!(bounds.rect(), Some(PixelRect::new(7, 3, 1, 1)));
    }

    #[test]
    fn dirty_bounds_grows_to_cover_marks() {
        let mut bounds = DirtyBounds::default();
        bounds.mark(5, 5);
        bounds.mark(2, 8);
        bounds.mark(9, 6);
        assert_eq!(bounds.rect(), Some(PixelRect::new(2, 5, 8, 4)));
    }
}
