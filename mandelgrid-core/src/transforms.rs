//! Pan/zoom coordinate remapping and the zoom-derived iteration cap.
//!
//! The input layer delivers already-decoded pixel coordinates; this module
//! turns them into new plane regions.

use crate::real::Real;
use crate::region::PlaneRegion;

/// Pixel-space rectangle dragged out by the user, begin = press position,
/// end = release position. End may lie above or left of begin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub col_begin: u32,
    pub row_begin: u32,
    pub col_end: u32,
    pub row_end: u32,
}

impl Selection {
    pub fn new(col_begin: u32, row_begin: u32, col_end: u32, row_end: u32) -> Self {
        Self {
            col_begin,
            row_begin,
            col_end,
            row_end,
        }
    }

    /// A zero-area selection is a click, not a drag.
    pub fn is_click(&self) -> bool {
        self.col_begin == self.col_end && self.row_begin == self.row_end
    }
}

/// Iteration cap for a region, scaling inversely with zoom depth so deeper
/// zooms automatically get the extra refinement they need.
pub fn max_iterations_for<T: Real>(half_width: &T, half_height: &T) -> u32 {
    let shorter = half_width.clone().min_of(half_height.clone()).to_f64();
    (223.0 / (0.001 + 4.0 * shorter).sqrt()).floor().max(1.0) as u32
}

/// Plane-space width of one pixel column (or height of one row).
fn increment<T: Real>(half_distance: &T, pixels: u32) -> T {
    (half_distance.clone() * T::from(2.0)) / T::from(pixels as f64)
}

/// Re-center on a clicked pixel, keeping the half-distances unchanged.
pub fn region_from_click<T: Real>(
    region: &PlaneRegion<T>,
    grid_width: u32,
    grid_height: u32,
    col: u32,
    row: u32,
) -> PlaneRegion<T> {
    let x_inc = increment(&region.half_width, grid_width);
    let y_inc = increment(&region.half_height, grid_height);
    let x_left = region.center_x.clone() - region.half_width.clone();
    let y_top = region.center_y.clone() + region.half_height.clone();

    PlaneRegion::new(
        x_left + x_inc * T::from(col as f64),
        y_top - y_inc * T::from(row as f64),
        region.half_width.clone(),
        region.half_height.clone(),
    )
}

/// Map a dragged selection rectangle to the plane region it encloses.
///
/// Height is authoritative: the column span is stretched (keeping its
/// direction) until the selection matches the grid's aspect ratio, then
/// the enclosed region becomes the new view. A zero-area selection is
/// treated as a click. Selections whose plane-space result degenerates
/// are rejected here, before any grid state is touched.
pub fn region_from_selection<T: Real>(
    region: &PlaneRegion<T>,
    grid_width: u32,
    grid_height: u32,
    selection: &Selection,
) -> Result<PlaneRegion<T>, String> {
    if selection.is_click() {
        return Ok(region_from_click(
            region,
            grid_width,
            grid_height,
            selection.col_begin,
            selection.row_begin,
        ));
    }

    let rows = selection.row_end as f64 - selection.row_begin as f64;
    if rows == 0.0 {
        return Err("selection height is zero".to_string());
    }

    let cols = selection.col_end as f64 - selection.col_begin as f64;
    let aspect = grid_width as f64 / grid_height as f64;
    let direction = if cols < 0.0 { -1.0 } else { 1.0 };
    let cols = rows.abs() * aspect * direction;

    let x_inc = increment(&region.half_width, grid_width);
    let y_inc = increment(&region.half_height, grid_height);
    let x_left = region.center_x.clone() - region.half_width.clone();
    let y_top = region.center_y.clone() + region.half_height.clone();

    let dx_center = x_inc.clone() * T::from(cols / 2.0);
    let dy_center = y_inc.clone() * T::from(rows / 2.0);

    let center_x = x_left + x_inc * T::from(selection.col_begin as f64) + dx_center.clone();
    let center_y = y_top - y_inc * T::from(selection.row_begin as f64) - dy_center.clone();

    let zoomed = PlaneRegion::new(center_x, center_y, dx_center.abs(), dy_center.abs());
    if zoomed.is_degenerate() {
        return Err("selection collapses to a degenerate region".to_string());
    }
    Ok(zoomed)
}
