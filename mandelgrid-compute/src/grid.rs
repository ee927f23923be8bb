//! Budgeted, resumable scanning of one pixel grid.
//!
//! A `GridComputer` owns one RGBA buffer bound to a plane region and fills
//! it in scan order across repeated `advance` calls, each bounded by an
//! iteration budget so a single call never monopolizes the host's frame
//! loop. Near-boundary pixels burn far more iterations than interior or
//! exterior ones, so the budget charges actual iterations consumed rather
//! than a flat per-pixel cost.

use crate::error::EngineError;
use crate::scheduler::BudgetedGrid;
use crate::surface::DisplaySurface;
use mandelgrid_core::{
    color_for, evaluate, max_iterations_for, DirtyBounds, GridShape, Palette, PixelRect,
    PlaneRegion, Real, SeedConfig,
};

/// Lifecycle of a grid. Re-seeding returns a `Complete` or `Scanning` grid
/// to `Scanning` from a clean cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridState {
    Unseeded,
    Scanning,
    Complete,
}

/// Cursor and increments derived from one seeded region.
///
/// Replaced wholesale on re-seed, which is what makes re-seeding an atomic
/// cancellation: no partial scan survives into the next region.
struct ScanState<T> {
    region: PlaneRegion<T>,
    x_left: T,
    x_inc: T,
    y_inc: T,
    x_pos: T,
    y_pos: T,
    max_iterations: u32,
    col: u32,
    row: u32,
    row_end: u32,
    done: bool,
}

pub struct GridComputer<T> {
    width: u32,
    height: u32,
    shape: GridShape,
    palette: Palette,
    buffer: Vec<u8>,
    scan: Option<ScanState<T>>,
}

/// Column range `[start, end)` scanned on the given row.
fn row_span(shape: GridShape, width: u32, height: u32, row: u32) -> (u32, u32) {
    match shape {
        GridShape::Rectangle => (0, width),
        GridShape::Circle => {
            let r = (height / 2) as i64;
            let y = r - row as i64;
            let chord = ((r * r - y * y).max(0) as f64).sqrt().round() as i64;
            let center = (width / 2) as i64;
            let start = (center - chord).max(0) as u32;
            let end = (center + chord + 1).min(width as i64) as u32;
            (start, end)
        }
    }
}

impl<T: Real> GridComputer<T> {
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            shape: GridShape::default(),
            palette: Palette::default(),
            buffer: vec![0; width as usize * height as usize * 4],
            scan: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn state(&self) -> GridState {
        match &self.scan {
            None => GridState::Unseeded,
            Some(scan) if scan.done => GridState::Complete,
            Some(_) => GridState::Scanning,
        }
    }

    /// The region currently being scanned, if seeded.
    pub fn region(&self) -> Option<&PlaneRegion<T>> {
        self.scan.as_ref().map(|scan| &scan.region)
    }

    /// Iteration cap in force for the current region.
    pub fn max_iterations(&self) -> Option<u32> {
        self.scan.as_ref().map(|scan| scan.max_iterations)
    }

    /// Raw RGBA pixels, row-major, alpha 0 where nothing has been painted.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn pixel_at(&self, col: u32, row: u32) -> [u8; 4] {
        let i = (row as usize * self.width as usize + col as usize) * 4;
        [
            self.buffer[i],
            self.buffer[i + 1],
            self.buffer[i + 2],
            self.buffer[i + 3],
        ]
    }

    /// Seed from a configuration bundle, parsing its coordinate strings
    /// into this grid's numeric backend.
    pub fn seed(&mut self, config: &SeedConfig) -> Result<(), EngineError> {
        let region = config.region::<T>().map_err(EngineError::UnusableSeed)?;
        self.seed_region(region, config.palette, config.shape)
    }

    /// Bind a region and reset the scan cursor to the first position.
    ///
    /// Rejects degenerate regions before touching any state, so a failed
    /// re-seed leaves the previous scan intact. On success any in-flight
    /// scan is discarded and the buffer cleared to transparent, so exported
    /// images show exactly what was painted.
    pub fn seed_region(
        &mut self,
        region: PlaneRegion<T>,
        palette: Palette,
        shape: GridShape,
    ) -> Result<(), EngineError> {
        if region.is_degenerate() {
            return Err(EngineError::DegenerateRegion);
        }

        let two = T::from(2.0);
        let x_left = region.center_x.clone() - region.half_width.clone();
        let x_inc = (region.half_width.clone() * two.clone()) / T::from(self.width as f64);
        let y_top = region.center_y.clone() + region.half_height.clone();
        let y_inc = (region.half_height.clone() * two) / T::from(self.height as f64);
        let max_iterations = max_iterations_for(&region.half_width, &region.half_height);

        self.buffer.fill(0);
        self.palette = palette;
        self.shape = shape;

        let (start, end) = row_span(shape, self.width, self.height, 0);
        self.scan = Some(ScanState {
            x_pos: x_left.clone() + x_inc.clone() * T::from(start as f64),
            y_pos: y_top,
            x_left,
            x_inc,
            y_inc,
            max_iterations,
            col: start,
            row: 0,
            row_end: end,
            done: false,
            region,
        });

        log::debug!(
            "seeded {}x{} grid, iteration cap {}",
            self.width,
            self.height,
            max_iterations
        );
        Ok(())
    }

    /// Resume scanning where the previous call left off, spending at most
    /// `budget` escape-time iterations.
    ///
    /// Each pixel is charged the iterations it actually consumed; the
    /// overdraft from the last pixel of a call is discarded, never carried
    /// into the next call, so chunking the budget differently cannot change
    /// the final image. Returns the minimal bounding rectangle of pixels
    /// painted by this call, or None if none were.
    pub fn advance(&mut self, budget: u64) -> Option<PixelRect> {
        let GridComputer {
            width,
            height,
            shape,
            palette,
            buffer,
            scan,
        } = self;
        let scan = scan.as_mut()?;
        if scan.done {
            return None;
        }

        let mut remaining = budget.min(i64::MAX as u64) as i64;
        let mut dirty = DirtyBounds::default();

        while scan.row < *height {
            while remaining > 0 && scan.col < scan.row_end {
                let result = evaluate(&scan.x_pos, &scan.y_pos, scan.max_iterations);
                let rgb = color_for(*palette, &result);

                let i = (scan.row as usize * *width as usize + scan.col as usize) * 4;
                buffer[i] = rgb[0];
                buffer[i + 1] = rgb[1];
                buffer[i + 2] = rgb[2];
                buffer[i + 3] = 0xff;

                dirty.mark(scan.col, scan.row);
                scan.x_pos = scan.x_pos.clone() + scan.x_inc.clone();
                scan.col += 1;
                remaining -= (scan.max_iterations - result.iterations_remaining) as i64;
            }
            if remaining <= 0 {
                break;
            }

            scan.row += 1;
            if scan.row >= *height {
                scan.done = true;
                break;
            }
            let (start, end) = row_span(*shape, *width, *height, scan.row);
            scan.col = start;
            scan.row_end = end;
            scan.x_pos = scan.x_left.clone() + scan.x_inc.clone() * T::from(start as f64);
            scan.y_pos = scan.y_pos.clone() - scan.y_inc.clone();
        }

        dirty.rect()
    }

    /// Push a dirty rectangle of this grid's buffer to the display surface.
    pub fn flush(&self, surface: &mut dyn DisplaySurface, rect: PixelRect) {
        surface.put_region(&self.buffer, rect, self.width);
    }
}

impl<T: Real> BudgetedGrid for GridComputer<T> {
    fn advance(&mut self, budget: u64) -> Option<PixelRect> {
        GridComputer::advance(self, budget)
    }

    fn reseed(&mut self, config: &SeedConfig) -> Result<(), EngineError> {
        self.seed(config)
    }

    fn is_complete(&self) -> bool {
        self.state() == GridState::Complete
    }
}
