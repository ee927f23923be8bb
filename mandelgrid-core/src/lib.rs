pub mod color;
pub mod config;
pub mod escape;
pub mod pixel_rect;
pub mod real;
pub mod region;
pub mod transforms;

pub use color::{color_for, smooth_value, Palette};
pub use config::{GridShape, SeedConfig, ViewState};
pub use escape::{escape_time, evaluate, EscapeResult};
pub use pixel_rect::{DirtyBounds, PixelRect};
pub use real::{DecFloat, Real, DECIMAL_DIGITS};
pub use region::PlaneRegion;
pub use transforms::{
    max_iterations_for, region_from_click, region_from_selection, Selection,
};
