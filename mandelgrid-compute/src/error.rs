//! Engine error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("degenerate plane region: half-distances must be positive")]
    DegenerateRegion,

    #[error("unusable seed parameter: {0}")]
    UnusableSeed(String),
}
