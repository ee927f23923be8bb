pub mod calibrate;
pub mod error;
pub mod grid;
pub mod scheduler;
pub mod surface;

pub use calibrate::{calibrate, IterationBudget, DEFAULT_MAX_ITERATIONS, TIMESLICE_MS};
pub use error::EngineError;
pub use grid::{GridComputer, GridState};
pub use scheduler::{BudgetedGrid, GridId, Scheduler, TickReport};
pub use surface::{DisplaySurface, NullSurface};

// Re-export core types for convenience
pub use mandelgrid_core::*;
