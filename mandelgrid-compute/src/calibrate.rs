//! Startup calibration of the per-timeslice iteration budget.
//!
//! Run once per numeric backend before any grid is scheduled; the result
//! lets the scheduler cap work per tick without querying the clock on
//! every pixel.

use mandelgrid_core::{escape_time, Real};
use std::time::{Duration, Instant};

/// One animation time slice at 60 frames per second, in milliseconds.
pub const TIMESLICE_MS: u64 = 1000 / 60;

/// Default iteration cap, also the floor for any calibration result.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Doubling rounds allowed before a trial is declared unmeasurable.
const MAX_DOUBLINGS: u32 = 64;

/// Deep-interior point every calibration evaluates; it always burns the
/// full iteration cap.
const CALIBRATION_POINT: (f64, f64) = (-0.5, 0.0);

/// Iterations affordable per time slice, shared by every grid running on
/// the same backend. Read-only after calibration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IterationBudget {
    pub per_timeslice: u64,
}

impl IterationBudget {
    /// Measure the host once at startup for backend `T`.
    pub fn measure<T: Real>() -> Self {
        Self {
            per_timeslice: calibrate::<T>(0, 8),
        }
    }

    /// Fixed budget, for hosts (and tests) that want deterministic ticks.
    pub fn fixed(per_timeslice: u64) -> Self {
        Self { per_timeslice }
    }
}

/// Estimate how many escape-time iterations fit into one time slice.
///
/// Each trial doubles a probe iteration cap until the wall clock crosses
/// the slice threshold, accumulating the useful iterations performed along
/// the way; the round that crosses the threshold is discarded. The next
/// trial starts from this trial's average so the doubling ladder spends
/// fewer rounds in the noise. The result is the floored average across
/// trials. If a trial exhausts its doubling allowance without crossing the
/// threshold (a clock too coarse to measure), whatever was measured so far
/// stands in, floored at `DEFAULT_MAX_ITERATIONS`.
pub fn calibrate<T: Real>(start_iterations: u32, trials: u32) -> u64 {
    let timeslice = Duration::from_millis(TIMESLICE_MS);
    let x = T::from(CALIBRATION_POINT.0);
    let y = T::from(CALIBRATION_POINT.1);

    let trials = trials.max(1);
    let mut start = start_iterations as u64;
    let mut total: u64 = 0;
    let mut completed: u32 = 0;

    'trials: for _ in 0..trials {
        let mut useful: u64 = 0;
        let began = Instant::now();
        let mut increment = (DEFAULT_MAX_ITERATIONS / 2) as u64;
        let mut doublings = 0;

        loop {
            increment *= 2;
            doublings += 1;
            if doublings > MAX_DOUBLINGS {
                log::warn!(
                    "calibration never crossed the {}ms slice after {} doublings",
                    TIMESLICE_MS,
                    MAX_DOUBLINGS
                );
                break 'trials;
            }

            let cap = (start + increment).min(u32::MAX as u64) as u32;
            let remaining = escape_time(&x, &y, cap);
            if began.elapsed() >= timeslice {
                break;
            }
            useful += (cap - remaining) as u64;
            start = 0;
        }

        total += useful;
        completed += 1;
        start = useful / trials as u64;
    }

    let measured = if completed > 0 {
        total / completed as u64
    } else {
        0
    };
    let budget = measured.max(DEFAULT_MAX_ITERATIONS as u64);
    log::info!(
        "calibrated {} iterations per {}ms timeslice",
        budget,
        TIMESLICE_MS
    );
    budget
}
