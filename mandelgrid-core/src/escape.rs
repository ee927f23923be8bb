//! Escape-time evaluation of z ← z² + c.
//!
//! The escape threshold is `magnitude² >= 4`, matching the Scientific
//! American (Aug. 1985) formulation; the loop continues strictly below 4.
//! Do not change to a strict `> 4` comparison.

use crate::real::Real;

/// Extra iterations run past escape to sharpen the smooth-coloring
/// estimate. See <http://linas.org/art-gallery/escape/escape.html>.
const REFINEMENT_ITERATIONS: u32 = 4;

/// Outcome of evaluating a single point.
///
/// `iterations_remaining == 0` means the point is presumed to be in the set.
/// The two squares are the final a², b² after the refinement iterations and
/// are meaningless for set members.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EscapeResult {
    pub iteration_cap: u32,
    pub iterations_remaining: u32,
    pub last_real_sq: f64,
    pub last_imag_sq: f64,
}

impl EscapeResult {
    pub fn escaped(&self) -> bool {
        self.iterations_remaining > 0
    }
}

/// Iterate z ← z² + c from z₀ = 0 with c = x + yi.
///
/// Returns (iterations remaining, a, b, a², b²) at the point the loop
/// stopped, so the refinement pass can continue the same recurrence.
fn iterate<T: Real>(x: &T, y: &T, cap: u32) -> (u32, T, T, T, T) {
    debug_assert!(cap > 0, "iteration cap must be positive");

    let two = T::from(2.0);
    let four = T::from(4.0);
    let mut a = T::from(0.0);
    let mut b = T::from(0.0);
    let mut ta = T::from(0.0);
    let mut tb = T::from(0.0);
    let mut n = cap;

    loop {
        b = two.clone() * a.clone() * b + y.clone();
        a = ta - tb + x.clone();
        ta = a.clone() * a.clone();
        tb = b.clone() * b.clone();
        n -= 1;
        let magnitude_sq = ta.clone() + tb.clone();
        if n == 0 || !(magnitude_sq < four) {
            break;
        }
    }

    (n, a, b, ta, tb)
}

/// Membership test only: iterations remaining, 0 if presumed in the set.
///
/// This is the hot path used by the calibrator, which never needs the
/// refinement squares.
pub fn escape_time<T: Real>(x: &T, y: &T, cap: u32) -> u32 {
    iterate(x, y, cap).0
}

/// Full evaluation including the refinement data the colorizer consumes.
pub fn evaluate<T: Real>(x: &T, y: &T, cap: u32) -> EscapeResult {
    let (n, mut a, mut b, mut ta, mut tb) = iterate(x, y, cap);

    if n > 0 {
        let two = T::from(2.0);
        for _ in 0..REFINEMENT_ITERATIONS {
            b = two.clone() * a.clone() * b + y.clone();
            a = ta - tb + x.clone();
            ta = a.clone() * a.clone();
            tb = b.clone() * b.clone();
        }
    }

    EscapeResult {
        iteration_cap: cap,
        iterations_remaining: n,
        last_real_sq: ta.to_f64(),
        last_imag_sq: tb.to_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::real::DecFloat;

    #[test]
    fn trivial_exterior_escapes_within_one_iteration() {
        // |c|² > 4 means the very first iterate z₁ = c already exceeds the
        // threshold.
        for (x, y) in [(3.0, 0.0), (0.0, -2.5), (2.0, 2.0), (-2.1, 1.0)] {
            let n = escape_time(&x, &y, 100);
            assert_eq!(n, 99, "({}, {}) should escape on iteration 1", x, y);
        }
    }

    #[test]
    fn calibration_point_is_deep_interior() {
        for cap in [10, 100, 1000] {
            let n = escape_time(&-0.5, &0.0, cap);
            assert_eq!(n, 0, "(-0.5, 0) must not escape within {}", cap);
        }
    }

    #[test]
    fn origin_is_in_set() {
        assert_eq!(escape_time(&0.0, &0.0, 500), 0);
    }

    #[test]
    fn threshold_is_inclusive_at_four() {
        // c = -2: z₁ = -2, magnitude² = 4 exactly. The >= 4 policy counts
        // this as escaped on the first iteration even though the orbit of
        // -2 is actually bounded.
        let n = escape_time(&-2.0, &0.0, 100);
        assert_eq!(n, 99);
    }

    #[test]
    fn boundary_point_escapes_late() {
        let result = evaluate(&-0.75, &0.1, 1000);
        assert!(result.escaped());
        let used = result.iteration_cap - result.iterations_remaining;
        assert!(used > 10, "boundary point used only {} iterations", used);
    }

    #[test]
    fn refinement_squares_populated_on_escape() {
        let result = evaluate(&2.0, &0.0, 100);
        assert!(result.escaped());
        // Four more squarings past escape make the squares enormous.
        assert!(result.last_real_sq + result.last_imag_sq > 16.0);
    }

    #[test]
    fn evaluate_records_cap() {
        let result = evaluate(&0.0, &0.0, 250);
        assert_eq!(result.iteration_cap, 250);
        assert_eq!(result.iterations_remaining, 0);
        assert!(!result.escaped());
    }

    #[test]
    fn decimal_backend_agrees_with_f64_on_robust_points() {
        // Points chosen far from the boundary so the iteration count is
        // insensitive to the extra decimal precision.
        for (x, y) in [(2.0, 0.0), (0.5, 0.5), (-2.5, 0.0), (-1.0, 0.0), (0.0, 0.0)] {
            let n_f64 = escape_time(&x, &y, 100);
            let n_dec = escape_time(&DecFloat::from_f64(x), &DecFloat::from_f64(y), 100);
            assert_eq!(n_f64, n_dec, "backend mismatch at ({}, {})", x, y);
        }
    }
}
