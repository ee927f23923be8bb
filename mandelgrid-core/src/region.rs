use crate::real::Real;

/// Rectangular view region of the complex plane: a center point plus
/// half-distances along each axis.
///
/// Invariant: both half-distances are positive. A region is replaced
/// wholesale on every zoom or pan; it is never partially mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneRegion<T> {
    pub center_x: T,
    pub center_y: T,
    pub half_width: T,
    pub half_height: T,
}

impl<T: Real> PlaneRegion<T> {
    pub fn new(center_x: T, center_y: T, half_width: T, half_height: T) -> Self {
        Self {
            center_x,
            center_y,
            half_width,
            half_height,
        }
    }

    /// Construct from f64 values, converting into the backend type.
    pub fn from_f64(center_x: f64, center_y: f64, half_width: f64, half_height: f64) -> Self {
        Self::new(
            T::from(center_x),
            T::from(center_y),
            T::from(half_width),
            T::from(half_height),
        )
    }

    /// True when either half-distance fails the positivity invariant.
    ///
    /// Written as a negated `>` so a NaN half-distance also counts as
    /// degenerate.
    pub fn is_degenerate(&self) -> bool {
        let zero = T::from(0.0);
        !(self.half_width > zero) || !(self.half_height > zero)
    }
}
