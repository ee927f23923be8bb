use dashu_base::{Abs, Approximation};
use dashu_float::{round::mode::HalfAway, DBig, FBig};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Significant decimal digits carried by the arbitrary-precision backend.
///
/// Every multiply and divide re-rounds to this many digits so intermediate
/// digit growth stays bounded over long iteration chains.
pub const DECIMAL_DIGITS: usize = 20;

/// Numeric backend for plane coordinates and escape-time iteration.
///
/// Everything except `abs`, `to_f64` and `from_decimal_str` comes from
/// standard Rust operator traits, so `f64` satisfies the bound natively and
/// an arbitrary-precision type only has to wire up the operators.
pub trait Real:
    Clone
    + Debug
    + std::fmt::Display
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + From<f64>
{
    /// Absolute value.
    fn abs(&self) -> Self;

    /// Convert to f64 (may lose precision for arbitrary precision types).
    fn to_f64(&self) -> f64;

    /// Parse a decimal string, which may carry more digits than f64 holds.
    fn from_decimal_str(s: &str) -> Result<Self, String>;

    /// Smaller of two values by comparison.
    fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

impl Real for f64 {
    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn from_decimal_str(s: &str) -> Result<Self, String> {
        s.parse::<f64>()
            .map_err(|e| format!("failed to parse f64: {}", e))
    }
}

/// Arbitrary-precision decimal scalar held at [`DECIMAL_DIGITS`] significant
/// digits, for zoom depths where f64 pixel spacing collapses to zero.
#[derive(Clone, Debug)]
pub struct DecFloat(DBig);

/// Extract the value from a dashu rounding result.
fn take<T, E>(approx: Approximation<T, E>) -> T {
    match approx {
        Approximation::Exact(v) => v,
        Approximation::Inexact(v, _) => v,
    }
}

impl DecFloat {
    pub fn from_f64(val: f64) -> Self {
        if val == 0.0 {
            return DecFloat(take(DBig::ZERO.with_precision(DECIMAL_DIGITS)));
        }
        // Exact binary representation first, then an atomic base conversion
        // that rounds to the target decimal precision.
        let binary: FBig<HalfAway> = FBig::try_from(val).unwrap_or(FBig::ZERO);
        let decimal = take(binary.with_base_and_precision::<10>(DECIMAL_DIGITS));
        DecFloat(decimal.with_rounding::<HalfAway>())
    }

    /// Round back down to the fixed precision after an operation that can
    /// grow the digit count.
    fn rounded(value: DBig) -> Self {
        DecFloat(take(value.with_precision(DECIMAL_DIGITS)))
    }
}

impl Real for DecFloat {
    fn abs(&self) -> Self {
        DecFloat(self.0.clone().abs())
    }

    fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    fn from_decimal_str(s: &str) -> Result<Self, String> {
        s.parse::<DBig>()
            .map(Self::rounded)
            .map_err(|e| format!("failed to parse decimal: {}", e))
    }
}

impl Add for DecFloat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        DecFloat(&self.0 + &rhs.0)
    }
}

impl Sub for DecFloat {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        DecFloat(&self.0 - &rhs.0)
    }
}

impl Mul for DecFloat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::rounded(&self.0 * &rhs.0)
    }
}

impl Div for DecFloat {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::rounded(&self.0 / &rhs.0)
    }
}

impl PartialEq for DecFloat {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for DecFloat {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl From<f64> for DecFloat {
    fn from(val: f64) -> Self {
        Self::from_f64(val)
    }
}

impl std::fmt::Display for DecFloat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
