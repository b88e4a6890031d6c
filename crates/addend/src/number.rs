//! Coerced numeric values

use std::fmt;

/// A number produced by coercing an [`crate::Operand`].
///
/// Integers stay exact until they overflow; anything involving a float is a
/// float. `Float(NAN)` is the not-a-number sentinel and propagates through
/// addition.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Exact integer
    Int(i64),
    /// Floating point, including NaN and the infinities
    Float(f64),
}

impl Number {
    /// The not-a-number sentinel
    pub const NAN: Number = Number::Float(f64::NAN);

    /// The additive identity
    pub const ZERO: Number = Number::Int(0);

    /// Check if this is the not-a-number sentinel
    pub fn is_nan(&self) -> bool {
        matches!(self, Number::Float(n) if n.is_nan())
    }

    /// Check if this is an exact integer
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Extract as f64 (integers are converted)
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(n) => *n as f64,
            Number::Float(n) => *n,
        }
    }

    /// Extract as i64 if this is an exact integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(*n),
            Number::Float(_) => None,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::ZERO
    }
}

// Exact numeric equality across variants; NaN equals nothing.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(a), Number::Float(b)) | (Number::Float(b), Number::Int(a)) => {
                float_equals_int(b, a)
            }
        }
    }
}

/// True when `f` is integral, within i64 range, and equal to `n`.
fn float_equals_int(f: f64, n: i64) -> bool {
    // i64::MIN is exactly representable; i64::MAX rounds up to 2^63
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = -(i64::MIN as f64);
    f.fract() == 0.0 && (LOWER..UPPER).contains(&f) && f as i64 == n
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Number::Int(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Number::Float(*other)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(n) if n.is_nan() => write!(f, "NaN"),
            Number::Float(n) if n.is_infinite() => {
                if n > 0.0 {
                    write!(f, "Infinity")
                } else {
                    write!(f, "-Infinity")
                }
            }
            // Negative zero prints as 0
            Number::Float(n) if n == 0.0 => write!(f, "0"),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}
