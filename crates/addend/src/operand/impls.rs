//! Operand trait implementations: constructors, predicates, extractors, From traits, PartialEq

use std::sync::Arc;

use super::*;
use crate::coerce::to_number;
use crate::Number;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Operand {
    /// Create a text operand
    pub fn text(s: impl Into<String>) -> Self {
        Operand::Text(Arc::new(s.into()))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if operand is an integer
    pub fn is_integer(&self) -> bool {
        matches!(self, Operand::Int(_))
    }

    /// Check if operand is a float
    pub fn is_float(&self) -> bool {
        matches!(self, Operand::Float(_))
    }

    /// Check if operand is numeric (integer or float)
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Check if operand is text
    pub fn is_text(&self) -> bool {
        matches!(self, Operand::Text(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════
    /// Extract integer value
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Operand::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract as f64 (converts from integer)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Operand::Int(n) => Some(*n as f64),
            Operand::Float(n) => Some(*n),
            Operand::Text(_) => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Operand::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Coerce this operand to a number.
    ///
    /// Numbers pass through; text that does not read as a number yields NaN.
    pub fn coerce(&self) -> Number {
        match self {
            Operand::Int(n) => Number::Int(*n),
            Operand::Float(n) => Number::Float(*n),
            Operand::Text(s) => to_number(s),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

impl PartialEq for Operand {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Operand::Int(a), Operand::Int(b)) => a == b,
            (Operand::Float(a), Operand::Float(b)) => a == b,
            (Operand::Text(a), Operand::Text(b)) => a == b,
            _ => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(n: $t) -> Self {
                    Operand::Int(i64::from(n))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Operand {
    fn from(n: f32) -> Self {
        Operand::Float(f64::from(n))
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Float(n)
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(Arc::new(s))
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::text(s)
    }
}

impl From<&String> for Operand {
    fn from(s: &String) -> Self {
        Operand::text(s.as_str())
    }
}

impl From<Number> for Operand {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(n) => Operand::Int(n),
            Number::Float(n) => Operand::Float(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_constructor() {
        let op = Operand::text("12");
        assert!(op.is_text());
        assert_eq!(op.as_str(), Some("12"));
    }

    #[test]
    fn test_predicates() {
        assert!(Operand::Int(1).is_integer());
        assert!(Operand::Int(1).is_numeric());
        assert!(Operand::Float(1.5).is_float());
        assert!(Operand::Float(1.5).is_numeric());
        assert!(!Operand::text("1").is_numeric());
    }

    #[test]
    fn test_extractors() {
        assert_eq!(Operand::Int(7).as_i64(), Some(7));
        assert_eq!(Operand::Float(7.0).as_i64(), None);
        assert_eq!(Operand::Int(7).as_f64(), Some(7.0));
        assert_eq!(Operand::text("7").as_f64(), None);
        assert_eq!(Operand::Int(7).as_str(), None);
    }

    #[test]
    fn test_coerce_passthrough() {
        assert_eq!(Operand::Int(3).coerce(), Number::Int(3));
        assert_eq!(Operand::Float(0.5).coerce(), Number::Float(0.5));
        assert_eq!(Operand::text(" 4 ").coerce(), Number::Int(4));
        assert!(Operand::text("four").coerce().is_nan());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Operand::from(3u8), Operand::Int(3));
        assert_eq!(Operand::from(-3i32), Operand::Int(-3));
        assert_eq!(Operand::from(u32::MAX), Operand::Int(u32::MAX as i64));
        assert_eq!(Operand::from(1.5f32), Operand::Float(1.5));
        assert_eq!(Operand::from("x"), Operand::text("x"));
        assert_eq!(Operand::from(String::from("x")), Operand::text("x"));
        assert_eq!(Operand::from(Number::Int(9)), Operand::Int(9));
    }

    #[test]
    fn test_equality_is_per_variant() {
        assert_ne!(Operand::Int(1), Operand::Float(1.0));
        assert_ne!(Operand::Int(1), Operand::text("1"));
    }
}
