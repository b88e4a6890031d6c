//! Display and Debug implementations for Operand

use std::fmt;

use super::*;

impl fmt::Debug for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(n) => write!(f, "{}", n),
            Operand::Float(n) => write!(f, "{:?}", n),
            Operand::Text(s) => write!(f, "{:?}", s.as_ref()),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Text(s) => write!(f, "{}", s.as_ref()), // No quotes for Display
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Operand::Int(5)), "5");
        assert_eq!(format!("{:?}", Operand::Float(2.0)), "2.0");
        assert_eq!(format!("{:?}", Operand::text("5")), "\"5\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(Operand::text("5").to_string(), "5");
        assert_eq!(Operand::Float(2.5).to_string(), "2.5");
    }
}
