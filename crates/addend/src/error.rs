//! Error types for addend operations

use thiserror::Error;

use crate::Operand;

/// Main error type for addend operations.
///
/// The default lenient configuration never produces any of these from
/// [`crate::sum`]; they surface only under strict settings or when parsing
/// operand lists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AddError {
    /// An operand could not be coerced to a number (strict coercion only)
    #[error("not a number: {input:?}")]
    NotANumber {
        /// The operand text as given
        input: String,
    },

    /// Integer addition overflowed i64 and widening is disabled
    #[error("integer overflow: {left} + {right}")]
    IntegerOverflow {
        /// Left-hand addend
        left: i64,
        /// Right-hand addend
        right: i64,
    },

    /// Expression or literal that cannot act as an operand
    #[error("unsupported operand at column {column}: {kind}")]
    UnsupportedOperand {
        /// Human-readable description of what was found
        kind: String,
        /// Zero-based column where it starts
        column: usize,
    },

    /// Operand list is not valid syntax
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<syn::Error> for AddError {
    fn from(err: syn::Error) -> Self {
        AddError::Parse(err.to_string())
    }
}

/// Result type alias for addend operations
pub type Result<T> = std::result::Result<T, AddError>;

/// Get a type name for an operand, used in error and log messages.
pub fn type_name(operand: &Operand) -> &'static str {
    match operand {
        Operand::Int(_) => "i64",
        Operand::Float(_) => "f64",
        Operand::Text(_) => "String",
    }
}
