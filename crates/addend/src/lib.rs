//! # Addend
//!
//! Variadic addition over numbers and numeric strings.
//!
//! Every operand is coerced to a [`Number`] before it is added, so `1`,
//! `"1"` and `1.0` all contribute the same amount. Text that does not read
//! as a number becomes NaN, which propagates through the sum, unless a
//! strict [`SumContext`] turns it into an error instead.
//!
//! ```
//! use addend::add;
//!
//! assert_eq!(addend::add!(1, 2), 3i64);
//! assert_eq!(addend::add!("1", "2"), 3i64);
//! assert_eq!(add([5, 7, 9, 11, 13, 15]), 60i64);
//! assert!(addend::add!(1, "one").is_nan());
//! ```
//!
//! ## Layout
//!
//! - [`operand`]: inputs before coercion
//! - [`coerce`]: the string-to-number rules
//! - [`sum`](mod@sum): folding operands into a total
//! - [`parse`]: reading operand lists written as Rust literals

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coerce;
pub mod context;
pub mod error;
pub mod number;
pub mod operand;
pub mod parse;
pub mod sum;

// Re-export main types
pub use coerce::to_number;
pub use context::{Coercion, Overflow, SumContext};
pub use error::{AddError, Result};
pub use number::Number;
pub use operand::Operand;
pub use parse::{parse_operand, parse_operands};
pub use sum::{add, add_numbers, sum};

/// Addend version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
