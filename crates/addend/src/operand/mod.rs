//! Operand representation for summation inputs

mod display;
mod impls;

use std::sync::Arc;

/// One input to a summation, before coercion.
///
/// Numbers pass through coercion unchanged; text is read with the rules in
/// [`crate::coerce`].
#[derive(Clone)]
pub enum Operand {
    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Text holding (possibly) a number
    Text(Arc<String>),
}
