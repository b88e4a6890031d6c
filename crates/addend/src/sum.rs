//! Summation over operands

use crate::context::{Coercion, Overflow};
use crate::error::type_name;
use crate::{AddError, Number, Operand, Result, SumContext};

/// Add operands with the default lenient context.
///
/// Numeric text is coerced, text that is not a number turns the result into
/// NaN, and integer overflow widens to f64. An empty input sums to `0`.
///
/// ```
/// use addend::{add, Operand};
///
/// assert_eq!(add([Operand::from(1), Operand::from(2)]), 3i64);
/// assert_eq!(add(["1", "2"].map(Operand::from)), 3i64);
/// assert_eq!(add(Vec::<Operand>::new()), 0i64);
/// ```
pub fn add<I>(operands: I) -> Number
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    operands
        .into_iter()
        .fold(Number::ZERO, |total, operand| {
            widening_add(total, operand.into().coerce())
        })
}

/// Add operands under `ctx`.
///
/// Fails only when `ctx` is strict about coercion or overflow.
pub fn sum<I>(operands: I, ctx: &SumContext) -> Result<Number>
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    let mut total = Number::ZERO;
    for (index, operand) in operands.into_iter().enumerate() {
        let operand = operand.into();
        let n = coerce_operand(&operand, ctx)?;
        total = add_numbers(total, n, ctx.overflow)?;

        if ctx.trace {
            tracing::trace!(
                index,
                operand = %operand,
                kind = type_name(&operand),
                total = %total,
                "accumulated operand"
            );
        }
    }
    Ok(total)
}

/// Add two numbers.
///
/// Integers add exactly; a float on either side makes the result a float.
/// Overflow is handled per `overflow`.
pub fn add_numbers(left: Number, right: Number, overflow: Overflow) -> Result<Number> {
    if let (Number::Int(a), Number::Int(b)) = (left, right) {
        if a.checked_add(b).is_none() && overflow == Overflow::Error {
            return Err(AddError::IntegerOverflow { left: a, right: b });
        }
    }
    Ok(widening_add(left, right))
}

fn widening_add(left: Number, right: Number) -> Number {
    match (left, right) {
        (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
            Some(n) => Number::Int(n),
            None => {
                tracing::debug!(left = a, right = b, "integer overflow, widening to f64");
                Number::Float(a as f64 + b as f64)
            }
        },
        (a, b) => Number::Float(a.as_f64() + b.as_f64()),
    }
}

fn coerce_operand(operand: &Operand, ctx: &SumContext) -> Result<Number> {
    let n = operand.coerce();
    if n.is_nan() && ctx.coercion == Coercion::Strict {
        tracing::debug!(operand = %operand, "rejecting non-numeric operand");
        return Err(AddError::NotANumber {
            input: operand.to_string(),
        });
    }
    Ok(n)
}

/// Add any number of operands: `add!(1, 2.5, "3")`.
///
/// Each argument is converted with `Operand::from` and summed with
/// [`add`](crate::add). `add!()` is `0`.
#[macro_export]
macro_rules! add {
    () => {
        $crate::Number::ZERO
    };
    ($($operand:expr),+ $(,)?) => {
        $crate::add([$($crate::Operand::from($operand)),+])
    };
}
