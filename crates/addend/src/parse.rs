//! Operand list parsing
//!
//! Reads a comma-separated list of Rust literals, such as `1, -2.5, "3"`,
//! into operands. Integer literals may carry any integer suffix and are
//! range-checked against it; values beyond `i64` become floats.

use quote::ToTokens;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;

use crate::{AddError, Operand, Result};

/// Parse a comma-separated operand list.
///
/// An empty string is an empty list; a trailing comma is allowed.
pub fn parse_operands(src: &str) -> Result<Vec<Operand>> {
    let list = Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated.parse_str(src)?;
    let operands = list
        .iter()
        .map(expr_to_operand)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = operands.len(), "parsed operand list");
    Ok(operands)
}

/// Parse a single operand expression.
pub fn parse_operand(src: &str) -> Result<Operand> {
    let expr: syn::Expr = syn::parse_str(src)?;
    expr_to_operand(&expr)
}

/// Convert a literal expression to an operand.
pub fn expr_to_operand(expr: &syn::Expr) -> Result<Operand> {
    match expr {
        syn::Expr::Lit(lit) => lit_to_operand(&lit.lit),

        // Parenthesized and grouped expressions - just unwrap
        syn::Expr::Paren(inner) => expr_to_operand(&inner.expr),
        syn::Expr::Group(inner) => expr_to_operand(&inner.expr),

        syn::Expr::Unary(unary) if matches!(unary.op, syn::UnOp::Neg(_)) => eval_neg(unary),

        _ => Err(unsupported(expr_kind_name(expr), expr)),
    }
}

fn lit_to_operand(lit: &syn::Lit) -> Result<Operand> {
    match lit {
        syn::Lit::Str(s) => Ok(Operand::text(s.value())),
        syn::Lit::Int(i) => int_literal(i),
        syn::Lit::Float(f) => float_literal(f),
        syn::Lit::Bool(_) => Err(unsupported("bool literal", lit)),
        syn::Lit::Char(_) => Err(unsupported("char literal", lit)),
        syn::Lit::Byte(_) => Err(unsupported("byte literal", lit)),
        syn::Lit::ByteStr(_) => Err(unsupported("byte string literal", lit)),
        syn::Lit::CStr(_) => Err(unsupported("C string literal", lit)),
        _ => Err(unsupported("unknown literal", lit)),
    }
}

/// Negate a numeric literal. `-9223372036854775808` stays an exact integer.
fn eval_neg(unary: &syn::ExprUnary) -> Result<Operand> {
    if let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Int(lit),
        ..
    }) = unary.expr.as_ref()
    {
        if matches!(lit.suffix(), "" | "i64") {
            if let Ok(n) = format!("-{}", lit.base10_digits()).parse::<i64>() {
                return Ok(Operand::Int(n));
            }
        }
    }

    match expr_to_operand(&unary.expr)? {
        Operand::Int(n) => Ok(n
            .checked_neg()
            .map(Operand::Int)
            .unwrap_or(Operand::Float(-(n as f64)))),
        Operand::Float(n) => Ok(Operand::Float(-n)),
        Operand::Text(_) => Err(unsupported("negated string literal", unary)),
    }
}

/// Evaluate an integer literal, respecting suffixes.
fn int_literal(lit: &syn::LitInt) -> Result<Operand> {
    match lit.suffix() {
        "" => Ok(lit
            .base10_parse::<i64>()
            .map(Operand::Int)
            .unwrap_or_else(|_| widen_digits(lit.base10_digits()))),
        "i8" => int_in_range::<i8>(lit),
        "i16" => int_in_range::<i16>(lit),
        "i32" => int_in_range::<i32>(lit),
        "i64" | "isize" => int_in_range::<i64>(lit),
        "i128" => int_in_range::<i128>(lit),
        "u8" => int_in_range::<u8>(lit),
        "u16" => int_in_range::<u16>(lit),
        "u32" => int_in_range::<u32>(lit),
        "u64" | "usize" => int_in_range::<u64>(lit),
        "u128" => {
            let n: u128 = lit.base10_parse()?;
            Ok(i64::try_from(n)
                .map(Operand::Int)
                .unwrap_or(Operand::Float(n as f64)))
        }
        other => Err(unsupported(
            &format!("integer with suffix `{}`", other),
            lit,
        )),
    }
}

fn int_in_range<T>(lit: &syn::LitInt) -> Result<Operand>
where
    T: std::str::FromStr + Into<i128>,
    T::Err: std::fmt::Display,
{
    let wide: i128 = lit.base10_parse::<T>()?.into();
    Ok(i64::try_from(wide)
        .map(Operand::Int)
        .unwrap_or(Operand::Float(wide as f64)))
}

fn widen_digits(digits: &str) -> Operand {
    digits
        .parse::<f64>()
        .map(Operand::Float)
        .unwrap_or(Operand::Float(f64::NAN))
}

/// Evaluate a float literal, respecting suffixes.
fn float_literal(lit: &syn::LitFloat) -> Result<Operand> {
    match lit.suffix() {
        "f32" => Ok(Operand::Float(f64::from(lit.base10_parse::<f32>()?))),
        "f64" | "" => Ok(Operand::Float(lit.base10_parse::<f64>()?)),
        other => Err(unsupported(&format!("float with suffix `{}`", other), lit)),
    }
}

/// Get a human-readable name for an expression kind.
fn expr_kind_name(expr: &syn::Expr) -> &'static str {
    match expr {
        syn::Expr::Array(_) => "array",
        syn::Expr::Binary(_) => "binary operation",
        syn::Expr::Block(_) => "block",
        syn::Expr::Call(_) => "function call",
        syn::Expr::Cast(_) => "cast",
        syn::Expr::Macro(_) => "macro invocation",
        syn::Expr::MethodCall(_) => "method call",
        syn::Expr::Path(_) => "path",
        syn::Expr::Range(_) => "range",
        syn::Expr::Reference(_) => "reference",
        syn::Expr::Tuple(_) => "tuple",
        syn::Expr::Unary(_) => "unary operation",
        _ => "expression",
    }
}

fn unsupported<T: ToTokens + Spanned>(what: &str, node: &T) -> AddError {
    AddError::UnsupportedOperand {
        kind: format!("{} `{}`", what, node.to_token_stream()),
        column: node.span().start().column,
    }
}
