//! String-to-number coercion
//!
//! The rules follow the usual dynamic-language reading of numeric text:
//!
//! - surrounding whitespace (including U+FEFF) is ignored, and blank text
//!   reads as `0`
//! - decimal numbers with optional sign, fraction and exponent (`-1.5e3`,
//!   `.5`, `1.`)
//! - `Infinity` with an optional sign
//! - unsigned `0x`, `0o` and `0b` radix literals
//!
//! Anything else reads as NaN. Integral text that fits in an `i64` stays an
//! exact [`Number::Int`].

use crate::Number;

/// Read `input` as a number, yielding [`Number::NAN`] when it is not one.
pub fn to_number(input: &str) -> Number {
    let s = input.trim_matches(is_space);
    if s.is_empty() {
        return Number::ZERO;
    }

    if let Some(n) = parse_radix(s) {
        return n;
    }

    match s {
        "Infinity" | "+Infinity" => return Number::Float(f64::INFINITY),
        "-Infinity" => return Number::Float(f64::NEG_INFINITY),
        _ => {}
    }

    if !is_decimal(s) {
        return Number::NAN;
    }

    if is_integral(s) {
        if let Ok(n) = s.parse::<i64>() {
            return Number::Int(n);
        }
    }

    s.parse::<f64>().map(Number::Float).unwrap_or(Number::NAN)
}

/// Check whether `input` reads as a number under [`to_number`].
pub fn is_numeric_text(input: &str) -> bool {
    !to_number(input).is_nan()
}

/// Parse `0x`/`0o`/`0b` prefixed text. Returns `None` when there is no prefix.
fn parse_radix(s: &str) -> Option<Number> {
    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => 16,
        Some("0o") | Some("0O") => 8,
        Some("0b") | Some("0B") => 2,
        _ => return None,
    };
    let digits = &s[2..];

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(Number::NAN);
    }

    match i64::from_str_radix(digits, radix) {
        Ok(n) => Some(Number::Int(n)),
        // Too wide for i64: accumulate in f64
        Err(_) => Some(Number::Float(digits.chars().fold(0.0, |acc, c| {
            acc * radix as f64 + c.to_digit(radix).map_or(0.0, f64::from)
        }))),
    }
}

/// Optional sign, then digits with at most one `.`, then an optional exponent.
fn is_decimal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    i == bytes.len()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn is_integral(s: &str) -> bool {
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
