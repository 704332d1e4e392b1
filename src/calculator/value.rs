//! Numeric value representation
//!
//! This module defines the [`Number`] enum, the only kind of value that lives on
//! the calculator stack.
//!
//! # Value Types
//!
//! - [`Number::Int`]: 64-bit signed integer, produced by integer literals and by
//!   integer arithmetic that does not overflow
//! - [`Number::Real`]: 64-bit float, produced by real literals, division, and any
//!   integer arithmetic that would overflow
//! - [`Number::Complex`]: produced by `a+bj` literals and by powers of negative
//!   bases with fractional exponents
//!
//! # Equality
//!
//! Numbers compare by value across variants: `Int(3) == Real(3.0)` and
//! `Real(2.0) == Complex(2+0j)`.
//!
//! # Display
//!
//! Integers print without a decimal point, integral reals keep a trailing `.0`
//! (`3.0`), very large or very small reals switch to exponent notation, and
//! complex values print as `(a+bj)`. This text is what the stack pane shows and
//! what is handed to the clipboard on quit.

use super::complex::Complex;
use std::fmt;

/// A value on the calculator stack
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Real(f64),
    Complex(Complex),
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl Number {
    /// Real-axis value; the imaginary part of a complex number is discarded
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(n) => *n as f64,
            Number::Real(v) => *v,
            Number::Complex(c) => c.re,
        }
    }

    pub fn to_complex(&self) -> Complex {
        match self {
            Number::Complex(c) => *c,
            other => Complex::from_real(other.as_f64()),
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Number::Complex(_))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(n) => *n == 0,
            Number::Real(v) => *v == 0.0,
            Number::Complex(c) => c.is_zero(),
        }
    }

    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Number::Int(_) => "integer",
            Number::Real(_) => "real",
            Number::Complex(_) => "complex",
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Complex(_), _) | (_, Number::Complex(_)) => {
                self.to_complex() == other.to_complex()
            }
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Real(v)
    }
}

impl From<Complex> for Number {
    fn from(c: Complex) -> Self {
        Number::Complex(c)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Real(v) => f.write_str(&format_real(*v, true)),
            Number::Complex(c) => {
                let sign = if c.im.is_sign_negative() && !c.im.is_nan() {
                    '-'
                } else {
                    '+'
                };
                if c.re == 0.0 && c.re.is_sign_positive() {
                    write!(f, "{}j", format_real(c.im, false))
                } else {
                    write!(
                        f,
                        "({}{}{}j)",
                        format_real(c.re, false),
                        sign,
                        format_real(c.im.abs(), false)
                    )
                }
            }
        }
    }
}

/// Format a real in its shortest round-trip form.
///
/// `keep_point` appends `.0` to integral values (used for standalone reals but
/// not for complex components, where `(2+3j)` reads better than `(2.0+3.0j)`).
fn format_real(v: f64, keep_point: bool) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = v.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(v);
    }
    if v.fract() == 0.0 && keep_point {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// Scientific form with a signed, two-digit-minimum exponent (`1e+16`, `1e-05`)
fn format_exponent(v: f64) -> String {
    let text = format!("{:e}", v);
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    match exponent.strip_prefix('-') {
        Some(digits) => format!("{}e-{:0>2}", mantissa, digits),
        None => format!("{}e+{:0>2}", mantissa, exponent),
    }
}
