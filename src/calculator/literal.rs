//! Literal parsing
//!
//! Turns the text of a committed token into a [`Number`]. Forms are tried in
//! order, so the narrowest representation wins:
//!
//! 1. integer (`42`, `-7`, `+3`)
//! 2. real (`3.14`, `.5`, `1e6`, `-2.5E-3`, `inf`, `nan`)
//! 3. complex (`2+3j`, `-1.5-2j`, `4j`, `j`, `(1+2j)`)
//!
//! Integers too large for `i64` fall through to the real form.

use super::complex::Complex;
use super::errors::CalcError;
use super::value::Number;

/// Parse `text` into a number, or report it as an invalid literal
pub fn parse_literal(text: &str) -> Result<Number, CalcError> {
    parse_number(text.trim()).ok_or_else(|| CalcError::InvalidLiteral {
        literal: text.to_string(),
    })
}

fn parse_number(text: &str) -> Option<Number> {
    if text.is_empty() {
        return None;
    }
    if let Ok(n) = text.parse::<i64>() {
        return Some(Number::Int(n));
    }
    if let Ok(v) = text.parse::<f64>() {
        return Some(Number::Real(v));
    }
    parse_complex(text).map(Number::Complex)
}

fn parse_complex(text: &str) -> Option<Complex> {
    let inner = text
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(text)
        .trim();
    let body = inner.strip_suffix(['j', 'J'])?;

    // The real/imaginary split is the last sign that neither leads the body
    // nor belongs to an exponent (`1e-3+2j` splits before `+2`).
    let bytes = body.as_bytes();
    let split = body
        .char_indices()
        .skip(1)
        .filter(|&(i, c)| (c == '+' || c == '-') && !matches!(bytes[i - 1], b'e' | b'E'))
        .map(|(i, _)| i)
        .last();

    let (re_text, im_text) = match split {
        Some(i) => (&body[..i], &body[i..]),
        None => ("", body),
    };

    let re = if re_text.is_empty() {
        0.0
    } else {
        parse_component(re_text)?
    };
    let im = match im_text {
        "" | "+" => 1.0,
        "-" => -1.0,
        t => parse_component(t)?,
    };
    Some(Complex::new(re, im))
}

fn parse_component(text: &str) -> Option<f64> {
    if text.contains(|c: char| c.is_whitespace() || c == '(' || c == ')') {
        return None;
    }
    text.parse::<f64>().ok()
}
