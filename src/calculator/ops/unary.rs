//! Unary operator evaluation

use crate::calculator::engine::Calculator;
use crate::calculator::errors::CalcError;
use crate::calculator::ops::Operator;
use crate::calculator::value::Number;

impl Calculator {
    /// Round the top of the stack.
    ///
    /// An integer in the pending buffer is consumed as the number of decimal
    /// places; anything else in the buffer is left for the caller to commit.
    pub(crate) fn apply_round(&mut self) -> Result<(), CalcError> {
        self.require(Operator::Round, Operator::Round.arity())?;

        let precision = parse_precision(self.buffer());
        let value = self.pop();
        match round(value, precision) {
            Ok(result) => {
                if precision.is_some() {
                    self.clear_buffer();
                }
                log::debug!("round({}, {:?}) = {}", value, precision, result);
                self.push_value(result);
                Ok(())
            }
            Err(e) => {
                self.push_value(value);
                Err(e)
            }
        }
    }

    pub(crate) fn apply_negate(&mut self) -> Result<(), CalcError> {
        self.require(Operator::Negate, Operator::Negate.arity())?;

        let value = self.pop();
        self.push_value(negate(value));
        Ok(())
    }
}

/// Round half-to-even, to `precision` decimal places or to an integer.
///
/// Negative precision rounds to tens, hundreds, and so on.
pub fn round(value: Number, precision: Option<i32>) -> Result<Number, CalcError> {
    match (value, precision) {
        (Number::Complex(_), _) => Err(CalcError::UnsupportedOperands {
            op: 'r',
            kind: value.kind(),
        }),
        (Number::Int(n), None) => Ok(Number::Int(n)),
        (Number::Int(n), Some(places)) => Ok(round_int(n, places)),
        (Number::Real(v), None) => Ok(real_to_int(v.round_ties_even())),
        (Number::Real(v), Some(places)) => Ok(Number::Real(round_real(v, places))),
    }
}

pub fn negate(value: Number) -> Number {
    match value {
        Number::Int(n) => n
            .checked_neg()
            .map(Number::Int)
            .unwrap_or(Number::Real(-(n as f64))),
        Number::Real(v) => Number::Real(-v),
        Number::Complex(c) => Number::Complex(-c),
    }
}

/// An integer typed before `r`, saturated to the `i32` range.
///
/// Anything other than an optional `-` followed by digits is not a precision.
fn parse_precision(text: &str) -> Option<i32> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let places = match text.parse::<i64>() {
        Ok(places) => places,
        Err(_) if text.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    };
    Some(places.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

/// Integral float to `Int` when it fits; infinities and NaN stay real
fn real_to_int(v: f64) -> Number {
    if v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Number::Int(v as i64)
    } else {
        Number::Real(v)
    }
}

/// Decimal places beyond which rounding a real is the identity (positive) or
/// gives zero (negative)
const MAX_SIGNIFICANT_PLACES: i32 = 1100;

fn round_real(v: f64, places: i32) -> f64 {
    if !v.is_finite() {
        return v;
    }
    if places >= 0 {
        // Fixed-precision formatting rounds the exact binary value half-to-even.
        // Past this many places every f64 is already exact.
        if places > MAX_SIGNIFICANT_PLACES {
            return v;
        }
        return format!("{:.*}", places as usize, v).parse().unwrap_or(v);
    }
    if places < -MAX_SIGNIFICANT_PLACES {
        return 0.0_f64.copysign(v);
    }
    let factor = 10f64.powi(-places);
    if !factor.is_finite() {
        return 0.0_f64.copysign(v);
    }
    (v / factor).round_ties_even() * factor
}

fn round_int(n: i64, places: i32) -> Number {
    if places >= 0 {
        return Number::Int(n);
    }
    // |i64| < 10^19, so anything coarser than 10^20 rounds to zero
    let factor = 10i128.pow(places.unsigned_abs().min(20));
    let value = n as i128;
    let quotient = value.div_euclid(factor);
    let remainder = value.rem_euclid(factor);
    let rounded = match (2 * remainder).cmp(&factor) {
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 != 0 => quotient + 1,
        _ => quotient,
    } * factor;
    i64::try_from(rounded)
        .map(Number::Int)
        .unwrap_or(Number::Real(rounded as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_integer() {
        assert!(matches!(round(Number::Real(3.14159), None), Ok(Number::Int(3))));
        assert!(matches!(round(Number::Real(2.5), None), Ok(Number::Int(2))));
        assert!(matches!(round(Number::Real(3.5), None), Ok(Number::Int(4))));
        assert!(matches!(round(Number::Real(-2.7), None), Ok(Number::Int(-3))));
        assert!(matches!(round(Number::Int(9), None), Ok(Number::Int(9))));
        assert!(
            matches!(round(Number::Real(f64::INFINITY), None), Ok(Number::Real(v)) if v.is_infinite())
        );
    }

    #[test]
    fn test_round_with_precision() {
        assert!(matches!(round(Number::Real(3.14159), Some(2)), Ok(Number::Real(v)) if v == 3.14));
        assert!(matches!(round(Number::Real(1234.5), Some(-2)), Ok(Number::Real(v)) if v == 1200.0));
        assert!(matches!(round(Number::Real(0.1), Some(400)), Ok(Number::Real(v)) if v == 0.1));
        assert!(matches!(round(Number::Real(5.0), Some(-400)), Ok(Number::Real(v)) if v == 0.0));
    }

    #[test]
    fn test_round_uses_exact_binary_value() {
        // 4.35 and 0.15 are stored just below the halfway point
        assert!(matches!(round(Number::Real(4.35), Some(1)), Ok(Number::Real(v)) if v == 4.3));
        assert!(matches!(round(Number::Real(0.15), Some(1)), Ok(Number::Real(v)) if v == 0.1));
        assert!(matches!(round(Number::Real(0.125), Some(2)), Ok(Number::Real(v)) if v == 0.12));
        assert!(matches!(round(Number::Real(-2.675), Some(2)), Ok(Number::Real(v)) if v == -2.67));
        assert!(matches!(round(Number::Real(2.5), Some(i32::MAX)), Ok(Number::Real(v)) if v == 2.5));
        assert!(matches!(round(Number::Real(2.5), Some(i32::MIN)), Ok(Number::Real(v)) if v == 0.0));
    }

    #[test]
    fn test_parse_precision() {
        assert_eq!(parse_precision("2"), Some(2));
        assert_eq!(parse_precision("-1"), Some(-1));
        assert_eq!(parse_precision("99999999999"), Some(i32::MAX));
        assert_eq!(parse_precision("-99999999999999999999999"), Some(i32::MIN));
        assert_eq!(parse_precision(""), None);
        assert_eq!(parse_precision("-"), None);
        assert_eq!(parse_precision("2.5"), None);
        assert_eq!(parse_precision("1e3"), None);
    }

    #[test]
    fn test_round_integer_with_negative_precision() {
        assert!(matches!(round(Number::Int(1250), Some(-2)), Ok(Number::Int(1200))));
        assert!(matches!(round(Number::Int(1350), Some(-2)), Ok(Number::Int(1400))));
        assert!(matches!(round(Number::Int(-1251), Some(-2)), Ok(Number::Int(-1300))));
        assert!(matches!(round(Number::Int(1234), Some(3)), Ok(Number::Int(1234))));
        assert!(matches!(round(Number::Int(i64::MAX), Some(-30)), Ok(Number::Int(0))));
    }

    #[test]
    fn test_negate() {
        assert!(matches!(negate(Number::Int(5)), Number::Int(-5)));
        assert!(matches!(negate(Number::Real(-1.5)), Number::Real(v) if v == 1.5));
        assert!(matches!(negate(Number::Int(i64::MIN)), Number::Real(v) if v == 9.223372036854775808e18));
    }
}
