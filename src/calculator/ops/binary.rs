//! Binary operator evaluation

use crate::calculator::complex::Complex;
use crate::calculator::engine::Calculator;
use crate::calculator::errors::CalcError;
use crate::calculator::ops::Operator;
use crate::calculator::value::Number;

impl Calculator {
    /// Pop `b` then `a`, push `a op b`.
    ///
    /// The stack is untouched when it is too short or the operands are
    /// unsupported.
    pub(crate) fn apply_binary(&mut self, op: Operator) -> Result<(), CalcError> {
        self.require(op, op.arity())?;

        let b = self.pop();
        let a = self.pop();
        match evaluate_binary(op, a, b) {
            Ok(result) => {
                log::debug!("{} {} {} = {}", a, op.symbol(), b, result);
                self.push_value(result);
                Ok(())
            }
            Err(e) => {
                self.push_value(a);
                self.push_value(b);
                Err(e)
            }
        }
    }
}

/// Evaluate `a op b` for one of the arithmetic operators
pub fn evaluate_binary(op: Operator, a: Number, b: Number) -> Result<Number, CalcError> {
    use Operator::*;

    match op {
        Add => Ok(arith(a, b, i64::checked_add, |x, y| x + y, |x, y| x + y)),
        Sub => Ok(arith(a, b, i64::checked_sub, |x, y| x - y, |x, y| x - y)),
        Mul => Ok(arith(a, b, i64::checked_mul, |x, y| x * y, |x, y| x * y)),
        Div => Ok(divide(a, b)),
        Pow => Ok(power(a, b)),
        Mod => modulo(a, b),
        Round | Negate => Err(CalcError::UnsupportedOperands {
            op: op.symbol(),
            kind: "two",
        }),
    }
}

/// Shared shape of `+ - *`: integer arithmetic when both sides are integers
/// and the result fits, complex when either side is complex, real otherwise.
fn arith(
    a: Number,
    b: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    real_op: fn(f64, f64) -> f64,
    complex_op: fn(Complex, Complex) -> Complex,
) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => match int_op(x, y) {
            Some(n) => Number::Int(n),
            None => Number::Real(real_op(x as f64, y as f64)),
        },
        _ if a.is_complex() || b.is_complex() => {
            Number::Complex(complex_op(a.to_complex(), b.to_complex()))
        }
        _ => Number::Real(real_op(a.as_f64(), b.as_f64())),
    }
}

/// True division; any zero divisor yields positive infinity
fn divide(a: Number, b: Number) -> Number {
    if b.is_zero() {
        return Number::Real(f64::INFINITY);
    }
    if a.is_complex() || b.is_complex() {
        return Number::Complex(a.to_complex() / b.to_complex());
    }
    Number::Real(a.as_f64() / b.as_f64())
}

fn power(a: Number, b: Number) -> Number {
    if let (Number::Int(base), Number::Int(exp)) = (a, b) {
        if exp >= 0 {
            if let Some(n) = u32::try_from(exp).ok().and_then(|e| base.checked_pow(e)) {
                return Number::Int(n);
            }
        }
        return Number::Real((base as f64).powf(exp as f64));
    }

    if a.is_complex() || b.is_complex() {
        return Number::Complex(a.to_complex().powc(b.to_complex()));
    }

    let (base, exp) = (a.as_f64(), b.as_f64());
    if base < 0.0 && exp.is_finite() && exp.fract() != 0.0 {
        // No real root; take the principal complex one
        return Number::Complex(Complex::from_real(base).powc(Complex::from_real(exp)));
    }
    Number::Real(base.powf(exp))
}

/// Floored modulo: the result takes the sign of the divisor
fn modulo(a: Number, b: Number) -> Result<Number, CalcError> {
    if let Some(complex) = [a, b].into_iter().find(Number::is_complex) {
        return Err(CalcError::UnsupportedOperands {
            op: '%',
            kind: complex.kind(),
        });
    }
    if b.is_zero() {
        return Ok(Number::Real(f64::NAN));
    }

    match (a, b) {
        (Number::Int(x), Number::Int(y)) => {
            let r = x.wrapping_rem(y);
            let r = if r != 0 && (r < 0) != (y < 0) { r + y } else { r };
            Ok(Number::Int(r))
        }
        _ => {
            let (x, y) = (a.as_f64(), b.as_f64());
            let r = x % y;
            let r = if r != 0.0 && (r < 0.0) != (y < 0.0) { r + y } else { r };
            Ok(Number::Real(r))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Number {
        Number::Int(n)
    }

    fn real(v: f64) -> Number {
        Number::Real(v)
    }

    fn eval(op: char, a: Number, b: Number) -> Number {
        evaluate_binary(Operator::from_symbol(op).unwrap(), a, b).unwrap()
    }

    #[test]
    fn test_integer_results_stay_integral() {
        assert!(matches!(eval('+', int(5), int(3)), Number::Int(8)));
        assert!(matches!(eval('-', int(5), int(3)), Number::Int(2)));
        assert!(matches!(eval('*', int(5), int(3)), Number::Int(15)));
        assert!(matches!(eval('^', int(2), int(3)), Number::Int(8)));
        assert!(matches!(eval('%', int(7), int(3)), Number::Int(1)));
    }

    #[test]
    fn test_division_is_real() {
        assert!(matches!(eval('/', int(6), int(2)), Number::Real(v) if v == 3.0));
        assert!(matches!(eval('/', int(1), int(0)), Number::Real(v) if v == f64::INFINITY));
        assert!(
            matches!(eval('/', int(-1), real(0.0)), Number::Real(v) if v == f64::INFINITY)
        );
    }

    #[test]
    fn test_overflow_falls_back_to_real() {
        let sum = eval('+', int(i64::MAX), int(1));
        assert!(matches!(sum, Number::Real(v) if v == i64::MAX as f64 + 1.0));

        let big = eval('^', int(10), int(30));
        assert!(matches!(big, Number::Real(v) if (v / 1e30 - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_negative_exponent() {
        assert!(matches!(eval('^', int(2), int(-1)), Number::Real(v) if v == 0.5));
    }

    #[test]
    fn test_modulo_sign_follows_divisor() {
        assert!(matches!(eval('%', int(-7), int(3)), Number::Int(2)));
        assert!(matches!(eval('%', int(7), int(-3)), Number::Int(-2)));
        assert!(matches!(eval('%', real(5.5), int(2)), Number::Real(v) if v == 1.5));
        assert!(matches!(eval('%', real(-5.5), int(2)), Number::Real(v) if v == 0.5));
        assert!(matches!(eval('%', int(1), int(0)), Number::Real(v) if v.is_nan()));
    }

    #[test]
    fn test_modulo_rejects_complex() {
        let err = evaluate_binary(
            Operator::Mod,
            Number::Complex(Complex::new(1.0, 1.0)),
            int(2),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CalcError::UnsupportedOperands {
                op: '%',
                kind: "complex"
            }
        );
    }

    #[test]
    fn test_fractional_power_of_negative_is_complex() {
        let root = eval('^', real(-4.0), real(0.5));
        match root {
            Number::Complex(c) => {
                assert!(c.re.abs() < 1e-9);
                assert!((c.im - 2.0).abs() < 1e-9);
            }
            other => panic!("Expected complex, got {:?}", other),
        }
    }

    #[test]
    fn test_complex_arithmetic() {
        let a = Number::Complex(Complex::new(2.0, 3.0));
        assert_eq!(eval('+', a, int(1)), Number::Complex(Complex::new(3.0, 3.0)));
        assert_eq!(eval('*', a, int(2)), Number::Complex(Complex::new(4.0, 6.0)));
    }
}
