//! Complex arithmetic
//!
//! Only the handful of operations the calculator needs: the four basic
//! operators, negation, and principal-branch exponentiation.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// A complex number with `f64` components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    pub const fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// Magnitude (`|z|`)
    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Argument in `(-π, π]`
    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Principal natural logarithm
    pub fn ln(&self) -> Self {
        Complex::new(self.norm().ln(), self.arg())
    }

    pub fn exp(&self) -> Self {
        let scale = self.re.exp();
        Complex::new(scale * self.im.cos(), scale * self.im.sin())
    }

    /// `self ** exponent` on the principal branch.
    ///
    /// `0 ** 0` is `1` and `0 ** z` is `0` for any other `z`.
    pub fn powc(&self, exponent: Complex) -> Self {
        if self.is_zero() {
            return if exponent.is_zero() {
                Complex::from_real(1.0)
            } else {
                Complex::default()
            };
        }
        (exponent * self.ln()).exp()
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        )
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Complex, b: Complex) -> bool {
        (a.re - b.re).abs() < 1e-9 && (a.im - b.im).abs() < 1e-9
    }

    #[test]
    fn test_basic_operators() {
        let a = Complex::new(2.0, 3.0);
        let b = Complex::new(1.0, -1.0);

        assert_eq!(a + b, Complex::new(3.0, 2.0));
        assert_eq!(a - b, Complex::new(1.0, 4.0));
        assert_eq!(a * b, Complex::new(5.0, 1.0));
        assert!(close(a / b, Complex::new(-0.5, 2.5)));
        assert_eq!(-a, Complex::new(-2.0, -3.0));
    }

    #[test]
    fn test_powc() {
        // i^2 = -1
        let i = Complex::new(0.0, 1.0);
        assert!(close(i.powc(Complex::from_real(2.0)), Complex::new(-1.0, 0.0)));

        // (-8)^(1/3) on the principal branch is 1 + i√3
        let root = Complex::from_real(-8.0).powc(Complex::from_real(1.0 / 3.0));
        assert!(close(root, Complex::new(1.0, 3f64.sqrt())));

        assert_eq!(Complex::default().powc(Complex::default()), Complex::from_real(1.0));
        assert_eq!(Complex::default().powc(Complex::from_real(2.0)), Complex::default());
    }
}
