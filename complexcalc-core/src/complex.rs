//! Immutable complex-number value type over f64 components.
//!
//! Rectangular form is the stored representation; the polar form (norm and
//! arg) is derived on demand for the De Moivre power and root operations.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{ComplexError, ComplexResult};

/// Threshold below which a rounded component counts as zero.
///
/// Shared with the display logic so that division-by-zero detection and
/// near-zero suppression in formatting agree on what "zero" means.
pub(crate) const NEAR_ZERO: f64 = 1e-9;

/// Complex number `re + im·i` with f64 components.
///
/// A plain `Copy` value: construction never validates (non-finite components
/// are accepted and propagate as f64 dictates), and every operation returns
/// a fresh value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// Zero constant.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Construct from rectangular components.
    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Construct a pure real value (im = 0).
    #[inline]
    pub fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Complex conjugate: (a + bi) → (a - bi).
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Squared magnitude: |z|² = re² + im²
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Magnitude (polar radius r): √(re² + im²). Always ≥ 0.
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Phase (polar angle θ) in radians, in (-π, π].
    ///
    /// atan2 handles all quadrants and the re = 0 axis.
    #[inline]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Division, failing when the divisor is effectively zero.
    ///
    /// Computed by multiplying with the divisor's conjugate:
    /// (a+bi)/(c+di) = (a+bi)(c-di) / (c² + d²).
    pub fn try_div(self, rhs: Self) -> ComplexResult<Self> {
        let denom = rhs.norm_sq();
        if denom.abs() < NEAR_ZERO {
            return Err(ComplexError::DivisionByZero);
        }
        let numer = self * rhs.conj();
        Ok(Self {
            re: numer.re / denom,
            im: numer.im / denom,
        })
    }

    /// Raise to a real exponent via De Moivre's formula.
    ///
    /// z^n = r^n · (cos(nθ) + i·sin(nθ)), converting to polar form and back.
    /// Total for finite exponents; 0 raised to a non-positive exponent
    /// yields whatever the f64 primitives produce.
    pub fn powf(self, exponent: f64) -> Self {
        let new_norm = self.norm().powf(exponent);
        let new_arg = self.arg() * exponent;
        Self {
            re: new_norm * new_arg.cos(),
            im: new_norm * new_arg.sin(),
        }
    }

    /// Principal n-th root: z^(1/n).
    ///
    /// Only the principal root is returned, not the full set of n roots.
    /// Fails when the index is not a positive integer.
    pub fn nth_root(self, n: i32) -> ComplexResult<Self> {
        if n <= 0 {
            return Err(ComplexError::InvalidRootIndex(n));
        }
        Ok(self.powf(1.0 / f64::from(n)))
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

/// (a + bi)(c + di) = (ac - bd) + (ad + bc)i
impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}
