//! Arbitrary precision rational numbers.
//!
//! This module provides exact rational arithmetic over explicit
//! numerator/denominator pairs of [`BigInt`]s.
//!
//! Rationals are always stored in canonical form: lowest terms, positive
//! denominator, and zero uniquely represented as `0/1`. Because the canonical
//! form is unique, structural equality on the pair coincides with numeric
//! equality.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::error::ArithmeticError;
use crate::integer::{BigInt, Sign};

/// An arbitrary precision rational number in canonical reduced form.
///
/// Values are immutable: every operation produces a fresh canonical value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigRat {
    numer: BigInt,
    denom: BigInt,
}

impl BigRat {
    /// Creates a new rational from numerator and denominator, reducing by
    /// their greatest common divisor and normalizing the denominator's sign
    /// to positive.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self, ArithmeticError> {
        if denom.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::canonical(numer, denom))
    }

    /// Canonicalizes a pair with a known-nonzero denominator.
    ///
    /// `gcd(0, d)` is `|d|`, so a zero numerator reduces to `0/1` without a
    /// separate case.
    fn canonical(numer: BigInt, denom: BigInt) -> Self {
        let g = numer.gcd(&denom);
        let mut numer = numer / &g;
        let mut denom = denom / &g;
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        Self { numer, denom }
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: BigInt) -> Self {
        Self {
            numer: n,
            denom: BigInt::one(),
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is zero.
    pub fn from_i64(numer: i64, denom: i64) -> Result<Self, ArithmeticError> {
        Self::new(BigInt::new(numer), BigInt::new(denom))
    }

    /// Returns the numerator of the canonical form.
    #[must_use]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Returns the denominator of the canonical form. Always positive.
    #[must_use]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<BigInt> {
        if self.is_integer() {
            Some(self.numer.clone())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    /// Returns the sign as a three-way value. The denominator is invariantly
    /// positive, so the numerator carries the sign.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.numer.sign()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        // The pair is already reduced; swapping only requires renormalizing
        // the denominator's sign.
        Ok(Self::canonical(self.denom.clone(), self.numer.clone()))
    }

    /// Raises `self` to the power of an integer-valued rational exponent.
    ///
    /// The decision table, evaluated in order:
    ///
    /// 1. a non-integer exponent is rejected regardless of base;
    /// 2. a zero exponent yields 1 for every base, including `0^0 = 1`
    ///    (a deliberate convention of this engine);
    /// 3. `0^positive` is 0;
    /// 4. `0^negative` is a division by zero;
    /// 5. a positive exponent raises numerator and denominator separately by
    ///    squaring over the unbounded exponent;
    /// 6. a negative exponent computes the power of the magnitude, then
    ///    inverts.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonIntegerExponent`] if the exponent's
    /// canonical denominator is not 1, and [`ArithmeticError::DivisionByZero`]
    /// for a zero base with a negative exponent.
    pub fn pow(&self, exponent: &Self) -> Result<Self, ArithmeticError> {
        if !exponent.is_integer() {
            return Err(ArithmeticError::NonIntegerExponent);
        }
        match exponent.numer.sign() {
            Sign::Zero => Ok(Self::one()),
            Sign::Positive => {
                if self.is_zero() {
                    return Ok(Self::zero());
                }
                // Powers of a coprime pair stay coprime, so one
                // canonicalization at the end suffices.
                Ok(Self::canonical(
                    self.numer.pow(&exponent.numer),
                    self.denom.pow(&exponent.numer),
                ))
            }
            Sign::Negative => {
                if self.is_zero() {
                    return Err(ArithmeticError::DivisionByZero);
                }
                let magnitude = exponent.numer.abs();
                Self::canonical(self.numer.pow(&magnitude), self.denom.pow(&magnitude)).recip()
            }
        }
    }
}

impl Zero for BigRat {
    fn zero() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for BigRat {
    fn one() -> Self {
        Self {
            numer: BigInt::one(),
            denom: BigInt::one(),
        }
    }

    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

impl Default for BigRat {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for BigRat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigRat {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication preserves order.
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl fmt::Debug for BigRat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigRat({self})")
    }
}

impl fmt::Display for BigRat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

// Arithmetic operations
impl Add for BigRat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&BigRat> for BigRat {
    type Output = Self;

    fn add(self, rhs: &BigRat) -> Self::Output {
        &self + rhs
    }
}

impl Add for &BigRat {
    type Output = BigRat;

    fn add(self, rhs: Self) -> Self::Output {
        let numer = &self.numer * &rhs.denom + &rhs.numer * &self.denom;
        let denom = &self.denom * &rhs.denom;
        BigRat::canonical(numer, denom)
    }
}

impl Sub for BigRat {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self + &(-rhs)
    }
}

impl Sub<&BigRat> for BigRat {
    type Output = Self;

    fn sub(self, rhs: &BigRat) -> Self::Output {
        &self + &(-rhs)
    }
}

impl Sub for &BigRat {
    type Output = BigRat;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

impl Mul for BigRat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&BigRat> for BigRat {
    type Output = Self;

    fn mul(self, rhs: &BigRat) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &BigRat {
    type Output = BigRat;

    fn mul(self, rhs: Self) -> Self::Output {
        // The product of two reduced fractions need not be reduced.
        BigRat::canonical(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl Neg for BigRat {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Neg for &BigRat {
    type Output = BigRat;

    fn neg(self) -> Self::Output {
        BigRat {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl From<BigInt> for BigRat {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for BigRat {
    fn from(n: i64) -> Self {
        Self::from_integer(BigInt::new(n))
    }
}

impl From<i32> for BigRat {
    fn from(n: i32) -> Self {
        Self::from_integer(BigInt::new(i64::from(n)))
    }
}
