//! Exact rational numbers over arbitrary-precision integers.
//!
//! Every `Rational` is kept in lowest terms with a strictly positive
//! denominator, so structural equality is numeric equality and zero is always
//! `0/1`. Values are immutable: arithmetic returns a fresh, normalized value.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::error::ShamirRecoverError;
use crate::utils::gcd;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Build `numer/denom` in lowest terms.
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self, ShamirRecoverError> {
        if denom.is_zero() {
            return Err(ShamirRecoverError::DivisionByZero);
        }
        Ok(Self::reduced(numer, denom))
    }

    /// Build the integer `value/1`.
    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numer: value,
            denom: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    // Caller guarantees `denom != 0`.
    fn reduced(mut numer: BigInt, mut denom: BigInt) -> Self {
        let g = gcd(&numer, &denom);
        if !g.is_one() {
            numer /= &g;
            denom /= &g;
        }
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        Self { numer, denom }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Exact division; fails when `other` is zero.
    pub fn checked_div(&self, other: &Rational) -> Result<Rational, ShamirRecoverError> {
        if other.is_zero() {
            return Err(ShamirRecoverError::DivisionByZero);
        }
        Ok(Self::reduced(
            &self.numer * &other.denom,
            &self.denom * &other.numer,
        ))
    }

    /// Narrow to an integer. Fails unless the value is integral.
    pub fn to_integer(&self) -> Result<BigInt, ShamirRecoverError> {
        if !self.is_integer() {
            return Err(ShamirRecoverError::NonIntegralResult {
                numer: self.numer.clone(),
                denom: self.denom.clone(),
            });
        }
        Ok(self.numer.clone())
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Rational::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::from_integer(BigInt::from(value))
    }
}

impl From<u64> for Rational {
    fn from(value: u64) -> Self {
        Rational::from_integer(BigInt::from(value))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl<'a> Add<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, other: &'a Rational) -> Rational {
        Rational::reduced(
            &self.numer * &other.denom + &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }
}

impl<'a> Sub<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, other: &'a Rational) -> Rational {
        Rational::reduced(
            &self.numer * &other.denom - &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }
}

impl<'a> Mul<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, other: &'a Rational) -> Rational {
        Rational::reduced(&self.numer * &other.numer, &self.denom * &other.denom)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, other: Rational) -> Rational {
        &self + &other
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, other: Rational) -> Rational {
        &self - &other
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, other: Rational) -> Rational {
        &self * &other
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -&self
    }
}
