use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};

use crate::config::{DIGIT_ALPHABET, MAX_BASE, MIN_BASE};
use crate::error::ShamirRecoverError;

/// Greatest common divisor by the Euclidean algorithm, always non-negative.
///
/// `gcd(0, n) = |n|` and `gcd(n, 0) = |n|`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut x = a.abs();
    let mut y = b.abs();
    while !y.is_zero() {
        let r = &x % &y;
        x = y;
        y = r;
    }
    x
}

fn check_base(base: u32) -> Result<(), ShamirRecoverError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(ShamirRecoverError::InvalidBase(base));
    }
    Ok(())
}

fn digit_value(c: char) -> Option<u32> {
    let lower = c.to_ascii_lowercase();
    if !lower.is_ascii() {
        return None;
    }
    DIGIT_ALPHABET
        .iter()
        .position(|&d| d == lower as u8)
        .map(|pos| pos as u32)
}

/// Decode a base-`base` digit string (most significant digit first).
///
/// Letters are case-insensitive. Empty input decodes to zero.
pub fn decode_base(value: &str, base: u32) -> Result<BigInt, ShamirRecoverError> {
    check_base(base)?;

    let radix = BigInt::from(base);
    let mut result = BigInt::zero();
    for c in value.chars() {
        let digit = match digit_value(c) {
            Some(d) if d < base => d,
            _ => return Err(ShamirRecoverError::InvalidDigit { digit: c, base }),
        };
        result = result * &radix + digit;
    }

    Ok(result)
}

/// Encode a non-negative integer in base `base` using lowercase digits.
pub fn encode_base(value: &BigUint, base: u32) -> Result<String, ShamirRecoverError> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}
