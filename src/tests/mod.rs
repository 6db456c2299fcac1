use num_bigint::BigInt;
use num_traits::Zero;

use crate::SharePoint;

/// Evaluate `coeffs[0] + coeffs[1]·x + ...` by Horner's rule.
fn eval_poly(coeffs: &[BigInt], x: u64) -> BigInt {
    let x = BigInt::from(x);
    coeffs
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, c| acc * &x + c)
}

/// Points `(x, P(x))` for each index in `xs`.
fn shares_of(coeffs: &[BigInt], xs: &[u64]) -> Vec<SharePoint> {
    xs.iter()
        .map(|&x| SharePoint {
            x,
            y: eval_poly(coeffs, x),
        })
        .collect()
}


pub mod integration;
