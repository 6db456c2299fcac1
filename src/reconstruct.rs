//! Secret reconstruction by exact Lagrange interpolation.
//!
//! For `k` points `(x_i, y_i)` on a polynomial `P` of degree `k - 1`:
//!
//! ```text
//! P(t) = Σ_i y_i · L_i(t),   L_i(t) = Π_{j ≠ i} (t - x_j) / (x_i - x_j)
//! ```
//!
//! The secret is `P(0)`. All arithmetic goes through [`Rational`], so the
//! result is bit-exact regardless of `k` or the size of the share values.
//!
//! Only the first `k` supplied points take part in [`reconstruct_secret`].
//! Points beyond the threshold are ignored there; use [`check_consistency`]
//! to test them against the recovered polynomial.

use num_bigint::BigInt;
use tracing::{debug, warn};

use crate::error::ShamirRecoverError;
use crate::rational::Rational;

/// One share: the 1-based index `x` and its decoded value `y`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SharePoint {
    pub x: u64,
    pub y: BigInt,
}

impl SharePoint {
    pub fn new(x: u64, y: impl Into<BigInt>) -> Self {
        Self { x, y: y.into() }
    }
}

/// Result of testing the shares past the threshold against the polynomial
/// recovered from the first `k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsistencyReport {
    pub secret: BigInt,
    /// Number of points beyond the first `k` that were evaluated.
    pub checked: usize,
    /// Indices of extra shares whose `y` is off the polynomial.
    pub inconsistent: Vec<u64>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.inconsistent.is_empty()
    }
}

fn select(points: &[SharePoint], k: usize) -> Result<&[SharePoint], ShamirRecoverError> {
    if k == 0 {
        return Err(ShamirRecoverError::InvalidThreshold(k));
    }
    if points.len() < k {
        return Err(ShamirRecoverError::InsufficientShares {
            have: points.len(),
            need: k,
        });
    }
    Ok(&points[..k])
}

/// Lagrange basis `L_i(target)` over `points`.
///
/// An index `i` past the end of `points` fails with `InsufficientShares`.
pub fn lagrange_basis_at(
    points: &[SharePoint],
    i: usize,
    target: &Rational,
) -> Result<Rational, ShamirRecoverError> {
    let p_i = points.get(i).ok_or(ShamirRecoverError::InsufficientShares {
        have: points.len(),
        need: i + 1,
    })?;
    let x_i = Rational::from(p_i.x);
    let mut numerator = Rational::one();
    let mut denominator = Rational::one();

    for (j, p_j) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        if p_j.x == p_i.x {
            return Err(ShamirRecoverError::CoincidentAbscissas { x: p_j.x });
        }
        let x_j = Rational::from(p_j.x);
        numerator = &numerator * &(target - &x_j);
        denominator = &denominator * &(&x_i - &x_j);
    }

    numerator.checked_div(&denominator)
}

/// Evaluate the polynomial through all of `points` at `target`.
pub fn interpolate_at(
    points: &[SharePoint],
    target: &Rational,
) -> Result<Rational, ShamirRecoverError> {
    if points.is_empty() {
        return Err(ShamirRecoverError::InsufficientShares { have: 0, need: 1 });
    }

    let mut acc = Rational::zero();
    for (i, p_i) in points.iter().enumerate() {
        let basis = lagrange_basis_at(points, i, target)?;
        debug!(x = p_i.x, basis = %basis, "lagrange basis term");
        let y_i = Rational::from(p_i.y.clone());
        acc = &acc + &(&y_i * &basis);
    }

    Ok(acc)
}

/// Recover `P(0)` from the first `k` points.
pub fn reconstruct_secret(points: &[SharePoint], k: usize) -> Result<BigInt, ShamirRecoverError> {
    let selected = select(points, k)?;
    interpolate_at(selected, &Rational::zero())?.to_integer()
}

/// Reconstruct from the first `k` points, then evaluate every remaining point
/// against the recovered polynomial.
pub fn check_consistency(
    points: &[SharePoint],
    k: usize,
) -> Result<ConsistencyReport, ShamirRecoverError> {
    let selected = select(points, k)?;
    let secret = interpolate_at(selected, &Rational::zero())?.to_integer()?;

    let mut inconsistent = Vec::new();
    for extra in &points[k..] {
        let expected = interpolate_at(selected, &Rational::from(extra.x))?;
        if expected != Rational::from(extra.y.clone()) {
            warn!(x = extra.x, expected = %expected, actual = %extra.y, "share is off the polynomial");
            inconsistent.push(extra.x);
        }
    }

    Ok(ConsistencyReport {
        secret,
        checked: points.len() - k,
        inconsistent,
    })
}
