//! Exact reconstruction of Shamir-shared secrets.
//!
//! Shares arrive as `(index, base-encoded value)` pairs. The values are decoded
//! into arbitrary-precision integers and the secret `P(0)` is recovered by
//! Lagrange interpolation over exact rationals, so no rounding can creep in.

pub mod config;
pub mod driver;
pub mod error;
pub mod rational;
pub mod reconstruct;
pub mod shares;
pub mod utils;

#[cfg(test)]
pub mod tests;

pub use crate::error::{Result, ShamirRecoverError};
pub use crate::rational::Rational;
pub use crate::reconstruct::{
    check_consistency, interpolate_at, lagrange_basis_at, reconstruct_secret, ConsistencyReport,
    SharePoint,
};
pub use crate::shares::ShareSet;
pub use crate::utils::{decode_base, encode_base};
