#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    clippy::mod_module_files,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use m383::{ProjectivePoint, Scalar, affine_x, ladder};
//!
//! // scalars are expected to have bit 379 set
//! let k = Scalar::from_be_hex(
//!     "0800000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000ff",
//! );
//! let point = ladder(&k, &ProjectivePoint::GENERATOR)?;
//! let x = affine_x(&point)?;
//! # Ok::<(), m383::Error>(())
//! ```

#[cfg(feature = "std")]
extern crate std;

mod arithmetic;
mod error;

pub use crate::{
    arithmetic::{
        CURVE_EQUATION_A, LADDER_STEPS, SCALAR_TOP_BIT,
        affine::AffinePoint,
        curve_equation_rhs,
        field::{FieldElement, M383, MontyFieldElement},
        projective::ProjectivePoint,
        scalar::{Scalar, clamp_scalar},
    },
    error::{Error, Result},
};
pub use crypto_bigint as bigint;
pub use subtle;

use crypto_bigint::U384;

/// Multiply `point` by `scalar` with the Montgomery ladder.
///
/// Only bits `0..=379` of `scalar` are read, and bit 379 is assumed to be set:
/// the ladder starts from the rail pair `(2P, P)` and always runs
/// [`LADDER_STEPS`] iterations. Callers are responsible for sizing the scalar,
/// e.g. with [`clamp_scalar`] or by OR-ing in `2^379`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if either ladder rail reaches `Z = 0`,
/// which only happens for low-order or malformed input points.
pub fn ladder(scalar: &Scalar, point: &ProjectivePoint) -> Result<ProjectivePoint> {
    point.checked_mul(scalar)
}

/// Affine x-coordinate `X / Z` of a projective point as a canonical integer.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `Z = 0`.
pub fn affine_x(point: &ProjectivePoint) -> Result<U384> {
    point.affine_x()
}

/// Square root of `residue` modulo `p = 2^383 - 187`.
///
/// The input is reduced modulo `p` first. Either root may be returned.
///
/// # Errors
///
/// Returns [`Error::NoResidue`] if `residue` is a quadratic non-residue.
pub fn sqrt_mod(residue: &U384) -> Result<U384> {
    FieldElement::new(residue)
        .sqrt()
        .map(|root| root.to_uint())
        .ok_or(Error::NoResidue)
}
