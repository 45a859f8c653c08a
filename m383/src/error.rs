//! Error types.

use core::fmt::{self, Display};

/// Errors raised by M-383 field and curve arithmetic.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Inversion of zero: a modular inverse of `0`, or an affine conversion
    /// of a point with `Z = 0`.
    DivisionByZero,

    /// The value has no square root modulo the field prime.
    NoResidue,

    /// The coordinates do not satisfy `y² = x³ + A·x² + x`.
    NotOnCurve,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => f.write_str("division by zero in field inversion"),
            Error::NoResidue => f.write_str("value is a quadratic non-residue"),
            Error::NotOnCurve => f.write_str("point is not on the curve"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
