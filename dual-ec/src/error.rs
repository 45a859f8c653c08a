//! Error types.

use core::fmt::{self, Display};
use m383::bigint::U384;

/// Errors raised by the generator and by state recovery.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Curve arithmetic failed.
    ///
    /// [`m383::Error::NoResidue`] here means an output value is not the
    /// x-coordinate of any point, so no state can be recovered from it.
    Curve(m383::Error),

    /// The state recovered from an output does not match the state the
    /// generator computed.
    InvariantViolation {
        /// State recovered with the escrow key.
        recovered: U384,

        /// State computed by the generator itself.
        expected: U384,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Curve(err) => write!(f, "curve arithmetic error: {err}"),
            Error::InvariantViolation {
                recovered,
                expected,
            } => write!(
                f,
                "recovered state 0x{recovered:x} does not match next state 0x{expected:x}"
            ),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Curve(err) => Some(err),
            Error::InvariantViolation { .. } => None,
        }
    }
}

impl From<m383::Error> for Error {
    fn from(err: m383::Error) -> Error {
        Error::Curve(err)
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
