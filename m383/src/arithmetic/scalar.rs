//! Ladder scalars.

use crypto_bigint::{Limb, U384};
use subtle::Choice;

/// Scalar input to the Montgomery ladder.
///
/// Scalars are plain integers rather than elements of the group order: the
/// ladder reads bits `0..=379` and expects bit 379 to be set.
pub type Scalar = U384;

/// `2^379`
const TOP_BIT: Scalar = Scalar::from_be_hex(
    "080000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
);

/// `2^379 - 1`
const LOW_BITS_MASK: Scalar = Scalar::from_be_hex(
    "07ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
);

/// Force `scalar` into `[2^379, 2^380)`: `(scalar mod 2^379) + 2^379`.
pub fn clamp_scalar(scalar: &Scalar) -> Scalar {
    scalar.bitand(&LOW_BITS_MASK).bitor(&TOP_BIT)
}

/// Bit `index` of `scalar`.
pub(crate) fn bit(scalar: &Scalar, index: u32) -> Choice {
    let word = scalar.as_words()[(index / Limb::BITS) as usize];
    Choice::from(((word >> (index % Limb::BITS)) & 1) as u8)
}
