//! Pure Rust implementation of x-only group operations on M-383.
//!
//! Curve parameters can be found in "Elliptic Curves for Security" (Aranha,
//! Barreto, Pereira, Ricardini), table of Montgomery curves:
//! <https://eprint.iacr.org/2013/647.pdf>
//!
//! M-383: `y² = x³ + 2065150x² + x` over `p = 2^383 - 187`, base point `x = 12`.

pub(crate) mod affine;
pub(crate) mod field;
pub(crate) mod projective;
pub(crate) mod scalar;

use self::field::FieldElement;

/// Number of ladder iterations: bit positions `378` down to `0`.
pub const LADDER_STEPS: u32 = 379;

/// Position of the bit every ladder scalar is expected to have set.
pub const SCALAR_TOP_BIT: u32 = 379;

/// Montgomery coefficient `A = 2065150`.
pub const CURVE_EQUATION_A: FieldElement = FieldElement::from_u64(2065150);

/// `(A + 2) / 4 = 516288`.
///
/// `A + 2` is divisible by four, so this agrees with `(A + 2) · 4⁻¹ mod p`.
const A_PLUS_TWO_OVER_FOUR: FieldElement = FieldElement::from_u64(516288);

/// Right-hand side of the curve equation: `x³ + A·x² + x`.
pub fn curve_equation_rhs(x: &FieldElement) -> FieldElement {
    ((*x + CURVE_EQUATION_A) * x + FieldElement::ONE) * x
}

#[cfg(test)]
mod tests {
    use super::{A_PLUS_TWO_OVER_FOUR, CURVE_EQUATION_A, curve_equation_rhs};
    use crate::FieldElement;
    use crypto_bigint::U384;

    #[test]
    fn a_plus_two_over_four_matches_inverse() {
        let four_inv = FieldElement::from_u64(4).invert().unwrap();
        let expected = (CURVE_EQUATION_A + FieldElement::from_u64(2)) * four_inv;
        assert_eq!(A_PLUS_TWO_OVER_FOUR, expected);
        assert_eq!(
            A_PLUS_TWO_OVER_FOUR * FieldElement::from_u64(4),
            CURVE_EQUATION_A + FieldElement::from_u64(2)
        );
    }

    #[test]
    fn rhs_at_base_point() {
        // 12³ + 2065150·12² + 12
        let rhs = curve_equation_rhs(&FieldElement::from_u64(12));
        assert_eq!(rhs.to_uint(), U384::from_u64(297_383_340));
    }
}
