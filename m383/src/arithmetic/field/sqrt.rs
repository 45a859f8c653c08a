//! Modular square roots, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use super::MontyFieldElement;
use crypto_bigint::{U384, modular::ConstMontyParams};

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Algorithm {
    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    TonelliShanks,
}

impl Algorithm {
    /// Determine the algorithm to use with a particular modulus.
    fn for_modulus(p: &U384) -> Self {
        if p.as_words()[0] & 3 == 3 {
            Self::Shanks
        } else {
            Self::TonelliShanks
        }
    }
}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> MontyFieldElement<MOD> {
    /// Returns a square root of `self` mod p, or `None` if `self` is a
    /// quadratic non-residue.
    ///
    /// The square root of zero is zero. Which of the two roots `±r` is
    /// returned is unspecified.
    ///
    /// **This operation is variable time.**
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::ZERO);
        }

        if !self.is_square() {
            return None;
        }

        match Algorithm::for_modulus(&Self::modulus()) {
            Algorithm::Shanks => Some(self.sqrt_shanks()),
            Algorithm::TonelliShanks => self.sqrt_tonelli_shanks(),
        }
    }

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    ///
    /// For `q ≡ 3 (mod 4)`, sqrt can be computed with only one exponentiation as
    /// `self^((q + 1) / 4) (mod q)`.
    fn sqrt_shanks(&self) -> Self {
        let mod_plus_1_over_4 = Self::modulus().wrapping_add(&U384::ONE).shr(2);
        self.pow(&mod_plus_1_over_4)
    }

    /// Tonelli-Shanks algorithm works for every odd prime.
    ///
    /// Expects `self` to be a non-zero quadratic residue.
    fn sqrt_tonelli_shanks(&self) -> Option<Self> {
        // p - 1 = t * 2^s with t odd
        let p_minus_1 = Self::modulus().wrapping_sub(&U384::ONE);
        let s = p_minus_1.trailing_zeros();
        let t = p_minus_1.shr(s);

        let mut m = s;
        let mut c = Self::quadratic_non_residue().pow(&t);
        let mut b = self.pow(&t);
        let mut x = self.pow(&t.wrapping_add(&U384::ONE).shr(1));

        // Each round finds the order 2^i of b, with i < m, and lowers m to i.
        while b != Self::ONE {
            let mut i = 0;
            let mut tmp = b;

            while tmp != Self::ONE {
                i += 1;
                if i >= m {
                    return None;
                }
                tmp = tmp.square();
            }

            let z = c.sqn(m - i - 1);
            m = i;
            c = z.square();
            b *= c;
            x *= z;
        }

        Some(x)
    }

    /// Smallest quadratic non-residue, searching upwards from 2.
    fn quadratic_non_residue() -> Self {
        let mut z = Self::from_u64(2);

        while z.legendre() != -1 {
            z += Self::ONE;
        }

        z
    }
}
