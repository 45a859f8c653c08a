//! Field arithmetic modulo p = 2^383 − 187
//!
//! Elements are kept in Montgomery form using `crypto-bigint`'s
//! [`ConstMontyForm`]. The element type is generic over the modulus so the
//! square root routines can be exercised against primes other than M-383's.

mod sqrt;

use crate::{Error, Result};
use core::{
    fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use crypto_bigint::{
    Limb, U384, Uint, impl_modulus,
    modular::{ConstMontyForm, ConstMontyParams},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

impl_modulus!(
    M383,
    U384,
    "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff45"
);

/// Element of the M-383 base field.
pub type FieldElement = MontyFieldElement<M383>;

/// Prime field element in Montgomery form, for any odd prime modulus that
/// fits in 384 bits.
pub struct MontyFieldElement<MOD: ConstMontyParams<{ U384::LIMBS }>>(
    ConstMontyForm<MOD, { U384::LIMBS }>,
);

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> MontyFieldElement<MOD> {
    /// Zero element (additive identity).
    pub const ZERO: Self = Self(ConstMontyForm::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(ConstMontyForm::ONE);

    /// Convert an integer into a field element, reducing it modulo `p`.
    pub const fn new(uint: &U384) -> Self {
        Self(ConstMontyForm::new(uint))
    }

    /// Convert a `u64` into a field element.
    pub const fn from_u64(w: u64) -> Self {
        Self::new(&U384::from_u64(w))
    }

    /// The field modulus `p`.
    pub fn modulus() -> U384 {
        *MOD::MODULUS.as_ref()
    }

    /// Translate out of the Montgomery domain, returning the canonical
    /// integer in `[0, p)`.
    pub fn to_uint(&self) -> U384 {
        self.0.retrieve()
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> bool {
        self.ct_is_zero().into()
    }

    /// Determine if this element is zero, as a [`Choice`].
    pub fn ct_is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Determine if the canonical representative of this element is odd.
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_uint().as_words()[0] & 1) as u8)
    }

    /// Compute modular square.
    #[must_use]
    pub fn square(&self) -> Self {
        *self * self
    }

    /// Square this element `n` times: `self^(2^n)`.
    #[must_use]
    pub fn sqn(&self, n: u32) -> Self {
        let mut x = *self;
        for _ in 0..n {
            x = x.square();
        }
        x
    }

    /// Returns `self^exp` by left-to-right square-and-multiply.
    ///
    /// The exponent may be any width; it is not reduced modulo `p - 1`.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    pub fn pow<const RHS_LIMBS: usize>(&self, exp: &Uint<RHS_LIMBS>) -> Self {
        let mut res = Self::ONE;

        for word in exp.as_words().iter().rev() {
            for j in (0..Limb::BITS).rev() {
                res = res.square();

                if (word >> j) & 1 == 1 {
                    res *= self;
                }
            }
        }

        res
    }

    /// Compute field inversion `1 / self` as `self^(p - 2)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `self` is zero.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let p_minus_2 = Self::modulus().wrapping_sub(&U384::from_u64(2));
        Ok(self.pow(&p_minus_2))
    }

    /// Legendre symbol `(self / p)` computed as `self^((p - 1) / 2)`.
    ///
    /// Returns `1` for a non-zero quadratic residue, `-1` for a non-residue
    /// and `0` for zero.
    pub fn legendre(&self) -> i8 {
        let exp = Self::modulus().wrapping_sub(&U384::ONE).shr(1);
        let symbol = self.pow(&exp);

        if symbol == Self::ONE {
            1
        } else if symbol.is_zero() {
            0
        } else {
            -1
        }
    }

    /// Determine if this element is a non-zero quadratic residue.
    pub fn is_square(&self) -> bool {
        self.legendre() == 1
    }
}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> Clone for MontyFieldElement<MOD> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> Copy for MontyFieldElement<MOD> {}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> Default for MontyFieldElement<MOD> {
    fn default() -> Self {
        Self::ZERO
    }
}

//
// `subtle` trait impls
//

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> ConstantTimeEq for MontyFieldElement<MOD> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> ConditionallySelectable for MontyFieldElement<MOD> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(ConstMontyForm::conditional_select(&a.0, &b.0, choice))
    }
}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> PartialEq for MontyFieldElement<MOD> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> Eq for MontyFieldElement<MOD> {}

//
// Arithmetic trait impls
//

/// Emit a `core::ops` trait impl, its borrowed variants and the assigning form.
macro_rules! field_op {
    ($op:ident, $func:ident, $op_assign:ident, $func_assign:ident, $sym:tt) => {
        impl<MOD: ConstMontyParams<{ U384::LIMBS }>> $op for MontyFieldElement<MOD> {
            type Output = Self;

            #[inline]
            fn $func(self, rhs: Self) -> Self {
                Self(self.0 $sym rhs.0)
            }
        }

        impl<MOD: ConstMontyParams<{ U384::LIMBS }>> $op<&Self> for MontyFieldElement<MOD> {
            type Output = Self;

            #[inline]
            fn $func(self, rhs: &Self) -> Self {
                Self(self.0 $sym rhs.0)
            }
        }

        impl<MOD: ConstMontyParams<{ U384::LIMBS }>> $op for &MontyFieldElement<MOD> {
            type Output = MontyFieldElement<MOD>;

            #[inline]
            fn $func(self, rhs: Self) -> MontyFieldElement<MOD> {
                MontyFieldElement(self.0 $sym rhs.0)
            }
        }

        impl<MOD: ConstMontyParams<{ U384::LIMBS }>> $op_assign for MontyFieldElement<MOD> {
            #[inline]
            fn $func_assign(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }

        impl<MOD: ConstMontyParams<{ U384::LIMBS }>> $op_assign<&Self> for MontyFieldElement<MOD> {
            #[inline]
            fn $func_assign(&mut self, rhs: &Self) {
                *self = *self $sym rhs;
            }
        }
    };
}

field_op!(Add, add, AddAssign, add_assign, +);
field_op!(Sub, sub, SubAssign, sub_assign, -);
field_op!(Mul, mul, MulAssign, mul_assign, *);

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> Neg for MontyFieldElement<MOD> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> Neg for &MontyFieldElement<MOD> {
    type Output = MontyFieldElement<MOD>;

    #[inline]
    fn neg(self) -> MontyFieldElement<MOD> {
        -*self
    }
}

//
// `core::fmt` trait impls
//

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> Debug for MontyFieldElement<MOD> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "MontyFieldElement(0x{:x})", self.to_uint())
    }
}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> Display for MontyFieldElement<MOD> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.to_uint())
    }
}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> LowerHex for MontyFieldElement<MOD> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(&self.to_uint(), f)
    }
}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> UpperHex for MontyFieldElement<MOD> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        UpperHex::fmt(&self.to_uint(), f)
    }
}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> From<u64> for MontyFieldElement<MOD> {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> From<&U384> for MontyFieldElement<MOD> {
    fn from(uint: &U384) -> Self {
        Self::new(uint)
    }
}

impl<MOD: ConstMontyParams<{ U384::LIMBS }>> From<MontyFieldElement<MOD>> for U384 {
    fn from(fe: MontyFieldElement<MOD>) -> U384 {
        fe.to_uint()
    }
}
