//! Projective x-only points on M-383.

#![allow(clippy::op_ref)]

use super::{
    A_PLUS_TWO_OVER_FOUR, LADDER_STEPS, affine::AffinePoint, field::FieldElement, scalar::Scalar,
    scalar::bit,
};
use crate::{Error, Result};
use core::ops::Mul;
use crypto_bigint::U384;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on M-383 in projective `(X : Z)` coordinates, representing the
/// affine x-coordinate `X / Z`.
///
/// The y-coordinate is not tracked: `P` and `-P` share a representation, which
/// is all the Montgomery ladder needs. Use [`AffinePoint`] when a y-coordinate
/// is known.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint {
    x: FieldElement,
    z: FieldElement,
}

impl ProjectivePoint {
    /// The identity element of the group: the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    /// Base point `Q` with affine x-coordinate 12.
    pub const GENERATOR: Self = Self {
        x: FieldElement::from_u64(12),
        z: FieldElement::ONE,
    };

    /// Create a point from projective coordinates.
    pub const fn new(x: FieldElement, z: FieldElement) -> Self {
        Self { x, z }
    }

    /// Create a point from an affine x-coordinate, with `Z = 1`.
    pub fn from_affine_x(x: &U384) -> Self {
        Self {
            x: FieldElement::new(x),
            z: FieldElement::ONE,
        }
    }

    /// Projective `X` coordinate.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// Projective `Z` coordinate.
    pub fn z(&self) -> FieldElement {
        self.z
    }

    /// Pseudo-doubling: `[2]P` from `P` alone.
    ///
    /// See <https://eprint.iacr.org/2017/212.pdf> (algorithm 2, `xDBL`).
    pub fn double(&self) -> Self {
        let v1 = (self.x + self.z).square();
        let v2 = (self.x - self.z).square();
        let x = v1 * v2;
        let v1 = v1 - v2;
        let v3 = A_PLUS_TWO_OVER_FOUR * v1 + v2;
        let z = v1 * v3;

        Self { x, z }
    }

    /// Differential addition: `P + Q` given `P`, `Q` and `P - Q`.
    ///
    /// `difference` is the fixed ladder input and is only read.
    ///
    /// See <https://eprint.iacr.org/2017/212.pdf> (algorithm 1, `xADD`).
    pub fn differential_add(&self, other: &Self, difference: &Self) -> Self {
        let v0 = self.x + self.z;
        let v1 = (other.x - other.z) * v0;
        let v0 = self.x - self.z;
        let v2 = (other.x + other.z) * v0;
        let v3 = (v1 + v2).square();
        let v4 = (v1 - v2).square();

        Self {
            x: difference.z * v3,
            z: difference.x * v4,
        }
    }

    /// Scalar multiplication with the Montgomery ladder, also reporting
    /// whether either rail passed through `Z = 0`.
    fn ladder(&self, scalar: &Scalar) -> (Self, Choice) {
        // Rails start at ([2]P, P) as though bit 379 were already processed.
        let mut x0 = self.double();
        let mut x1 = *self;
        let mut degenerate = x0.z.ct_is_zero() | x1.z.ct_is_zero();

        for i in (0..LADDER_STEPS).rev() {
            let swap = bit(scalar, i + 1) ^ bit(scalar, i);
            Self::conditional_swap(&mut x0, &mut x1, swap);

            // both outputs come from the same pre-step snapshot of x0
            let doubled = x0.double();
            x1 = x0.differential_add(&x1, self);
            x0 = doubled;

            degenerate |= x0.z.ct_is_zero() | x1.z.ct_is_zero();
        }

        Self::conditional_swap(&mut x0, &mut x1, bit(scalar, 0));
        (x0, degenerate)
    }

    /// Scalar multiplication with the Montgomery ladder.
    ///
    /// Always runs [`LADDER_STEPS`] iterations over bits `378..=0`, reading bit
    /// 379 as the starting swap state. Scalars in `[2^379, 2^380)` give `[k]P`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if a ladder rail reached `Z = 0`.
    pub fn checked_mul(&self, scalar: &Scalar) -> Result<Self> {
        let (point, degenerate) = self.ladder(scalar);

        if bool::from(degenerate) {
            return Err(Error::DivisionByZero);
        }

        Ok(point)
    }

    /// Is this the invalid `(0 : 0)`, which represents no point at all?
    fn is_degenerate(&self) -> Choice {
        self.x.ct_is_zero() & self.z.ct_is_zero()
    }

    /// Affine x-coordinate `X · Z⁻¹` as a field element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `Z = 0`.
    pub fn to_affine_x(&self) -> Result<FieldElement> {
        Ok(self.x * self.z.invert()?)
    }

    /// Affine x-coordinate `X · Z⁻¹ mod p` as a canonical integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `Z = 0`.
    pub fn affine_x(&self) -> Result<U384> {
        self.to_affine_x().map(|x| x.to_uint())
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ConstantTimeEq for ProjectivePoint {
    /// Projective equality: `X₁ · Z₂ = X₂ · Z₁`.
    ///
    /// `(0 : 0)` satisfies that against every point, so it is only equal to
    /// itself.
    fn ct_eq(&self, other: &Self) -> Choice {
        let lhs = self.is_degenerate();
        let rhs = other.is_degenerate();
        let same = (self.x * other.z).ct_eq(&(other.x * self.z));

        (same & !lhs & !rhs) | (lhs & rhs)
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ProjectivePoint {}

impl Default for ProjectivePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<AffinePoint> for ProjectivePoint {
    fn from(point: AffinePoint) -> Self {
        point.to_projective()
    }
}

impl From<&AffinePoint> for ProjectivePoint {
    fn from(point: &AffinePoint) -> Self {
        point.to_projective()
    }
}

/// Ladder scalar multiplication, returning [`ProjectivePoint::IDENTITY`] when a
/// rail reached `Z = 0`. Use [`ProjectivePoint::checked_mul`] to detect that.
impl Mul<&Scalar> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: &Scalar) -> ProjectivePoint {
        let (point, degenerate) = self.ladder(scalar);
        ProjectivePoint::conditional_select(&point, &ProjectivePoint::IDENTITY, degenerate)
    }
}

impl Mul<&Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: &Scalar) -> ProjectivePoint {
        &self * scalar
    }
}

impl Mul<Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: Scalar) -> ProjectivePoint {
        &self * &scalar
    }
}
