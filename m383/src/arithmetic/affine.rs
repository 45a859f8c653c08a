//! Affine points on M-383.

use super::{curve_equation_rhs, field::FieldElement, projective::ProjectivePoint};
use crate::{Error, Result};
use crypto_bigint::U384;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on M-383 in affine `(x, y)` coordinates.
///
/// Only points satisfying `y² = x³ + A·x² + x` can be constructed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AffinePoint {
    x: FieldElement,
    y: FieldElement,
}

impl AffinePoint {
    /// Base point `Q = (12, y)` with the even choice of `y`.
    pub const GENERATOR: Self = Self {
        x: FieldElement::from_u64(12),
        y: FieldElement::new(&U384::from_be_hex(
            "1ec7ed04aaf834af310e304b2da0f328e7c165f0e8988abd3992861290f617aa1f1b2e7d0b6e332e969991b62555e77e",
        )),
    };

    /// Create a point from affine coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotOnCurve`] if `(x, y)` does not satisfy the curve
    /// equation.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self> {
        let point = Self { x, y };

        if point.is_on_curve().into() {
            Ok(point)
        } else {
            Err(Error::NotOnCurve)
        }
    }

    /// Recover a point from its x-coordinate, picking the `y` whose canonical
    /// representative is odd when `odd` is set and even otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoResidue`] if `x³ + A·x² + x` is not a square, i.e.
    /// no point with this x-coordinate exists.
    pub fn from_x(x: &FieldElement, odd: Choice) -> Result<Self> {
        let y = curve_equation_rhs(x).sqrt().ok_or(Error::NoResidue)?;
        let flip = y.is_odd() ^ odd;

        Ok(Self {
            x: *x,
            y: FieldElement::conditional_select(&y, &-y, flip),
        })
    }

    /// Affine x-coordinate.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// Check the curve equation `y² = x³ + A·x² + x`.
    pub fn is_on_curve(&self) -> Choice {
        self.y.square().ct_eq(&curve_equation_rhs(&self.x))
    }

    /// Drop `y` and lift to projective x-only coordinates with `Z = 1`.
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint::new(self.x, FieldElement::ONE)
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}
