//! The Dual_EC_DRBG generator.

use crate::Result;
use core::fmt;
use m383::{ProjectivePoint, Scalar, affine_x, bigint::U384, ladder};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public points `(P, Q)` of a Dual_EC_DRBG instance.
///
/// `P` advances the internal state, `Q` derives outputs from it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DualEcParams {
    p: ProjectivePoint,
    q: ProjectivePoint,
}

impl DualEcParams {
    /// Parameters from an arbitrary pair of points.
    pub const fn new(p: ProjectivePoint, q: ProjectivePoint) -> Self {
        Self { p, q }
    }

    /// Parameters with `Q` fixed to the M-383 base point.
    pub const fn with_generator(p: ProjectivePoint) -> Self {
        Self::new(p, ProjectivePoint::GENERATOR)
    }

    /// The state-update point `P`.
    pub fn p(&self) -> ProjectivePoint {
        self.p
    }

    /// The output point `Q`.
    pub fn q(&self) -> ProjectivePoint {
        self.q
    }

    /// State update: `x(s·P)`.
    pub fn next_state(&self, state: &Scalar) -> Result<U384> {
        Ok(affine_x(&ladder(state, &self.p)?)?)
    }

    /// Output derivation: `x(s·Q)`.
    pub fn output(&self, state: &Scalar) -> Result<U384> {
        Ok(affine_x(&ladder(state, &self.q)?)?)
    }
}

/// Dual_EC_DRBG generator.
///
/// Each step moves the state to `s' = x(s·P)` and emits `x(s'·Q)`. Outputs are
/// full affine x-coordinates: no bits are truncated, which is what makes the
/// state recoverable from a single output by anyone knowing `log_Q(P)`.
///
/// The state is zeroized on drop.
#[derive(Clone)]
pub struct DualEcDrbg {
    params: DualEcParams,
    state: U384,
}

impl DualEcDrbg {
    /// Instantiate the generator with a seed as its initial state.
    ///
    /// The seed is used directly as a ladder scalar and should have bit 379
    /// set.
    pub fn new(params: DualEcParams, seed: &Scalar) -> Self {
        Self {
            params,
            state: *seed,
        }
    }

    /// Public parameters of this generator.
    pub fn params(&self) -> &DualEcParams {
        &self.params
    }

    /// Current internal state.
    pub fn state(&self) -> U384 {
        self.state
    }

    /// The state the next call to [`DualEcDrbg::next_output`] will move to,
    /// without advancing the generator.
    pub fn next_state(&self) -> Result<U384> {
        self.params.next_state(&self.state)
    }

    /// Run one generation step and return its output.
    ///
    /// The state is left unchanged if the step fails.
    pub fn next_output(&mut self) -> Result<U384> {
        let state = self.next_state()?;
        let output = self.params.output(&state)?;
        self.state = state;
        Ok(output)
    }
}

impl Iterator for DualEcDrbg {
    type Item = Result<U384>;

    fn next(&mut self) -> Option<Result<U384>> {
        Some(self.next_output())
    }
}

impl fmt::Debug for DualEcDrbg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualEcDrbg")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl Zeroize for DualEcDrbg {
    fn zeroize(&mut self) {
        self.state.zeroize();
    }
}

impl Drop for DualEcDrbg {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for DualEcDrbg {}
