//! State recovery with the escrow key `d = log_Q(P)`.
//!
//! An output `out = x(s·Q)` lifts to a point `R = ±[s]Q`. Multiplying by `d`
//! gives `[d·s]Q = [s]P`, whose x-coordinate is the generator's next state.
//! The sign of `R` drops out because the ladder works on x-coordinates only.

use crate::{DualEcDrbg, DualEcParams, Error, Result};
use core::fmt;
use m383::{
    AffinePoint, FieldElement, ProjectivePoint, Scalar, affine_x, bigint::U384, ladder,
    subtle::Choice,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Escrow key used by the demonstration: `2^379 | 255`.
pub const DEMO_SECRET: Scalar = Scalar::from_be_hex(
    "0800000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000ff",
);

/// Generator seed used by the demonstration: `2^379 | 255123456789`.
pub const DEMO_SEED: Scalar = Scalar::from_be_hex(
    "080000000000000000000000000000000000000000000000000000000000000000000000000000000000003b668b0315",
);

/// Secret scalar `d` linking the public points as `P = [d]Q`.
///
/// Whoever chooses `P` this way can recover generator states from outputs.
/// The scalar is zeroized on drop.
#[derive(Clone)]
pub struct BackdoorKey {
    secret: Scalar,
    params: DualEcParams,
}

impl BackdoorKey {
    /// Derive `P = ladder(d, Q)` with `Q` the M-383 base point.
    ///
    /// `secret` is used as given and should have bit 379 set; see
    /// [`m383::clamp_scalar`].
    pub fn new(secret: Scalar) -> Result<Self> {
        let p = ladder(&secret, &ProjectivePoint::GENERATOR)?;

        Ok(Self {
            secret,
            params: DualEcParams::with_generator(p),
        })
    }

    /// Public parameters `(P, Q)` to hand to generators.
    pub fn params(&self) -> &DualEcParams {
        &self.params
    }

    /// The secret scalar `d`.
    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    /// Recover the generator's next state from one of its outputs.
    ///
    /// Returns `x(s·P)` where `s` is the state that produced `output`, i.e. the
    /// state the generator will move to on its next step.
    ///
    /// # Errors
    ///
    /// [`m383::Error::NoResidue`] if `output` is not the x-coordinate of a
    /// curve point, which never happens for genuine outputs.
    pub fn recover_state(&self, output: &U384) -> Result<U384> {
        self.recover_state_with_sign(output, Choice::from(0))
    }

    /// [`BackdoorKey::recover_state`] with an explicit choice of `y`: odd when
    /// `odd` is set, even otherwise. Both choices give the same state.
    pub fn recover_state_with_sign(&self, output: &U384, odd: Choice) -> Result<U384> {
        let point = AffinePoint::from_x(&FieldElement::new(output), odd)?;
        Ok(affine_x(&ladder(&self.secret, &point.to_projective())?)?)
    }

    /// Predict every output the generator will produce after `output`.
    pub fn predict_outputs(&self, output: &U384) -> Result<PredictedOutputs> {
        let state = self.recover_state(output)?;

        Ok(PredictedOutputs {
            params: self.params,
            state,
        })
    }
}

impl fmt::Debug for BackdoorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackdoorKey")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl Zeroize for BackdoorKey {
    fn zeroize(&mut self) {
        self.secret.zeroize();
    }
}

impl Drop for BackdoorKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for BackdoorKey {}

/// Iterator over the outputs of a generator whose state has been recovered.
///
/// Yields the same values as the generator itself, starting from the output
/// after the one the state was recovered from.
#[derive(Clone)]
pub struct PredictedOutputs {
    params: DualEcParams,
    state: U384,
}

impl Iterator for PredictedOutputs {
    type Item = Result<U384>;

    fn next(&mut self) -> Option<Result<U384>> {
        // the recovered state has already been advanced, so output first
        let output = match self.params.output(&self.state) {
            Ok(output) => output,
            Err(err) => return Some(Err(err)),
        };

        match self.params.next_state(&self.state) {
            Ok(state) => self.state = state,
            Err(err) => return Some(Err(err)),
        }

        Some(Ok(output))
    }
}

impl fmt::Debug for PredictedOutputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictedOutputs")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl Drop for PredictedOutputs {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl ZeroizeOnDrop for PredictedOutputs {}

/// Quantities produced by [`run_backdoor_demo`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DemoReport {
    /// First generator output.
    pub output: U384,

    /// State recovered from `output` with the escrow key.
    pub recovered_state: U384,

    /// Next state computed by the generator.
    pub next_state: U384,
}

/// Run one generator step from `seed` with `P = [secret]Q`, recover the next
/// state from its output, and check it against the generator's own.
///
/// # Errors
///
/// [`Error::InvariantViolation`] if the recovered and actual states differ.
pub fn run_backdoor_demo(secret: &Scalar, seed: &Scalar) -> Result<DemoReport> {
    let key = BackdoorKey::new(*secret)?;
    let mut drbg = DualEcDrbg::new(*key.params(), seed);

    let output = drbg.next_output()?;
    let recovered_state = key.recover_state(&output)?;
    let next_state = drbg.next_state()?;

    if recovered_state != next_state {
        return Err(Error::InvariantViolation {
            recovered: recovered_state,
            expected: next_state,
        });
    }

    Ok(DemoReport {
        output,
        recovered_state,
        next_state,
    })
}

#[cfg(test)]
mod tests {
    use super::{BackdoorKey, DEMO_SECRET, DEMO_SEED, run_backdoor_demo};
    use crate::{DualEcDrbg, Error};
    use m383::{ProjectivePoint, bigint::U384, subtle::Choice};

    #[test]
    fn demo_constants() {
        let top = U384::ONE.shl(379);
        assert_eq!(DEMO_SECRET, top.bitor(&U384::from_u64(255)));
        assert_eq!(DEMO_SEED, top.bitor(&U384::from_u64(255_123_456_789)));
    }

    #[test]
    fn demo_holds() {
        let report = run_backdoor_demo(&DEMO_SECRET, &DEMO_SEED).unwrap();
        assert_eq!(report.recovered_state, report.next_state);
    }

    #[test]
    fn signs_agree() {
        let key = BackdoorKey::new(DEMO_SECRET).unwrap();
        let mut drbg = DualEcDrbg::new(*key.params(), &DEMO_SEED);
        let output = drbg.next_output().unwrap();

        let even = key.recover_state_with_sign(&output, Choice::from(0)).unwrap();
        let odd = key.recover_state_with_sign(&output, Choice::from(1)).unwrap();
        assert_eq!(even, odd);
        assert_eq!(even, drbg.next_state().unwrap());
    }

    #[test]
    fn wrong_key_fails_to_recover() {
        let key = BackdoorKey::new(DEMO_SECRET).unwrap();
        let other = BackdoorKey::new(DEMO_SEED).unwrap();

        let mut drbg = DualEcDrbg::new(*key.params(), &DEMO_SEED);
        let output = drbg.next_output().unwrap();
        assert_ne!(
            other.recover_state(&output).unwrap(),
            drbg.next_state().unwrap()
        );
    }

    #[test]
    fn off_curve_output() {
        let key = BackdoorKey::new(DEMO_SECRET).unwrap();
        assert_eq!(
            key.recover_state(&U384::from_u64(2)),
            Err(Error::Curve(m383::Error::NoResidue))
        );
    }

    #[test]
    fn public_point_is_secret_multiple() {
        let key = BackdoorKey::new(DEMO_SECRET).unwrap();
        assert_eq!(key.params().q(), ProjectivePoint::GENERATOR);
        assert_eq!(
            key.params().p(),
            ProjectivePoint::GENERATOR * &DEMO_SECRET
        );
    }
}
