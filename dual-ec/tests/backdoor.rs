//! End-to-end state recovery tests.

use dual_ec::{
    BackdoorKey, DEMO_SECRET, DEMO_SEED, DualEcDrbg, DualEcParams, Error, run_backdoor_demo,
};
use hex_literal::hex;
use m383::{
    ProjectivePoint, Scalar, affine_x,
    bigint::{Encoding, U384},
    clamp_scalar,
    subtle::Choice,
};
use proptest::prelude::*;

/// `x(P)` for `P = [DEMO_SECRET]Q`
const PUBLIC_X: [u8; 48] = hex!(
    "37daa79e3fe209ff164d0eea943a4833cbc968053b5f71f4"
    "c1f7fa31c22cb6551eded15545a735a6aaed496cbfbd2f5b"
);

/// State after the first step from `DEMO_SEED`
const FIRST_STATE: [u8; 48] = hex!(
    "57002e8030757286737fd8a957f4ac03d89486f97d65b010"
    "f36c5f8aa5955e21dfa980be0af75d3c5ff34a6fb0af903b"
);

const FIRST_OUTPUT: [u8; 48] = hex!(
    "19af498b67e13915fbc0b9e34150ea274b012da807295bd2"
    "1b77c88ce1999957b724b371ffd87f79870470ef395c2a81"
);

const SECOND_STATE: [u8; 48] = hex!(
    "5e5323c879dc8e8d2374d76e9665b2b62f7dc72613b42d4a"
    "dc58ae133542dee9b5d21cb926a8a7fc01dd93ddc2b029e1"
);

const SECOND_OUTPUT: [u8; 48] = hex!(
    "0b9e17eca987800fa6e6f1c2b8b12b321b2aa9fb2d324ad0"
    "427dc240441428992a6c625fd2067d5a00c8b34124096974"
);

#[test]
fn public_point() {
    let key = BackdoorKey::new(DEMO_SECRET).unwrap();
    assert_eq!(affine_x(&key.params().p()).unwrap().to_be_bytes(), PUBLIC_X);
}

#[test]
fn generator_known_answer() {
    let key = BackdoorKey::new(DEMO_SECRET).unwrap();
    let mut drbg = DualEcDrbg::new(*key.params(), &DEMO_SEED);

    assert_eq!(drbg.next_output().unwrap().to_be_bytes(), FIRST_OUTPUT);
    assert_eq!(drbg.state().to_be_bytes(), FIRST_STATE);
    assert_eq!(drbg.next_output().unwrap().to_be_bytes(), SECOND_OUTPUT);
    assert_eq!(drbg.state().to_be_bytes(), SECOND_STATE);
}

#[test]
fn demo_report() {
    let report = run_backdoor_demo(&DEMO_SECRET, &DEMO_SEED).unwrap();

    assert_eq!(report.output.to_be_bytes(), FIRST_OUTPUT);
    assert_eq!(report.recovered_state.to_be_bytes(), SECOND_STATE);
    assert_eq!(report.next_state.to_be_bytes(), SECOND_STATE);
}

#[test]
fn recovery_with_either_root() {
    let key = BackdoorKey::new(DEMO_SECRET).unwrap();
    let output = U384::from_be_bytes(FIRST_OUTPUT);

    for odd in [0u8, 1] {
        let state = key.recover_state_with_sign(&output, Choice::from(odd)).unwrap();
        assert_eq!(state.to_be_bytes(), SECOND_STATE);
    }
}

#[test]
fn predicts_future_outputs() {
    let key = BackdoorKey::new(DEMO_SECRET).unwrap();
    let mut drbg = DualEcDrbg::new(*key.params(), &DEMO_SEED);

    let first = drbg.next_output().unwrap();
    let predicted = key.predict_outputs(&first).unwrap();

    for (predicted, actual) in predicted.zip(drbg).take(4) {
        assert_eq!(predicted.unwrap(), actual.unwrap());
    }
}

#[test]
fn predicts_second_output() {
    let key = BackdoorKey::new(DEMO_SECRET).unwrap();
    let mut predicted = key
        .predict_outputs(&U384::from_be_bytes(FIRST_OUTPUT))
        .unwrap();

    assert_eq!(
        predicted.next().unwrap().unwrap().to_be_bytes(),
        SECOND_OUTPUT
    );
}

#[test]
fn foreign_parameters_resist_recovery() {
    // P chosen independently of the key: the key's recovery is meaningless
    let key = BackdoorKey::new(DEMO_SECRET).unwrap();
    let params = DualEcParams::with_generator(ProjectivePoint::GENERATOR.double());
    let mut drbg = DualEcDrbg::new(params, &DEMO_SEED);

    let output = drbg.next_output().unwrap();
    assert_ne!(
        key.recover_state(&output).unwrap(),
        drbg.next_state().unwrap()
    );
}

#[test]
fn non_residue_output() {
    let key = BackdoorKey::new(DEMO_SECRET).unwrap();
    assert_eq!(
        key.recover_state(&U384::from_u64(2)),
        Err(Error::Curve(m383::Error::NoResidue))
    );
}

#[test]
fn degenerate_parameters() {
    let params = DualEcParams::with_generator(ProjectivePoint::IDENTITY);
    let mut drbg = DualEcDrbg::new(params, &DEMO_SEED);
    assert_eq!(
        drbg.next_output(),
        Err(Error::Curve(m383::Error::DivisionByZero))
    );
}

prop_compose! {
    fn scalar()(hi in any::<[u8; 24]>(), lo in any::<[u8; 24]>()) -> Scalar {
        let mut bytes = [0u8; 48];
        bytes[..24].copy_from_slice(&hi);
        bytes[24..].copy_from_slice(&lo);
        clamp_scalar(&U384::from_be_bytes(bytes))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn demo_holds_for_any_key(secret in scalar(), seed in scalar()) {
        let report = run_backdoor_demo(&secret, &seed);
        prop_assert!(report.is_ok());

        let report = report.unwrap();
        prop_assert_eq!(report.recovered_state, report.next_state);
    }
}
