#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use dual_ec::{BackdoorKey, DEMO_SECRET, DEMO_SEED, DualEcDrbg};
//!
//! let key = BackdoorKey::new(DEMO_SECRET)?;
//! let mut drbg = DualEcDrbg::new(*key.params(), &DEMO_SEED);
//!
//! let output = drbg.next_output()?;
//! let mut predicted = key.predict_outputs(&output)?;
//! assert_eq!(predicted.next().transpose()?, Some(drbg.next_output()?));
//! # Ok::<(), dual_ec::Error>(())
//! ```

#[cfg(feature = "std")]
extern crate std;

mod backdoor;
mod drbg;
mod error;

pub use crate::{
    backdoor::{
        BackdoorKey, DEMO_SECRET, DEMO_SEED, DemoReport, PredictedOutputs, run_backdoor_demo,
    },
    drbg::{DualEcDrbg, DualEcParams},
    error::{Error, Result},
};
pub use m383;
