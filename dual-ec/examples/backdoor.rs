//! Dual_EC_DRBG escrow key demonstration.
//!
//! Instantiates the generator with `P = [d]Q`, observes one output and
//! recovers the generator's next state from it using only `d`.

use dual_ec::{DEMO_SECRET, DEMO_SEED, run_backdoor_demo};

fn main() -> Result<(), dual_ec::Error> {
    let report = run_backdoor_demo(&DEMO_SECRET, &DEMO_SEED)?;

    println!("Secret (backdoor):  0x{DEMO_SECRET:x}");
    println!("Output:             0x{:x}", report.output);
    println!("Recovered state:    0x{:x}", report.recovered_state);
    println!("Next state:         0x{:x}", report.next_state);

    Ok(())
}
