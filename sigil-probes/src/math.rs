//! Math-library fingerprint
//!
//! Evaluates a fixed battery of transcendental expressions whose last few
//! mantissa bits differ between math library implementations, then hashes
//! the canonical serialization of the results. Unlike the other probes this
//! one genuinely executes in-process: the host's floating-point stack IS
//! the signal.

use std::f64::consts::{E, PI, SQRT_2};

use sigil_core::{murmur3_32, to_canonical_bytes, Signal, HASH_SEED};
use sigil_error::Result;

use crate::environment::Environment;

/// The fixed expression battery. Inputs are chosen to push each function
/// into argument ranges where implementations disagree.
fn expression_battery() -> [f64; 24] {
    let e154 = 1e154_f64;
    [
        0.123_124_234_234_234_24_f64.acos(),
        1e308_f64.acosh(),
        (e154 + (e154 * e154 - 1.0).sqrt()).ln(),
        0.123_124_234_234_234_24_f64.asin(),
        1.0_f64.asinh(),
        (SQRT_2 + 1.0).ln(),
        0.5_f64.atanh(),
        3.0_f64.ln() / 2.0,
        0.5_f64.atan(),
        (-1e300_f64).sin(),
        1.0_f64.sinh(),
        E - 1.0 / E / 2.0,
        10.000_000_000_123_f64.cos(),
        1.0_f64.cosh(),
        (E + 1.0 / E) / 2.0,
        (-1e300_f64).tan(),
        1.0_f64.tanh(),
        (2.0_f64.exp() - 1.0) / (2.0_f64.exp() + 1.0),
        1.0_f64.exp(),
        1.0_f64.exp_m1(),
        1.0_f64.exp() - 1.0,
        10.0_f64.ln_1p(),
        11.0_f64.ln(),
        PI.powi(-100),
    ]
}

pub fn math_fingerprint(_env: &Environment) -> Result<Signal> {
    let battery = expression_battery();
    let digest = murmur3_32(&to_canonical_bytes(battery.as_slice())?, HASH_SEED);
    Ok(Signal::available(digest))
}
