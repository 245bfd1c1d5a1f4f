//! Navigator-level probes
//!
//! Thin readers over the navigator block of the environment snapshot.
//! Hardened browsers deliberately mask several of these, which is reported
//! through [`BLOCKED`] rather than [`ABSENT`] - the distinction is itself
//! identifying.

use sigil_core::{Signal, SignalValue};
use sigil_error::Result;

use crate::environment::Environment;

/// The API does not exist in this environment.
pub const ABSENT: i32 = -1;
/// The API exists but a privacy-hardening mode suppresses it.
pub const BLOCKED: i32 = -2;

fn optional_str(value: &Option<String>) -> Signal {
    match value {
        Some(v) => Signal::available(v.as_str()),
        None => Signal::unavailable(ABSENT),
    }
}

pub fn cpu_class(env: &Environment) -> Result<Signal> {
    Ok(optional_str(&env.navigator.cpu_class))
}

pub fn device_memory(env: &Environment) -> Result<Signal> {
    if env.is_hardened() {
        return Ok(Signal::unavailable(BLOCKED));
    }
    Ok(match env.navigator.device_memory {
        Some(gb) => Signal::available(gb),
        None => Signal::unavailable(ABSENT),
    })
}

pub fn do_not_track(env: &Environment) -> Result<Signal> {
    if env.resists_fingerprinting() {
        return Ok(Signal::unavailable(BLOCKED));
    }
    Ok(optional_str(&env.navigator.do_not_track))
}

pub fn hardware_concurrency(env: &Environment) -> Result<Signal> {
    if env.is_hardened() || env.resists_fingerprinting() {
        return Ok(Signal::unavailable(BLOCKED));
    }
    Ok(match env.navigator.hardware_concurrency {
        Some(n) => Signal::available(n),
        None => Signal::unavailable(ABSENT),
    })
}

/// Primary language plus the full preference list. Chromium environments
/// report only the primary language, the list stays empty.
pub fn language(env: &Environment) -> Result<Signal> {
    let primary = match &env.navigator.language {
        Some(lang) => lang.as_str(),
        None => return Ok(Signal::unavailable(ABSENT)),
    };
    let list: Vec<&str> = if env.is_chromium() {
        Vec::new()
    } else {
        env.navigator.languages.iter().map(String::as_str).collect()
    };
    Ok(Signal::available(SignalValue::List(vec![
        SignalValue::from(primary),
        SignalValue::list(list),
    ])))
}

pub fn max_touch_points(env: &Environment) -> Result<Signal> {
    Ok(match (
        env.navigator.max_touch_points,
        env.navigator.ms_max_touch_points,
    ) {
        (Some(n), _) => Signal::available(n),
        (None, Some(n)) => Signal::fallback(1, n),
        (None, None) => Signal::unavailable(ABSENT),
    })
}

pub fn oscpu(env: &Environment) -> Result<Signal> {
    Ok(optional_str(&env.navigator.oscpu))
}

pub fn platform(env: &Environment) -> Result<Signal> {
    Ok(optional_str(&env.navigator.platform))
}

pub fn product_sub(env: &Environment) -> Result<Signal> {
    Ok(optional_str(&env.navigator.product_sub))
}

pub fn vendor(env: &Environment) -> Result<Signal> {
    Ok(optional_str(&env.navigator.vendor))
}

pub fn webdriver(env: &Environment) -> Result<Signal> {
    Ok(match env.navigator.webdriver {
        Some(flag) => Signal::available(flag),
        None => Signal::unavailable(ABSENT),
    })
}

pub fn plugins(env: &Environment) -> Result<Signal> {
    let names: Vec<&str> = env.navigator.plugins.iter().map(String::as_str).collect();
    Ok(Signal::available(SignalValue::list(names)))
}

pub fn plugin_length_is_zero(env: &Environment) -> Result<Signal> {
    Ok(Signal::available(env.navigator.plugins.is_empty()))
}

pub fn user_agent_data(env: &Environment) -> Result<Signal> {
    let data = match &env.navigator.user_agent_data {
        Some(data) => data,
        None => return Ok(Signal::unavailable(ABSENT)),
    };
    let brands: Vec<SignalValue> = data
        .brands
        .iter()
        .map(|b| {
            SignalValue::map([
                ("brand", SignalValue::from(b.brand.as_str())),
                ("version", SignalValue::from(b.version.as_str())),
            ])
        })
        .collect();
    Ok(Signal::available(SignalValue::map([
        ("brands", SignalValue::List(brands)),
        ("mobile", SignalValue::Bool(data.mobile)),
        ("platform", SignalValue::from(data.platform.as_str())),
    ])))
}

pub fn rtt(env: &Environment) -> Result<Signal> {
    Ok(match env.navigator.rtt {
        Some(ms) => Signal::available(ms),
        None => Signal::unavailable(ABSENT),
    })
}
