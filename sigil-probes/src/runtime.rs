//! Runtime, timing, and document-level probes
//!
//! Heap ceiling, clock jitter floor, timezone, and a collection of cheap
//! capability checks. The timezone probe demonstrates the fallback status
//! path: when no IANA name is reported, a synthetic "UTC±N" name is rebuilt
//! from the standard-time offset and flagged with a positive status code.

use sigil_core::{Signal, SignalValue};
use sigil_error::Result;

use crate::environment::Environment;

/// No performance object at all.
pub const NO_PERFORMANCE: i32 = -1;
/// Performance object exists but does not report the queried field.
pub const UNREPORTED: i32 = -2;
/// Field is only collected on Chromium-family engines.
pub const WRONG_FAMILY: i32 = -3;
/// Generic API-absent code for the simple capability checks.
pub const ABSENT: i32 = -1;

pub fn js_heap_size_limit(env: &Environment) -> Result<Signal> {
    let perf = match &env.runtime.performance {
        Some(perf) => perf,
        None => return Ok(Signal::unavailable(NO_PERFORMANCE)),
    };
    Ok(match perf.js_heap_size_limit {
        Some(limit) => Signal::available(limit),
        None => Signal::unavailable(UNREPORTED),
    })
}

/// Smallest observed delta between consecutive high-resolution clock reads.
/// Only meaningful on Chromium, where the clock is fine-grained enough for
/// the floor to characterize the host.
pub fn performance_jitter(env: &Environment) -> Result<Signal> {
    if !env.is_chromium() {
        return Ok(Signal::unavailable(WRONG_FAMILY));
    }
    let perf = match &env.runtime.performance {
        Some(perf) => perf,
        None => return Ok(Signal::unavailable(NO_PERFORMANCE)),
    };
    Ok(match perf.timer_jitter_floor_ms {
        Some(floor) => Signal::available(floor),
        None => Signal::unavailable(UNREPORTED),
    })
}

pub fn timezone(env: &Environment) -> Result<Signal> {
    if let Some(name) = &env.runtime.timezone {
        return Ok(Signal::available(name.as_str()));
    }
    Ok(match env.runtime.timezone_offset_minutes {
        Some(offset) => {
            let east_positive = -offset;
            let sign = if east_positive >= 0 { "+" } else { "-" };
            Signal::fallback(1, format!("UTC{}{}", sign, east_positive.abs()))
        }
        None => Signal::unavailable(ABSENT),
    })
}

/// Standard-time offset, east-positive minutes.
pub fn timezone_offset(env: &Environment) -> Result<Signal> {
    Ok(match env.runtime.timezone_offset_minutes {
        Some(offset) => Signal::available(-offset),
        None => Signal::unavailable(ABSENT),
    })
}

pub fn shared_array_buffer(env: &Environment) -> Result<Signal> {
    Ok(match env.runtime.shared_array_buffer_bytes {
        Some(bytes) => Signal::available(bytes),
        None => Signal::unavailable(ABSENT),
    })
}

pub fn eval_to_string(env: &Environment) -> Result<Signal> {
    Ok(match env.runtime.eval_to_string_length {
        Some(len) => Signal::available(len),
        None => Signal::unavailable(ABSENT),
    })
}

/// Messages from a fixed set of deliberately provoked errors; their exact
/// wording varies per engine build.
pub fn errors(env: &Environment) -> Result<Signal> {
    if env.runtime.error_signatures.is_empty() {
        return Ok(Signal::unavailable(ABSENT));
    }
    let messages: Vec<&str> = env
        .runtime
        .error_signatures
        .iter()
        .map(String::as_str)
        .collect();
    Ok(Signal::available(SignalValue::list(messages)))
}

pub fn error_to_source(env: &Environment) -> Result<Signal> {
    Ok(match env.runtime.error_to_source {
        Some(flag) => Signal::available(flag),
        None => Signal::unavailable(ABSENT),
    })
}

/// Vendor objects found on the global scope, sorted for stability.
pub fn browser_objects(env: &Environment) -> Result<Signal> {
    let mut found: Vec<&str> = env
        .runtime
        .browser_objects
        .iter()
        .map(String::as_str)
        .collect();
    found.sort_unstable();
    Ok(Signal::available(SignalValue::list(found)))
}

pub fn install_trigger(env: &Environment) -> Result<Signal> {
    Ok(Signal::available(env.runtime.install_trigger))
}

pub fn get_attribute_names(env: &Environment) -> Result<Signal> {
    Ok(match env.runtime.get_attribute_names {
        Some(flag) => Signal::available(flag),
        None => Signal::unavailable(ABSENT),
    })
}

/// Whether the two notification-permission APIs disagree (a headless /
/// automation tell).
pub fn notifications(env: &Environment) -> Result<Signal> {
    Ok(match env.runtime.notification_permission_inconsistent {
        Some(flag) => Signal::available(flag),
        None => Signal::unavailable(ABSENT),
    })
}

pub fn apple_pay(env: &Environment) -> Result<Signal> {
    Ok(match env.runtime.apple_pay_can_make_payments {
        Some(enabled) => Signal::available(enabled),
        None => Signal::unavailable(ABSENT),
    })
}

pub fn attribution_source_id(env: &Environment) -> Result<Signal> {
    Ok(match &env.runtime.attribution_source_id {
        Some(id) => Signal::available(id.as_str()),
        None => Signal::unavailable(ABSENT),
    })
}

pub fn source_buffer(env: &Environment) -> Result<Signal> {
    let (a, b) = match &env.runtime.source_buffer_types {
        Some((a, b)) => (a.as_str(), b.as_str()),
        None => ("undefined", "undefined"),
    };
    Ok(Signal::available(SignalValue::list([a, b])))
}

/// Fonts confirmed present by width measurement against the base families.
pub fn fonts(env: &Environment) -> Result<Signal> {
    if env.is_hardened() {
        return Ok(Signal::unavailable(ABSENT));
    }
    let fonts: Vec<&str> = env
        .runtime
        .installed_fonts
        .iter()
        .map(String::as_str)
        .collect();
    Ok(Signal::available(SignalValue::list(fonts)))
}
