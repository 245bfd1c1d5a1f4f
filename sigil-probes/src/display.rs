//! Screen and media-query probes
//!
//! Geometry, color capabilities, and accessibility preferences. Two quirks
//! carried over from the original readers: stock Chromium deliberately
//! skips `devicePixelRatio` and `screenResolution` (the values are too
//! noisy there), and resolution is reported largest-dimension-first so
//! orientation flips don't change it.

use sigil_core::Signal;
use sigil_error::Result;

use crate::environment::Environment;

/// The media query / screen field is not reported here.
pub const ABSENT: i32 = -1;
/// Deliberately skipped for this browser family.
pub const SKIPPED: i32 = -2;

pub fn color_depth(env: &Environment) -> Result<Signal> {
    Ok(match env.screen.color_depth {
        Some(depth) => Signal::available(depth),
        None => Signal::unavailable(ABSENT),
    })
}

pub fn device_pixel_ratio(env: &Environment) -> Result<Signal> {
    if env.is_chromium() && !env.is_hardened() {
        return Ok(Signal::unavailable(SKIPPED));
    }
    Ok(match env.screen.device_pixel_ratio {
        Some(ratio) => Signal::available(ratio),
        None => Signal::unavailable(ABSENT),
    })
}

/// Orientation-independent "<larger>x<smaller>" resolution string.
pub fn screen_resolution(env: &Environment) -> Result<Signal> {
    if env.resists_fingerprinting() {
        return Ok(Signal::unavailable(ABSENT));
    }
    if env.is_chromium() && !env.is_hardened() {
        return Ok(Signal::unavailable(SKIPPED));
    }
    Ok(match (env.screen.width, env.screen.height) {
        (Some(w), Some(h)) => {
            Signal::available(format!("{}x{}", w.max(h), w.min(h)))
        }
        _ => Signal::unavailable(ABSENT),
    })
}

pub fn color_gamut(env: &Environment) -> Result<Signal> {
    Ok(match &env.screen.color_gamut {
        Some(gamut) => Signal::available(gamut.as_str()),
        None => Signal::unavailable(ABSENT),
    })
}

/// prefers-contrast collapsed to the original's small integer scale.
pub fn contrast(env: &Environment) -> Result<Signal> {
    Ok(match env.screen.prefers_contrast.as_deref() {
        Some("no-preference") => Signal::available(0i64),
        Some("high") | Some("more") => Signal::available(1i64),
        Some("low") | Some("less") => Signal::available(-1i64),
        Some("forced") => Signal::available(10i64),
        Some(_) => Signal::available(-1i64),
        None => Signal::unavailable(ABSENT),
    })
}

pub fn forced_colors(env: &Environment) -> Result<Signal> {
    optional_bool(env.screen.forced_colors)
}

pub fn hdr(env: &Environment) -> Result<Signal> {
    optional_bool(env.screen.hdr)
}

pub fn inverted_colors(env: &Environment) -> Result<Signal> {
    optional_bool(env.screen.inverted_colors)
}

pub fn reduced_motion(env: &Environment) -> Result<Signal> {
    optional_bool(env.screen.reduced_motion)
}

pub fn monochrome(env: &Environment) -> Result<Signal> {
    Ok(match env.screen.monochrome_levels {
        Some(levels) => Signal::available(levels),
        None => Signal::unavailable(ABSENT),
    })
}

fn optional_bool(value: Option<bool>) -> Result<Signal> {
    Ok(match value {
        Some(flag) => Signal::available(flag),
        None => Signal::unavailable(ABSENT),
    })
}
