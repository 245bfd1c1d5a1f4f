//! Rendering-stack probes: canvas and WebGL
//!
//! The heavy rendered artifacts (serialized canvas images, long capability
//! lists) are condensed to 32-bit sub-hashes with the system seed before
//! they enter the profile, exactly as the original readers do. Hardened
//! browsers keep the probe nominally available but zero out or null the
//! sub-fields they fake.

use sigil_core::{murmur3_32, to_canonical_bytes, Signal, SignalValue, HASH_SEED};
use sigil_error::Result;

use crate::environment::Environment;

// Each probe keeps its own closed code set; the numeric overlaps are
// intentional and probe-local.

/// canvasAPI: rendering suppressed outright by the browser/privacy mode.
pub const PRIVACY_BLOCKED: i32 = -1;
/// canvasAPI / webglProgram: no 2D/WebGL context could be obtained.
pub const NO_CONTEXT: i32 = -2;
/// webglInfo: no WebGL context could be obtained.
pub const NO_WEBGL: i32 = -1;
/// webglInfo: the debug-renderer-info extension is missing.
pub const DEBUG_INFO_ABSENT: i32 = -3;
/// webglProgram: skipped for hardened/resisting environments.
pub const PROGRAM_BLOCKED: i32 = -3;
/// webglProgram: no WebGL context could be obtained.
pub const PROGRAM_NO_WEBGL: i32 = -1;

fn image_hash(image: &str) -> u32 {
    murmur3_32(image.as_bytes(), HASH_SEED)
}

fn list_hash(items: &[String]) -> Result<u32> {
    Ok(murmur3_32(&to_canonical_bytes(items)?, HASH_SEED))
}

/// Canvas fingerprint: winding support plus image hashes for the fixed
/// geometry, text, and combined scenes.
pub fn canvas_api(env: &Environment) -> Result<Signal> {
    let touch_webkit = env.is_webkit() && env.navigator.max_touch_points.is_some();
    if touch_webkit || env.is_hardened() || env.resists_fingerprinting() {
        return Ok(Signal::unavailable(PRIVACY_BLOCKED));
    }
    let canvas = match env.graphics.as_ref().and_then(|g| g.canvas.as_ref()) {
        Some(canvas) => canvas,
        None => return Ok(Signal::unavailable(NO_CONTEXT)),
    };

    let scene = |image: &str, winding: bool| {
        SignalValue::map([
            ("hash", SignalValue::from(image_hash(image))),
            ("winding", SignalValue::Bool(winding)),
        ])
    };

    Ok(Signal::available(SignalValue::map([
        ("geometry", scene(&canvas.geometry_image, canvas.geometry_winding)),
        ("text", scene(&canvas.text_image, canvas.text_winding)),
        ("combined", scene(&canvas.combined_image, canvas.combined_winding)),
    ])))
}

/// WebGL identity and capability report. Sub-lists are hashed; hardened
/// environments null the unmasked GPU strings and zero the capability
/// hashes they spoof.
pub fn webgl_info(env: &Environment) -> Result<Signal> {
    let webgl = match env.graphics.as_ref().and_then(|g| g.webgl.as_ref()) {
        Some(webgl) => webgl,
        None => return Ok(Signal::unavailable(NO_WEBGL)),
    };
    if !webgl.debug_renderer_info {
        return Ok(Signal::unavailable(DEBUG_INFO_ABSENT));
    }

    let hardened = env.is_hardened();
    let masked_str = |value: &Option<String>| {
        if hardened {
            SignalValue::Null
        } else {
            match value {
                Some(v) => SignalValue::from(v.as_str()),
                None => SignalValue::Null,
            }
        }
    };
    let masked_hash = |items: &[String]| -> Result<SignalValue> {
        if hardened {
            Ok(SignalValue::Int(0))
        } else {
            Ok(SignalValue::from(list_hash(items)?))
        }
    };

    Ok(Signal::available(SignalValue::map([
        ("unmaskedVendor", masked_str(&webgl.unmasked_vendor)),
        ("unmaskedRenderer", masked_str(&webgl.unmasked_renderer)),
        ("version", SignalValue::from(webgl.version.as_str())),
        (
            "shaderVersion",
            SignalValue::from(webgl.shading_language_version.as_str()),
        ),
        ("vendor", SignalValue::from(webgl.vendor.as_str())),
        ("renderer", SignalValue::from(webgl.renderer.as_str())),
        (
            "attributes",
            SignalValue::from(list_hash(&webgl.context_attributes)?),
        ),
        ("parameters", SignalValue::from(list_hash(&webgl.parameters)?)),
        ("shaderPrecision", masked_hash(&webgl.shader_precision)?),
        ("extensions", masked_hash(&webgl.extensions)?),
        ("constants", masked_hash(&webgl.extension_constants)?),
    ])))
}

/// Hash of the image rendered by the fixed rotating-triangle program.
pub fn webgl_program(env: &Environment) -> Result<Signal> {
    if env.is_hardened() || env.resists_fingerprinting() {
        return Ok(Signal::unavailable(PROGRAM_BLOCKED));
    }
    let graphics = match &env.graphics {
        Some(graphics) => graphics,
        None => return Ok(Signal::unavailable(PROGRAM_NO_WEBGL)),
    };
    if graphics.webgl.is_none() {
        return Ok(Signal::unavailable(PROGRAM_NO_WEBGL));
    }
    Ok(match &graphics.webgl_program_image {
        Some(image) => Signal::available(image_hash(image)),
        None => Signal::unavailable(NO_CONTEXT),
    })
}
