//! Registry build variants
//!
//! Assembles the probe library into [`ProbeRegistry`] instances. The entry
//! order here IS the profile key order and therefore part of the identifier
//! compatibility surface - append new probes, never reorder existing ones.
//!
//! Variants differ only in which probes they include; all obey the same
//! aggregator and identity-deriver contract.

use std::sync::Arc;

use tracing::debug;

use sigil_core::{ProbeRegistry, ProbeRegistryBuilder, Signal};
use sigil_error::Result;

use crate::environment::{EnvProbe, Environment};
use crate::{audio, display, math, navigator, render, runtime};

/// Curated low-volatility probes feeding the stable identifier, in hashing
/// order. Every entry must exist in every registry variant.
pub const STABLE_COMPONENTS: &[&str] = &[
    "audioContext",
    "canvasAPI",
    "jsHeapSizeLimit",
    "performance",
    "speechSynth",
    "webglInfo",
    "webglProgram",
];

type Reader = fn(&Environment) -> Result<Signal>;

fn register(
    builder: ProbeRegistryBuilder,
    env: &Arc<Environment>,
    name: &str,
    read: Reader,
) -> ProbeRegistryBuilder {
    builder.register(name, EnvProbe::new(env.clone(), read))
}

/// The full probe set.
pub fn standard_registry(env: &Arc<Environment>) -> Result<ProbeRegistry> {
    let mut b = ProbeRegistry::builder();

    let probes: &[(&str, Reader)] = &[
        ("applePay", runtime::apple_pay),
        ("attributionsourceid", runtime::attribution_source_id),
        ("audioContext", audio::audio_context),
        ("browserObjects", runtime::browser_objects),
        ("canvasAPI", render::canvas_api),
        ("colorDepth", display::color_depth),
        ("colorGamut", display::color_gamut),
        ("contrast", display::contrast),
        ("cpuClass", navigator::cpu_class),
        ("deviceMemory", navigator::device_memory),
        ("devicePixelRatio", display::device_pixel_ratio),
        ("doNotTrack", navigator::do_not_track),
        ("errorToSource", runtime::error_to_source),
        ("errors", runtime::errors),
        ("evalToString", runtime::eval_to_string),
        ("fonts", runtime::fonts),
        ("forcedColors", display::forced_colors),
        ("getAttributeNames", runtime::get_attribute_names),
        ("hardwareConcurrency", navigator::hardware_concurrency),
        ("hdr", display::hdr),
        ("installTrigger", runtime::install_trigger),
        ("invertedColors", display::inverted_colors),
        ("jsHeapSizeLimit", runtime::js_heap_size_limit),
        ("language", navigator::language),
        ("math", math::math_fingerprint),
        ("maxTouchPoints", navigator::max_touch_points),
        ("monochrome", display::monochrome),
        ("notifications", runtime::notifications),
        ("oscpu", navigator::oscpu),
        ("performance", runtime::performance_jitter),
        ("platform", navigator::platform),
        ("pluginLengthIsZero", navigator::plugin_length_is_zero),
        ("plugins", navigator::plugins),
        ("productSub", navigator::product_sub),
        ("reducedMotion", display::reduced_motion),
        ("rtt", navigator::rtt),
        ("screenResolution", display::screen_resolution),
        ("sharedArrayBuffer", runtime::shared_array_buffer),
        ("sourceBuffer", runtime::source_buffer),
        ("speechSynth", audio::speech_synth),
        ("timezone", runtime::timezone),
        ("timezoneOffset", runtime::timezone_offset),
        ("userAgentData", navigator::user_agent_data),
        ("vendor", navigator::vendor),
        ("webdriver", navigator::webdriver),
        ("webglInfo", render::webgl_info),
        ("webglProgram", render::webgl_program),
    ];

    for (name, read) in probes {
        b = register(b, env, name, *read);
    }

    let registry = b.build()?;
    debug!("standard registry: {} probes", registry.len());
    Ok(registry)
}

/// Reduced variant: the stable subset plus the cheap navigator block.
/// Used where the heavier rendering probes are not licensed for inclusion.
pub fn minimal_registry(env: &Arc<Environment>) -> Result<ProbeRegistry> {
    let mut b = ProbeRegistry::builder();

    let probes: &[(&str, Reader)] = &[
        ("audioContext", audio::audio_context),
        ("canvasAPI", render::canvas_api),
        ("hardwareConcurrency", navigator::hardware_concurrency),
        ("jsHeapSizeLimit", runtime::js_heap_size_limit),
        ("language", navigator::language),
        ("performance", runtime::performance_jitter),
        ("platform", navigator::platform),
        ("speechSynth", audio::speech_synth),
        ("timezone", runtime::timezone),
        ("vendor", navigator::vendor),
        ("webglInfo", render::webgl_info),
        ("webglProgram", render::webgl_program),
    ];

    for (name, read) in probes {
        b = register(b, env, name, *read);
    }

    let registry = b.build()?;
    debug!("minimal registry: {} probes", registry.len());
    Ok(registry)
}
