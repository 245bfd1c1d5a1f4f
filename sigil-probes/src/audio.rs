//! Audio-stack probes
//!
//! The offline audio render produces a floating-point energy sum that is
//! remarkably stable per device/driver pair, which is why both signals in
//! this module sit in the stable identifier subset.

use sigil_core::{murmur3_32, to_canonical_bytes, Signal, SignalValue, HASH_SEED};
use sigil_error::Result;

use crate::environment::Environment;

/// Suppressed by a privacy mode, or collected only on Chromium (speechSynth).
pub const BLOCKED: i32 = -1;
/// The audio API surface does not exist here.
pub const NO_API: i32 = -2;
/// The API exists but returned no usable data.
pub const NO_DATA: i32 = -3;

/// Summed magnitude of a fixed window of the oscillator/compressor render.
pub fn audio_context(env: &Environment) -> Result<Signal> {
    if env.is_hardened() {
        return Ok(Signal::unavailable(BLOCKED));
    }
    Ok(
        match env.audio.as_ref().and_then(|audio| audio.rendered_energy) {
            Some(energy) => Signal::available(energy),
            None => Signal::unavailable(NO_API),
        },
    )
}

/// Hash over the installed speech-synthesis voice list. Only collected on
/// Chromium; elsewhere the list is either empty or deliberately generic.
pub fn speech_synth(env: &Environment) -> Result<Signal> {
    if env.is_hardened() || env.is_gecko() || env.is_webkit() {
        return Ok(Signal::unavailable(BLOCKED));
    }
    let audio = match &env.audio {
        Some(audio) => audio,
        None => return Ok(Signal::unavailable(NO_API)),
    };
    if audio.voices.is_empty() {
        return Ok(Signal::unavailable(NO_DATA));
    }

    let voices: Vec<SignalValue> = audio
        .voices
        .iter()
        .map(|voice| {
            SignalValue::map([
                ("name", SignalValue::from(voice.name.as_str())),
                ("voiceURI", SignalValue::from(voice.voice_uri.as_str())),
                ("default", SignalValue::Bool(voice.default)),
                ("lang", SignalValue::from(voice.lang.as_str())),
                ("localService", SignalValue::Bool(voice.local_service)),
            ])
        })
        .collect();

    let digest = murmur3_32(&to_canonical_bytes(&voices)?, HASH_SEED);
    Ok(Signal::available(digest))
}
