//! The injected environment capability
//!
//! Probes never inspect ambient global state. Everything they read comes
//! from an [`Environment`] snapshot passed in explicitly at registry
//! assembly, so the aggregator and the tests can supply deterministic
//! fakes, and a host binding can populate the same structure from a real
//! browser or runtime.
//!
//! A field that is `None` means "this API does not exist here" and maps to
//! the probe's API-absent status code. Privacy flags reproduce the
//! hardened-browser suppression paths (Brave-style masking, Firefox-style
//! resist-fingerprinting), which surface as deliberately-blocked codes.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use sigil_core::{Probe, Signal};
use sigil_error::{Result, SigilError};

/// Rendering-engine family the snapshot was taken from. Several probes
/// gate on this the way the original signal readers gate on vendor checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserFamily {
    Chromium,
    Gecko,
    Webkit,
    #[default]
    Other,
}

/// Privacy-hardening posture of the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PrivacyInfo {
    /// Brave-style masking: plausible but deliberately degraded values.
    pub hardened: bool,
    /// Firefox resist-fingerprinting: APIs report generic values or nothing.
    pub resist_fingerprinting: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandVersion {
    pub brand: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UserAgentData {
    pub brands: Vec<BrandVersion>,
    pub mobile: bool,
    pub platform: String,
}

/// Navigator-level signals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigatorInfo {
    pub cpu_class: Option<String>,
    pub device_memory: Option<f64>,
    pub do_not_track: Option<String>,
    pub hardware_concurrency: Option<u32>,
    pub language: Option<String>,
    pub languages: Vec<String>,
    pub max_touch_points: Option<u32>,
    /// Legacy vendor-prefixed touch point count, used as a fallback source.
    pub ms_max_touch_points: Option<u32>,
    pub oscpu: Option<String>,
    pub platform: Option<String>,
    pub product_sub: Option<String>,
    pub vendor: Option<String>,
    pub webdriver: Option<bool>,
    pub plugins: Vec<String>,
    pub user_agent_data: Option<UserAgentData>,
    /// Network round-trip estimate in milliseconds.
    pub rtt: Option<u32>,
}

/// Screen geometry and media-query preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScreenInfo {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub color_depth: Option<u32>,
    pub device_pixel_ratio: Option<f64>,
    /// Widest matching gamut: "rec2020", "p3", or "srgb".
    pub color_gamut: Option<String>,
    /// Raw prefers-contrast keyword: "no-preference", "more", "less", "forced", ...
    pub prefers_contrast: Option<String>,
    pub forced_colors: Option<bool>,
    pub hdr: Option<bool>,
    pub inverted_colors: Option<bool>,
    /// Smallest matching max-monochrome level.
    pub monochrome_levels: Option<u32>,
    pub reduced_motion: Option<bool>,
}

/// High-resolution timing and heap signals, present only when the
/// environment exposes a performance object at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PerformanceInfo {
    pub js_heap_size_limit: Option<u64>,
    /// Smallest observed delta between consecutive clock reads, in ms.
    pub timer_jitter_floor_ms: Option<f64>,
}

/// Runtime- and document-level signals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RuntimeInfo {
    pub performance: Option<PerformanceInfo>,
    /// IANA timezone name, when the environment reports one.
    pub timezone: Option<String>,
    /// Standard-time clock offset in minutes, west-positive (JS convention).
    pub timezone_offset_minutes: Option<i32>,
    pub shared_array_buffer_bytes: Option<u32>,
    pub eval_to_string_length: Option<u32>,
    /// Messages produced by a fixed set of deliberately provoked errors.
    pub error_signatures: Vec<String>,
    /// Whether errors expose a toSource() serializer.
    pub error_to_source: Option<bool>,
    /// Vendor objects found on the global scope.
    pub browser_objects: Vec<String>,
    pub install_trigger: bool,
    pub get_attribute_names: Option<bool>,
    /// Notification permission disagreeing between the two permission APIs.
    pub notification_permission_inconsistent: Option<bool>,
    pub apple_pay_can_make_payments: Option<bool>,
    pub attribution_source_id: Option<String>,
    /// `[typeof SourceBuffer, typeof SourceBufferList]`.
    pub source_buffer_types: Option<(String, String)>,
    /// Fonts confirmed present by width measurement.
    pub installed_fonts: Vec<String>,
}

/// Canvas rendering outcome: winding support plus the serialized images
/// produced by the fixed geometry/text scenes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasInfo {
    pub geometry_winding: bool,
    pub text_winding: bool,
    pub combined_winding: bool,
    pub geometry_image: String,
    pub text_image: String,
    pub combined_image: String,
}

/// WebGL capability report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WebglInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    pub shading_language_version: String,
    /// Whether the debug-renderer-info extension exists at all.
    pub debug_renderer_info: bool,
    pub unmasked_vendor: Option<String>,
    pub unmasked_renderer: Option<String>,
    /// "name=value" lines for the context attributes.
    pub context_attributes: Vec<String>,
    /// "name=value" lines for the numeric context parameters.
    pub parameters: Vec<String>,
    /// One line per shader-type/precision-type combination.
    pub shader_precision: Vec<String>,
    pub extensions: Vec<String>,
    /// "EXTENSION_CONSTANT=value" lines for vendor-prefixed extensions.
    pub extension_constants: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphicsInfo {
    pub canvas: Option<CanvasInfo>,
    pub webgl: Option<WebglInfo>,
    /// Serialized image produced by the fixed rotating-triangle program.
    pub webgl_program_image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VoiceInfo {
    pub name: String,
    pub voice_uri: String,
    pub lang: String,
    pub local_service: bool,
    pub default: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AudioInfo {
    /// Summed magnitude of the fixed oscillator/compressor render window.
    pub rendered_energy: Option<f64>,
    pub voices: Vec<VoiceInfo>,
}

/// Complete environment snapshot consumed by every probe.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Environment {
    pub browser: BrowserFamily,
    pub privacy: PrivacyInfo,
    pub navigator: NavigatorInfo,
    pub screen: ScreenInfo,
    pub runtime: RuntimeInfo,
    pub graphics: Option<GraphicsInfo>,
    pub audio: Option<AudioInfo>,
}

impl Environment {
    /// Parse a snapshot from JSON. Unknown fields are rejected only by
    /// structure, missing fields default to "absent".
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| SigilError::environment(err.to_string()))
    }

    pub fn is_hardened(&self) -> bool {
        self.privacy.hardened
    }

    pub fn resists_fingerprinting(&self) -> bool {
        self.privacy.resist_fingerprinting
    }

    pub fn is_chromium(&self) -> bool {
        self.browser == BrowserFamily::Chromium
    }

    pub fn is_gecko(&self) -> bool {
        self.browser == BrowserFamily::Gecko
    }

    pub fn is_webkit(&self) -> bool {
        self.browser == BrowserFamily::Webkit
    }

    /// A realistic Chromium-on-Linux snapshot, used by demos and tests.
    pub fn sample() -> Self {
        Environment {
            browser: BrowserFamily::Chromium,
            privacy: PrivacyInfo::default(),
            navigator: NavigatorInfo {
                cpu_class: None,
                device_memory: Some(8.0),
                do_not_track: Some("1".to_string()),
                hardware_concurrency: Some(16),
                language: Some("en-US".to_string()),
                languages: vec!["en-US".to_string(), "en".to_string()],
                max_touch_points: Some(0),
                ms_max_touch_points: None,
                oscpu: None,
                platform: Some("Linux x86_64".to_string()),
                product_sub: Some("20030107".to_string()),
                vendor: Some("Google Inc.".to_string()),
                webdriver: Some(false),
                plugins: vec![
                    "PDF Viewer".to_string(),
                    "Chrome PDF Viewer".to_string(),
                    "Chromium PDF Viewer".to_string(),
                ],
                user_agent_data: Some(UserAgentData {
                    brands: vec![
                        BrandVersion {
                            brand: "Chromium".to_string(),
                            version: "128".to_string(),
                        },
                        BrandVersion {
                            brand: "Not;A=Brand".to_string(),
                            version: "24".to_string(),
                        },
                    ],
                    mobile: false,
                    platform: "Linux".to_string(),
                }),
                rtt: Some(50),
            },
            screen: ScreenInfo {
                width: Some(2560),
                height: Some(1440),
                color_depth: Some(24),
                device_pixel_ratio: Some(1.0),
                color_gamut: Some("srgb".to_string()),
                prefers_contrast: Some("no-preference".to_string()),
                forced_colors: Some(false),
                hdr: Some(false),
                inverted_colors: Some(false),
                monochrome_levels: Some(0),
                reduced_motion: Some(false),
            },
            runtime: RuntimeInfo {
                performance: Some(PerformanceInfo {
                    js_heap_size_limit: Some(2_248_146_944),
                    timer_jitter_floor_ms: Some(0.005),
                }),
                timezone: Some("Europe/Amsterdam".to_string()),
                timezone_offset_minutes: Some(-60),
                shared_array_buffer_bytes: Some(1),
                eval_to_string_length: Some(33),
                error_signatures: vec![
                    "InvalidStateError: Failed to construct 'AudioContext'".to_string(),
                    "RangeError: Maximum call stack size exceeded".to_string(),
                ],
                error_to_source: Some(false),
                browser_objects: vec!["chrome".to_string()],
                install_trigger: false,
                get_attribute_names: Some(true),
                notification_permission_inconsistent: Some(false),
                apple_pay_can_make_payments: None,
                attribution_source_id: None,
                source_buffer_types: Some(("function".to_string(), "function".to_string())),
                installed_fonts: vec![
                    "Times New Roman".to_string(),
                    "Georgia".to_string(),
                    "Comic Sans MS".to_string(),
                    "Trebuchet MS".to_string(),
                    "Helvetica".to_string(),
                ],
            },
            graphics: Some(GraphicsInfo {
                canvas: Some(CanvasInfo {
                    geometry_winding: true,
                    text_winding: true,
                    combined_winding: true,
                    geometry_image: "sample-canvas-geometry-v1".to_string(),
                    text_image: "sample-canvas-text-v1".to_string(),
                    combined_image: "sample-canvas-combined-v1".to_string(),
                }),
                webgl: Some(WebglInfo {
                    vendor: "WebKit".to_string(),
                    renderer: "WebKit WebGL".to_string(),
                    version: "WebGL 1.0 (OpenGL ES 2.0 Chromium)".to_string(),
                    shading_language_version: "WebGL GLSL ES 1.0 (OpenGL ES GLSL ES 1.0 Chromium)"
                        .to_string(),
                    debug_renderer_info: true,
                    unmasked_vendor: Some("Google Inc. (AMD)".to_string()),
                    unmasked_renderer: Some(
                        "ANGLE (AMD, RADV NAVI31, Vulkan 1.3.289)".to_string(),
                    ),
                    context_attributes: vec![
                        "alpha=true".to_string(),
                        "antialias=true".to_string(),
                        "depth=true".to_string(),
                    ],
                    parameters: vec![
                        "MAX_TEXTURE_SIZE=16384".to_string(),
                        "MAX_RENDERBUFFER_SIZE=16384".to_string(),
                        "MAX_VERTEX_ATTRIBS=16".to_string(),
                    ],
                    shader_precision: vec![
                        "FRAGMENT_SHADER.HIGH_FLOAT=[-127,127,23]".to_string(),
                        "VERTEX_SHADER.HIGH_FLOAT=[-127,127,23]".to_string(),
                    ],
                    extensions: vec![
                        "ANGLE_instanced_arrays".to_string(),
                        "EXT_texture_filter_anisotropic".to_string(),
                        "WEBGL_debug_renderer_info".to_string(),
                    ],
                    extension_constants: vec![
                        "EXT_texture_filter_anisotropic_MAX_TEXTURE_MAX_ANISOTROPY_EXT=34047"
                            .to_string(),
                    ],
                }),
                webgl_program_image: Some("sample-webgl-program-v1".to_string()),
            }),
            audio: Some(AudioInfo {
                rendered_energy: Some(124.043_475_275_160_74),
                voices: vec![
                    VoiceInfo {
                        name: "English (America)".to_string(),
                        voice_uri: "urn:moz-tts:speechd:English%20(America)?en".to_string(),
                        lang: "en-US".to_string(),
                        local_service: true,
                        default: true,
                    },
                    VoiceInfo {
                        name: "English (Great Britain)".to_string(),
                        voice_uri: "urn:moz-tts:speechd:English%20(Great%20Britain)?en-GB"
                            .to_string(),
                        lang: "en-GB".to_string(),
                        local_service: true,
                        default: false,
                    },
                ],
            }),
        }
    }
}

/// Adapter binding an environment snapshot to a synchronous reader
/// function, exposing the pair as a [`Probe`].
pub struct EnvProbe<F = fn(&Environment) -> Result<Signal>> {
    env: Arc<Environment>,
    read: F,
}

impl<F> EnvProbe<F>
where
    F: Fn(&Environment) -> Result<Signal> + Send + Sync,
{
    pub fn new(env: Arc<Environment>, read: F) -> Self {
        Self { env, read }
    }
}

#[async_trait]
impl<F> Probe for EnvProbe<F>
where
    F: Fn(&Environment) -> Result<Signal> + Send + Sync,
{
    async fn read(&self) -> Result<Signal> {
        (self.read)(&self.env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_environment_is_fully_absent() {
        let env = Environment::default();
        assert_eq!(env.browser, BrowserFamily::Other);
        assert!(env.navigator.language.is_none());
        assert!(env.graphics.is_none());
        assert!(!env.is_hardened());
    }

    #[test]
    fn test_partial_json_deserializes_with_defaults() {
        let env = Environment::from_json(
            r#"{"browser":"gecko","navigator":{"language":"de-DE"},"privacy":{"resistFingerprinting":true}}"#,
        )
        .unwrap();
        assert!(env.is_gecko());
        assert!(env.resists_fingerprinting());
        assert_eq!(env.navigator.language.as_deref(), Some("de-DE"));
        assert!(env.navigator.vendor.is_none());
    }

    #[test]
    fn test_invalid_json_is_an_environment_error() {
        assert!(matches!(
            Environment::from_json("{nope"),
            Err(SigilError::Environment(_))
        ));
    }

    #[test]
    fn test_sample_round_trips_through_json() {
        let sample = Environment::sample();
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(Environment::from_json(&json).unwrap(), sample);
    }

    #[tokio::test]
    async fn test_env_probe_reads_from_snapshot() {
        let env = Arc::new(Environment::sample());
        let probe = EnvProbe::new(env, |env: &Environment| {
            Ok(match env.navigator.hardware_concurrency {
                Some(n) => Signal::available(n),
                None => Signal::unavailable(-1),
            })
        });
        assert_eq!(probe.read().await.unwrap(), Signal::available(16u32));
    }
}
