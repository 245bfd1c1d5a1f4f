//! Sigil Probe Library
//!
//! Concrete environment-signal probes satisfying the `sigil-core` probe
//! contract, plus the registry build variants that assemble them.
//!
//! Every probe reads an explicitly injected [`Environment`] snapshot rather
//! than ambient global state (see `environment`), and reports expected
//! unavailability through its own closed set of negative status codes:
//! `-1`-style "the API doesn't exist here", `-2`-style "a privacy mode
//! suppresses it", and so on, per probe module.
//!
//! # Modules
//!
//! - `environment` - the injected capability object and probe adapter
//! - `navigator` - navigator-level fields (memory, concurrency, languages...)
//! - `display` - screen geometry and media-query preferences
//! - `runtime` - heap ceiling, timing jitter, timezone, capability checks
//! - `render` - canvas and WebGL fingerprints
//! - `audio` - offline audio render and speech-synthesis voices
//! - `math` - math-library constant-fold battery
//! - `variants` - registry assembly and the curated stable subset

pub mod audio;
pub mod display;
pub mod environment;
pub mod math;
pub mod navigator;
pub mod render;
pub mod runtime;
pub mod variants;

pub use environment::{
    AudioInfo, BrandVersion, BrowserFamily, CanvasInfo, EnvProbe, Environment, GraphicsInfo,
    NavigatorInfo, PerformanceInfo, PrivacyInfo, RuntimeInfo, ScreenInfo, UserAgentData,
    VoiceInfo, WebglInfo,
};
pub use variants::{minimal_registry, standard_registry, STABLE_COMPONENTS};
