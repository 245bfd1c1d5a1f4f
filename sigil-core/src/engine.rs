//! Engine entry point
//!
//! One asynchronous operation: collect the profile, derive both
//! identifiers, return everything as a JSON-serializable result. On any
//! unexpected failure the supplied logger's error path is invoked exactly
//! once and the same error is propagated to the caller. Expected
//! unavailability (negative status codes) is part of normal, successful
//! aggregation and is never logged.
//!
//! Separate invocations share no state, so concurrent engine calls are
//! independent provided the probes themselves are reentrant.

use serde::Serialize;
use tracing::error;

use sigil_error::{Result, SigilError};

use crate::aggregator::collect_profile;
use crate::identity::derive_identities;
use crate::profile::ProfileRecord;
use crate::registry::ProbeRegistry;

/// Error sink consulted when the fail-fast path triggers.
pub trait FingerprintLogger: Send + Sync {
    fn error(&self, err: &SigilError);
}

/// Default logger: forwards to the `tracing` error stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl FingerprintLogger for TracingLogger {
    fn error(&self, err: &SigilError) {
        error!("fingerprint failed: {err}");
    }
}

/// Result of one engine invocation. Immutable, fully JSON-serializable.
#[derive(Debug, Clone, Serialize)]
pub struct FingerprintResult {
    /// Volatile identifier - sensitive to the entire profile.
    #[serde(rename = "uniqueId")]
    pub unique_id: u32,
    /// Stable identifier - restricted to the curated low-volatility subset.
    #[serde(rename = "browserId")]
    pub browser_id: u32,
    /// The raw profile, untouched.
    pub profile: ProfileRecord,
}

/// Run the engine: aggregate all probes, then derive both identifiers.
///
/// `stable_subset` is the curated list of low-volatility probe names, in
/// hashing order; it must be a subset of the registry's names. When
/// `logger` is `None`, errors go to the standard diagnostic stream via
/// [`TracingLogger`].
pub async fn fingerprint(
    registry: &ProbeRegistry,
    stable_subset: &[&str],
    logger: Option<&dyn FingerprintLogger>,
) -> Result<FingerprintResult> {
    let fallback = TracingLogger;
    let logger = logger.unwrap_or(&fallback);

    match run(registry, stable_subset).await {
        Ok(result) => Ok(result),
        Err(err) => {
            logger.error(&err);
            Err(err)
        }
    }
}

async fn run(registry: &ProbeRegistry, stable_subset: &[&str]) -> Result<FingerprintResult> {
    let profile = collect_profile(registry).await?;
    let (unique_id, browser_id) = derive_identities(&profile, stable_subset)?;
    Ok(FingerprintResult {
        unique_id,
        browser_id,
        profile,
    })
}
