//! Probe aggregation
//!
//! Runs every registered probe concurrently and assembles the results into
//! a [`ProfileRecord`] whose key order is the registry order, regardless of
//! which probe finishes first.
//!
//! Failure policy is fail-fast: a single probe returning `Err` invalidates
//! the whole profile for this invocation - no partial record is ever
//! produced. Probes still in flight when the first error lands are dropped,
//! not cancelled through any probe-side hook; a probe holding external
//! resources at that point leaks them. There are no per-probe timeouts, so
//! a hanging probe hangs the aggregation.

use futures::future;
use tracing::{debug, trace};

use sigil_error::{Result, SigilError};

use crate::profile::ProfileRecord;
use crate::registry::ProbeRegistry;

/// Invoke every probe in the registry concurrently and zip the results back
/// onto the registry's name order.
pub async fn collect_profile(registry: &ProbeRegistry) -> Result<ProfileRecord> {
    // Snapshot the order first; completion order must never leak into the
    // profile.
    let names: Vec<String> = registry.names().map(str::to_owned).collect();
    trace!("launching {} probes", names.len());

    let reads = registry.iter().map(|(name, probe)| {
        let name = name.to_owned();
        let probe = probe.clone();
        async move {
            probe.read().await.map_err(|err| SigilError::ProbeFailed {
                name,
                reason: err.to_string(),
            })
        }
    });

    // Unbounded fan-out; try_join_all short-circuits on the first Err.
    let signals = future::try_join_all(reads).await?;

    debug!("collected {} signals", signals.len());
    Ok(ProfileRecord::from_entries(
        names.into_iter().zip(signals).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::probe_fn;
    use crate::signal::Signal;
    use std::time::Duration;

    #[tokio::test]
    async fn test_profile_order_matches_registry_not_completion() {
        // The first-registered probe resolves last; order must still be
        // registration order.
        let registry = ProbeRegistry::builder()
            .register(
                "slow",
                probe_fn(|| async {
                    tokio::time::sleep(Duration::from_millis(30)).await;
                    Ok(Signal::available("tortoise"))
                }),
            )
            .register(
                "medium",
                probe_fn(|| async {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    Ok(Signal::available("middle"))
                }),
            )
            .register("fast", probe_fn(|| async { Ok(Signal::available("hare")) }))
            .build()
            .unwrap();

        let profile = collect_profile(&registry).await.unwrap();
        let names: Vec<&str> = profile.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["slow", "medium", "fast"]);
    }

    #[tokio::test]
    async fn test_negative_status_is_not_a_failure() {
        let registry = ProbeRegistry::builder()
            .register("present", probe_fn(|| async { Ok(Signal::available(7i64)) }))
            .register("absent", probe_fn(|| async { Ok(Signal::unavailable(-1)) }))
            .build()
            .unwrap();

        let profile = collect_profile(&registry).await.unwrap();
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.get("absent"), Some(&Signal::unavailable(-1)));
    }

    #[tokio::test]
    async fn test_one_failing_probe_fails_the_whole_aggregation() {
        let registry = ProbeRegistry::builder()
            .register("good", probe_fn(|| async { Ok(Signal::available(1i64)) }))
            .register(
                "broken",
                probe_fn(|| async { Err(SigilError::generic("scratch surface lost")) }),
            )
            .register("also-good", probe_fn(|| async { Ok(Signal::available(2i64)) }))
            .build()
            .unwrap();

        match collect_profile(&registry).await {
            Err(SigilError::ProbeFailed { name, reason }) => {
                assert_eq!(name, "broken");
                assert!(reason.contains("scratch surface lost"));
            }
            other => panic!("expected ProbeFailed, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let registry = ProbeRegistry::builder()
            .register("a", probe_fn(|| async { Ok(Signal::available(1i64)) }))
            .register("b", probe_fn(|| async { Ok(Signal::unavailable(-2)) }))
            .build()
            .unwrap();

        let first = collect_profile(&registry).await.unwrap();
        let second = collect_profile(&registry).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}
