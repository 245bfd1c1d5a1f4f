//! End-to-end engine tests
//!
//! Exercises the full registry -> aggregator -> identity pipeline with
//! synthetic probes, including the completion-order independence property:
//! no matter which probe finishes first, the profile bytes and both
//! identifiers are unchanged.

use std::time::Duration;

use sigil_core::{
    fingerprint, murmur3_32, probe_fn, to_canonical_bytes, ProbeRegistry, Signal, SignalValue,
    HASH_SEED,
};

/// Build a registry of five probes whose completion order is scrambled by
/// per-run delays; values never change.
fn scrambled_registry(run: u64) -> ProbeRegistry {
    let delay = move |slot: u64| {
        // Different run -> different finishing order, same values.
        Duration::from_millis((slot * 7 + run * 13) % 23)
    };

    ProbeRegistry::builder()
        .register(
            "heap",
            probe_fn(move || async move {
                tokio::time::sleep(delay(0)).await;
                Ok(Signal::available(2_190_000_000u64))
            }),
        )
        .register(
            "audio",
            probe_fn(move || async move {
                tokio::time::sleep(delay(1)).await;
                Ok(Signal::available(124.043_687_441_4))
            }),
        )
        .register(
            "gpu",
            probe_fn(move || async move {
                tokio::time::sleep(delay(2)).await;
                Ok(Signal::available(SignalValue::map([
                    ("vendor", SignalValue::from("Acme")),
                    ("renderer", SignalValue::from("Inferno 9000")),
                ])))
            }),
        )
        .register(
            "dnt",
            probe_fn(move || async move {
                tokio::time::sleep(delay(3)).await;
                Ok(Signal::unavailable(-2))
            }),
        )
        .register(
            "tz",
            probe_fn(move || async move {
                tokio::time::sleep(delay(4)).await;
                Ok(Signal::fallback(1, "UTC+2"))
            }),
        )
        .build()
        .unwrap()
}

const STABLE: &[&str] = &["gpu", "heap", "audio"];

#[tokio::test]
async fn identifiers_are_independent_of_completion_order() {
    let baseline = fingerprint(&scrambled_registry(0), STABLE, None)
        .await
        .unwrap();
    let baseline_bytes = to_canonical_bytes(&baseline.profile).unwrap();

    for run in 1..6 {
        let result = fingerprint(&scrambled_registry(run), STABLE, None)
            .await
            .unwrap();

        assert_eq!(result.unique_id, baseline.unique_id, "run {run}");
        assert_eq!(result.browser_id, baseline.browser_id, "run {run}");
        assert_eq!(
            to_canonical_bytes(&result.profile).unwrap(),
            baseline_bytes,
            "run {run}"
        );
    }
}

#[tokio::test]
async fn profile_key_order_is_registry_order() {
    let result = fingerprint(&scrambled_registry(3), STABLE, None)
        .await
        .unwrap();
    let names: Vec<&str> = result.profile.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["heap", "audio", "gpu", "dnt", "tz"]);
}

#[tokio::test]
async fn identifiers_match_manual_hashing() {
    let result = fingerprint(&scrambled_registry(0), STABLE, None)
        .await
        .unwrap();

    let profile_bytes = to_canonical_bytes(&result.profile).unwrap();
    assert_eq!(result.unique_id, murmur3_32(&profile_bytes, HASH_SEED));

    let subset = result.profile.project(STABLE).unwrap();
    let subset_bytes = to_canonical_bytes(&subset).unwrap();
    assert_eq!(result.browser_id, murmur3_32(&subset_bytes, HASH_SEED));
}

#[tokio::test]
async fn concurrent_engine_invocations_are_independent() {
    let registry_a = scrambled_registry(1);
    let registry_b = scrambled_registry(2);

    let (a, b) = tokio::join!(
        fingerprint(&registry_a, STABLE, None),
        fingerprint(&registry_b, STABLE, None),
    );

    let (a, b) = (a.unwrap(), b.unwrap());
    assert_eq!(a.unique_id, b.unique_id);
    assert_eq!(a.browser_id, b.browser_id);
}
