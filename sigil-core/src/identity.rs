//! Identity derivation
//!
//! Condenses a profile into two 32-bit identifiers:
//!
//! - the **volatile** identifier hashes the entire profile and changes
//!   whenever any signal (status or value) changes;
//! - the **stable** identifier hashes only a curated subset of
//!   low-volatility signals, in the subset's fixed order, and is intended to
//!   survive minor environment changes.
//!
//! Both hashes cover the full `[status, value]` pairs: a status code
//! flipping (say, a privacy mode starting to suppress a signal) is itself
//! identifying information. No branching on probe-specific semantics
//! happens here.

use tracing::trace;

use sigil_error::Result;

use crate::canonical::to_canonical_bytes;
use crate::constants::HASH_SEED;
use crate::hash::murmur3_32;
use crate::profile::ProfileRecord;

/// Derive `(volatile_id, stable_id)` from a profile.
///
/// `stable_subset` names the low-volatility probes, in hashing order; every
/// name must exist in the profile.
pub fn derive_identities(profile: &ProfileRecord, stable_subset: &[&str]) -> Result<(u32, u32)> {
    let profile_bytes = to_canonical_bytes(profile)?;
    let volatile_id = murmur3_32(&profile_bytes, HASH_SEED);

    let subset = profile.project(stable_subset)?;
    let subset_bytes = to_canonical_bytes(&subset)?;
    let stable_id = murmur3_32(&subset_bytes, HASH_SEED);

    trace!(
        profile_bytes = profile_bytes.len(),
        subset_bytes = subset_bytes.len(),
        "derived identities"
    );
    Ok((volatile_id, stable_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::collect_profile;
    use crate::probe::probe_fn;
    use crate::registry::ProbeRegistry;
    use crate::signal::Signal;

    async fn abc_profile() -> ProfileRecord {
        let registry = ProbeRegistry::builder()
            .register("a", probe_fn(|| async { Ok(Signal::available(1i64)) }))
            .register("b", probe_fn(|| async { Ok(Signal::unavailable(-1)) }))
            .register("c", probe_fn(|| async { Ok(Signal::available("x")) }))
            .build()
            .unwrap();
        collect_profile(&registry).await.unwrap()
    }

    #[tokio::test]
    async fn test_stable_subset_canonicalizes_in_subset_order() {
        let profile = abc_profile().await;

        // The stable hash must cover exactly these bytes: the ["c", "a"]
        // projection in subset order, not registry order.
        let subset = profile.project(&["c", "a"]).unwrap();
        assert_eq!(to_canonical_bytes(&subset).unwrap(), b"[[0,\"x\"],[0,1]]");

        let (_, stable_id) = derive_identities(&profile, &["c", "a"]).unwrap();
        assert_eq!(stable_id, murmur3_32(b"[[0,\"x\"],[0,1]]", HASH_SEED));
        // Reference value from the hash engine for that byte sequence.
        assert_eq!(stable_id, 901_195_600);
    }

    #[tokio::test]
    async fn test_subset_order_changes_stable_id() {
        let profile = abc_profile().await;
        let (_, forward) = derive_identities(&profile, &["c", "a"]).unwrap();
        let (_, reversed) = derive_identities(&profile, &["a", "c"]).unwrap();
        assert_ne!(forward, reversed);
    }

    #[tokio::test]
    async fn test_volatile_id_covers_whole_profile() {
        let profile = abc_profile().await;
        let bytes = to_canonical_bytes(&profile).unwrap();
        let (volatile_id, _) = derive_identities(&profile, &["a"]).unwrap();
        assert_eq!(volatile_id, murmur3_32(&bytes, HASH_SEED));
    }

    #[tokio::test]
    async fn test_unknown_subset_name_is_an_error() {
        let profile = abc_profile().await;
        assert!(derive_identities(&profile, &["a", "ghost"]).is_err());
    }

    #[tokio::test]
    async fn test_derivation_is_deterministic() {
        let profile = abc_profile().await;
        let first = derive_identities(&profile, &["c", "a"]).unwrap();
        for _ in 0..10 {
            assert_eq!(derive_identities(&profile, &["c", "a"]).unwrap(), first);
        }
    }
}
