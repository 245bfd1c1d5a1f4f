//! Sigil Core Library
//!
//! Probe-aggregation and identity-derivation engine for device/browser
//! recognition.
//!
//! # Architecture
//!
//! - **Hash engine** (`hash`): deterministic 32-bit MurmurHash3 x86-32
//! - **Signal model** (`signal`, `value`): status-coded probe outcomes over
//!   a closed set of JSON-compatible payload shapes
//! - **Registry** (`registry`): ordered, duplicate-free probe declaration
//! - **Aggregator** (`aggregator`): concurrent fan-out, order-stable
//!   profile assembly, fail-fast on unexpected errors
//! - **Identity deriver** (`identity`): volatile identifier over the whole
//!   profile, stable identifier over a curated subset, both seeded with
//!   [`constants::HASH_SEED`]
//! - **Engine** (`engine`): the single async entry point tying it together
//!
//! Data flows one direction: registry -> aggregator -> profile -> identity
//! deriver -> result. Concrete probes live outside this crate; the core
//! depends only on the [`Probe`] contract.
//!
//! # Example
//!
//! ```no_run
//! use sigil_core::{fingerprint, probe_fn, ProbeRegistry, Signal};
//!
//! # async fn demo() -> sigil_error::Result<()> {
//! let registry = ProbeRegistry::builder()
//!     .register("heap", probe_fn(|| async { Ok(Signal::available(2_190_000_000u64)) }))
//!     .register("dnt", probe_fn(|| async { Ok(Signal::unavailable(-1)) }))
//!     .build()?;
//!
//! let result = fingerprint(&registry, &["heap"], None).await?;
//! println!("{} / {}", result.unique_id, result.browser_id);
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod canonical;
pub mod constants;
pub mod engine;
pub mod hash;
pub mod identity;
pub mod probe;
pub mod profile;
pub mod registry;
pub mod signal;
pub mod value;

// Re-export error types
pub use sigil_error::{Result, SigilError};

// Re-export primary types and operations
pub use aggregator::collect_profile;
pub use canonical::to_canonical_bytes;
pub use constants::{EMPTY_INPUT_HASH, HASH_SEED};
pub use engine::{fingerprint, FingerprintLogger, FingerprintResult, TracingLogger};
pub use hash::murmur3_32;
pub use identity::derive_identities;
pub use probe::{probe_fn, FnProbe, Probe};
pub use profile::ProfileRecord;
pub use registry::{ProbeRegistry, ProbeRegistryBuilder};
pub use signal::Signal;
pub use value::SignalValue;
