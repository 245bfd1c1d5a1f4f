//! The probe contract
//!
//! A probe is a zero-argument asynchronous capability producing one
//! [`Signal`]. Probes are supplied by collaborators; the core depends only
//! on this trait. Two rules:
//!
//! - ordinary environment variation ("this API doesn't exist here") must be
//!   reported as `Ok(Signal::Unavailable { .. })`, never as `Err`;
//! - `Err` is reserved for unexpected failures and aborts the entire
//!   aggregation.
//!
//! Probes must be stateless between invocations and must not depend on
//! another probe's result. Any transient resource a probe allocates is its
//! own to clean up before resolving.

use std::future::Future;

use async_trait::async_trait;
use sigil_error::Result;

use crate::signal::Signal;

/// A single environment-signal reader.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Read the signal from the environment.
    async fn read(&self) -> Result<Signal>;
}

/// Adapter turning an async closure into a [`Probe`].
///
/// Covers one-off inline probes that don't warrant a named type, mirroring
/// how cheap signals are declared directly at registry assembly.
pub struct FnProbe<F>(F);

/// Wrap an async closure as a probe.
pub fn probe_fn<F, Fut>(f: F) -> FnProbe<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<Signal>> + Send,
{
    FnProbe(f)
}

#[async_trait]
impl<F, Fut> Probe for FnProbe<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<Signal>> + Send,
{
    async fn read(&self) -> Result<Signal> {
        (self.0)().await
    }
}
