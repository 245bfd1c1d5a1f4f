//! Probe registry
//!
//! An ordered, duplicate-free declaration of (name, probe) pairs. The
//! registry performs no execution - it is assembled once per build variant
//! and handed to the aggregator, whose output preserves this order exactly.
//!
//! Duplicate names are a programming error, so construction fails fast at
//! `build()` rather than surfacing anything at invocation time.

use std::collections::HashSet;
use std::sync::Arc;

use sigil_error::{Result, SigilError};

use crate::probe::Probe;

/// Ordered mapping from stable probe names to probes.
pub struct ProbeRegistry {
    entries: Vec<(String, Arc<dyn Probe>)>,
}

impl ProbeRegistry {
    /// Start building a registry.
    pub fn builder() -> ProbeRegistryBuilder {
        ProbeRegistryBuilder {
            entries: Vec::new(),
        }
    }

    /// Number of registered probes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Probe names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// (name, probe) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Probe>)> {
        self.entries
            .iter()
            .map(|(name, probe)| (name.as_str(), probe))
    }

    /// Whether a probe with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }
}

impl std::fmt::Debug for ProbeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`ProbeRegistry`].
pub struct ProbeRegistryBuilder {
    entries: Vec<(String, Arc<dyn Probe>)>,
}

impl ProbeRegistryBuilder {
    /// Register a probe under a stable name. Order of registration is the
    /// order of the resulting profile.
    pub fn register(mut self, name: impl Into<String>, probe: impl Probe + 'static) -> Self {
        self.entries.push((name.into(), Arc::new(probe)));
        self
    }

    /// Register an already-shared probe.
    pub fn register_shared(mut self, name: impl Into<String>, probe: Arc<dyn Probe>) -> Self {
        self.entries.push((name.into(), probe));
        self
    }

    /// Finish construction, rejecting duplicate or empty names.
    pub fn build(self) -> Result<ProbeRegistry> {
        let mut seen = HashSet::new();
        for (name, _) in &self.entries {
            if name.is_empty() {
                return Err(SigilError::EmptyProbeName);
            }
            if !seen.insert(name.as_str()) {
                return Err(SigilError::DuplicateProbe(name.clone()));
            }
        }
        Ok(ProbeRegistry {
            entries: self.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::probe_fn;
    use crate::signal::Signal;

    fn constant_probe(v: i64) -> impl Probe + 'static {
        probe_fn(move || async move { Ok(Signal::available(v)) })
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let registry = ProbeRegistry::builder()
            .register("zeta", constant_probe(1))
            .register("alpha", constant_probe(2))
            .register("mid", constant_probe(3))
            .build()
            .unwrap();

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("mid"));
        assert!(!registry.contains("missing"));
    }

    #[test]
    fn test_duplicate_name_fails_at_construction() {
        let result = ProbeRegistry::builder()
            .register("canvas", constant_probe(1))
            .register("canvas", constant_probe(2))
            .build();

        match result {
            Err(SigilError::DuplicateProbe(name)) => assert_eq!(name, "canvas"),
            other => panic!("expected DuplicateProbe, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_name_fails_at_construction() {
        let result = ProbeRegistry::builder()
            .register("", constant_probe(1))
            .build();
        assert!(matches!(result, Err(SigilError::EmptyProbeName)));
    }
}
