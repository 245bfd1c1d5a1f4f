//! Profile records
//!
//! A profile is the complete, ordered collection of probe results for one
//! engine invocation: exactly one entry per registered probe, in registry
//! order, never partially populated, never mutated after construction.

use serde::ser::{Serialize, SerializeMap, Serializer};

use sigil_error::{Result, SigilError};

use crate::signal::Signal;

/// Ordered mapping from probe name to its signal for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    entries: Vec<(String, Signal)>,
}

impl ProfileRecord {
    /// Construction is reserved for the aggregator, which guarantees one
    /// entry per registered probe.
    pub(crate) fn from_entries(entries: Vec<(String, Signal)>) -> Self {
        Self { entries }
    }

    /// Look up a signal by probe name.
    pub fn get(&self, name: &str) -> Option<&Signal> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, signal)| signal)
    }

    /// Number of entries (equals the registry size).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (name, signal) pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Signal)> {
        self.entries
            .iter()
            .map(|(name, signal)| (name.as_str(), signal))
    }

    /// Project the profile onto a curated name list, in the list's order
    /// (not the registry's). A name with no entry is a construction error:
    /// the stable subset must be a subset of registry names.
    pub fn project<'a>(&'a self, names: &[&str]) -> Result<Vec<&'a Signal>> {
        names
            .iter()
            .map(|name| {
                self.get(name)
                    .ok_or_else(|| SigilError::UnknownStableComponent(name.to_string()))
            })
            .collect()
    }
}

impl Serialize for ProfileRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, signal) in &self.entries {
            map.serialize_entry(name, signal)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> ProfileRecord {
        ProfileRecord::from_entries(vec![
            ("a".to_string(), Signal::available(1i64)),
            ("b".to_string(), Signal::unavailable(-1)),
            ("c".to_string(), Signal::available("x")),
        ])
    }

    #[test]
    fn test_serializes_in_registry_order() {
        let json = serde_json::to_string(&test_profile()).unwrap();
        assert_eq!(json, "{\"a\":[0,1],\"b\":[-1,null],\"c\":[0,\"x\"]}");
    }

    #[test]
    fn test_projection_uses_subset_order() {
        let profile = test_profile();
        let subset = profile.project(&["c", "a"]).unwrap();
        let json = serde_json::to_string(&subset).unwrap();
        assert_eq!(json, "[[0,\"x\"],[0,1]]");
    }

    #[test]
    fn test_projection_of_unknown_name_fails() {
        let profile = test_profile();
        match profile.project(&["c", "ghost"]) {
            Err(SigilError::UnknownStableComponent(name)) => assert_eq!(name, "ghost"),
            other => panic!("expected UnknownStableComponent, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_get() {
        let profile = test_profile();
        assert_eq!(profile.get("b"), Some(&Signal::unavailable(-1)));
        assert_eq!(profile.get("missing"), None);
    }
}
