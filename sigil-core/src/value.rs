//! Signal payload values
//!
//! A probe's payload is one of a small, closed set of JSON-compatible shapes.
//! Modeling them as a sum type keeps canonical serialization total: every
//! constructible value has exactly one byte representation, with map keys
//! emitted in insertion order.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A signal payload produced by a probe.
///
/// Opaque to the aggregator and identity deriver; the only requirement is
/// that it serializes deterministically for a fixed environment.
#[derive(Debug, Clone, PartialEq)]
pub enum SignalValue {
    /// Explicit null, used by probes that report a suppressed sub-field
    /// (e.g. a masked GPU vendor string) inside an otherwise present payload.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Ordered sequence
    List(Vec<SignalValue>),
    /// Ordered string-keyed mapping; serialized as an object in insertion order
    Map(Vec<(String, SignalValue)>),
}

impl SignalValue {
    /// Build a map value from (key, value) pairs, preserving their order.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<SignalValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a list value from items.
    pub fn list<V, I>(items: I) -> Self
    where
        V: Into<SignalValue>,
        I: IntoIterator<Item = V>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl Serialize for SignalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SignalValue::Null => serializer.serialize_none(),
            SignalValue::Bool(b) => serializer.serialize_bool(*b),
            SignalValue::Int(i) => serializer.serialize_i64(*i),
            SignalValue::Float(f) => {
                // serde_json would silently emit null for NaN/infinity, which
                // would make two distinct payloads canonicalize identically.
                // Reject instead: a non-finite float is an unexpected failure.
                if !f.is_finite() {
                    return Err(serde::ser::Error::custom(
                        "non-finite float in signal value",
                    ));
                }
                serializer.serialize_f64(*f)
            }
            SignalValue::Str(s) => serializer.serialize_str(s),
            SignalValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            SignalValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<bool> for SignalValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for SignalValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for SignalValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for SignalValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u64> for SignalValue {
    fn from(v: u64) -> Self {
        // Heap ceilings and similar counters fit comfortably in i64 range;
        // anything beyond saturates rather than wrapping negative, so an
        // absurd reading can never alias a legitimate small value.
        Self::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for SignalValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for SignalValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for SignalValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<V: Into<SignalValue>> From<Vec<V>> for SignalValue {
    fn from(v: Vec<V>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_json(value: &SignalValue) -> String {
        serde_json::to_string(value).unwrap()
    }

    #[test]
    fn test_scalar_serialization() {
        assert_eq!(to_json(&SignalValue::Null), "null");
        assert_eq!(to_json(&SignalValue::Bool(true)), "true");
        assert_eq!(to_json(&SignalValue::Int(-3)), "-3");
        assert_eq!(to_json(&SignalValue::Float(1.5)), "1.5");
        assert_eq!(to_json(&SignalValue::from("x")), "\"x\"");
    }

    #[test]
    fn test_map_preserves_insertion_order() {
        let value = SignalValue::map([("zeta", 1i64), ("alpha", 2i64)]);
        assert_eq!(to_json(&value), "{\"zeta\":1,\"alpha\":2}");
    }

    #[test]
    fn test_nested_value() {
        let value = SignalValue::map([
            ("langs", SignalValue::list(["en-US", "en"])),
            ("mobile", SignalValue::Bool(false)),
        ]);
        assert_eq!(to_json(&value), "{\"langs\":[\"en-US\",\"en\"],\"mobile\":false}");
    }

    #[test]
    fn test_u64_conversion_saturates_instead_of_wrapping() {
        assert_eq!(
            SignalValue::from(i64::MAX as u64),
            SignalValue::Int(i64::MAX)
        );
        assert_eq!(SignalValue::from(u64::MAX), SignalValue::Int(i64::MAX));
        assert_eq!(
            SignalValue::from(2_248_146_944u64),
            SignalValue::Int(2_248_146_944)
        );
    }

    #[test]
    fn test_non_finite_float_is_an_error() {
        assert!(serde_json::to_string(&SignalValue::Float(f64::NAN)).is_err());
        assert!(serde_json::to_string(&SignalValue::Float(f64::INFINITY)).is_err());
    }
}
