//! Probe results
//!
//! A probe's outcome is a status code plus a payload. Status `0` means the
//! signal was read from its primary source; a positive code means the value
//! was reconstructed from a secondary source; a negative code means the
//! signal is unavailable, with the specific code saying why (API absent,
//! deliberately suppressed by a privacy mode, present but empty, ...).
//!
//! Rather than multiplexing all of that through a bare integer, the states
//! are a tagged variant. The wire encoding is still the two-element
//! `[status, value]` pair, so status transitions remain part of the hashed
//! profile - a signal flipping from available to blocked is itself signal.

use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::value::SignalValue;

/// Outcome of a single probe read.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Signal read from its primary source. Encodes as `[0, value]`.
    Available(SignalValue),
    /// Signal reconstructed from a secondary source (e.g. a timezone name
    /// rebuilt from the UTC offset). Encodes as `[code, value]`, code > 0.
    Fallback { code: i32, value: SignalValue },
    /// Signal unavailable. Encodes as `[code, null]`, code < 0. Each probe
    /// defines its own closed set of negative codes.
    Unavailable { code: i32 },
}

impl Signal {
    /// Signal obtained from its primary source.
    pub fn available(value: impl Into<SignalValue>) -> Self {
        Self::Available(value.into())
    }

    /// Signal obtained from a secondary source; `code` must be positive.
    pub fn fallback(code: i32, value: impl Into<SignalValue>) -> Self {
        assert!(code > 0, "fallback status code must be positive");
        Self::Fallback {
            code,
            value: value.into(),
        }
    }

    /// Signal unavailable; `code` must be negative.
    pub fn unavailable(code: i32) -> Self {
        assert!(code < 0, "unavailability status code must be negative");
        Self::Unavailable { code }
    }

    /// The raw status code: `0`, positive, or negative.
    pub fn status(&self) -> i32 {
        match self {
            Signal::Available(_) => 0,
            Signal::Fallback { code, .. } => *code,
            Signal::Unavailable { code } => *code,
        }
    }

    /// The payload, if the signal carries one.
    pub fn value(&self) -> Option<&SignalValue> {
        match self {
            Signal::Available(value) | Signal::Fallback { value, .. } => Some(value),
            Signal::Unavailable { .. } => None,
        }
    }

    /// True unless the signal is unavailable.
    pub fn is_available(&self) -> bool {
        !matches!(self, Signal::Unavailable { .. })
    }
}

impl Serialize for Signal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.status())?;
        match self.value() {
            Some(value) => pair.serialize_element(value)?,
            None => pair.serialize_element(&Option::<SignalValue>::None)?,
        }
        pair.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_json(signal: &Signal) -> String {
        serde_json::to_string(signal).unwrap()
    }

    #[test]
    fn test_available_wire_format() {
        assert_eq!(to_json(&Signal::available("x")), "[0,\"x\"]");
        assert_eq!(to_json(&Signal::available(1i64)), "[0,1]");
    }

    #[test]
    fn test_fallback_wire_format() {
        assert_eq!(to_json(&Signal::fallback(1, "UTC+2")), "[1,\"UTC+2\"]");
    }

    #[test]
    fn test_unavailable_wire_format() {
        assert_eq!(to_json(&Signal::unavailable(-2)), "[-2,null]");
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(Signal::available(true).status(), 0);
        assert_eq!(Signal::fallback(1, 7i64).status(), 1);
        assert_eq!(Signal::unavailable(-3).status(), -3);
    }

    #[test]
    #[should_panic(expected = "negative")]
    fn test_unavailable_rejects_non_negative_code() {
        let _ = Signal::unavailable(0);
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn test_fallback_rejects_non_positive_code() {
        let _ = Signal::fallback(-1, 0i64);
    }
}
