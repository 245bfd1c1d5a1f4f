//! Canonicalization
//!
//! Deterministic byte-serialization of profile data prior to hashing:
//! compact JSON with map keys in insertion order and shortest-round-trip
//! float encoding. For a fixed profile the output is byte-identical on
//! every run and platform.

use serde::Serialize;

use sigil_error::Result;

/// Serialize a value into its canonical byte sequence.
///
/// Failure here (e.g. a non-finite float smuggled into a payload) is an
/// unexpected error and aborts identity derivation.
pub fn to_canonical_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Signal;

    #[test]
    fn test_canonical_bytes_are_compact_json() {
        let signal = Signal::available("x");
        assert_eq!(to_canonical_bytes(&signal).unwrap(), b"[0,\"x\"]");
    }

    #[test]
    fn test_canonical_bytes_are_stable() {
        let signal = Signal::fallback(1, vec![1i64, 2, 3]);
        let first = to_canonical_bytes(&signal).unwrap();
        for _ in 0..10 {
            assert_eq!(to_canonical_bytes(&signal).unwrap(), first);
        }
    }
}
