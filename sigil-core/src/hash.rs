//! 32-bit mixing hash (MurmurHash3 x86-32)
//!
//! Pure and total over all finite byte sequences: identical input bytes and
//! seed always yield the same 32-bit value, on every platform. Not
//! collision-resistant against adversarial input - this is an identity hash,
//! not a cryptographic one.

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Hash `data` with the given seed using MurmurHash3 x86-32.
///
/// The input is consumed in 4-byte little-endian blocks with a
/// multiply-rotate-xor step per block, the 0-3 remaining bytes go through the
/// tail path, and the running state is finalized with a length-mixed
/// avalanche sequence.
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    let mut h = seed;

    let mut blocks = data.chunks_exact(4);
    for block in blocks.by_ref() {
        let mut k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        k = k.wrapping_mul(C1);
        k = k.rotate_left(15);
        k = k.wrapping_mul(C2);

        h ^= k;
        h = h.rotate_left(13);
        h = h.wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let mut k = 0u32;
        for (i, &byte) in tail.iter().enumerate() {
            k ^= u32::from(byte) << (8 * i);
        }
        k = k.wrapping_mul(C1);
        k = k.rotate_left(15);
        k = k.wrapping_mul(C2);
        h ^= k;
    }

    h ^= data.len() as u32;
    fmix32(h)
}

/// Finalization avalanche: xor-shift/multiply sequence
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EMPTY_INPUT_HASH, HASH_SEED};

    #[test]
    fn test_empty_input_vector() {
        // Documented reference vector for the system-wide seed.
        assert_eq!(murmur3_32(b"", HASH_SEED), EMPTY_INPUT_HASH);
        assert_eq!(murmur3_32(b"", HASH_SEED), 1_046_229_728);
    }

    #[test]
    fn test_reference_vectors() {
        // Published MurmurHash3 x86-32 vectors.
        assert_eq!(murmur3_32(b"", 0), 0);
        assert_eq!(murmur3_32(b"", 1), 0x514e_28b7);

        // Vectors derived from the reference algorithm with seed 420,
        // covering tail lengths 1-3 and the full-block path.
        assert_eq!(murmur3_32(b"a", 420), 3_541_438_897);
        assert_eq!(murmur3_32(b"ab", 420), 861_652_921);
        assert_eq!(murmur3_32(b"abc", 420), 3_779_314_394);
        assert_eq!(murmur3_32(b"abcd", 420), 2_079_392_781);
        assert_eq!(murmur3_32(b"abcde", 420), 1_048_914_435);
        assert_eq!(murmur3_32(b"hello world", 420), 2_235_872_577);
        assert_eq!(
            murmur3_32(b"The quick brown fox jumps over the lazy dog", 420),
            3_839_880_164
        );
    }

    #[test]
    fn test_deterministic_across_calls() {
        let input = b"profile bytes";
        let first = murmur3_32(input, HASH_SEED);
        for _ in 0..100 {
            assert_eq!(murmur3_32(input, HASH_SEED), first);
        }
    }

    #[test]
    fn test_no_sign_extension() {
        // The output is a full 32-bit unsigned value; vectors above
        // the i32 range must come through unchanged.
        assert!(murmur3_32(b"a", 420) > i32::MAX as u32);
    }

    #[test]
    fn test_seed_changes_output() {
        assert_ne!(murmur3_32(b"hello world", 420), murmur3_32(b"hello world", 421));
    }

    #[test]
    fn test_avalanche() {
        // Flip one bit in each of 100 near-identical inputs and check that
        // on average about half of the 32 output bits change.
        let mut differing_bits = 0u32;
        for i in 0..100usize {
            let base: Vec<u8> = (0..32).map(|j| ((i * 7 + j) % 256) as u8).collect();
            let mut flipped = base.clone();
            flipped[i % 32] ^= 1;

            let a = murmur3_32(&base, HASH_SEED);
            let b = murmur3_32(&flipped, HASH_SEED);
            differing_bits += (a ^ b).count_ones();
        }

        let average = f64::from(differing_bits) / 100.0 / 32.0;
        assert!(
            (0.4..=0.6).contains(&average),
            "avalanche average {} outside tolerance",
            average
        );
    }
}
