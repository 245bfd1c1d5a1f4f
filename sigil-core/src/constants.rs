//! System-wide constants

/// Fixed seed used for every identity hash in the system.
///
/// Changing this value changes every derived identifier, so it is part of
/// the compatibility surface between builds.
pub const HASH_SEED: u32 = 420;

/// `murmur3_32(b"", HASH_SEED)` - documented reference vector.
///
/// Every conformant implementation of the hash engine must produce this
/// exact value for empty input under the system seed.
pub const EMPTY_INPUT_HASH: u32 = 1_046_229_728;
