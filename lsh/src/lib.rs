//! Hashing primitives for MinHash signatures and banded LSH buckets.
pub mod banding;
pub mod minhash;

/// Prime modulus of the MinHash row functions.
pub const HASH_PRIME: u64 = 2038074743;

/// Multiplier applied to every signature row before it is folded into a band bucket.
pub const LARGE_PRIME: u64 = 433494437;

/// Similarity at which the candidate-pair probability curve is steepest.
pub const THRESHOLD: f64 = 0.5;

const FNV_OFFSET_BASIS: u32 = 0x811c9dc5;
const FNV_PRIME: u32 = 0x01000193;

/// Computes the 32-bit FNV-1a hash of `bytes`.
///
/// # Examples
///
/// ```
/// assert_eq!(lsh::fnv1a_32(b""), 0x811c9dc5);
/// assert_eq!(lsh::fnv1a_32(b"a"), 0xe40c292c);
/// ```
#[inline(always)]
pub fn fnv1a_32<B>(bytes: B) -> u32
where
    B: AsRef<[u8]>,
{
    bytes.as_ref().iter().fold(FNV_OFFSET_BASIS, |h, &b| {
        (h ^ u32::from(b)).wrapping_mul(FNV_PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_32_known_vectors() {
        assert_eq!(fnv1a_32(b"foobar"), 0xbf9cf968);
        assert_eq!(fnv1a_32("foobar".to_string()), 0xbf9cf968);
    }
}
