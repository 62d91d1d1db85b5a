//! MinHash over 32-bit shingle hashes with explicit linear row functions.
use rand::{Rng, SeedableRng};

use crate::HASH_PRIME;

/// Row value reported when there are no features to take a minimum over.
pub const EMPTY_ROW: u64 = HASH_PRIME - 1;

/// Coefficients `(a, b)` of one row function `h(x) = (a*x + b) mod HASH_PRIME`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HashCoefficient {
    pub a: u64,
    pub b: u64,
}

impl HashCoefficient {
    pub const fn new(a: u64, b: u64) -> Self {
        Self { a, b }
    }

    /// Checks that both components lie in `[1, HASH_PRIME)`.
    pub const fn is_valid(&self) -> bool {
        self.a >= 1 && self.a < HASH_PRIME && self.b >= 1 && self.b < HASH_PRIME
    }

    #[inline(always)]
    pub const fn apply(&self, x: u32) -> u64 {
        // a < 2^31 and x < 2^32, so the product fits in 63 bits.
        (self.a * x as u64 + self.b) % HASH_PRIME
    }
}

/// Draws `count` coefficient pairs uniformly from `[1, HASH_PRIME)`.
///
/// Signatures are only comparable when they were computed with the same
/// coefficients, so the result is meant to be generated once and shared.
pub fn random_coefficients<R>(count: usize, rng: &mut R) -> Vec<HashCoefficient>
where
    R: Rng + ?Sized,
{
    (0..count)
        .map(|_| HashCoefficient::new(rng.gen_range(1..HASH_PRIME), rng.gen_range(1..HASH_PRIME)))
        .collect()
}

/// Same as [`random_coefficients`], driven by a SplitMix64 generator seeded with `seed`.
///
/// # Examples
///
/// ```
/// use lsh::minhash::coefficients_from_seed;
///
/// let x = coefficients_from_seed(8, 42);
/// let y = coefficients_from_seed(8, 42);
/// assert_eq!(x, y);
/// assert!(x.iter().all(|c| c.is_valid()));
/// ```
pub fn coefficients_from_seed(count: usize, seed: u64) -> Vec<HashCoefficient> {
    let mut rng = rand_xoshiro::SplitMix64::seed_from_u64(seed);
    random_coefficients(count, &mut rng)
}

pub struct MinHasher {
    coefficients: Vec<HashCoefficient>,
}

impl MinHasher {
    pub fn new(coefficients: Vec<HashCoefficient>) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[HashCoefficient] {
        &self.coefficients
    }

    pub fn iter<'a>(&'a self, feats: &'a [u32]) -> MinHashIter<'a> {
        MinHashIter {
            feats,
            coefficients: self.coefficients.iter(),
        }
    }

    /// Computes the full signature of `feats`, one row per coefficient.
    pub fn signature(&self, feats: &[u32]) -> Vec<u64> {
        self.iter(feats).collect()
    }
}

pub struct MinHashIter<'a> {
    feats: &'a [u32],
    coefficients: std::slice::Iter<'a, HashCoefficient>,
}

impl<'a> Iterator for MinHashIter<'a> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let coefficient = self.coefficients.next()?;
        Some(
            self.feats
                .iter()
                .map(|&x| coefficient.apply(x))
                .min()
                .unwrap_or(EMPTY_ROW),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.coefficients.size_hint()
    }
}

impl<'a> ExactSizeIterator for MinHashIter<'a> {}
