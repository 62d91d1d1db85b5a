//! Banded LSH over MinHash signatures.
use crate::{LARGE_PRIME, THRESHOLD};

/// Computes the number of rows per band for `bands` bands.
///
/// The candidate-pair probability curve `1 - (1 - s^r)^b` rises most steeply
/// around `s = (1/b)^(1/r)`. Fixing that point at [`THRESHOLD`] gives
/// `r = ln(1/b) / ln(THRESHOLD)`, rounded up.
///
/// A single band yields zero rows, which is why at least two bands are needed.
pub fn rows_per_band(bands: usize) -> usize {
    // Negative zero for a single band saturates to 0.
    ((1. / bands as f64).ln() / THRESHOLD.ln()).ceil() as usize
}

/// Computes the signature length `rows_per_band(bands) * bands`.
///
/// # Examples
///
/// ```
/// use lsh::banding::signature_size;
///
/// assert_eq!(signature_size(2), 2);
/// assert_eq!(signature_size(4), 8);
/// assert_eq!(signature_size(5), 15);
/// ```
pub fn signature_size(bands: usize) -> usize {
    rows_per_band(bands) * bands
}

/// Folds each band of a signature into a single bucket in `[0, bucket_count)`.
///
/// Every band uses the same row hash, but buckets are kept per band index, so
/// signatures sharing rows in different bands do not collide. Rows inside a
/// band are summed, so distinct row combinations with equal sums share a
/// bucket; this only adds candidate pairs and never hides one.
#[derive(Clone, Copy, Debug)]
pub struct BandHasher {
    bands: usize,
    rows: usize,
    bucket_count: u64,
}

impl BandHasher {
    pub fn new(bands: usize, bucket_count: u64) -> Self {
        assert!(bands >= 2);
        assert!(bucket_count >= 1);
        Self {
            bands,
            rows: rows_per_band(bands),
            bucket_count,
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn signature_size(&self) -> usize {
        self.rows * self.bands
    }

    /// Computes one bucket per band. `signature` must hold exactly
    /// [`Self::signature_size`] rows.
    pub fn buckets(&self, signature: &[u64]) -> Vec<u64> {
        assert_eq!(signature.len(), self.signature_size());
        let m = u128::from(self.bucket_count);
        signature
            .chunks_exact(self.rows)
            .map(|band| {
                band.iter().fold(0u64, |acc, &row| {
                    let h = u128::from(row) * u128::from(LARGE_PRIME);
                    ((u128::from(acc) + h) % m) as u64
                })
            })
            .collect()
    }
}

/// Checks if two bucket vectors agree on at least one band.
pub fn shares_bucket(lhs: &[u64], rhs: &[u64]) -> bool {
    lhs.iter().zip(rhs.iter()).any(|(x, y)| x == y)
}
