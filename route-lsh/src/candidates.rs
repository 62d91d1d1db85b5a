//! Candidate pairs from bucket vectors.
use hashbrown::HashMap;

/// Checks if two bucket vectors agree on at least one band, i.e., form a candidate pair.
pub fn are_candidates(lhs: &[u64], rhs: &[u64]) -> bool {
    lsh::banding::shares_bucket(lhs, rhs)
}

/// Finds all pairs `(i, j)` with `i < j` whose bucket vectors share a band bucket.
///
/// Candidates still need an exact comparison: a shared bucket is evidence of
/// similarity, not proof.
///
/// # Examples
///
/// ```
/// use route_lsh::candidates::candidate_pairs;
///
/// let buckets = vec![vec![1, 2, 3], vec![4, 2, 6], vec![7, 8, 9], vec![7, 0, 0]];
/// assert_eq!(candidate_pairs(&buckets), vec![(0, 1), (2, 3)]);
/// ```
pub fn candidate_pairs<B>(bucket_vectors: &[B]) -> Vec<(usize, usize)>
where
    B: AsRef<[u64]>,
{
    let mut groups = HashMap::<(usize, u64), Vec<usize>>::new();
    for (i, buckets) in bucket_vectors.iter().enumerate() {
        for (band, &bucket) in buckets.as_ref().iter().enumerate() {
            groups.entry((band, bucket)).or_default().push(i);
        }
    }

    let mut pairs = vec![];
    for ids in groups.values() {
        for (k, &i) in ids.iter().enumerate() {
            pairs.extend(ids[k + 1..].iter().map(|&j| (i, j)));
        }
    }
    pairs.sort_unstable();
    pairs.dedup();
    log::debug!(
        "[candidate_pairs] #tracks={}, #groups={}, #pairs={}",
        bucket_vectors.len(),
        groups.len(),
        pairs.len()
    );
    pairs
}
