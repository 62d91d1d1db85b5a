use lsh::banding::{self, BandHasher};
use lsh::minhash::{self, coefficients_from_seed, HashCoefficient, MinHasher};
use rand::Rng;
use rayon::prelude::*;

use crate::errors::{Result, RouteLshError};
use crate::raster;
use crate::shingling;
use crate::tile::{self, GpsPoint, TileCoordinate, MAX_ZOOM};

/// Validated settings of a [`SignatureCalculator`], before hash coefficients are attached.
///
/// Every process that wants comparable bucket vectors must use the same settings
/// and the same coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalculatorConfig {
    zoom: u32,
    shingle_size: usize,
    bands: usize,
    bucket_count: u64,
}

impl CalculatorConfig {
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `zoom` - Zoom level of the tile grid (at most [`MAX_ZOOM`]).
    /// * `shingle_size` - Number of tiles in a shingle (must be more than 0).
    /// * `bands` - Number of LSH bands (must be at least 2).
    /// * `bucket_count` - Number of buckets per band (must be more than 0).
    pub fn new(zoom: u32, shingle_size: usize, bands: usize, bucket_count: u64) -> Result<Self> {
        if zoom > MAX_ZOOM {
            return Err(RouteLshError::input(format!(
                "Zoom must not exceed {MAX_ZOOM}, got {zoom}."
            )));
        }
        if shingle_size == 0 {
            return Err(RouteLshError::input("Shingle size must not be 0."));
        }
        if bands < 2 {
            return Err(RouteLshError::input(format!(
                "Number of bands must be at least 2, got {bands}."
            )));
        }
        if bucket_count == 0 {
            return Err(RouteLshError::input("Bucket count must not be 0."));
        }
        Ok(Self {
            zoom,
            shingle_size,
            bands,
            bucket_count,
        })
    }

    pub const fn zoom(&self) -> u32 {
        self.zoom
    }

    pub const fn shingle_size(&self) -> usize {
        self.shingle_size
    }

    pub const fn bands(&self) -> usize {
        self.bands
    }

    pub const fn bucket_count(&self) -> u64 {
        self.bucket_count
    }

    /// Gets the number of MinHash rows, i.e., the number of coefficients [`Self::setup`] expects.
    pub fn signature_size(&self) -> usize {
        banding::signature_size(self.bands)
    }

    /// Attaches hash coefficients, producing a calculator ready for use.
    ///
    /// Fails with [`RouteLshError::ConfigMismatch`] if the number of coefficients
    /// differs from [`Self::signature_size`], and with [`RouteLshError::Input`] if a
    /// coefficient lies outside `[1, HASH_PRIME)`.
    pub fn setup(&self, coefficients: Vec<HashCoefficient>) -> Result<SignatureCalculator> {
        let signature_size = self.signature_size();
        if coefficients.len() != signature_size {
            return Err(RouteLshError::config_mismatch(
                signature_size,
                coefficients.len(),
            ));
        }
        if let Some(i) = coefficients.iter().position(|c| !c.is_valid()) {
            return Err(RouteLshError::input(format!(
                "Coefficient {i} is out of range: {:?}.",
                coefficients[i]
            )));
        }
        log::debug!(
            "[CalculatorConfig::setup] zoom={}, shingle_size={}, bands={}, rows={}, bucket_count={}",
            self.zoom,
            self.shingle_size,
            self.bands,
            banding::rows_per_band(self.bands),
            self.bucket_count
        );
        Ok(SignatureCalculator {
            config: *self,
            hasher: MinHasher::new(coefficients),
            banding: BandHasher::new(self.bands, self.bucket_count),
        })
    }

    /// Same as [`Self::setup`] with coefficients drawn from a generator seeded with `seed`.
    pub fn setup_with_seed(&self, seed: u64) -> Result<SignatureCalculator> {
        self.setup(coefficients_from_seed(self.signature_size(), seed))
    }

    /// Same as [`Self::setup`] with coefficients drawn from `rng`.
    pub fn setup_with_rng<R>(&self, rng: &mut R) -> Result<SignatureCalculator>
    where
        R: Rng + ?Sized,
    {
        self.setup(minhash::random_coefficients(self.signature_size(), rng))
    }
}

/// Computes MinHash signatures and LSH bucket vectors of GPS tracks.
///
/// Only obtainable from [`CalculatorConfig::setup`], and immutable afterwards, so it
/// can be shared across threads freely.
///
/// # Examples
///
/// ```
/// use route_lsh::CalculatorConfig;
///
/// let config = CalculatorConfig::new(16, 3, 4, 1 << 20).unwrap();
/// let calculator = config.setup_with_seed(42).unwrap();
///
/// let track = vec![(51.5074, -0.1278), (51.5090, -0.1200), (51.5120, -0.1150)];
/// let buckets = calculator.buckets(&track);
/// assert_eq!(buckets.len(), 4);
/// assert_eq!(buckets, calculator.buckets(&track));
/// ```
pub struct SignatureCalculator {
    config: CalculatorConfig,
    hasher: MinHasher,
    banding: BandHasher,
}

impl SignatureCalculator {
    pub const fn config(&self) -> CalculatorConfig {
        self.config
    }

    pub fn coefficients(&self) -> &[HashCoefficient] {
        self.hasher.coefficients()
    }

    /// Projects a track onto tiles and rasterizes it into a gap-free tile path.
    pub fn path<P>(&self, points: &[P]) -> Vec<TileCoordinate>
    where
        P: Copy + Into<GpsPoint>,
    {
        raster::rasterize(&tile::track_tiles(points, self.config.zoom))
    }

    /// Computes the MinHash signature of a track.
    ///
    /// Tracks too short to form a single shingle get [`lsh::minhash::EMPTY_ROW`] in every row.
    pub fn signature<P>(&self, points: &[P]) -> Vec<u64>
    where
        P: Copy + Into<GpsPoint>,
    {
        self.signature_of_path(&self.path(points))
    }

    /// Computes the MinHash signature of an already rasterized tile path.
    pub fn signature_of_path(&self, path: &[TileCoordinate]) -> Vec<u64> {
        let feats = shingling::hashed_shingles(path, self.config.shingle_size);
        if feats.is_empty() {
            log::debug!(
                "[SignatureCalculator::signature_of_path] no shingles in a path of {} tiles",
                path.len()
            );
        }
        self.hasher.signature(&feats)
    }

    /// Computes the bucket vector of a track, one bucket per band.
    pub fn buckets<P>(&self, points: &[P]) -> Vec<u64>
    where
        P: Copy + Into<GpsPoint>,
    {
        self.banding.buckets(&self.signature(points))
    }

    /// Computes bucket vectors of many tracks in parallel, in input order.
    pub fn buckets_in_parallel<T, P>(&self, tracks: &[T]) -> Vec<Vec<u64>>
    where
        T: AsRef<[P]> + Sync,
        P: Copy + Into<GpsPoint>,
    {
        tracks
            .par_iter()
            .map(|track| self.buckets(track.as_ref()))
            .collect()
    }

    /// Folds an existing signature into a bucket vector.
    ///
    /// Fails with [`RouteLshError::ConfigMismatch`] if `signature` was not
    /// computed with this calculator's band count.
    pub fn buckets_of_signature(&self, signature: &[u64]) -> Result<Vec<u64>> {
        let signature_size = self.banding.signature_size();
        if signature.len() != signature_size {
            return Err(RouteLshError::config_mismatch(
                signature_size,
                signature.len(),
            ));
        }
        Ok(self.banding.buckets(signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lsh::minhash::EMPTY_ROW;
    use lsh::HASH_PRIME;

    const TRACK: [(f64, f64); 5] = [
        (51.5074, -0.1278),
        (51.5101, -0.1340),
        (51.5155, -0.1419),
        (51.5202, -0.1503),
        (51.5230, -0.1588),
    ];

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            CalculatorConfig::new(32, 3, 4, 100),
            Err(RouteLshError::Input(_))
        ));
        assert!(matches!(
            CalculatorConfig::new(16, 0, 4, 100),
            Err(RouteLshError::Input(_))
        ));
        assert!(matches!(
            CalculatorConfig::new(16, 3, 1, 100),
            Err(RouteLshError::Input(_))
        ));
        assert!(matches!(
            CalculatorConfig::new(16, 3, 4, 0),
            Err(RouteLshError::Input(_))
        ));
    }

    #[test]
    fn test_signature_size() {
        assert_eq!(CalculatorConfig::new(16, 3, 2, 10).unwrap().signature_size(), 2);
        assert_eq!(CalculatorConfig::new(16, 3, 4, 10).unwrap().signature_size(), 8);
    }

    #[test]
    fn test_setup_mismatch() {
        let config = CalculatorConfig::new(16, 3, 4, 100).unwrap();
        let err = config
            .setup(coefficients_from_seed(7, 1))
            .err()
            .unwrap();
        assert_eq!(
            err,
            RouteLshError::ConfigMismatch(crate::errors::ConfigMismatchError {
                expected: 8,
                actual: 7
            })
        );
        assert_eq!(
            err.to_string(),
            "ConfigMismatchError: coefficients size 7 is different from signature size 8"
        );
        // The config is untouched and still usable.
        assert_eq!(config.signature_size(), 8);
        assert!(config.setup(coefficients_from_seed(8, 1)).is_ok());
    }

    #[test]
    fn test_setup_rejects_out_of_range_coefficients() {
        let config = CalculatorConfig::new(16, 3, 2, 100).unwrap();
        let coefficients = vec![HashCoefficient::new(1, 1), HashCoefficient::new(HASH_PRIME, 1)];
        assert!(matches!(
            config.setup(coefficients),
            Err(RouteLshError::Input(_))
        ));
    }

    #[test]
    fn test_ranges() {
        let config = CalculatorConfig::new(17, 2, 5, 97).unwrap();
        let calculator = config.setup_with_seed(11).unwrap();
        let signature = calculator.signature(&TRACK);
        assert_eq!(signature.len(), config.signature_size());
        assert!(signature.iter().all(|&r| r < HASH_PRIME));
        let buckets = calculator.buckets(&TRACK);
        assert_eq!(buckets.len(), 5);
        assert!(buckets.iter().all(|&b| b < 97));
        assert_eq!(buckets, calculator.buckets_of_signature(&signature).unwrap());
    }

    #[test]
    fn test_buckets_of_signature_wrong_length() {
        let config = CalculatorConfig::new(16, 3, 4, 1000).unwrap();
        let calculator = config.setup_with_seed(5).unwrap();
        assert_eq!(calculator.config(), config);
        assert_eq!(
            calculator.buckets_of_signature(&[1, 2, 3]),
            Err(RouteLshError::ConfigMismatch(
                crate::errors::ConfigMismatchError {
                    expected: 8,
                    actual: 3
                }
            ))
        );
        // A signature from a calculator with more bands is rejected too.
        let other = CalculatorConfig::new(16, 3, 5, 1000)
            .unwrap()
            .setup_with_seed(5)
            .unwrap();
        assert!(matches!(
            calculator.buckets_of_signature(&other.signature(&TRACK)),
            Err(RouteLshError::ConfigMismatch(_))
        ));
    }

    #[test]
    fn test_deterministic_across_instances() {
        let config = CalculatorConfig::new(16, 3, 4, 1 << 30).unwrap();
        let x = config.setup_with_seed(5).unwrap();
        let y = config.setup(coefficients_from_seed(8, 5)).unwrap();
        assert_eq!(x.buckets(&TRACK), y.buckets(&TRACK));
        assert_eq!(x.signature(&TRACK), y.signature(&TRACK));
    }

    #[test]
    fn test_setup_with_rng() {
        use rand::SeedableRng;

        let config = CalculatorConfig::new(16, 3, 4, 1 << 30).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let x = config.setup_with_rng(&mut rng).unwrap();
        let y = config.setup_with_rng(&mut rng).unwrap();
        assert_eq!(x.coefficients().len(), 8);
        assert_ne!(x.coefficients(), y.coefficients());
    }

    #[test]
    fn test_degenerate_tracks() {
        let config = CalculatorConfig::new(16, 3, 4, 1000).unwrap();
        let calculator = config.setup_with_seed(5).unwrap();
        let empty: Vec<(f64, f64)> = vec![];
        assert!(calculator.path(&empty).is_empty());
        assert_eq!(calculator.signature(&empty), vec![EMPTY_ROW; 8]);
        // All samples fall into one tile.
        let still = [(51.5074, -0.1278), (51.50741, -0.12781)];
        assert!(calculator.path(&still).is_empty());
        assert_eq!(calculator.signature(&still), vec![EMPTY_ROW; 8]);
        assert_eq!(calculator.buckets(&still), calculator.buckets(&empty));
    }

    #[test]
    fn test_path_is_contiguous() {
        let config = CalculatorConfig::new(18, 3, 4, 1000).unwrap();
        let calculator = config.setup_with_seed(5).unwrap();
        let path = calculator.path(&TRACK);
        assert!(path.len() > TRACK.len());
        for w in path.windows(2) {
            assert!((w[0].x - w[1].x).abs() <= 1 && (w[0].y - w[1].y).abs() <= 1);
            assert_ne!(w[0], w[1]);
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let config = CalculatorConfig::new(16, 2, 3, 1 << 16).unwrap();
        let calculator = config.setup_with_seed(9).unwrap();
        let tracks: Vec<Vec<GpsPoint>> = (0..20)
            .map(|i| {
                TRACK
                    .iter()
                    .map(|&(lat, lon)| GpsPoint::new(lat + 0.01 * i as f64, lon))
                    .collect()
            })
            .collect();
        let serial: Vec<_> = tracks.iter().map(|t| calculator.buckets(t)).collect();
        assert_eq!(calculator.buckets_in_parallel::<_, GpsPoint>(&tracks), serial);
    }
}
