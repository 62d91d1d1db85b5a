//! MinHash/LSH fingerprints of GPS tracks for finding near-duplicate routes.
//!
//! A track is projected onto slippy-map tiles, the tile transitions are filled
//! in with Bresenham lines, and the resulting tile path is cut into shingles.
//! The shingle set is summarized by a MinHash signature, which is folded band
//! by band into a bucket vector. Two tracks sharing a bucket in any band are
//! candidate pairs.
//!
//! ```
//! use route_lsh::{candidates, CalculatorConfig};
//!
//! let config = CalculatorConfig::new(17, 3, 8, 1 << 32).unwrap();
//! let calculator = config.setup_with_seed(7).unwrap();
//!
//! let track = vec![(45.4642, 9.1900), (45.4700, 9.1950), (45.4760, 9.2050)];
//! let jittered: Vec<_> = track.iter().map(|&(lat, lon)| (lat + 1e-7, lon)).collect();
//!
//! let x = calculator.buckets(&track);
//! let y = calculator.buckets(&jittered);
//! assert!(candidates::are_candidates(&x, &y));
//! ```
pub mod calculator;
pub mod candidates;
pub mod errors;
pub mod raster;
pub mod shared;
pub mod shingling;
pub mod tile;

pub use calculator::{CalculatorConfig, SignatureCalculator};
pub use errors::{Result, RouteLshError};
pub use shared::SharedCalculator;
pub use tile::{GpsPoint, TileCoordinate};
