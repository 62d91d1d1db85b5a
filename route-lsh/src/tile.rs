//! Slippy-map tile projection of GPS tracks.
use std::f64::consts::PI;

/// Largest supported zoom level.
pub const MAX_ZOOM: u32 = 31;

/// A GPS sample in degrees.
///
/// # Examples
///
/// ```
/// use route_lsh::GpsPoint;
///
/// let point = GpsPoint::new(51.5074, -0.1278);
/// assert_eq!(point.tile(10).x, 511);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GpsPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Projects the point onto the tile grid of `zoom`.
    pub fn tile(&self, zoom: u32) -> TileCoordinate {
        project(self.latitude, self.longitude, zoom)
    }
}

impl From<(f64, f64)> for GpsPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Integer tile index `(x, y)` in the Web-Mercator tile scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoordinate {
    pub x: i64,
    pub y: i64,
}

impl TileCoordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for TileCoordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Maps `(lat, lon)` in degrees to the tile containing it at `zoom`.
///
/// The latitude must keep `cos(lat)` away from zero; poles are outside the domain.
pub fn project(lat: f64, lon: f64, zoom: u32) -> TileCoordinate {
    let n = f64::from(zoom).exp2();
    let lat_rad = lat * PI / 180.;
    let x = ((lon + 180.) / 360. * n).floor();
    let y = ((1. - (lat_rad.tan() + 1. / lat_rad.cos()).ln() / PI) / 2. * n).floor();
    TileCoordinate::new(x as i64, y as i64)
}

/// Projects a whole track, collapsing consecutive samples that fall into the same tile.
///
/// Non-consecutive revisits of a tile are kept.
pub fn track_tiles<P>(points: &[P], zoom: u32) -> Vec<TileCoordinate>
where
    P: Copy + Into<GpsPoint>,
{
    let mut tiles: Vec<TileCoordinate> = points
        .iter()
        .map(|&p| Into::<GpsPoint>::into(p).tile(zoom))
        .collect();
    tiles.dedup();
    tiles
}
