//! Bresenham rasterization of tile transitions.
use crate::tile::TileCoordinate;

/// Computes the tiles on the discrete line from `from` to `to`, both inclusive,
/// in travel order.
///
/// # Examples
///
/// ```
/// use route_lsh::raster::bresenham;
/// use route_lsh::TileCoordinate;
///
/// let line = bresenham(TileCoordinate::new(2, 1), TileCoordinate::new(0, 0));
/// assert_eq!(
///     line,
///     vec![
///         TileCoordinate::new(2, 1),
///         TileCoordinate::new(1, 1),
///         TileCoordinate::new(0, 0),
///     ]
/// );
/// ```
pub fn bresenham(from: TileCoordinate, to: TileCoordinate) -> Vec<TileCoordinate> {
    let (mut line, inverted) = sweep(from, to);
    if inverted {
        line.reverse();
    }
    line
}

/// Walks the line from the endpoint with the smaller major-axis value.
/// The flag tells whether that endpoint is `to`.
fn sweep(from: TileCoordinate, to: TileCoordinate) -> (Vec<TileCoordinate>, bool) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let dx1 = dx.abs();
    let dy1 = dy.abs();
    let same_sign = (dx < 0 && dy < 0) || (dx > 0 && dy > 0);
    let step = if same_sign { 1 } else { -1 };

    let mut line = vec![];
    if dy1 <= dx1 {
        let inverted = dx < 0;
        let (start, end) = if inverted { (to, from) } else { (from, to) };
        let (mut x, mut y) = (start.x, start.y);
        let mut px = 2 * dy1 - dx1;
        line.push(start);
        while x < end.x {
            x += 1;
            if px < 0 {
                px += 2 * dy1;
            } else {
                y += step;
                px += 2 * (dy1 - dx1);
            }
            line.push(TileCoordinate::new(x, y));
        }
        (line, inverted)
    } else {
        let inverted = dy < 0;
        let (start, end) = if inverted { (to, from) } else { (from, to) };
        let (mut x, mut y) = (start.x, start.y);
        let mut py = 2 * dx1 - dy1;
        line.push(start);
        while y < end.y {
            y += 1;
            if py <= 0 {
                py += 2 * dx1;
            } else {
                x += step;
                py += 2 * (dx1 - dy1);
            }
            line.push(TileCoordinate::new(x, y));
        }
        (line, inverted)
    }
}

/// Joins the lines between consecutive tiles into a single path.
///
/// Each segment after the first drops its leading tile, which is the last tile
/// of the previous segment. Fewer than two tiles give an empty path.
///
/// The path holds one entry per tile crossed, so a long jump between two
/// samples at a high zoom (e.g., a GPS glitch) yields a very long path.
pub fn rasterize(tiles: &[TileCoordinate]) -> Vec<TileCoordinate> {
    let mut path = vec![];
    for (i, pair) in tiles.windows(2).enumerate() {
        let line = bresenham(pair[0], pair[1]);
        let skip = if i == 0 { 0 } else { 1 };
        path.extend(line.into_iter().skip(skip));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(coords: &[(i64, i64)]) -> Vec<TileCoordinate> {
        coords.iter().map(|&c| c.into()).collect()
    }

    fn t(x: i64, y: i64) -> TileCoordinate {
        TileCoordinate::new(x, y)
    }

    #[test]
    fn test_gentle_slope() {
        assert_eq!(
            bresenham(t(0, 0), t(5, 2)),
            tiles(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)])
        );
    }

    #[test]
    fn test_steep_slope() {
        assert_eq!(
            bresenham(t(0, 0), t(2, 5)),
            tiles(&[(0, 0), (0, 1), (1, 2), (1, 3), (2, 4), (2, 5)])
        );
    }

    #[test]
    fn test_ties() {
        // The x-major walk steps the minor axis on a zero error term,
        // the y-major walk does not.
        assert_eq!(bresenham(t(0, 0), t(2, 1)), tiles(&[(0, 0), (1, 1), (2, 1)]));
        assert_eq!(bresenham(t(0, 0), t(1, 2)), tiles(&[(0, 0), (0, 1), (1, 2)]));
    }

    #[test]
    fn test_negative_slope() {
        assert_eq!(
            bresenham(t(0, 0), t(3, -3)),
            tiles(&[(0, 0), (1, -1), (2, -2), (3, -3)])
        );
        assert_eq!(
            bresenham(t(0, 0), t(-1, 3)),
            tiles(&[(0, 0), (0, 1), (-1, 2), (-1, 3)])
        );
    }

    #[test]
    fn test_inverted_keeps_travel_direction() {
        assert_eq!(
            bresenham(t(5, 2), t(0, 0)),
            tiles(&[(5, 2), (4, 2), (3, 1), (2, 1), (1, 0), (0, 0)])
        );
        let (_, inverted) = sweep(t(5, 2), t(0, 0));
        assert!(inverted);
        let (_, inverted) = sweep(t(0, 0), t(5, 2));
        assert!(!inverted);
    }

    #[test]
    fn test_axis_aligned() {
        assert_eq!(bresenham(t(3, 7), t(3, 4)), tiles(&[(3, 7), (3, 6), (3, 5), (3, 4)]));
        assert_eq!(bresenham(t(-2, 0), t(1, 0)), tiles(&[(-2, 0), (-1, 0), (0, 0), (1, 0)]));
    }

    #[test]
    fn test_long_jump() {
        let line = bresenham(t(0, 0), t(3, -100_000));
        assert_eq!(line.len(), 100_001);
        assert_eq!(line.first(), Some(&t(0, 0)));
        assert_eq!(line.last(), Some(&t(3, -100_000)));
        assert!(line.windows(2).all(|w| w[0].y - w[1].y == 1));
    }

    #[test]
    fn test_single_tile() {
        assert_eq!(bresenham(t(4, 4), t(4, 4)), tiles(&[(4, 4)]));
    }

    #[test]
    fn test_symmetry() {
        let ends: [(i64, i64); 8] = [(0, 0), (5, 2), (2, 5), (-3, 4), (7, -1), (-6, -6), (1, 2), (2, 1)];
        for &a in &ends {
            for &b in &ends {
                let mut forward = bresenham(a.into(), b.into());
                forward.reverse();
                assert_eq!(forward, bresenham(b.into(), a.into()), "{a:?} -> {b:?}");
            }
        }
    }

    #[test]
    fn test_rasterize_stitches_segments() {
        assert_eq!(
            rasterize(&tiles(&[(0, 0), (2, 1), (2, 3)])),
            tiles(&[(0, 0), (1, 1), (2, 1), (2, 2), (2, 3)])
        );
    }

    #[test]
    fn test_rasterize_short_tracks() {
        assert!(rasterize(&[]).is_empty());
        assert!(rasterize(&tiles(&[(1, 1)])).is_empty());
        assert_eq!(rasterize(&tiles(&[(1, 1), (2, 1)])), tiles(&[(1, 1), (2, 1)]));
    }

    #[test]
    fn test_rasterize_has_no_adjacent_duplicates() {
        let path = rasterize(&tiles(&[(0, 0), (4, 1), (4, 6), (-2, 3), (0, 0)]));
        assert!(path.windows(2).all(|w| w[0] != w[1]));
        assert_eq!(path.first(), Some(&t(0, 0)));
        assert_eq!(path.last(), Some(&t(0, 0)));
    }
}
