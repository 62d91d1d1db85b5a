use hashbrown::HashSet;

use crate::tile::TileCoordinate;

/// Iterator over the distinct windows of `window_size` tiles, in first-seen order.
pub struct ShingleIter<'a> {
    tiles: &'a [TileCoordinate],
    window_size: usize,
    position: usize,
    seen: HashSet<&'a [TileCoordinate]>,
}

impl<'a> ShingleIter<'a> {
    pub fn new(tiles: &'a [TileCoordinate], window_size: usize) -> Self {
        assert!(window_size >= 1);
        Self {
            tiles,
            window_size,
            position: 0,
            seen: HashSet::new(),
        }
    }
}

impl<'a> Iterator for ShingleIter<'a> {
    type Item = &'a [TileCoordinate];

    fn next(&mut self) -> Option<Self::Item> {
        while self.position + self.window_size <= self.tiles.len() {
            let window = &self.tiles[self.position..self.position + self.window_size];
            self.position += 1;
            if self.seen.insert(window) {
                return Some(window);
            }
        }
        None
    }
}

/// Hashes a shingle with 32-bit FNV-1a.
///
/// Each coordinate is fed as two fixed-width little-endian integers, so distinct
/// shingles never share an encoding.
pub fn shingle_hash(shingle: &[TileCoordinate]) -> u32 {
    let mut key = Vec::with_capacity(shingle.len() * 16);
    for tile in shingle {
        key.extend_from_slice(&tile.x.to_le_bytes());
        key.extend_from_slice(&tile.y.to_le_bytes());
    }
    lsh::fnv1a_32(key)
}

/// Hashes every distinct shingle of `path`.
pub fn hashed_shingles(path: &[TileCoordinate], window_size: usize) -> Vec<u32> {
    ShingleIter::new(path, window_size).map(shingle_hash).collect()
}
