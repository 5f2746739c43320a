//! Terrain map handed over by the engine
//!
//! The raw grid encodes tiles as -1 (not yet scouted), 0 (water), 1 (land).

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, StrategyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Unknown,
    Water,
    Land,
}

impl Tile {
    pub fn from_raw(raw: i8) -> Self {
        match raw {
            1 => Tile::Land,
            0 => Tile::Water,
            _ => Tile::Unknown,
        }
    }
}

/// Row-major tile grid
#[derive(Debug, Clone)]
pub struct TerrainMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TerrainMap {
    /// Decode the engine's raw grid
    pub fn from_grid(width: usize, height: usize, raw: &[i8]) -> Result<Self> {
        if raw.len() != width * height {
            return Err(StrategyError::TerrainShape {
                width,
                height,
                got: raw.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles: raw.iter().map(|&r| Tile::from_raw(r)).collect(),
        })
    }

    /// An entirely unscouted map
    pub fn unknown(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Unknown; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.tiles[y * self.width + x])
    }

    pub fn is_land(&self, x: usize, y: usize) -> bool {
        self.tile(x, y) == Some(Tile::Land)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_decoding() {
        assert_eq!(Tile::from_raw(-1), Tile::Unknown);
        assert_eq!(Tile::from_raw(0), Tile::Water);
        assert_eq!(Tile::from_raw(1), Tile::Land);
    }

    #[test]
    fn test_from_grid_rejects_wrong_size() {
        assert!(TerrainMap::from_grid(2, 2, &[1, 0, 1]).is_err());
    }

    #[test]
    fn test_tile_lookup() {
        let map = TerrainMap::from_grid(2, 2, &[1, 0, -1, 1]).unwrap();
        assert_eq!(map.tile(0, 0), Some(Tile::Land));
        assert_eq!(map.tile(1, 0), Some(Tile::Water));
        assert_eq!(map.tile(0, 1), Some(Tile::Unknown));
        assert!(map.is_land(1, 1));
        assert_eq!(map.tile(2, 0), None);
    }
}
