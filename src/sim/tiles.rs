//! Breakable tile grid
//!
//! Tiles carry only their broken flag. Each tile's rectangle is derived from its
//! `(row, col)` index and the fixed cell size, so it never has to be stored.

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// One breakable cell of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub broken: bool,
}

/// Fixed-size grid of tiles, indexed by `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMap {
    rows: usize,
    cols: usize,
    tile_width: i32,
    tile_height: i32,
    /// Row-major storage, `rows * cols` entries
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Create a grid of unbroken tiles
    pub fn new(rows: usize, cols: usize, tile_width: i32, tile_height: i32) -> Self {
        Self {
            rows,
            cols,
            tile_width,
            tile_height,
            tiles: vec![Tile::default(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile_width(&self) -> i32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> i32 {
        self.tile_height
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Tile at `(row, col)`, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.index(row, col).map(|i| &self.tiles[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Tile> {
        self.index(row, col).map(|i| &mut self.tiles[i])
    }

    /// Mark a tile broken. Returns false if the index is out of bounds or the tile
    /// was already broken.
    pub fn break_tile(&mut self, row: usize, col: usize) -> bool {
        match self.get_mut(row, col) {
            Some(tile) if !tile.broken => {
                tile.broken = true;
                true
            }
            _ => false,
        }
    }

    /// Screen rectangle of the cell at `(row, col)`
    pub fn tile_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            col as i32 * self.tile_width,
            row as i32 * self.tile_height,
            self.tile_width,
            self.tile_height,
        )
    }

    /// Iterate all cells in row-major order as `(row, col, tile)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Tile)> {
        let cols = self.cols;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (i / cols, i % cols, tile))
    }

    /// Unbroken cells with their rectangles, row-major
    pub fn unbroken(&self) -> impl Iterator<Item = (usize, usize, Rect)> + '_ {
        self.iter()
            .filter(|(_, _, tile)| !tile.broken)
            .map(move |(row, col, _)| (row, col, self.tile_rect(row, col)))
    }

    pub fn broken_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.broken).count()
    }

    pub fn remaining(&self) -> usize {
        self.tiles.len() - self.broken_count()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Build the tile layout for a level
///
/// Level 1 is a full grid of unbroken tiles. Other levels are not defined.
pub fn layout(
    level: u32,
    rows: usize,
    cols: usize,
    tile_width: i32,
    tile_height: i32,
) -> Option<TileMap> {
    match level {
        1 => Some(TileMap::new(rows, cols, tile_width, tile_height)),
        _ => None,
    }
}
