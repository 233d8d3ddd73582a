//! Tile grid model: the arena terrain and its per-tile rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{BASE_COL, BASE_ROW, GRID_SIZE, TILE_SIZE};
use crate::enums::Tile;

/// Reasons a raw tile matrix cannot become a [`TileGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has {actual} rows, expected {expected}")]
    RowCount { expected: usize, actual: usize },
    #[error("grid row {row} has {actual} columns, expected {expected}")]
    ColumnCount {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown tile code {code} at ({row}, {col})")]
    UnknownTile { row: usize, col: usize, code: i64 },
}

/// Square `GRID_SIZE` x `GRID_SIZE` terrain map, indexed by (row, col).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    tiles: Vec<Vec<Tile>>,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl TileGrid {
    /// A grid containing only Empty tiles.
    pub fn empty() -> Self {
        Self {
            tiles: vec![vec![Tile::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a grid from numeric payload codes, validating shape and codes.
    pub fn from_codes(rows: &[Vec<i64>]) -> Result<Self, GridError> {
        if rows.len() != GRID_SIZE {
            return Err(GridError::RowCount {
                expected: GRID_SIZE,
                actual: rows.len(),
            });
        }

        let mut tiles = Vec::with_capacity(GRID_SIZE);
        for (row, codes) in rows.iter().enumerate() {
            if codes.len() != GRID_SIZE {
                return Err(GridError::ColumnCount {
                    row,
                    expected: GRID_SIZE,
                    actual: codes.len(),
                });
            }
            let parsed = codes
                .iter()
                .enumerate()
                .map(|(col, &code)| {
                    u8::try_from(code)
                        .ok()
                        .and_then(Tile::from_code)
                        .ok_or(GridError::UnknownTile { row, col, code })
                })
                .collect::<Result<Vec<_>, _>>()?;
            tiles.push(parsed);
        }

        Ok(Self { tiles })
    }

    /// Tile at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid. Callers bounds-check
    /// geometry before looking tiles up.
    pub fn tile_at(&self, row: usize, col: usize) -> Tile {
        assert!(
            row < GRID_SIZE && col < GRID_SIZE,
            "tile lookup out of bounds: ({row}, {col})"
        );
        self.tiles[row][col]
    }

    /// Replace the tile at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    pub fn set_tile(&mut self, row: usize, col: usize, tile: Tile) {
        assert!(
            row < GRID_SIZE && col < GRID_SIZE,
            "tile write out of bounds: ({row}, {col})"
        );
        self.tiles[row][col] = tile;
    }

    /// Row-major iteration over `(row, col, tile)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &tile)| (row, col, tile))
        })
    }

    /// Rows of the grid, for renderers.
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    /// Number of Base tiles present.
    pub fn base_count(&self) -> usize {
        self.iter().filter(|&(_, _, tile)| tile == Tile::Base).count()
    }

    /// Force the single-Base invariant: the Base sits at its fixed cell and
    /// nowhere else.
    pub fn enforce_single_base(&mut self) {
        for row in self.tiles.iter_mut() {
            for tile in row.iter_mut() {
                if *tile == Tile::Base {
                    *tile = Tile::Empty;
                }
            }
        }
        self.tiles[BASE_ROW][BASE_COL] = Tile::Base;
    }
}

/// Tile index containing the arena coordinate `value`. Only meaningful for
/// coordinates already known to lie inside the arena.
pub fn tile_index(value: f32) -> usize {
    (value / TILE_SIZE).floor() as usize
}
