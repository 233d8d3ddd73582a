//! The built-in mission used whenever provider content is unusable.

use tankbattle_core::constants::{FALLBACK_BARRIER_ROW, FALLBACK_BASE_QUOTA, GRID_SIZE};
use tankbattle_core::enums::Tile;
use tankbattle_core::grid::TileGrid;
use tankbattle_core::mission::Mission;

use crate::payload::sanitize_grid;

pub const FALLBACK_DESCRIPTION: &str =
    "The AI failed to brief you. Standard combat protocols engaged.";

/// Deterministic mission for `level`: a single Steel/Brick barrier row and
/// a quota that grows with the level.
pub fn fallback_mission(level: u32) -> Mission {
    let mut grid = TileGrid::empty();
    for col in 0..GRID_SIZE {
        let tile = if col % 3 == 0 { Tile::Steel } else { Tile::Brick };
        grid.set_tile(FALLBACK_BARRIER_ROW, col, tile);
    }
    sanitize_grid(&mut grid);

    Mission {
        name: format!("Default Operation {level}"),
        description: FALLBACK_DESCRIPTION.to_owned(),
        level,
        grid,
        enemy_count: FALLBACK_BASE_QUOTA.saturating_add(level),
    }
}
