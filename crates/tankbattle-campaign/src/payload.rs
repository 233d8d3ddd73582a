//! Mission payload parsing and sanitisation.

use serde::{Deserialize, Serialize};

use tankbattle_core::constants::{ENEMY_SPAWN_TILES, PLAYER_START_TILE};
use tankbattle_core::enums::Tile;
use tankbattle_core::grid::TileGrid;
use tankbattle_core::mission::Mission;

use crate::provider::MissionError;

/// Mission content as a provider sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionPayload {
    pub name: String,
    pub description: String,
    /// Row-major tile codes.
    pub grid: Vec<Vec<i64>>,
    pub enemy_count: u32,
}

/// Parse a raw payload into a playable mission for `level`.
pub fn parse_mission(raw: &str, level: u32) -> Result<Mission, MissionError> {
    let payload: MissionPayload = serde_json::from_str(raw)?;
    payload.into_mission(level)
}

impl MissionPayload {
    /// Validate and sanitise into a [`Mission`].
    pub fn into_mission(self, level: u32) -> Result<Mission, MissionError> {
        if self.enemy_count == 0 {
            return Err(MissionError::EmptyQuota);
        }
        let mut grid = TileGrid::from_codes(&self.grid)?;
        sanitize_grid(&mut grid);

        Ok(Mission {
            name: self.name,
            description: self.description,
            level,
            grid,
            enemy_count: self.enemy_count,
        })
    }
}

/// Enforce the layout rules every mission relies on: exactly one Base at its
/// fixed cell, and no terrain under the player start or the enemy spawn
/// points.
pub fn sanitize_grid(grid: &mut TileGrid) {
    grid.enforce_single_base();
    let (row, col) = PLAYER_START_TILE;
    grid.set_tile(row, col, Tile::Empty);
    for (row, col) in ENEMY_SPAWN_TILES {
        grid.set_tile(row, col, Tile::Empty);
    }
}
