//! Mission descriptor: the validated content a mission provider supplies.

use serde::{Deserialize, Serialize};

use crate::grid::TileGrid;

/// Everything the simulation needs to start a mission.
///
/// The engine copies `grid`, so a running mission never mutates the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub name: String,
    pub description: String,
    pub level: u32,
    pub grid: TileGrid,
    /// Total number of enemies the mission will ever spawn.
    pub enemy_count: u32,
}
