//! Game state snapshot: the complete visible state handed to renderers each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::grid::TileGrid;
use crate::types::{EntityId, SimTime};

/// Read-only world state published after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub level: u32,
    pub status: GameStatus,
    pub grid: TileGrid,
    pub player: TankView,
    pub enemies: Vec<TankView>,
    pub projectiles: Vec<ProjectileView>,
    pub score: u32,
    pub enemies_spawned: u32,
    pub enemy_quota: u32,
    /// Events raised during the tick that produced this snapshot.
    pub events: Vec<GameEvent>,
}

impl GameStateSnapshot {
    /// Terminal transition carried by this snapshot, if any.
    pub fn outcome(&self) -> Option<&GameEvent> {
        self.events
            .iter()
            .find(|event| event.outcome_score().is_some())
    }
}

/// A tank as drawn on screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TankView {
    pub id: EntityId,
    pub role: TankRole,
    pub position: Vec2,
    pub size: Vec2,
    pub direction: Direction,
    pub health: u32,
}

/// A projectile as drawn on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: EntityId,
    pub owner: EntityId,
    pub position: Vec2,
    pub size: Vec2,
    pub direction: Direction,
}
