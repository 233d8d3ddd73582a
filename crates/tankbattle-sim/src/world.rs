//! World state: everything the engine mutates while a mission runs.

use tankbattle_core::components::{Projectile, Tank};
use tankbattle_core::enums::GameStatus;
use tankbattle_core::grid::TileGrid;
use tankbattle_core::mission::Mission;
use tankbattle_core::types::{EntityId, Rect};

use crate::config::Tuning;
use crate::world_setup;

/// Mutable mission state, exclusively owned by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    /// Working copy of the mission grid.
    pub grid: TileGrid,
    pub player: Tank,
    /// Live enemies in spawn order.
    pub enemies: Vec<Tank>,
    /// Live projectiles in fire order.
    pub projectiles: Vec<Projectile>,
    pub score: u32,
    pub status: GameStatus,
    pub level: u32,
    /// Total enemies this mission will ever spawn.
    pub enemy_quota: u32,
    pub enemies_spawned: u32,
    pub last_spawn_ms: Option<u64>,
    next_entity_id: u32,
}

impl World {
    /// Fresh world for `mission`. The mission's grid is copied, never borrowed.
    pub fn new(mission: &Mission, tuning: &Tuning) -> Self {
        Self {
            grid: mission.grid.clone(),
            player: world_setup::player_tank(tuning),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            status: GameStatus::Playing,
            level: mission.level,
            enemy_quota: mission.enemy_count,
            enemies_spawned: 0,
            last_spawn_ms: None,
            next_entity_id: EntityId::PLAYER.0 + 1,
        }
    }

    /// Hand out the next unused entity id.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    /// Bounding boxes of every tank, player first.
    pub fn tank_rects(&self) -> Vec<(EntityId, Rect)> {
        std::iter::once(&self.player)
            .chain(self.enemies.iter())
            .map(|tank| (tank.body.id, tank.body.rect()))
            .collect()
    }

    /// Whether every enemy in the quota has entered the arena.
    pub fn quota_exhausted(&self) -> bool {
        self.enemies_spawned >= self.enemy_quota
    }
}
