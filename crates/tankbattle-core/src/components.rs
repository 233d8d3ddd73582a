//! Entity components: the data shared by tanks and projectiles.
//!
//! Components are plain data. Game logic lives in the simulation systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Direction, TankRole};
use crate::types::{EntityId, Rect};

/// Shape shared by every moving entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: EntityId,
    /// Top-left corner of the bounding box.
    pub position: Vec2,
    pub size: Vec2,
    pub direction: Direction,
    /// Distance covered per tick.
    pub speed: f32,
    /// The entity is removed once this reaches zero.
    pub health: u32,
}

impl Body {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Top-left position one step ahead along `direction`.
    pub fn step_towards(&self, direction: Direction) -> Vec2 {
        self.position + direction.unit() * self.speed
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// A player or enemy tank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    pub body: Body,
    pub role: TankRole,
    /// Sim time of the last shot. `None` until the tank first fires.
    pub last_shot_ms: Option<u64>,
    /// Accumulated score; only meaningful for the player.
    pub score: u32,
}

/// A shell in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    /// Tank that fired this projectile.
    pub owner: EntityId,
}

impl Projectile {
    /// Player-fired projectiles only hit enemies; enemy-fired ones only the player.
    pub fn is_player_owned(&self) -> bool {
        self.owner == EntityId::PLAYER
    }
}
