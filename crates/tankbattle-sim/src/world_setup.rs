//! Entity factories for tanks and projectiles.

use glam::Vec2;

use tankbattle_core::components::{Body, Projectile, Tank};
use tankbattle_core::constants::*;
use tankbattle_core::enums::{Direction, TankRole};
use tankbattle_core::types::{tank_origin_for_tile, EntityId};

use crate::config::Tuning;

/// The player tank at its start tile, facing Up.
pub fn player_tank(tuning: &Tuning) -> Tank {
    let (row, col) = PLAYER_START_TILE;
    Tank {
        body: Body {
            id: EntityId::PLAYER,
            position: tank_origin_for_tile(row, col),
            size: Vec2::splat(TANK_SIZE),
            direction: Direction::Up,
            speed: tuning.player_speed,
            health: PLAYER_HEALTH,
        },
        role: TankRole::Player,
        last_shot_ms: None,
        score: 0,
    }
}

/// A fresh enemy at `origin`, facing Down.
pub fn enemy_tank(id: EntityId, origin: Vec2, tuning: &Tuning) -> Tank {
    Tank {
        body: Body {
            id,
            position: origin,
            size: Vec2::splat(TANK_SIZE),
            direction: Direction::Down,
            speed: tuning.enemy_speed,
            health: ENEMY_HEALTH,
        },
        role: TankRole::Enemy,
        last_shot_ms: None,
        score: 0,
    }
}

/// A projectile centred on `shooter`, travelling along its facing.
pub fn projectile_from(shooter: &Tank, id: EntityId, tuning: &Tuning) -> Projectile {
    let size = Vec2::splat(PROJECTILE_SIZE);
    Projectile {
        body: Body {
            id,
            position: shooter.body.rect().center() - size * 0.5,
            size,
            direction: shooter.body.direction,
            speed: tuning.projectile_speed,
            health: 1,
        },
        owner: shooter.body.id,
    }
}

/// Top-left positions of the enemy spawn points.
pub fn spawn_points() -> [Vec2; ENEMY_SPAWN_TILES.len()] {
    ENEMY_SPAWN_TILES.map(|(row, col)| tank_origin_for_tile(row, col))
}
