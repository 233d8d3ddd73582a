//! Snapshot system: copies the world into a `GameStateSnapshot`.
//!
//! Read-only over the world.

use tankbattle_core::components::{Projectile, Tank};
use tankbattle_core::events::GameEvent;
use tankbattle_core::state::{GameStateSnapshot, ProjectileView, TankView};
use tankbattle_core::types::SimTime;

use crate::world::World;

/// Build the snapshot published after a tick.
pub fn build_snapshot(world: &World, time: &SimTime, events: Vec<GameEvent>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        level: world.level,
        status: world.status,
        grid: world.grid.clone(),
        player: tank_view(&world.player),
        enemies: world.enemies.iter().map(tank_view).collect(),
        projectiles: world.projectiles.iter().map(projectile_view).collect(),
        score: world.score,
        enemies_spawned: world.enemies_spawned,
        enemy_quota: world.enemy_quota,
        events,
    }
}

fn tank_view(tank: &Tank) -> TankView {
    TankView {
        id: tank.body.id,
        role: tank.role,
        position: tank.body.position,
        size: tank.body.size,
        direction: tank.body.direction,
        health: tank.body.health,
    }
}

fn projectile_view(projectile: &Projectile) -> ProjectileView {
    ProjectileView {
        id: projectile.body.id,
        owner: projectile.owner,
        position: projectile.body.position,
        size: projectile.body.size,
        direction: projectile.body.direction,
    }
}
