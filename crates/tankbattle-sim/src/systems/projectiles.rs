//! Projectile advance and hit resolution.
//!
//! A projectile's tile and bounds checks use the top-left corner of its box.
//! Every projectile is evaluated against the grid as it stood at the start of
//! the pass. Brick destruction is collected and applied once afterwards, so a
//! Brick hit by several projectiles in one tick changes state exactly once.

use std::collections::BTreeSet;

use tracing::debug;

use tankbattle_core::components::Projectile;
use tankbattle_core::constants::ARENA_SIZE;
use tankbattle_core::enums::Tile;
use tankbattle_core::events::GameEvent;
use tankbattle_core::grid::tile_index;

use crate::config::Tuning;
use crate::world::World;

/// Terminal consequences of one projectile pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitReport {
    pub base_destroyed: bool,
    pub player_destroyed: bool,
}

impl HitReport {
    /// Whether the pass ended the mission in defeat.
    pub fn is_defeat(&self) -> bool {
        self.base_destroyed || self.player_destroyed
    }
}

/// What stopped a projectile, if anything.
enum Impact {
    OutOfBounds,
    Brick { row: usize, col: usize },
    /// Stopped by terrain that survives the hit.
    Absorbed,
    Base,
    Tank,
}

/// Advance every projectile and resolve what it hits.
pub fn run(world: &mut World, tuning: &Tuning, events: &mut Vec<GameEvent>) -> HitReport {
    let mut report = HitReport::default();
    let mut bricks: BTreeSet<(usize, usize)> = BTreeSet::new();

    let in_flight = std::mem::take(&mut world.projectiles);
    let mut survivors = Vec::with_capacity(in_flight.len());

    for mut projectile in in_flight {
        let body = &mut projectile.body;
        body.position = body.step_towards(body.direction);

        match resolve(world, &projectile, tuning, &mut report, events) {
            None => survivors.push(projectile),
            Some(Impact::Brick { row, col }) => {
                let _ = bricks.insert((row, col));
            }
            Some(Impact::Base) => {
                if !report.base_destroyed {
                    events.push(GameEvent::BaseDestroyed);
                }
                report.base_destroyed = true;
            }
            Some(Impact::OutOfBounds | Impact::Absorbed | Impact::Tank) => {}
        }
    }

    for (row, col) in bricks {
        world.grid.set_tile(row, col, Tile::Empty);
        events.push(GameEvent::BrickDestroyed { row, col });
        debug!(row, col, "brick destroyed");
    }

    world.projectiles = survivors;
    world.enemies.retain(|enemy| enemy.body.is_alive());
    report
}

/// Check one already-advanced projectile. Bounds come first so the tile
/// lookup never leaves the grid.
fn resolve(
    world: &mut World,
    projectile: &Projectile,
    tuning: &Tuning,
    report: &mut HitReport,
    events: &mut Vec<GameEvent>,
) -> Option<Impact> {
    let rect = projectile.body.rect();
    let corner = rect.origin;
    if corner.x < 0.0 || corner.y < 0.0 || corner.x >= ARENA_SIZE || corner.y >= ARENA_SIZE {
        return Some(Impact::OutOfBounds);
    }

    let (row, col) = (tile_index(corner.y), tile_index(corner.x));
    let tile = world.grid.tile_at(row, col);
    if tile == Tile::Brick {
        return Some(Impact::Brick { row, col });
    }
    if tile.blocks_projectile() {
        return Some(if tile == Tile::Base {
            Impact::Base
        } else {
            Impact::Absorbed
        });
    }

    if projectile.is_player_owned() {
        let target = world
            .enemies
            .iter_mut()
            .find(|enemy| enemy.body.is_alive() && enemy.body.rect().overlaps(&rect))?;
        target.body.health -= 1;
        if !target.body.is_alive() {
            world.score += tuning.kill_reward;
            world.player.score = world.score;
            events.push(GameEvent::EnemyDestroyed {
                id: target.body.id,
                score: world.score,
            });
            debug!(id = target.body.id.0, score = world.score, "enemy destroyed");
        }
        return Some(Impact::Tank);
    }

    let player = &mut world.player.body;
    if player.is_alive() && player.rect().overlaps(&rect) {
        player.health -= 1;
        events.push(GameEvent::PlayerHit {
            health: player.health,
        });
        if !player.is_alive() {
            report.player_destroyed = true;
        }
        return Some(Impact::Tank);
    }

    None
}
