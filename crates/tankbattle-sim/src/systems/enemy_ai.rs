//! Enemy AI: random wandering and opportunistic firing.

use tracing::trace;

use tankbattle_core::enums::Direction;
use tankbattle_core::events::GameEvent;
use tankbattle_core::types::Rect;

use crate::collision;
use crate::config::Tuning;
use crate::random::RandomSource;
use crate::world::World;
use crate::world_setup;

fn random_direction(rng: &mut impl RandomSource) -> Direction {
    Direction::ALL[rng.pick_index(Direction::ALL.len())]
}

/// Move every enemy one step, in spawn order.
///
/// Each enemy may first turn at random. A blocked enemy stays put and picks
/// a fresh random heading instead. Later enemies see earlier enemies at
/// their already-updated positions.
pub fn run_movement(world: &mut World, rng: &mut impl RandomSource, tuning: &Tuning) {
    for index in 0..world.enemies.len() {
        let enemy = &world.enemies[index].body;
        let mut direction = enemy.direction;
        if rng.chance(tuning.enemy_turn_chance) {
            direction = random_direction(rng);
        }

        let candidate = Rect::new(enemy.step_towards(direction), enemy.size);
        let blocked = collision::is_blocked(
            &candidate,
            &world.grid,
            world.tank_rects(),
            Some(enemy.id),
        );

        let enemy = &mut world.enemies[index].body;
        if blocked {
            enemy.direction = random_direction(rng);
            trace!(id = enemy.id.0, direction = ?enemy.direction, "enemy blocked, turning");
        } else {
            enemy.position = candidate.origin;
            enemy.direction = direction;
        }
    }
}

/// Let each enemy whose cooldown has strictly elapsed fire with a small
/// per-tick probability. Several enemies may fire in the same tick.
pub fn run_firing(
    world: &mut World,
    rng: &mut impl RandomSource,
    now_ms: u64,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    for index in 0..world.enemies.len() {
        let ready = world.enemies[index]
            .last_shot_ms
            .map_or(true, |last| now_ms.saturating_sub(last) > tuning.enemy_shot_cooldown_ms);
        if !ready || !rng.chance(tuning.enemy_fire_chance) {
            continue;
        }

        let id = world.allocate_id();
        let enemy = &mut world.enemies[index];
        let projectile = world_setup::projectile_from(enemy, id, tuning);
        enemy.last_shot_ms = Some(now_ms);
        events.push(GameEvent::ShotFired {
            owner: enemy.body.id,
            projectile: id,
        });
        world.projectiles.push(projectile);
    }
}
