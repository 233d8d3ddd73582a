//! Enemy spawner: one enemy per interval until the quota is used up.

use tracing::debug;

use tankbattle_core::events::GameEvent;

use crate::config::Tuning;
use crate::random::RandomSource;
use crate::world::World;
use crate::world_setup;

/// Spawn an enemy at a random spawn point if the interval has elapsed.
///
/// The spawn point is not checked for occupants. A new enemy that overlaps
/// another tank is blocked from its first move like any other.
pub fn run(
    world: &mut World,
    rng: &mut impl RandomSource,
    now_ms: u64,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    if world.quota_exhausted() {
        return;
    }
    if let Some(last) = world.last_spawn_ms {
        if now_ms.saturating_sub(last) < tuning.enemy_spawn_interval_ms {
            return;
        }
    }

    let points = world_setup::spawn_points();
    let origin = points[rng.pick_index(points.len())];
    let id = world.allocate_id();
    world.enemies.push(world_setup::enemy_tank(id, origin, tuning));
    world.enemies_spawned += 1;
    world.last_spawn_ms = Some(now_ms);
    events.push(GameEvent::EnemySpawned { id });
    debug!(
        id = id.0,
        x = origin.x,
        y = origin.y,
        spawned = world.enemies_spawned,
        quota = world.enemy_quota,
        "enemy spawned"
    );
}
