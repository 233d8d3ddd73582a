//! Player tank: movement and firing from the held-key set.

use tankbattle_core::commands::HeldKeys;
use tankbattle_core::events::GameEvent;
use tankbattle_core::types::{EntityId, Rect};

use crate::collision;
use crate::config::Tuning;
use crate::world::World;
use crate::world_setup;

/// Move the player one step in the highest-priority held direction.
///
/// The tank turns to face the attempted direction even when the move is
/// blocked.
pub fn run_movement(world: &mut World, held: HeldKeys) {
    let Some(direction) = held.movement() else {
        return;
    };

    let body = &world.player.body;
    let candidate = Rect::new(body.step_towards(direction), body.size);
    let blocked = collision::is_blocked(
        &candidate,
        &world.grid,
        world
            .enemies
            .iter()
            .map(|enemy| (enemy.body.id, enemy.body.rect())),
        Some(EntityId::PLAYER),
    );

    let body = &mut world.player.body;
    body.direction = direction;
    if !blocked {
        body.position = candidate.origin;
    }
}

/// Fire one projectile if fire is held and the cooldown has elapsed.
pub fn run_firing(
    world: &mut World,
    held: HeldKeys,
    now_ms: u64,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    if !held.firing() {
        return;
    }
    if let Some(last) = world.player.last_shot_ms {
        if now_ms.saturating_sub(last) < tuning.player_shot_cooldown_ms {
            return;
        }
    }

    let id = world.allocate_id();
    let projectile = world_setup::projectile_from(&world.player, id, tuning);
    world.player.last_shot_ms = Some(now_ms);
    world.projectiles.push(projectile);
    events.push(GameEvent::ShotFired {
        owner: EntityId::PLAYER,
        projectile: id,
    });
}
