//! End-of-tick terminal evaluation.

use tracing::info;

use tankbattle_core::enums::GameStatus;
use tankbattle_core::events::GameEvent;

use super::projectiles::HitReport;
use crate::world::World;

/// Decide whether the mission ended this tick.
///
/// Defeat wins over victory. The matching event is emitted only on the
/// transition out of `Playing`.
pub fn run(world: &mut World, report: &HitReport, events: &mut Vec<GameEvent>) {
    if world.status.is_terminal() {
        return;
    }

    let defeated = report.is_defeat() || !world.player.body.is_alive();
    let cleared = world.enemies.is_empty() && world.quota_exhausted();

    if defeated {
        world.status = GameStatus::GameOver;
        events.push(GameEvent::GameOver { score: world.score });
        info!(
            score = world.score,
            level = world.level,
            base_destroyed = report.base_destroyed,
            "mission lost"
        );
    } else if cleared {
        world.status = GameStatus::Victory;
        events.push(GameEvent::Victory { score: world.score });
        info!(score = world.score, level = world.level, "mission won");
    }
}
