//! Events emitted by the simulation for the presentation shell.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// Something that happened during a tick. Each event appears in exactly one
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An enemy entered the arena.
    EnemySpawned { id: EntityId },
    /// A tank fired a projectile.
    ShotFired { owner: EntityId, projectile: EntityId },
    /// A Brick tile turned Empty.
    BrickDestroyed { row: usize, col: usize },
    /// An enemy was destroyed by the player.
    EnemyDestroyed { id: EntityId, score: u32 },
    /// The player took a hit.
    PlayerHit { health: u32 },
    /// A projectile reached the Base.
    BaseDestroyed,
    /// Terminal transition: defeat.
    GameOver { score: u32 },
    /// Terminal transition: every enemy in the quota was destroyed.
    Victory { score: u32 },
}

impl GameEvent {
    /// Final score carried by a terminal transition event.
    pub fn outcome_score(&self) -> Option<u32> {
        match self {
            GameEvent::GameOver { score } | GameEvent::Victory { score } => Some(*score),
            _ => None,
        }
    }
}
