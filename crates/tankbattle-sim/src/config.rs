//! Tunable gameplay parameters.
//!
//! Defaults come from `tankbattle_core::constants`. The enemy AI
//! probabilities are configuration, not a behavioural contract.

use serde::{Deserialize, Serialize};

use tankbattle_core::constants::*;

/// Gameplay numbers the engine reads every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Time units one tick advances the sim clock by.
    pub tick_ms: u64,
    pub player_speed: f32,
    pub enemy_speed: f32,
    pub projectile_speed: f32,
    pub player_shot_cooldown_ms: u64,
    pub enemy_shot_cooldown_ms: u64,
    pub enemy_spawn_interval_ms: u64,
    pub enemy_turn_chance: f64,
    pub enemy_fire_chance: f64,
    pub kill_reward: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            player_speed: PLAYER_SPEED,
            enemy_speed: ENEMY_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            player_shot_cooldown_ms: PLAYER_SHOT_COOLDOWN_MS,
            enemy_shot_cooldown_ms: ENEMY_SHOT_COOLDOWN_MS,
            enemy_spawn_interval_ms: ENEMY_SPAWN_INTERVAL_MS,
            enemy_turn_chance: ENEMY_TURN_CHANCE,
            enemy_fire_chance: ENEMY_FIRE_CHANCE,
            kill_reward: KILL_REWARD,
        }
    }
}
