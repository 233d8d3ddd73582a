//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the world, folds player commands into the held-key
//! set, runs every system in a fixed order and produces `GameStateSnapshot`s.
//! Completely headless, which keeps it deterministic under test.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use tankbattle_core::commands::{HeldKeys, PlayerCommand};
use tankbattle_core::enums::GameStatus;
use tankbattle_core::events::GameEvent;
use tankbattle_core::mission::Mission;
use tankbattle_core::state::GameStateSnapshot;
use tankbattle_core::types::SimTime;

use crate::config::Tuning;
use crate::random::RandomSource;
use crate::systems;
use crate::world::World;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine<R = ChaCha8Rng> {
    world: World,
    time: SimTime,
    tuning: Tuning,
    rng: R,
    held: HeldKeys,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine<ChaCha8Rng> {
    /// Create an engine for `mission`, seeded from `config`.
    pub fn new(config: SimConfig, mission: &Mission) -> Self {
        Self::with_random(mission, config.tuning, ChaCha8Rng::seed_from_u64(config.seed))
    }
}

impl<R: RandomSource> SimulationEngine<R> {
    /// Create an engine drawing its randomness from `rng`.
    pub fn with_random(mission: &Mission, tuning: Tuning, rng: R) -> Self {
        log_mission_start(mission);
        Self {
            world: World::new(mission, &tuning),
            time: SimTime::default(),
            tuning,
            rng,
            held: HeldKeys::empty(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the held-key set wholesale. Queued commands still apply on top
    /// at the next tick.
    pub fn set_held_keys(&mut self, held: HeldKeys) {
        self.held = held;
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Once the mission is over this is a passthrough: the world is left
    /// untouched and the snapshot carries no events.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.world.status == GameStatus::Playing {
            self.run_systems();
            self.time.advance(self.tuning.tick_ms);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, events)
    }

    /// Throw the current world away and start `mission` from scratch.
    /// Held keys are cleared; the RNG stream carries on.
    pub fn reset(&mut self, mission: &Mission) {
        log_mission_start(mission);
        self.world = World::new(mission, &self.tuning);
        self.time = SimTime::default();
        self.held = HeldKeys::empty();
        self.command_queue.clear();
        self.events.clear();
    }

    pub fn status(&self) -> GameStatus {
        self.world.status
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn held_keys(&self) -> HeldKeys {
        self.held
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for arranging test scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                PlayerCommand::Press { action } => self.held.insert(HeldKeys::from_action(action)),
                PlayerCommand::Release { action } => {
                    self.held.remove(HeldKeys::from_action(action))
                }
                PlayerCommand::ReleaseAll => self.held = HeldKeys::empty(),
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_ms;
        // Held keys are read once, here.
        let held = self.held;

        // 1. Player movement
        systems::player::run_movement(&mut self.world, held);
        // 2. Player firing
        systems::player::run_firing(&mut self.world, held, now, &self.tuning, &mut self.events);
        // 3. Enemy movement
        systems::enemy_ai::run_movement(&mut self.world, &mut self.rng, &self.tuning);
        // 4. Enemy firing
        systems::enemy_ai::run_firing(
            &mut self.world,
            &mut self.rng,
            now,
            &self.tuning,
            &mut self.events,
        );
        // 5. Projectile advance and hits
        let report = systems::projectiles::run(&mut self.world, &self.tuning, &mut self.events);
        // 6. Spawning, unless the mission was just lost
        if !report.is_defeat() {
            systems::spawner::run(
                &mut self.world,
                &mut self.rng,
                now,
                &self.tuning,
                &mut self.events,
            );
        }
        // 7. Terminal evaluation
        systems::terminal::run(&mut self.world, &report, &mut self.events);
    }
}

fn log_mission_start(mission: &Mission) {
    info!(
        level = mission.level,
        name = %mission.name,
        enemies = mission.enemy_count,
        "mission start"
    );
}
