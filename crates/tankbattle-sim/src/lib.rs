//! Simulation engine for the tank battle.
//!
//! Owns the world state, runs the per-tick systems in a fixed order,
//! and produces `GameStateSnapshot`s for renderers.

pub mod collision;
pub mod config;
pub mod engine;
pub mod random;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use tankbattle_core as core;

#[cfg(test)]
mod tests;
