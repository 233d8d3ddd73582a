//! Core types and definitions for the tank battle simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the tile grid, entity components, commands, state snapshots, events,
//! and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod grid;
pub mod mission;
pub mod state;
pub mod types;
