//! Tank battle runtime shell.
//!
//! Wires the simulation and campaign crates to a fixed-cadence game loop
//! thread, a keyboard input adapter and a text renderer.

pub mod game_loop;
pub mod input;
pub mod render;
pub mod state;

pub use tankbattle_core as core;
