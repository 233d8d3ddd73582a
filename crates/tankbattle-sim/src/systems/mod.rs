//! Systems that advance the world each tick.
//!
//! Systems are plain functions over `&mut World`. They do not own state;
//! everything persistent lives in the world.

pub mod enemy_ai;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
pub mod terminal;
