//! State shared between the shell and the game loop thread.

use std::sync::{Arc, Mutex};

use tankbattle_core::commands::PlayerCommand;
use tankbattle_core::state::GameStateSnapshot;

/// Messages sent from the shell to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Stop the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot published by the game loop, for synchronous polling.
///
/// `Mutex<Option<..>>` because nothing exists before the first tick.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSlot {
    inner: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl SnapshotSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored snapshot. A poisoned lock is skipped; the next tick
    /// overwrites it anyway.
    pub fn store(&self, snapshot: GameStateSnapshot) {
        if let Ok(mut lock) = self.inner.lock() {
            *lock = Some(snapshot);
        }
    }

    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.inner.lock().ok().and_then(|lock| lock.clone())
    }
}
