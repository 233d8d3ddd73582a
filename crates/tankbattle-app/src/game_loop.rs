//! Game loop thread: runs the simulation engine at 60 Hz and publishes snapshots.
//!
//! The engine is created inside the thread, which then owns it outright.
//! Commands arrive via `mpsc` channel and are applied at tick boundaries.
//! Each snapshot is sent on a channel and stored in a [`SnapshotSlot`] for
//! synchronous polling.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use tankbattle_core::constants::TICK_RATE;
use tankbattle_core::enums::GameStatus;
use tankbattle_core::mission::Mission;
use tankbattle_core::state::GameStateSnapshot;
use tankbattle_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, SnapshotSlot};

/// Wall-clock duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Why the loop stopped requesting ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Shutdown,
    /// Every command sender or the snapshot receiver went away.
    Disconnected,
    /// The mission reached a terminal status.
    Finished(GameStatus),
}

/// Channels and thread handle of a running game loop.
pub struct GameLoopHandle {
    pub commands: mpsc::Sender<GameLoopCommand>,
    pub snapshots: mpsc::Receiver<GameStateSnapshot>,
    pub thread: JoinHandle<LoopExit>,
}

/// Spawns the game loop for `mission` in a new thread.
pub fn spawn_game_loop(
    mission: Mission,
    config: SimConfig,
    slot: SnapshotSlot,
) -> io::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (snap_tx, snap_rx) = mpsc::channel::<GameStateSnapshot>();

    let thread = std::thread::Builder::new()
        .name("tankbattle-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config, &mission);
            run_game_loop(engine, &cmd_rx, &snap_tx, &slot, TICK_DURATION)
        })?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        snapshots: snap_rx,
        thread,
    })
}

/// The game loop. Runs until shutdown, disconnect, or the end of the mission.
pub fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    snap_tx: &mpsc::Sender<GameStateSnapshot>,
    slot: &SnapshotSlot,
    tick_duration: Duration,
) -> LoopExit {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    debug!("game loop shutdown requested");
                    return LoopExit::Shutdown;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return LoopExit::Disconnected,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();
        let status = snapshot.status;

        // 3. Publish
        slot.store(snapshot.clone());
        if snap_tx.send(snapshot).is_err() {
            return LoopExit::Disconnected;
        }

        // 4. Stop once the mission is decided
        if status.is_terminal() {
            info!(?status, tick = engine.time().tick, "game loop finished");
            return LoopExit::Finished(status);
        }

        // 5. Sleep until the next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
