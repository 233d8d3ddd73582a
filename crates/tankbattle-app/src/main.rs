//! Terminal front end: plays the campaign in the console.
//!
//! Input is read from stdin one line at a time, as tokens like `+KeyW`,
//! `-Space` or `!` (release all). `quit` aborts the campaign.

use std::io::BufRead;
use std::sync::mpsc;

use anyhow::{anyhow, Context};
use tracing::{info, warn};

use tankbattle_app::game_loop::{self, LoopExit};
use tankbattle_app::input::InputAdapter;
use tankbattle_app::render;
use tankbattle_app::state::{GameLoopCommand, SnapshotSlot};
use tankbattle_campaign::{CampaignSession, OfflineProvider, SessionPhase};
use tankbattle_core::constants::TICK_RATE;
use tankbattle_sim::engine::SimConfig;

/// Draw every half second of simulated play.
const RENDER_EVERY_TICKS: u64 = TICK_RATE as u64 / 2;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Forward stdin lines to the main thread until stdin closes.
fn spawn_stdin_reader() -> anyhow::Result<mpsc::Receiver<String>> {
    let (line_tx, line_rx) = mpsc::channel();
    std::thread::Builder::new()
        .name("tankbattle-stdin".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines().map_while(Result::ok) {
                if line_tx.send(line).is_err() {
                    break;
                }
            }
        })
        .context("failed to spawn stdin reader")?;
    Ok(line_rx)
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let lines = spawn_stdin_reader()?;
    let slot = SnapshotSlot::new();
    let mut session = CampaignSession::new(OfflineProvider);
    session.start();

    while let Some(mission) = session.load_pending().cloned() {
        println!("== {} ==\n{}\n", mission.name, mission.description);

        let handle = game_loop::spawn_game_loop(mission, SimConfig::default(), slot.clone())
            .context("failed to spawn game loop")?;
        let mut input = InputAdapter::new();
        let mut quit = false;

        for snapshot in &handle.snapshots {
            for line in lines.try_iter() {
                if line.trim() == "quit" {
                    quit = true;
                    let _ = handle.commands.send(GameLoopCommand::Shutdown);
                    break;
                }
                for command in input.apply_line(&line) {
                    let _ = handle.commands.send(GameLoopCommand::PlayerCommand(command));
                }
            }

            if snapshot.time.tick % RENDER_EVERY_TICKS == 0 {
                print!("{}", render::render_frame(&snapshot));
            }
            session.observe(&snapshot);
        }

        let exit = handle
            .thread
            .join()
            .map_err(|_| anyhow!("game loop thread panicked"))?;
        info!(?exit, phase = ?session.phase(), "mission ended");
        if let Some(last) = slot.latest() {
            print!("{}", render::render_frame(&last));
        }

        if quit || !matches!(exit, LoopExit::Finished(_)) {
            session.abort();
            break;
        }
        match session.phase() {
            SessionPhase::Victory { level, score } => {
                println!("LEVEL {level} COMPLETE  SCORE {score}");
                session.next_mission();
            }
            SessionPhase::GameOver { score, .. } => {
                println!("MISSION FAILED  FINAL SCORE {score}");
                break;
            }
            phase => {
                warn!(?phase, "unexpected session phase after mission");
                break;
            }
        }
    }

    Ok(())
}
