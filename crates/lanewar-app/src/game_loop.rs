//! Game loop thread: runs the simulation engine at 60Hz.
//!
//! The engine is built by the caller and moved into the thread. Commands
//! arrive via `mpsc` channel and are drained before every tick; the latest
//! snapshot is stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use lanewar_core::constants::TICK_RATE;
use lanewar_core::state::GameSnapshot;
use lanewar_sim::SimulationEngine;

use crate::error::AppError;
use crate::state::{AppState, GameLoopCommand};

/// Duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the game loop in a new thread.
pub fn spawn_game_loop(engine: SimulationEngine) -> Result<(AppState, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let handle = std::thread::Builder::new()
        .name("lanewar-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &shared))
        .map_err(AppError::Thread)?;

    Ok((
        AppState {
            command_tx: cmd_tx,
            latest_snapshot,
        },
        handle,
    ))
}

/// Runs until a Shutdown command, channel disconnect, or the end of the match.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let start = Instant::now();
    let mut last_ms = 0.0;
    let mut next_tick_time = start;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick on the wall clock
        let now_ms = start.elapsed().as_secs_f64() * 1000.0;
        engine.tick(now_ms - last_ms, now_ms);
        last_ms = now_ms;

        let snapshot = engine.snapshot();
        if snapshot.time.tick % TICK_RATE as u64 == 0 {
            log_status(&snapshot);
        }
        let finished = snapshot.result;

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if let Some(result) = finished {
            tracing::info!(?result, "Match finished");
            return;
        }

        // 4. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

fn log_status(snapshot: &GameSnapshot) {
    let Some(player) = snapshot.player() else {
        return;
    };
    tracing::info!(
        elapsed_s = (snapshot.elapsed_ms / 1000.0).round(),
        gold = snapshot.player_gold,
        health = player.stats.health.round(),
        x = player.position.x.round(),
        units = snapshot.units.len(),
        projectiles = snapshot.projectiles.len(),
        "Status"
    );
    for note in &snapshot.notifications {
        tracing::debug!(text = %note.text, "Notification");
    }
}
