//! `lanewar-app [config.json]`
//!
//! Reads one JSON player command per stdin line, for example
//! `{"type":"MoveOrAttack","point":{"x":900.0,"y":600.0}}`, and runs the
//! match until it ends or stdin closes.

use std::io::BufRead;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use lanewar_app::config::{load_config, parse_command};
use lanewar_app::error::AppError;
use lanewar_app::game_loop::spawn_game_loop;
use lanewar_sim::SimulationEngine;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    let engine = SimulationEngine::new(config)?;
    let (state, handle) = spawn_game_loop(engine)?;

    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };
        match parse_command(&line) {
            Ok(Some(command)) => {
                if !state.send(command) {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "Ignoring input"),
        }
    }

    state.shutdown();
    handle.join().map_err(|_| AppError::LoopPanicked)?;

    if let Some(snapshot) = state.snapshot() {
        tracing::info!(
            result = ?snapshot.result,
            elapsed_s = (snapshot.elapsed_ms / 1000.0).round(),
            gold = snapshot.player_gold,
            "Session ended"
        );
    }
    Ok(())
}
