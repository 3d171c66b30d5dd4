//! State shared between the input side and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use lanewar_core::commands::PlayerCommand;
use lanewar_core::state::GameSnapshot;

/// Messages sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Stop the game loop thread.
    Shutdown,
}

/// Handle to a running game loop.
pub struct AppState {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Updated by the game loop thread after every tick.
    pub latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
}

impl AppState {
    /// Forward a player command. Returns `false` once the loop has stopped.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .is_ok()
    }

    /// Copy of the most recent snapshot, if a tick has run.
    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    pub fn shutdown(&self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
    }
}
