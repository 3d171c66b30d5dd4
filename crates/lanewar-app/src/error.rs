//! Application-level errors. The simulation itself never fails; these cover
//! the process boundary (config files, stdin input, thread startup).

use std::path::PathBuf;

use thiserror::Error;

use lanewar_core::error::SessionError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid command {line:?}: {source}")]
    CommandParse {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Failed to spawn game loop thread: {0}")]
    Thread(#[source] std::io::Error),

    #[error("Game loop thread panicked")]
    LoopPanicked,
}
