//! Session configuration loaded from an optional JSON file.

use std::path::Path;

use lanewar_core::commands::PlayerCommand;
use lanewar_sim::SimConfig;

use crate::error::AppError;

/// Load a `SimConfig`. Without a path, or for fields the file leaves out,
/// the defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<SimConfig, AppError> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse one line of stdin into a player command. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<PlayerCommand>, AppError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|source| AppError::CommandParse {
            line: line.to_string(),
            source,
        })
}
