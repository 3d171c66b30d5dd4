//! Headless driver for the lane-combat simulation.
//!
//! Runs the engine on its own thread at a fixed wall-clock rate and feeds it
//! player commands from the outside world.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod state;

pub use lanewar_core as core;
