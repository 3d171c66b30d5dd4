//! Simulation engine for the lane-combat game.
//!
//! Owns the hecs-backed entity store, runs systems once per frame,
//! and produces `GameSnapshot`s for presentation.

pub mod engine;
pub mod store;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use lanewar_core as core;

#[cfg(test)]
mod tests;
