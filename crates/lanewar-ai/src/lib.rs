//! Unit AI for LANEWAR.
//!
//! Target acquisition, move/attack decisions and the recall channel state
//! machine. Pure functions over plain data; the simulation crate feeds them
//! from the ECS world and applies the results.

pub mod recall;
pub mod targeting;

pub use lanewar_core as core;
