//! Core types and definitions for the LANEWAR simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, the static catalog, commands, state snapshots, events,
//! errors and constants. It has no dependency on the ECS runtime.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
