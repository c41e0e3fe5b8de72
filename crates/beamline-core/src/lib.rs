//! Core types and definitions for the beamline simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! beam configuration, paths, components, commands, events, snapshots,
//! errors and constants. It contains no simulation logic.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
