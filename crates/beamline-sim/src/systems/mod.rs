//! Systems that operate on the arena each tick.
//!
//! Systems are plain functions over the arena and engine-owned buffers.
//! They hold no state of their own.

pub mod beams;
pub mod cleanup;
pub mod movement;
pub mod snapshot;
