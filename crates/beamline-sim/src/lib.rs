//! Beam simulation engine.
//!
//! Traces continuous beams through a hecs-backed arena every tick, works out
//! which targets each beam overlaps and applies cooldown-gated damage.
//! Produces `BeamSnapshot`s for presentation layers.

pub mod arena;
pub mod controller;
pub mod damage;
pub mod engine;
pub mod geometry;
pub mod occupancy;
pub mod scenario;
pub mod scene;
pub mod systems;
pub mod tracer;
pub mod world_setup;

pub use beamline_core as core;
pub use controller::{BeamController, BeamFrame};
pub use engine::{SimConfig, SimulationEngine};
pub use scene::{HitSurface, RaycastHit, SceneQuery, Targets};
