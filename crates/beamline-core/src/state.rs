//! Simulation snapshot: everything a presentation layer needs after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::Termination;
use crate::events::BeamEvent;
use crate::types::{OwnerId, SimTime, TargetId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeamSnapshot {
    pub time: SimTime,
    pub beams: Vec<BeamView>,
    pub targets: Vec<TargetView>,
    pub events: Vec<BeamEvent>,
}

/// One active beam as traced this tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeamView {
    pub owner: OwnerId,
    /// Polyline for line drawing; first point is the emitter.
    pub points: Vec<Vec3>,
    /// Where the beam touched a surface, for impact effects.
    pub impact_points: Vec<Vec3>,
    pub occupants: Vec<TargetId>,
    pub termination: Termination,
    pub bounces: u32,
    pub penetrations: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetView {
    pub id: TargetId,
    pub position: Vec3,
    pub health: f32,
    pub max_health: f32,
}
