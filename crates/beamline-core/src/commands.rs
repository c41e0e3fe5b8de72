//! Commands sent to the simulation by an owner's input layer.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::BeamConfig;
use crate::types::OwnerId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BeamCommand {
    /// Create a new beam instance for `owner`, replacing any existing one.
    /// Without a `config`, the engine's default beam config is used.
    StartFiring {
        owner: OwnerId,
        origin: Vec3,
        direction: Vec3,
        #[serde(default)]
        config: Option<BeamConfig>,
    },
    /// Move the emitter of an active beam.
    Aim {
        owner: OwnerId,
        origin: Vec3,
        direction: Vec3,
    },
    /// End the beam instance of `owner`.
    StopFiring { owner: OwnerId },
}
