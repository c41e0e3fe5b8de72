//! Events emitted by the simulation for presentation collaborators.
//!
//! Floating damage numbers, impact sparks and kill effects are spawned by
//! whoever consumes these; the simulation never does.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::{OwnerId, TargetId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BeamEvent {
    /// A fresh beam instance was created for `owner`.
    BeamStarted { owner: OwnerId },
    /// The beam instance of `owner` ended and its cooldown state was discarded.
    BeamStopped { owner: OwnerId },
    /// A beam damaged a target.
    DamageApplied {
        owner: OwnerId,
        target: TargetId,
        amount: f32,
        /// Target position at the time of the hit.
        position: Vec3,
        remaining_health: f32,
    },
    /// A target reached zero health and was removed from the scene.
    TargetDestroyed { target: TargetId, position: Vec3 },
    /// A trace hit its iteration cap and was cut short.
    TraceTruncated { owner: OwnerId, points: usize },
    /// The last live target was destroyed.
    TargetsCleared,
}
