//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::SurfaceKind;
use crate::types::TargetId;

/// World-space position of an entity's collider center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Collision shape, centered on the entity's `Position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum Collider {
    Sphere {
        radius: f32,
    },
    /// Axis-aligned box.
    Box {
        half_extents: Vec3,
    },
    /// Flat two-sided disc, e.g. a tilted mirror panel.
    Disc {
        normal: Vec3,
        radius: f32,
    },
}

/// Beam interaction of a collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface(pub SurfaceKind);

/// Marks an entity as a damageable target with a stable id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetTag {
    pub id: TargetId,
}

/// Hit points of a target. Zero means destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

/// Aimless horizontal movement with periodic heading changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wander {
    /// Unit heading on the xz plane.
    pub heading: Vec3,
    /// Units per second.
    pub speed: f32,
    /// Seconds between heading re-rolls.
    pub change_interval: f64,
    /// Sim time of the last re-roll.
    pub last_change: f64,
}
