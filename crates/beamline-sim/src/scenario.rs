//! Scenario definitions: JSON-loadable scene layouts.
//!
//! A scenario lists explicit targets and obstacles, how many wandering targets
//! to scatter at random, and optionally the beam weapon to use.

use glam::Vec3;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use beamline_core::components::Collider;
use beamline_core::config::BeamConfig;
use beamline_core::constants::*;
use beamline_core::enums::SurfaceKind;
use beamline_core::types::TargetId;

use crate::arena::Arena;
use crate::world_setup;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    /// Enclose the scene in the four reflective arena walls.
    pub arena_walls: bool,
    pub targets: Vec<TargetSpec>,
    pub obstacles: Vec<ObstacleSpec>,
    /// Default wandering targets scattered at random positions.
    pub random_targets: u32,
    /// Beam weapon override for this scenario.
    pub beam: Option<BeamConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSpec {
    pub position: Vec3,
    #[serde(default = "default_target_radius")]
    pub radius: f32,
    #[serde(default = "default_target_health")]
    pub max_health: f32,
    #[serde(default)]
    pub wander: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub position: Vec3,
    pub collider: Collider,
    #[serde(default)]
    pub surface: SurfaceKind,
}

fn default_target_radius() -> f32 {
    TARGET_RADIUS
}

fn default_target_health() -> f32 {
    TARGET_MAX_HEALTH
}

impl Scenario {
    /// The stock level: a walled arena with five wandering targets.
    pub fn default_arena() -> Self {
        Self {
            name: "arena".to_string(),
            arena_walls: true,
            random_targets: DEFAULT_TARGET_COUNT,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Spawn everything the scenario describes into `arena`.
    /// Returns the ids of all spawned targets, explicit ones first.
    pub fn populate(&self, arena: &mut Arena, rng: &mut ChaCha8Rng) -> Vec<TargetId> {
        if self.arena_walls {
            world_setup::spawn_arena_walls(arena);
        }
        for obstacle in &self.obstacles {
            world_setup::spawn_obstacle(arena, obstacle.position, obstacle.collider, obstacle.surface);
        }

        let mut ids: Vec<TargetId> = self
            .targets
            .iter()
            .map(|t| world_setup::spawn_target(arena, rng, t.position, t.radius, t.max_health, t.wander))
            .collect();
        ids.extend(world_setup::spawn_random_targets(arena, rng, self.random_targets));
        ids
    }
}
