//! Per-tick beam orchestration: trace, find occupants, apply damage.

use glam::Vec3;

use beamline_core::config::BeamConfig;
use beamline_core::enums::Termination;
use beamline_core::error::BeamError;
use beamline_core::types::{BeamPath, TargetId};

use crate::damage::{DamageHit, DamageScheduler};
use crate::occupancy;
use crate::scene::{SceneQuery, Targets};
use crate::tracer::{self, TraceBudget};

/// What one beam did during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeamFrame {
    pub path: BeamPath,
    /// Surface contact points (bounces, penetrations, terminal hit) for effects.
    pub impact_points: Vec<Vec3>,
    pub occupants: Vec<TargetId>,
    pub hits: Vec<DamageHit>,
    pub bounces: u32,
    pub penetrations: u32,
    pub termination: Termination,
}

/// One live beam instance.
///
/// Owns its damage cooldowns; dropping the controller ends the beam and
/// discards them.
#[derive(Debug, Clone)]
pub struct BeamController {
    config: BeamConfig,
    budget: TraceBudget,
    scheduler: DamageScheduler,
}

impl BeamController {
    pub fn new(config: BeamConfig) -> Result<Self, BeamError> {
        config.validate()?;
        Ok(Self {
            budget: TraceBudget::from(&config),
            config,
            scheduler: DamageScheduler::new(),
        })
    }

    pub fn config(&self) -> &BeamConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &DamageScheduler {
        &self.scheduler
    }

    /// Re-trace the beam from `origin` along `direction` and damage everything
    /// it overlaps whose cooldown has elapsed at `now`.
    pub fn update<W: SceneQuery + Targets + ?Sized>(
        &mut self,
        world: &mut W,
        origin: Vec3,
        direction: Vec3,
        now: f64,
    ) -> Result<BeamFrame, BeamError> {
        let trace = tracer::trace(origin, direction, &self.budget, &*world)?;
        let occupants = occupancy::occupants(&trace.path, &trace.target_vertices, &*world);
        let hits = self.scheduler.apply(
            &occupants,
            self.config.damage,
            self.config.damage_interval,
            now,
            world,
        );

        Ok(BeamFrame {
            path: trace.path,
            impact_points: trace.impact_points,
            occupants,
            hits,
            bounces: trace.bounces,
            penetrations: trace.penetrations,
            termination: trace.termination,
        })
    }
}
