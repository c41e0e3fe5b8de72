//! Beam weapon configuration.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::BeamError;
use crate::types::OwnerId;

/// Immutable parameters of one beam instance, fixed when the beam is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamConfig {
    /// Damage dealt per application.
    pub damage: f32,
    /// Minimum seconds between two applications to the same target.
    pub damage_interval: f64,
    /// Reflective surfaces the beam may bounce off.
    pub bounce_max: u32,
    /// Targets the beam may pass through before stopping.
    pub penetration_max: u32,
    /// Total travel length across all segments.
    pub max_range: f32,
    pub owner: OwnerId,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            damage: DEFAULT_BEAM_DAMAGE,
            damage_interval: DEFAULT_DAMAGE_INTERVAL,
            bounce_max: DEFAULT_BOUNCE_MAX,
            penetration_max: DEFAULT_PENETRATION_MAX,
            max_range: DEFAULT_MAX_RANGE,
            owner: OwnerId::default(),
        }
    }
}

impl BeamConfig {
    /// Same parameters, fired by `owner`.
    pub fn with_owner(mut self, owner: OwnerId) -> Self {
        self.owner = owner;
        self
    }

    /// Reject values the tracer and scheduler cannot work with.
    ///
    /// A zero range is allowed (the beam collapses to its origin); negative or
    /// non-finite values are not.
    pub fn validate(&self) -> Result<(), BeamError> {
        if !self.damage.is_finite() || self.damage < 0.0 {
            return Err(BeamError::InvalidConfig {
                field: "damage",
                reason: "must be finite and non-negative",
            });
        }
        if !self.damage_interval.is_finite() || self.damage_interval < 0.0 {
            return Err(BeamError::InvalidConfig {
                field: "damage_interval",
                reason: "must be finite and non-negative",
            });
        }
        if !self.max_range.is_finite() || self.max_range < 0.0 {
            return Err(BeamError::InvalidConfig {
                field: "max_range",
                reason: "must be finite and non-negative",
            });
        }
        Ok(())
    }
}
