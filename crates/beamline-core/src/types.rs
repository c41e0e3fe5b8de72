//! Fundamental identifier, time and path types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;

/// Stable handle of a damageable target. Assigned by the scene, never reused
/// within one simulation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TargetId(pub u32);

/// Identity of whoever fires a beam (a player, a turret).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct OwnerId(pub u32);

/// Source of monotonic simulated time, in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick.
    ///
    /// Elapsed time is derived from the tick count rather than accumulated, so
    /// cooldown boundaries land on exact tick multiples.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 / TICK_RATE as f64;
    }
}

impl Clock for SimTime {
    fn now(&self) -> f64 {
        self.elapsed_secs
    }
}

/// The folded polyline a beam follows during one tick.
///
/// The first point is the emission origin, the last is where the beam ends.
/// Recomputed from scratch every tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeamPath {
    pub points: Vec<Vec3>,
}

impl BeamPath {
    /// A path holding only its origin.
    pub fn starting_at(origin: Vec3) -> Self {
        Self {
            points: vec![origin],
        }
    }

    pub fn push(&mut self, point: Vec3) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn origin(&self) -> Option<Vec3> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Vec3> {
        self.points.last().copied()
    }

    /// Consecutive point pairs, in travel order.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total travelled length (sum of segment lengths).
    pub fn length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }
}
