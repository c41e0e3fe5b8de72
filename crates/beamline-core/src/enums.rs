//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// How a collider interacts with a beam that reaches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// Damageable body the beam can pass through while it has penetration budget.
    Penetrable,
    /// Mirror-like surface the beam bounces off while it has bounce budget.
    Reflective,
    /// Absorbs the beam.
    #[default]
    Opaque,
}

/// Why a trace stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Nothing was hit; the beam ran out of length.
    #[default]
    RangeExhausted,
    /// Configured range was zero; the path is just the origin.
    NoRange,
    /// Stopped on an opaque surface.
    Absorbed,
    /// Reached a reflective surface with no bounces left.
    BounceLimit,
    /// Reached a target with no penetrations left.
    PenetrationLimit,
    /// Iteration cap hit; the path was truncated at the last valid point.
    Degenerate,
}
