//! Errors surfaced by beam construction and tracing.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum BeamError {
    /// The emitter direction was zero-length or not finite.
    InvalidDirection,
    /// The emitter position had a NaN or infinite coordinate.
    InvalidOrigin,
    /// A `BeamConfig` field is out of range.
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for BeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeamError::InvalidDirection => {
                write!(f, "beam direction must be a finite, non-zero vector")
            }
            BeamError::InvalidOrigin => write!(f, "beam origin must be a finite point"),
            BeamError::InvalidConfig { field, reason } => {
                write!(f, "invalid beam config: `{field}` {reason}")
            }
        }
    }
}

impl std::error::Error for BeamError {}
